use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are sorted back-to-front by layer; spawn order breaks ties.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities.filter(|e| e.active) {
        let Some(sprite) = &entity.sprite else {
            continue;
        };

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            width: entity.size.x,
            height: entity.size.y,
            anchor_x: sprite.anchor.x,
            anchor_y: sprite.anchor.y,
            sheet: sprite.sheet.0 as f32,
            frame: sprite.frame as f32,
            alpha: sprite.alpha,
            layer: sprite.layer.as_u8() as f32,
            tiled: if sprite.tiled { 1.0 } else { 0.0 },
        });
    }

    // Stable sort keeps spawn order within a layer.
    buffer.instances.sort_by(|a, b| a.layer.total_cmp(&b.layer));
}
