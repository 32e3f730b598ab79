//! Animation system — advances clips and copies the shown frame to the sprite.

use crate::core::scene::Scene;

/// Tick every active entity's animation and sync its sprite frame.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut().filter(|e| e.active) {
        let Some(anim) = entity.animation.as_mut() else {
            continue;
        };
        anim.tick(dt);
        if let (Some(frame), Some(sprite)) = (anim.current_frame(), entity.sprite.as_mut()) {
            sprite.frame = frame;
        }
    }
}
