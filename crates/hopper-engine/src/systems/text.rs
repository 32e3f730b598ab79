//! Bitmap font text.
//!
//! Each character becomes an Entity whose sprite points at a glyph frame in a
//! font sheet. Glyphs are laid out in ASCII order starting at `start_char`.

use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::sprite::{SheetId, SpriteComponent};
use crate::core::scene::Scene;

/// Configuration for a bitmap font sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    pub sheet: SheetId,
    /// Number of glyph frames in the sheet.
    pub glyphs: u32,
    /// ASCII code of frame 0 (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as a fraction of the glyph size.
    pub spacing: f32,
}

impl FontConfig {
    pub fn new(sheet: SheetId) -> Self {
        Self {
            sheet,
            glyphs: 96,
            start_char: 32,
            spacing: 0.6,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// A text slot: where a string is drawn and which tag its glyphs carry.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub tag: String,
    /// Top-left corner of the first glyph.
    pub pos: Vec2,
    /// Glyph height in world units (the font size).
    pub size: f32,
    pub font: FontConfig,
}

impl TextLabel {
    pub fn new(tag: impl Into<String>, pos: Vec2, size: f32, font: FontConfig) -> Self {
        Self {
            tag: tag.into(),
            pos,
            size,
            font,
        }
    }
}

/// Glyph frame for `c`, or `None` if the font has no such glyph.
pub fn char_frame(c: char, font: &FontConfig) -> Option<u32> {
    let index = (c as u32).checked_sub(font.start_char as u32)?;
    (index < font.glyphs).then_some(index)
}

/// Build one UI-layer entity per printable character of `text`.
/// Unknown characters still advance the cursor.
pub fn build_text_entities<F>(text: &str, label: &TextLabel, id_gen: &mut F) -> Vec<Entity>
where
    F: FnMut() -> EntityId,
{
    let advance = label.size * label.font.spacing;
    text.chars()
        .enumerate()
        .filter_map(|(i, c)| {
            let frame = char_frame(c, &label.font)?;
            let x = label.pos.x + i as f32 * advance;
            Some(
                Entity::new(id_gen())
                    .with_tag(label.tag.as_str())
                    .with_pos(Vec2::new(x, label.pos.y))
                    .with_size(Vec2::splat(label.size))
                    .with_sprite(
                        SpriteComponent::new(label.font.sheet, frame)
                            .with_anchor(0.0, 0.0)
                            .with_layer(RenderLayer::Ui),
                    ),
            )
        })
        .collect()
}

/// Despawn every glyph carrying `tag`. Returns how many were removed.
pub fn despawn_text(scene: &mut Scene, tag: &str) -> usize {
    let ids = scene.ids_with_tag(tag);
    for &id in &ids {
        scene.despawn(id);
    }
    ids.len()
}
