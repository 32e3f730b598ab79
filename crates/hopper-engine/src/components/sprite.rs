use glam::Vec2;

use crate::components::layer::RenderLayer;

/// Identifies a sprite sheet. Index into the AssetManifest's sheet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Sprite component — defines how an entity appears visually.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which sheet this sprite draws from.
    pub sheet: SheetId,
    /// Frame index within the sheet, row-major.
    pub frame: u32,
    /// Pivot in normalized sprite space. (0.5, 0.5) is the center,
    /// (0.0, 0.0) the top-left corner.
    pub anchor: Vec2,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub layer: RenderLayer,
    /// Repeat the frame across the entity size instead of stretching it.
    pub tiled: bool,
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            sheet: SheetId(0),
            frame: 0,
            anchor: Vec2::splat(0.5),
            alpha: 1.0,
            layer: RenderLayer::Objects,
            tiled: false,
        }
    }
}

impl SpriteComponent {
    pub fn new(sheet: SheetId, frame: u32) -> Self {
        Self {
            sheet,
            frame,
            ..Default::default()
        }
    }

    pub fn with_anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor = Vec2::new(x, y);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn tiled(mut self) -> Self {
        self.tiled = true;
        self
    }
}
