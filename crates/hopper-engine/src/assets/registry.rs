use std::collections::HashMap;

use glam::Vec2;

use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::SheetId;

/// What game code needs to know about a loaded sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetInfo {
    pub id: SheetId,
    /// Native frame size in pixels (= world units at scale 1).
    pub frame_size: Vec2,
    pub frames: u32,
}

impl SheetInfo {
    /// Frame size multiplied by a display scale.
    pub fn scaled(&self, sx: f32, sy: f32) -> Vec2 {
        self.frame_size * Vec2::new(sx, sy)
    }
}

/// Name-based sheet lookup, built from an AssetManifest.
/// Sheet IDs are positions in the manifest's sheet list.
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: HashMap<String, SheetInfo>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sheets = manifest
            .sheets
            .iter()
            .enumerate()
            .map(|(i, desc)| {
                let info = SheetInfo {
                    id: SheetId(i as u32),
                    frame_size: Vec2::new(desc.frame_width as f32, desc.frame_height as f32),
                    frames: desc.frames,
                };
                (desc.name.clone(), info)
            })
            .collect();
        Self { sheets }
    }

    pub fn get(&self, name: &str) -> Option<&SheetInfo> {
        self.sheets.get(name)
    }

    /// Like `get`, but a missing sheet is an error.
    pub fn require(&self, name: &str) -> Result<SheetInfo, AssetError> {
        self.get(name)
            .copied()
            .ok_or_else(|| AssetError::MissingSheet(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
