use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::assets::error::AssetError;

/// Every image a game loads, described as a sprite sheet.
/// A plain image is a sheet with a single frame covering the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub sheets: Vec<SheetDescriptor>,
}

/// Describes one image file and how it is cut into frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Key used by game code ("dude", "apple").
    pub name: String,
    /// Path relative to the game's asset root.
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Number of frames, row-major from the top-left.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

impl AssetManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn to_json(&self) -> Result<String, AssetError> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<(), AssetError> {
        let mut seen = HashSet::with_capacity(self.sheets.len());
        for sheet in &self.sheets {
            if !seen.insert(sheet.name.as_str()) {
                return Err(AssetError::DuplicateSheet(sheet.name.clone()));
            }
            if sheet.frames == 0 || sheet.frame_width == 0 || sheet.frame_height == 0 {
                return Err(AssetError::EmptySheet(sheet.name.clone()));
            }
        }
        Ok(())
    }
}
