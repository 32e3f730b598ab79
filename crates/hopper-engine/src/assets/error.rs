use std::fmt;

/// Failure loading or querying the asset manifest.
#[derive(Debug)]
pub enum AssetError {
    /// The manifest is not valid JSON or does not match the schema.
    Parse(serde_json::Error),
    /// Two sheets share a name.
    DuplicateSheet(String),
    /// A sheet declares zero frames or a zero-sized frame.
    EmptySheet(String),
    /// Game code asked for a sheet the manifest does not declare.
    MissingSheet(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Parse(e) => write!(f, "invalid asset manifest: {e}"),
            AssetError::DuplicateSheet(name) => write!(f, "sheet '{name}' declared twice"),
            AssetError::EmptySheet(name) => write!(f, "sheet '{name}' has no frames"),
            AssetError::MissingSheet(name) => write!(f, "sheet '{name}' is not in the manifest"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(e: serde_json::Error) -> Self {
        AssetError::Parse(e)
    }
}
