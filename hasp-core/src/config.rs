//! Session configuration.

use serde::{Deserialize, Serialize};

/// The vendor's default Feature ID.
pub const DEFAULT_FEATURE_ID: u32 = 0;

/// File ID of the read/write memory file.
pub const FILE_ID_RW: u32 = 0xfff4;

/// File ID of the read-only memory file.
pub const FILE_ID_RO: u32 = 0xfff5;

/// Which feature to log into and which memory file to read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub feature_id: u32,
    pub file_id: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            feature_id: DEFAULT_FEATURE_ID,
            file_id: FILE_ID_RW,
        }
    }
}

impl SessionConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
