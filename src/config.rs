//! Project configuration
//!
//! Reads `.docshape.toml` from the repository root. A missing or unparseable
//! file falls back to the defaults, so a bare repository validates with the
//! stock rules.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::validator::DEFAULT_EXTENSIONS;

/// Project configuration filename
pub const DOCSHAPE_TOML: &str = ".docshape.toml";

/// Project-level docshape configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Structure rule settings
    #[serde(default)]
    pub structure: StructureConfig,
}

/// Settings for the structure rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Extensions permitted in content directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load config from `root`, or the defaults if not present or invalid
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let path = root.join(DOCSHAPE_TOML);
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
