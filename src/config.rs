//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an ast-select.toml, and if present we load settings from there.
//! This provides the label width and the amount of source context shown in the picker.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "ast-select.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from ast-select.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 80)]
    /// Maximum candidate label width in characters; 0 disables truncation.
    pub max_label_width: usize,
    #[facet(default = 3)]
    /// Source lines shown above and below the previewed range.
    pub context_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_label_width: 80,
            context_lines: 3,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from ast-select.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            return config;
        }
        log::warn!("ignoring malformed {}", path.display());
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
