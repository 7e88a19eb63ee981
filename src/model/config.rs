use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from sprig.toml. Every field is defaulted, so a missing
/// or empty file is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Hard cap on nesting depth; drops that would push any node past it
    /// are rejected.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Pixels of horizontal drag per depth level
    #[serde(default = "default_indent_unit")]
    pub indent_unit: u16,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            max_depth: default_max_depth(),
            indent_unit: default_indent_unit(),
            ui: UiConfig::default(),
        }
    }
}

fn default_max_depth() -> usize {
    100
}

fn default_indent_unit() -> u16 {
    24
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Chrome color overrides (name → `#RRGGBB`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Checkbox color-tag overrides (tag → `#RRGGBB`)
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}
