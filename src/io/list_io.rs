use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{ListConfig, TreeNode};

/// Error type for seed/config loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid list file {path}: {source}")]
    ListParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load a checklist tree from a JSON file: an array of nodes with
/// `children` arrays, camelCase keys.
pub fn load_list(path: &Path) -> Result<Vec<TreeNode>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::ListParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the optional TOML config. All fields are defaulted, so an empty
/// file yields the default config.
pub fn load_config(path: &Path) -> Result<ListConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| LoadError::ConfigParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
