use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::PROPERTY_NAME;

/// Degrees added around the bounded region before clamping the map
pub const DEFAULT_PADDING: f64 = 0.05;

fn default_padding() -> f64 {
    DEFAULT_PADDING
}
fn default_overlay() -> String {
    PROPERTY_NAME.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    /// GeoJSON document with the site's features
    #[serde(default)]
    pub geojson: Option<PathBuf>,
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Polygon feature the raster overlay is aligned to
    #[serde(default = "default_overlay")]
    pub overlay: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            geojson: None,
            padding: default_padding(),
            overlay: default_overlay(),
        }
    }
}

impl FileConfig {
    /// First parsable config file from the search path
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    pub fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("placemap.toml"));
    paths.push(PathBuf::from(".placemap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("placemap").join("config.toml"));
        paths.push(config_dir.join("placemap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".placemap.toml"));
    }

    paths
}
