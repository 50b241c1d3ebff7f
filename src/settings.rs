use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::store::DEFAULT_LABEL;

pub const CONFIG_ENV: &str = "STAR_MAPPER_CONFIG";
const CONFIG_FILE: &str = "star_mapper.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: u32,
    pub dark_mode: bool,
    pub show_axes: bool,
    pub marker_radius: f32,
    pub default_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 600,
            dark_mode: true,
            show_axes: true,
            marker_radius: 2.0,
            default_label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from `$STAR_MAPPER_CONFIG` or `./star_mapper.toml`.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let text = fs::read_to_string(&path)?;
        let settings = Self::from_toml(&text)?;
        info!(path = %path.display(), grid_size = settings.grid_size, "loaded settings");
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::InvalidGridSize(self.grid_size));
        }
        if self.grid_size % 2 != 0 {
            warn!(grid_size = self.grid_size, "odd grid size, centre is floored");
        }
        Ok(())
    }

    fn config_path() -> PathBuf {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }
}
