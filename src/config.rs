use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

use crate::error::TyrianTimeError;
use crate::time_utils::GAME_DAYS_IN_REAL_DAY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write clock config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse clock config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid clock config: {0}")]
    Invalid(#[from] TyrianTimeError),
}

// === Clock Configuration ===

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default = "default_game_days_per_real_day")]
    pub game_days_per_real_day: i32,
}

fn default_game_days_per_real_day() -> i32 { GAME_DAYS_IN_REAL_DAY }

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            game_days_per_real_day: GAME_DAYS_IN_REAL_DAY,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> Result<(), TyrianTimeError> {
        if self.game_days_per_real_day <= 0 {
            return Err(TyrianTimeError::InvalidArgument(format!(
                "game_days_per_real_day must be positive, got {}",
                self.game_days_per_real_day
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ClockConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // === File I/O ===

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json_str = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json_str)?;
        log::debug!("Loaded clock config from {}", path.display());
        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults when it is missing or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No clock config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_json_string()?)?;
        log::debug!("Saved clock config to {}", path.display());
        Ok(())
    }
}
