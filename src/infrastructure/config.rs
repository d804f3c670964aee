use crate::model::deck::GestureSettings;
use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Gesture tuning, in pointer units
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    pub commit_threshold: f64,
    pub scale_divisor: f64,
    pub entering_scale: f64,
    /// Pointer units per terminal row
    pub row_height: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        let settings = GestureSettings::default();
        Self {
            commit_threshold: settings.commit_threshold,
            scale_divisor: settings.scale_divisor,
            entering_scale: settings.entering_scale,
            row_height: 20.0,
        }
    }
}

impl GestureConfig {
    pub fn settings(&self) -> GestureSettings {
        GestureSettings {
            commit_threshold: self.commit_threshold,
            scale_divisor: self.scale_divisor,
            entering_scale: self.entering_scale,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let all_finite = [
            self.commit_threshold,
            self.scale_divisor,
            self.entering_scale,
            self.row_height,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !all_finite {
            return Err(invalid("gesture values must be finite"));
        }
        if self.commit_threshold < 0.0 {
            return Err(invalid("gesture.commit_threshold must not be negative"));
        }
        if self.scale_divisor <= 0.0 {
            return Err(invalid("gesture.scale_divisor must be positive"));
        }
        if self.row_height <= 0.0 {
            return Err(invalid("gesture.row_height must be positive"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Message(message.to_owned())
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub gesture: GestureConfig,
}

impl Config {
    /// Load the config directory's files over the bundled defaults
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(&utils::get_config_dir())
    }

    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        cfg.gesture.validate()?;

        Ok(cfg)
    }
}
