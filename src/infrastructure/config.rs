use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::model::indicator::{DEFAULT_MAX_WIDTH, DEFAULT_PADDING, DEFAULT_WIDTH_RATIO};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClockConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_max_width")]
    pub max_width: u16,
    #[serde(default = "default_width_ratio")]
    pub width_ratio: f64,
    #[serde(default = "default_padding")]
    pub padding: u16,
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_max_width() -> u16 {
    DEFAULT_MAX_WIDTH
}

fn default_width_ratio() -> f64 {
    DEFAULT_WIDTH_RATIO
}

fn default_padding() -> u16 {
    DEFAULT_PADDING
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_width: default_max_width(),
            width_ratio: default_width_ratio(),
            padding: default_padding(),
        }
    }
}

impl ClockConfig {
    /// Tick period, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Embedded defaults, overridden by any config file found in the config dir.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        builder.build()?.try_deserialize()
    }

    /// Apply a `--tick-rate` override given in ticks per second.
    /// Non-positive or non-finite rates are ignored.
    pub fn with_tick_rate(mut self, tick_rate: Option<f64>) -> Self {
        match tick_rate {
            Some(rate) if rate.is_finite() && rate > 0.0 => {
                self.clock.tick_interval_ms = (1000.0 / rate).round() as u64;
            }
            Some(rate) => log::warn!("Ignoring invalid tick rate: {rate}"),
            None => {}
        }
        self
    }
}
