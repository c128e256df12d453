use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use anyhow::Result;

use crate::common::{DomainError, DomainResult};
use crate::domains::telemetry::{CollarSettings, RecordFormat};

/// Environment variable naming the configuration file read by the binary.
pub const CONFIG_PATH_ENV: &str = "COLLAR_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "collar.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub collar: CollarConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_elks: usize,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollarConfig {
    pub fixes_per_elk: usize,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub spread_degrees: f64,
    pub step_degrees: f64,
    pub sample_spacing_secs: i64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub prefix: String,
    pub format: RecordFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_elks: 20,
            // The collar script this replaces documents 20 seconds but sleeps for 2.
            interval_ms: 2_000,
        }
    }
}

impl Default for CollarConfig {
    fn default() -> Self {
        let settings = CollarSettings::default();
        Self {
            fixes_per_elk: settings.fixes_per_elk,
            center_latitude: settings.center_latitude,
            center_longitude: settings.center_longitude,
            spread_degrees: settings.spread_degrees,
            step_degrees: settings.step_degrees,
            sample_spacing_secs: settings.sample_spacing.num_seconds(),
            seed: settings.seed,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            format: RecordFormat::Csv,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Layered load: built-in defaults, then the TOML file if it exists, then
    /// `COLLAR_*` environment variables (`__` separates sections).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let defaults = config::Config::try_from(&Config::default())?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("COLLAR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.collar_settings()?.validate()?;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.simulation.interval_ms)
    }

    pub fn collar_settings(&self) -> DomainResult<CollarSettings> {
        let sample_spacing = chrono::Duration::try_seconds(self.collar.sample_spacing_secs)
            .ok_or_else(|| DomainError::InvalidSettings {
                reason: format!("sample_spacing_secs {} is out of range", self.collar.sample_spacing_secs),
            })?;
        Ok(CollarSettings {
            fixes_per_elk: self.collar.fixes_per_elk,
            center_latitude: self.collar.center_latitude,
            center_longitude: self.collar.center_longitude,
            spread_degrees: self.collar.spread_degrees,
            step_degrees: self.collar.step_degrees,
            sample_spacing,
            seed: self.collar.seed,
            format: self.output.format,
        })
    }
}
