/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub motion: MotionConfig,
    pub log: LogConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub total_floors: u8,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub step_time: u64,
    pub announce_floors: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub visible_lines: usize,
    pub capacity: usize,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        BuildingConfig { total_floors: 8 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            step_time: 180,
            announce_floors: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            visible_lines: 6,
            capacity: 500,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration from `path`, or from `config.toml` when no path is
/// given. A missing default file is not an error, the built-in defaults are used.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (DEFAULT_CONFIG_PATH, false),
    };

    let config = match fs::read_to_string(Path::new(path)) {
        Ok(config_str) => parse_config(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            info!("No configuration file found at {}, using default settings", path);
            Config::default()
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_string(),
                source: e,
            })
        }
    };

    config.validate()?;
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.total_floors == 0 {
            return Err(ConfigError::Invalid(
                "building.total_floors must be at least 1".to_string(),
            ));
        }
        if self.motion.step_time == 0 {
            return Err(ConfigError::Invalid(
                "motion.step_time must be greater than 0".to_string(),
            ));
        }
        if self.log.visible_lines == 0 {
            return Err(ConfigError::Invalid(
                "log.visible_lines must be greater than 0".to_string(),
            ));
        }
        if self.log.capacity < self.log.visible_lines {
            return Err(ConfigError::Invalid(
                "log.capacity must not be smaller than log.visible_lines".to_string(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
