//! Configuration loading for the Orbitron station

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use orblibgs::{OrbError, OrbResult};
use serde::Deserialize;

use self::constants::{DEFAULT_OXYGEN_LEVEL, DEFAULT_SECURITY_CODE, MAX_OXYGEN_LEVEL};

/// Station construction parameters
#[derive(Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StationConfig {
    /// Code the control center accepts for lockdown
    pub security_code: String,
    /// Whether the control center starts locked down
    pub locked_down: bool,
    /// Fixed life support oxygen level, percent
    pub oxygen_level: f64,
}

impl fmt::Debug for StationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationConfig")
            .field("security_code", &"<redacted>")
            .field("locked_down", &self.locked_down)
            .field("oxygen_level", &self.oxygen_level)
            .finish()
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            security_code: DEFAULT_SECURITY_CODE.to_string(),
            locked_down: false,
            oxygen_level: DEFAULT_OXYGEN_LEVEL,
        }
    }
}

impl StationConfig {
    pub fn validate(&self) -> OrbResult<()> {
        if self.security_code.is_empty() {
            return Err(OrbError::config("security code must not be empty"));
        }
        if !(0.0..=MAX_OXYGEN_LEVEL).contains(&self.oxygen_level) {
            return Err(OrbError::Config(format!(
                "invalid oxygen level: {}",
                self.oxygen_level
            )));
        }
        Ok(())
    }
}

/// Load station configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> OrbResult<StationConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: StationConfig = serde_json::from_reader(reader)?;

    config.validate()?;

    Ok(config)
}

/// Configuration constants
pub mod constants {
    pub const DEFAULT_SECURITY_CODE: &str = "62N28R";

    pub const DEFAULT_OXYGEN_LEVEL: f64 = 100.0;

    pub const MAX_OXYGEN_LEVEL: f64 = 100.0;

    /// Tasks handed out during the demonstration run
    pub const CONTROL_CENTER_TASK: &str = "Monitor and control station security";
    pub const RESEARCH_LAB_TASK: &str = "Collect and analyze samples";
    pub const LIFE_SUPPORT_TASK: &str = "Monitor and maintain oxygen levels";

    /// Password tried first in the demonstration run
    pub const DEMO_WRONG_PASSWORD: &str = "123";
}
