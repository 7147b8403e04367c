use serde::{Deserialize, Serialize};
use std::fmt::Formatter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error parsing MMU config from TOML: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
    #[error("error serializing MMU config into TOML: {source}")]
    Serialize {
        #[from]
        source: toml::ser::Error,
    },
}

/// Which console's boot ROM state to reproduce at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HardwareModel {
    #[default]
    Dmg,
    Sgb,
}

impl HardwareModel {
    /// Value the boot ROM leaves in NR52 (sound on/off).
    #[must_use]
    pub fn nr52_boot_value(self) -> u8 {
        match self {
            Self::Dmg => 0xF1,
            Self::Sgb => 0xF0,
        }
    }
}

impl std::fmt::Display for HardwareModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dmg => write!(f, "DMG"),
            Self::Sgb => write!(f, "SGB"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmuConfig {
    #[serde(default)]
    pub hardware_model: HardwareModel,

    #[serde(default = "default_apply_boot_registers")]
    pub apply_boot_registers: bool,

    #[serde(default = "default_interrupts_enabled_at_startup")]
    pub interrupts_enabled_at_startup: bool,
}

fn default_apply_boot_registers() -> bool {
    true
}

fn default_interrupts_enabled_at_startup() -> bool {
    true
}

impl Default for MmuConfig {
    fn default() -> Self {
        Self {
            hardware_model: HardwareModel::default(),
            apply_boot_registers: default_apply_boot_registers(),
            interrupts_enabled_at_startup: default_interrupts_enabled_at_startup(),
        }
    }
}

impl MmuConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the string is not valid TOML or does not match the config
    /// schema.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(s)?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if the config cannot be represented as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let s = toml::to_string_pretty(self)?;
        Ok(s)
    }
}

impl std::fmt::Display for MmuConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "hardware_model: {}", self.hardware_model)?;
        writeln!(f, "apply_boot_registers: {}", self.apply_boot_registers)?;
        writeln!(
            f,
            "interrupts_enabled_at_startup: {}",
            self.interrupts_enabled_at_startup
        )?;

        Ok(())
    }
}
