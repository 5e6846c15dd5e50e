use std::fs;
use std::path::Path;
use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};

/// Levels accepted in the configuration file and on the command line
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete tool configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,
    /// Output formatting configuration
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level, overridden by RUST_LOG and --log-level
    pub level: String,
    /// Emit JSON log lines
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print hex in upper case
    pub uppercase_hex: bool,
    /// Prefix hex output with 0x
    pub hex_prefix: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            uppercase_hex: false,
            hex_prefix: true,
        }
    }
}

impl OutputConfig {
    /// Render bytes as hex according to this configuration
    pub fn format_hex(&self, bytes: &[u8]) -> String {
        let digits = if self.uppercase_hex {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        };

        if self.hex_prefix {
            format!("0x{}", digits)
        } else {
            digits
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context("Failed to read configuration file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        fs::write(path, content)
            .context("Failed to write configuration file")?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "log level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log.level
            );
        }

        Ok(())
    }
}
