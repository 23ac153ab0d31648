//! Configuration from the environment.
//!
//! Flags on the command line take precedence over these values.

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix used by `generate` and `encode` when none is given.
    pub default_prefix: String,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_prefix: String::new(),
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_prefix = lookup("TYPEID_PREFIX").unwrap_or(defaults.default_prefix);

        let log_level = lookup("TYPEID_LOG_LEVEL").unwrap_or(defaults.log_level);

        let format = lookup("TYPEID_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.format);

        Self {
            default_prefix,
            log_level,
            format,
        }
    }
}
