//! Centralized configuration for Medley.
//!
//! Settings are grouped into sections with environment variable
//! overrides for runtime customization.

use std::path::PathBuf;

use crate::tracing_setup::CliLogLevel;

/// Central configuration for the Medley binary.
#[derive(Debug, Clone, Default)]
pub struct MedleyConfig {
    pub logging: LoggingConfig,
}

/// Console and file logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Console log level; the file log always captures everything
    pub console_level: CliLogLevel,
    /// Directory for the full-debug log file
    pub logs_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: CliLogLevel::Info,
            logs_dir: PathBuf::from("logs"),
        }
    }
}

impl MedleyConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// `MEDLEY_LOG_LEVEL` sets the console level (invalid names are
    /// ignored); `MEDLEY_LOGS_DIR` relocates the debug log file.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("MEDLEY_LOG_LEVEL") {
            if let Ok(parsed) = level.parse() {
                config.logging.console_level = parsed;
            }
        }

        if let Ok(dir) = std::env::var("MEDLEY_LOGS_DIR") {
            config.logging.logs_dir = PathBuf::from(dir);
        }

        config
    }

    /// Creates a configuration that keeps test output quiet.
    pub fn for_testing() -> Self {
        Self {
            logging: LoggingConfig {
                console_level: CliLogLevel::Error,
                ..LoggingConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MedleyConfig::default();

        assert!(matches!(config.logging.console_level, CliLogLevel::Info));
        assert_eq!(config.logging.logs_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_testing_preset() {
        let config = MedleyConfig::for_testing();
        assert!(matches!(config.logging.console_level, CliLogLevel::Error));
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("MEDLEY_LOG_LEVEL", "debug");
            std::env::set_var("MEDLEY_LOGS_DIR", "/tmp/medley-logs");
        }

        let config = MedleyConfig::from_env();

        assert!(matches!(config.logging.console_level, CliLogLevel::Debug));
        assert_eq!(config.logging.logs_dir, PathBuf::from("/tmp/medley-logs"));

        // Cleanup
        unsafe {
            std::env::remove_var("MEDLEY_LOG_LEVEL");
            std::env::remove_var("MEDLEY_LOGS_DIR");
        }
    }

    #[test]
    fn test_invalid_env_level_ignored() {
        unsafe {
            std::env::set_var("MEDLEY_LOG_LEVEL", "loud");
        }

        let config = MedleyConfig::from_env();
        assert!(matches!(config.logging.console_level, CliLogLevel::Info));

        unsafe {
            std::env::remove_var("MEDLEY_LOG_LEVEL");
        }
    }
}
