//! Environment variable handling for configuration overrides.
//!
//! This module reads the `RESPATH_*` variables that override values from
//! configuration files.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::platform::Separator;
use std::env;

/// Enables or disables drive-letter parsing.
pub const DRIVE_LETTERS_ENV: &str = "RESPATH_DRIVE_LETTERS";

/// Separator for OS-native strings (`slash` or `backslash`).
pub const SEPARATOR_ENV: &str = "RESPATH_SEPARATOR";

/// Comma-separated list of known protocols.
pub const PROTOCOLS_ENV: &str = "RESPATH_PROTOCOLS";

/// Default output format.
pub const OUTPUT_FORMAT_ENV: &str = "RESPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use respath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Protocols from the environment are added to any already configured.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(DRIVE_LETTERS_ENV) {
            config.drive_letters = Some(Self::parse_bool(DRIVE_LETTERS_ENV, &val)?);
        }

        if let Ok(val) = env::var(SEPARATOR_ENV) {
            config.separator =
                Some(Separator::parse(&val).map_err(|message| Error::Validation {
                    field: SEPARATOR_ENV.into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var(PROTOCOLS_ENV) {
            let protocols = config.protocols.get_or_insert_with(Vec::new);
            for protocol in Self::parse_protocols(&val) {
                if !protocols.contains(&protocol) {
                    protocols.push(protocol);
                }
            }
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&val).map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` for any other value.
    pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated protocol list, skipping empty entries.
    fn parse_protocols(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 4] = [
        DRIVE_LETTERS_ENV,
        SEPARATOR_ENV,
        PROTOCOLS_ENV,
        OUTPUT_FORMAT_ENV,
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        for name in ALL_VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        f();
        for name in ALL_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for s in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("X", s).unwrap(), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for s in ["false", "False", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("X", s).unwrap(), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("X", "maybe").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_protocols() {
        assert_eq!(
            EnvironmentConfig::parse_protocols(" file, zip ,,memory"),
            ["file", "zip", "memory"]
        );
        assert!(EnvironmentConfig::parse_protocols("").is_empty());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_apply_overrides_all() {
        with_env(
            &[
                (DRIVE_LETTERS_ENV, "yes"),
                (SEPARATOR_ENV, "backslash"),
                (PROTOCOLS_ENV, "zip,memory,file"),
                (OUTPUT_FORMAT_ENV, "json"),
            ],
            || {
                let mut config = Config {
                    protocols: Some(vec!["file".into()]),
                    ..Default::default()
                };
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.drive_letters, Some(true));
                assert_eq!(config.separator, Some(Separator::Backslash));
                assert_eq!(
                    config.protocols,
                    Some(vec!["file".into(), "zip".into(), "memory".into()])
                );
                assert_eq!(config.output_format, Some(OutputFormat::Json));
            },
        );
    }

    #[test]
    #[serial]
    fn test_apply_overrides_invalid_separator() {
        with_env(&[(SEPARATOR_ENV, "colon")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == SEPARATOR_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_apply_overrides_invalid_bool() {
        with_env(&[(DRIVE_LETTERS_ENV, "sometimes")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }
}
