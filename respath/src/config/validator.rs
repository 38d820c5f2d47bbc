//! Configuration validation.
//!
//! Checks values that the schema alone cannot: protocol names must be
//! usable as the `protocol` part of a resource path.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Characters that would change how a path containing the protocol parses.
const RESERVED_PROTOCOL_CHARS: [char; 4] = [':', '/', '#', '\\'];

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use respath::config::{Config, ConfigValidator};
///
/// let config = Config {
///     protocols: Some(vec!["file".into(), "zip".into()]),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config {
///     protocols: Some(vec!["zip://".into()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref protocols) = config.protocols {
            Self::validate_protocols(protocols)?;
        }
        Ok(())
    }

    fn validate_protocols(protocols: &[String]) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, protocol) in protocols.iter().enumerate() {
            let field = format!("protocols[{index}]");
            Self::validate_protocol(&field, protocol)?;
            if !seen.insert(protocol.as_str()) {
                return Err(Error::Validation {
                    field,
                    message: format!("duplicate protocol '{protocol}'"),
                });
            }
        }
        Ok(())
    }

    /// Validate a single protocol name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, or contains whitespace or one
    /// of `:`, `/`, `#`, `\`.
    pub fn validate_protocol(field: &str, protocol: &str) -> Result<()> {
        if protocol.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "protocol cannot be empty".into(),
            });
        }

        if let Some(c) = protocol
            .chars()
            .find(|c| c.is_whitespace() || RESERVED_PROTOCOL_CHARS.contains(c))
        {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("protocol '{protocol}' contains reserved character {c:?}"),
            });
        }

        Ok(())
    }
}
