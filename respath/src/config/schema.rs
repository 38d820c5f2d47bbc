//! Configuration schema definitions.
//!
//! This module defines the configuration structure for respath: the
//! platform policy used to parse and format paths, the protocols a resource
//! layer knows about, and the default output format.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::{PlatformPolicy, Separator};

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to the native
/// [`PlatformPolicy`] and built-in defaults.
///
/// # Examples
///
/// ```
/// use respath::config::Config;
/// use respath::platform::Separator;
///
/// let config = Config {
///     drive_letters: Some(true),
///     separator: Some(Separator::Backslash),
///     ..Default::default()
/// };
/// assert!(config.policy().drive_letters());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether a leading `X:` token is parsed as a drive letter.
    pub drive_letters: Option<bool>,

    /// Separator used for OS-native strings.
    pub separator: Option<Separator>,

    /// Protocols known to the resource layer (accumulated across sources).
    pub protocols: Option<Vec<String>>,

    /// Default output format for CLI commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The platform policy described by this configuration.
    ///
    /// Unset fields take the value of [`PlatformPolicy::native`].
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::config::Config;
    /// use respath::PlatformPolicy;
    ///
    /// assert_eq!(Config::default().policy(), PlatformPolicy::native());
    /// ```
    #[must_use]
    pub fn policy(&self) -> PlatformPolicy {
        let mut policy = PlatformPolicy::native();
        if let Some(enabled) = self.drive_letters {
            policy = policy.with_drive_letters(enabled);
        }
        if let Some(separator) = self.separator {
            policy = policy.with_separator(separator);
        }
        policy
    }

    /// Whether `protocol` is listed in [`protocols`](Self::protocols).
    ///
    /// With no list configured every protocol is considered known.
    #[must_use]
    pub fn knows_protocol(&self, protocol: &str) -> bool {
        match &self.protocols {
            Some(known) => known.iter().any(|p| p == protocol),
            None => true,
        }
    }
}

/// Output format for CLI commands.
///
/// # Examples
///
/// ```
/// use respath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
    /// YAML output.
    Yaml,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not `human`, `json` or `yaml`.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s} (expected human, json or yaml)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
