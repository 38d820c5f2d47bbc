//! Platform policy for path parsing and OS-native formatting.
//!
//! Whether a leading `X:` token is a drive letter, and which separator the
//! native filesystem expects, are properties of the platform. They are
//! captured once in a [`PlatformPolicy`] value and passed to the parser and
//! formatter, instead of being decided by `cfg` branches inside accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Directory separator used for OS-native strings.
///
/// `/` is always accepted as a separator when parsing; a `Backslash` policy
/// additionally accepts `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Forward slash (`/`).
    Slash,
    /// Backslash (`\`).
    Backslash,
}

impl Separator {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// Parses a separator name or literal character.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `slash`, `backslash`, `/`
    /// or `\`.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::platform::Separator;
    ///
    /// assert_eq!(Separator::parse("backslash").unwrap(), Separator::Backslash);
    /// assert_eq!(Separator::parse("/").unwrap(), Separator::Slash);
    /// assert!(Separator::parse("|").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "slash" | "/" => Ok(Self::Slash),
            "backslash" | "\\" => Ok(Self::Backslash),
            _ => Err(format!("invalid separator: {s}")),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slash => write!(f, "slash"),
            Self::Backslash => write!(f, "backslash"),
        }
    }
}

/// Platform capabilities consulted by the parser and formatter.
///
/// # Examples
///
/// ```
/// use respath::{PlatformPolicy, ResourcePath};
///
/// let windows = PlatformPolicy::WINDOWS;
/// let path = ResourcePath::parse_with("C:/Games/g.exe", &windows);
/// assert_eq!(path.drive(), Some("C"));
///
/// let posix = PlatformPolicy::POSIX;
/// let path = ResourcePath::parse_with("C:/Games/g.exe", &posix);
/// assert_eq!(path.drive(), None);
/// assert_eq!(path.directory(1).unwrap(), "C:");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformPolicy {
    drive_letters: bool,
    separator: Separator,
}

impl PlatformPolicy {
    /// POSIX-style platforms: no drives, `/` separator.
    pub const POSIX: Self = Self::new(false, Separator::Slash);

    /// Windows-style platforms: drive letters, `\` separator.
    pub const WINDOWS: Self = Self::new(true, Separator::Backslash);

    /// Creates a policy from its parts.
    #[must_use]
    pub const fn new(drive_letters: bool, separator: Separator) -> Self {
        Self {
            drive_letters,
            separator,
        }
    }

    /// The policy of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// Returns a copy with drive-letter parsing switched on or off.
    #[must_use]
    pub const fn with_drive_letters(mut self, enabled: bool) -> Self {
        self.drive_letters = enabled;
        self
    }

    /// Returns a copy with a different native separator.
    #[must_use]
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Whether a leading `X:` token is parsed as a drive.
    #[must_use]
    pub const fn drive_letters(&self) -> bool {
        self.drive_letters
    }

    /// The separator used for OS-native strings.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Whether `c` splits directory tokens under this policy.
    #[must_use]
    pub const fn is_separator(&self, c: char) -> bool {
        c == '/' || c == self.separator.as_char()
    }
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self::native()
    }
}
