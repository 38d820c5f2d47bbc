//! The `ResourcePath` value type and its read-only projections.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::parse;
use crate::path::protocol::ProtocolHash;
use crate::platform::PlatformPolicy;

/// Protocol assigned to paths written without a `protocol://` prefix.
pub const DEFAULT_PROTOCOL: &str = "file";

/// Delimiter between the protocol and the rest of the path.
pub const PROTOCOL_SEPARATOR: &str = "://";

/// Delimiter introducing the portion (archive entry).
pub const PORTION_SEPARATOR: char = '#';

/// Frozen sentinel for an empty or invalid path.
///
/// It has an empty protocol and no components, which no parsed non-empty
/// string can produce.
///
/// # Examples
///
/// ```
/// use respath::{ResourcePath, BAD_PATH};
///
/// assert_eq!(ResourcePath::new(""), BAD_PATH);
/// assert!(BAD_PATH.is_bad());
/// assert_eq!(BAD_PATH.to_string(), "");
/// ```
pub const BAD_PATH: ResourcePath = ResourcePath::BAD;

/// A path to a file or directory, or to an entry inside an archive.
///
/// The grammar is `protocol://drive:/dir1/dir2/filename.ext#portion`.
/// Every part is optional: a missing protocol defaults to
/// [`DEFAULT_PROTOCOL`], a trailing separator means there is no filename,
/// and `..` segments are resolved away while parsing.
///
/// Values are immutable; composition and derivation produce new values.
///
/// # Examples
///
/// ```
/// use respath::ResourcePath;
///
/// let path = ResourcePath::new("zip:///opt/game/media.zip#poem.txt");
/// assert_eq!(path.protocol(), "zip");
/// assert_eq!(path.filename(), "media.zip");
/// assert_eq!(path.extension(), "zip");
/// assert_eq!(path.portion(), "poem.txt");
/// assert_eq!(path.directory(0).unwrap(), "game");
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    pub(crate) protocol: String,
    pub(crate) drive: Option<String>,
    pub(crate) directories: Vec<String>,
    pub(crate) filename: String,
    pub(crate) extension: String,
    pub(crate) portion: String,
    pub(crate) absolute: bool,
}

impl ResourcePath {
    /// The empty sentinel; see [`BAD_PATH`].
    pub const BAD: Self = Self {
        protocol: String::new(),
        drive: None,
        directories: Vec::new(),
        filename: String::new(),
        extension: String::new(),
        portion: String::new(),
        absolute: false,
    };

    /// Parse a path using the native platform policy.
    ///
    /// Parsing never fails. The empty string yields [`BAD_PATH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let path = ResourcePath::new("media/textures/../models/ship.mesh");
    /// assert_eq!(path.directories(), ["media", "models"]);
    /// assert_eq!(path.filename_only(), "ship");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self::parse_with(raw, &PlatformPolicy::native())
    }

    /// Parse a path under an explicit platform policy.
    #[must_use]
    pub fn parse_with(raw: &str, policy: &PlatformPolicy) -> Self {
        if raw.is_empty() {
            return Self::BAD;
        }
        parse::tokenize(raw, policy).resolve()
    }

    /// Assemble a path from already-resolved parts.
    ///
    /// The extension is derived from `filename`; an empty protocol is
    /// replaced with [`DEFAULT_PROTOCOL`]. A drive implies an absolute path.
    pub(crate) fn from_parts(
        protocol: &str,
        drive: Option<&str>,
        absolute: bool,
        directories: Vec<String>,
        filename: &str,
        portion: &str,
    ) -> Self {
        let protocol = if protocol.is_empty() {
            DEFAULT_PROTOCOL
        } else {
            protocol
        };
        Self {
            protocol: protocol.to_string(),
            drive: drive.map(str::to_string),
            directories,
            filename: filename.to_string(),
            extension: split_extension(filename).1.to_string(),
            portion: portion.to_string(),
            absolute: absolute || drive.is_some(),
        }
    }

    /// The protocol, e.g. `file`, `zip` or `memory`.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Hash of the protocol for registry dispatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::{ProtocolHash, ResourcePath};
    ///
    /// let path = ResourcePath::new("zip://media.zip#a.txt");
    /// assert_eq!(path.protocol_hash(), ProtocolHash::of("zip"));
    /// ```
    #[must_use]
    pub fn protocol_hash(&self) -> ProtocolHash {
        ProtocolHash::of(&self.protocol)
    }

    /// The drive token, without the trailing `:`.
    #[must_use]
    pub fn drive(&self) -> Option<&str> {
        self.drive.as_deref()
    }

    /// Whether the path has a drive.
    #[must_use]
    pub fn has_drive(&self) -> bool {
        self.drive.is_some()
    }

    /// Directory names from root to leaf.
    #[must_use]
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// Number of directories, i.e. how deep the path is.
    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    /// The directory `level` steps up from the leaf; `0` is the innermost.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryOutOfRange`] if `level` is not below
    /// [`directory_count`](Self::directory_count).
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let path = ResourcePath::new("/Program Files/My Game/Game.exe");
    /// assert_eq!(path.directory(0).unwrap(), "My Game");
    /// assert_eq!(path.directory(1).unwrap(), "Program Files");
    /// assert!(path.directory(2).unwrap_err().is_out_of_range());
    /// ```
    pub fn directory(&self, level: usize) -> Result<&str> {
        let depth = self.directories.len();
        if level >= depth {
            return Err(Error::DirectoryOutOfRange { level, depth });
        }
        Ok(&self.directories[depth - 1 - level])
    }

    /// The filename including its extension; empty for directories.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whether the path names a file.
    #[must_use]
    pub fn has_filename(&self) -> bool {
        !self.filename.is_empty()
    }

    /// The filename without its extension.
    #[must_use]
    pub fn filename_only(&self) -> &str {
        split_extension(&self.filename).0
    }

    /// The text after the last `.` of the filename; empty if none.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether the filename has an extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// The archive entry after `#`; empty if none.
    #[must_use]
    pub fn portion(&self) -> &str {
        &self.portion
    }

    /// Whether the path refers to an entry inside an archive.
    #[must_use]
    pub fn has_portion(&self) -> bool {
        !self.portion.is_empty()
    }

    /// Whether the path is rooted at a drive or a leading separator.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether this is the [`BAD_PATH`] sentinel.
    #[must_use]
    pub fn is_bad(&self) -> bool {
        *self == Self::BAD
    }

    /// Whether the path consists of a protocol and nothing else, e.g. `memory://`.
    #[must_use]
    pub fn is_protocol_only(&self) -> bool {
        !self.protocol.is_empty()
            && self.drive.is_none()
            && !self.absolute
            && self.directories.is_empty()
            && self.filename.is_empty()
            && self.portion.is_empty()
    }
}

/// Split a filename at its last `.` into stem and extension.
///
/// A leading dot does not start an extension, so `.profile` has none.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => (&filename[..idx], &filename[idx + 1..]),
        _ => (filename, ""),
    }
}

impl Default for ResourcePath {
    fn default() -> Self {
        Self::BAD
    }
}

impl From<&str> for ResourcePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ResourcePath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&String> for ResourcePath {
    fn from(raw: &String) -> Self {
        Self::new(raw)
    }
}

impl FromStr for ResourcePath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for ResourcePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourcePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}
