//! String forms and derived paths.
//!
//! The canonical string (via `Display`) is a fixed point of parsing: for any
//! path built from a well-formed string, `ResourcePath::new(&p.to_string())`
//! equals `p`. The OS string drops the protocol and portion and uses the
//! policy's native separator.

use std::fmt;

use crate::path::types::{ResourcePath, DEFAULT_PROTOCOL, PORTION_SEPARATOR, PROTOCOL_SEPARATOR};
use crate::platform::PlatformPolicy;

impl ResourcePath {
    /// Drive, root, directories and filename joined with `separator`.
    fn body(&self, separator: char) -> String {
        let mut out = String::new();
        if let Some(drive) = &self.drive {
            out.push_str(drive);
            out.push(':');
        }
        if self.absolute {
            out.push(separator);
        }
        for directory in &self.directories {
            out.push_str(directory);
            out.push(separator);
        }
        out.push_str(&self.filename);
        out
    }

    /// A relative, driveless path whose first token is shaped like `X:`.
    fn leads_with_drive_token(&self) -> bool {
        if self.drive.is_some() || self.absolute {
            return false;
        }
        let first = self.directories.first().unwrap_or(&self.filename);
        let mut chars = first.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
        )
    }

    /// The OS-native string under the native platform policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let path = ResourcePath::new("zip://assets/media.zip#poem.txt");
    /// let expected = if cfg!(windows) { "assets\\media.zip" } else { "assets/media.zip" };
    /// assert_eq!(path.os_string(), expected);
    /// ```
    #[must_use]
    pub fn os_string(&self) -> String {
        self.os_string_with(&PlatformPolicy::native())
    }

    /// The OS-native string: no protocol, no portion, native separators.
    #[must_use]
    pub fn os_string_with(&self, policy: &PlatformPolicy) -> String {
        self.body(policy.separator().as_char())
    }

    /// The parent of this path.
    ///
    /// - With a portion: the file holding it (portion dropped).
    /// - With a filename: the containing directory.
    /// - Otherwise: the last directory removed. With a single directory this
    ///   leaves just the drive or root.
    ///
    /// A path with nothing left to remove is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let path = ResourcePath::new("/Program Files/My Game/Game.exe");
    /// assert_eq!(path.parent().to_string(), "file:///Program Files/My Game/");
    /// assert_eq!(path.parent().parent().to_string(), "file:///Program Files/");
    /// assert_eq!(path.parent().parent().parent().to_string(), "file:///");
    ///
    /// let entry = ResourcePath::new("zip:///games/media.zip#poem.txt");
    /// assert_eq!(entry.parent().to_string(), "zip:///games/media.zip");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        if self.has_portion() {
            return self.without_portion();
        }
        if self.has_filename() {
            return Self {
                filename: String::new(),
                extension: String::new(),
                ..self.clone()
            };
        }
        let mut parent = self.clone();
        parent.directories.pop();
        parent
    }

    /// The directory chain and filename only.
    ///
    /// Protocol, drive, root and portion are stripped so the result can be
    /// re-rooted under another base with [`join`](Self::join). The result
    /// carries the default protocol.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let path = ResourcePath::new("zip:///games/media.zip#poem.txt");
    /// assert_eq!(path.relative().to_string(), "file://games/media.zip");
    ///
    /// let rebased = ResourcePath::new("/mnt/backup/").join(&path.relative());
    /// assert_eq!(rebased.to_string(), "file:///mnt/backup/games/media.zip");
    /// ```
    #[must_use]
    pub fn relative(&self) -> Self {
        if self.is_bad() {
            return Self::BAD;
        }
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            drive: None,
            absolute: false,
            portion: String::new(),
            ..self.clone()
        }
    }

    /// The same path with the portion removed, i.e. the archive itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::ResourcePath;
    ///
    /// let entry = ResourcePath::new("zip://media.zip#poem.txt");
    /// assert_eq!(entry.without_portion(), ResourcePath::new("zip://media.zip"));
    /// ```
    #[must_use]
    pub fn without_portion(&self) -> Self {
        Self {
            portion: String::new(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bad() {
            return Ok(());
        }
        f.write_str(&self.protocol)?;
        f.write_str(PROTOCOL_SEPARATOR)?;
        if self.leads_with_drive_token() {
            // Keeps a relative "C:" directory from re-parsing as a drive.
            f.write_str("./")?;
        }
        f.write_str(&self.body('/'))?;
        if self.has_portion() {
            write!(f, "{PORTION_SEPARATOR}{}", self.portion)?;
        }
        Ok(())
    }
}
