//! Tokenizing raw path strings.
//!
//! [`tokenize`] splits a raw string into a [`Fragment`]: the protocol, drive,
//! portion, filename and the directory tokens *before* `..` resolution.
//! Keeping the tokens unresolved lets composition resolve a right-hand
//! operand's leading `..` against the left-hand path instead of dropping it.

use crate::path::normalize::{self, CURRENT_DIR, PARENT_DIR};
use crate::path::types::{ResourcePath, PORTION_SEPARATOR, PROTOCOL_SEPARATOR};
use crate::platform::PlatformPolicy;

/// An unresolved tokenization of a raw path string.
///
/// # Examples
///
/// ```
/// use respath::path::parse::tokenize;
/// use respath::PlatformPolicy;
///
/// let fragment = tokenize("zip://../assets/pack.zip#ui/button.png", &PlatformPolicy::POSIX);
/// assert_eq!(fragment.protocol(), Some("zip"));
/// assert_eq!(fragment.segments(), ["..", "assets"]);
/// assert_eq!(fragment.filename(), "pack.zip");
/// assert_eq!(fragment.portion(), "ui/button.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub(crate) protocol: Option<&'a str>,
    pub(crate) drive: Option<&'a str>,
    pub(crate) absolute: bool,
    pub(crate) segments: Vec<&'a str>,
    pub(crate) filename: &'a str,
    pub(crate) portion: &'a str,
}

impl<'a> Fragment<'a> {
    /// The explicit protocol, if the string had a `protocol://` prefix.
    #[must_use]
    pub fn protocol(&self) -> Option<&'a str> {
        self.protocol
    }

    /// The drive letter, if one was detected.
    #[must_use]
    pub fn drive(&self) -> Option<&'a str> {
        self.drive
    }

    /// Whether the string was rooted.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Directory tokens in order, `..` still present, `.` and empty tokens removed.
    #[must_use]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// The trailing filename token; empty if the string named a directory.
    #[must_use]
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// The text after the last `#`; empty if none.
    #[must_use]
    pub fn portion(&self) -> &'a str {
        self.portion
    }

    /// Resolve the directory tokens and build the path.
    #[must_use]
    pub fn resolve(&self) -> ResourcePath {
        let directories = normalize::resolve_components(self.segments.iter().copied());
        ResourcePath::from_parts(
            self.protocol.unwrap_or_default(),
            self.drive,
            self.absolute,
            directories,
            self.filename,
            self.portion,
        )
    }
}

/// Split a raw string into its unresolved parts.
///
/// The steps run in a fixed order: protocol at the first `://`, then a
/// drive letter (only if the policy allows drives), then the portion at the
/// last `#`, then directory tokens on separators. The last token is the
/// filename unless it is empty, `.` or `..`.
#[must_use]
pub fn tokenize<'a>(raw: &'a str, policy: &PlatformPolicy) -> Fragment<'a> {
    let (protocol, rest) = match raw.find(PROTOCOL_SEPARATOR) {
        Some(idx) => (Some(&raw[..idx]), &raw[idx + PROTOCOL_SEPARATOR.len()..]),
        None => (None, raw),
    };

    let (drive, rest) = if policy.drive_letters() {
        split_drive(rest)
    } else {
        (None, rest)
    };

    let (body, portion) = match rest.rfind(PORTION_SEPARATOR) {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    };

    let absolute = drive.is_some() || body.starts_with(|c: char| policy.is_separator(c));

    let mut tokens: Vec<&str> = body.split(|c: char| policy.is_separator(c)).collect();
    let filename = match tokens.last() {
        Some(&last) if !last.is_empty() && last != CURRENT_DIR && last != PARENT_DIR => {
            tokens.pop();
            last
        }
        _ => "",
    };
    let segments = tokens
        .into_iter()
        .filter(|token| !token.is_empty() && *token != CURRENT_DIR)
        .collect();

    if protocol.is_none() {
        log::trace!("no protocol in {raw:?}, using the default");
    }
    if let Some(drive) = drive {
        log::trace!("drive {drive:?} detected in {raw:?}");
    }

    Fragment {
        protocol,
        drive,
        absolute,
        segments,
        filename,
        portion,
    }
}

/// Split a leading `X:` drive token off `s`.
fn split_drive(s: &str) -> (Option<&str>, &str) {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => (Some(&s[..1]), &s[2..]),
        _ => (None, s),
    }
}
