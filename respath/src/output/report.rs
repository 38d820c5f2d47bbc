//! Serializable snapshots of paths and path relationships.

use serde::Serialize;

use crate::path::{PathRelationship, ResourcePath};
use crate::platform::PlatformPolicy;

/// Every component of a [`ResourcePath`], flattened for display.
///
/// # Examples
///
/// ```
/// use respath::output::PathReport;
/// use respath::{PlatformPolicy, ResourcePath};
///
/// let policy = PlatformPolicy::WINDOWS;
/// let path = ResourcePath::parse_with("zip://C:/games/media.zip#poem.txt", &policy);
/// let report = PathReport::new(&path, &policy);
///
/// assert_eq!(report.drive.as_deref(), Some("C"));
/// assert_eq!(report.os_string, "C:\\games\\media.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Canonical string form.
    pub path: String,
    /// Protocol name.
    pub protocol: String,
    /// Protocol hash as 16 hex digits.
    pub protocol_hash: String,
    /// Drive letter, if any.
    pub drive: Option<String>,
    /// Whether the path is rooted.
    pub absolute: bool,
    /// Directories from root to leaf.
    pub directories: Vec<String>,
    /// Filename including extension.
    pub filename: String,
    /// Filename without extension.
    pub filename_only: String,
    /// Extension without the dot.
    pub extension: String,
    /// Archive entry.
    pub portion: String,
    /// OS-native string under the policy.
    pub os_string: String,
    /// Whether this is the empty sentinel path.
    pub bad: bool,
}

impl PathReport {
    /// Snapshot `path`, rendering the OS string under `policy`.
    #[must_use]
    pub fn new(path: &ResourcePath, policy: &PlatformPolicy) -> Self {
        Self {
            path: path.to_string(),
            protocol: path.protocol().to_string(),
            protocol_hash: path.protocol_hash().to_string(),
            drive: path.drive().map(str::to_string),
            absolute: path.is_absolute(),
            directories: path.directories().to_vec(),
            filename: path.filename().to_string(),
            filename_only: path.filename_only().to_string(),
            extension: path.extension().to_string(),
            portion: path.portion().to_string(),
            os_string: path.os_string_with(policy),
            bad: path.is_bad(),
        }
    }
}

/// The relationship between two paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationReport {
    /// Canonical form of the first path.
    pub first: String,
    /// Canonical form of the second path.
    pub second: String,
    /// How the first path relates to the second.
    pub relationship: PathRelationship,
    /// Human-readable sentence.
    pub description: String,
}

impl RelationReport {
    /// Compare `first` with `second`.
    #[must_use]
    pub fn new(first: &ResourcePath, second: &ResourcePath) -> Self {
        let relationship = PathRelationship::between(first, second);
        Self {
            first: first.to_string(),
            second: second.to_string(),
            relationship,
            description: relationship.description(first, second),
        }
    }
}
