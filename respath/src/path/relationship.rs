//! Path relationship checking.
//!
//! Determines whether one resource path lies beneath another, which the
//! resource layer uses for path-relative discovery (for example, "is this
//! entry inside that archive?"). Two paths can only be related if they share
//! protocol, drive and rootedness; after that, their directory chains,
//! filenames and portions are compared as one sequence of links.

use serde::Serialize;

use crate::path::types::ResourcePath;

/// One step of a path's chain from root to leaf.
#[derive(Debug, PartialEq, Eq)]
enum Link<'a> {
    Name(&'a str),
    Portion(&'a str),
}

fn chain(path: &ResourcePath) -> Vec<Link<'_>> {
    let mut links: Vec<Link<'_>> = path
        .directories()
        .iter()
        .map(|dir| Link::Name(dir))
        .collect();
    if path.has_filename() {
        links.push(Link::Name(path.filename()));
    }
    if path.has_portion() {
        links.push(Link::Portion(path.portion()));
    }
    links
}

fn same_root(a: &ResourcePath, b: &ResourcePath) -> bool {
    a.protocol() == b.protocol() && a.drive() == b.drive() && a.is_absolute() == b.is_absolute()
}

/// Relationship between two resource paths.
///
/// # Examples
///
/// ```
/// use respath::{PathRelationship, ResourcePath};
///
/// let archive = ResourcePath::new("zip:///games/media.zip");
/// let entry = ResourcePath::new("zip:///games/media.zip#poem.txt");
///
/// assert_eq!(
///     PathRelationship::between(&archive, &entry),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path lies beneath the other, or their roots differ.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::{PathRelationship, ResourcePath};
    ///
    /// let a = ResourcePath::new("/a/");
    /// let ab = ResourcePath::new("/a/b/");
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    ///
    /// let zip = ResourcePath::new("zip:///a/b/");
    /// assert_eq!(PathRelationship::between(&a, &zip), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &ResourcePath, path2: &ResourcePath) -> Self {
        if !same_root(path1, path2) {
            return Self::Unrelated;
        }

        let c1 = chain(path1);
        let c2 = chain(path2);

        if c1 == c2 {
            Self::Same
        } else if c2.starts_with(&c1) {
            Self::Ancestor
        } else if c1.starts_with(&c2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` lies within `directory` (descendant or same).
    #[must_use]
    pub fn is_within(path: &ResourcePath, directory: &ResourcePath) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &ResourcePath, other: &ResourcePath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use respath::{PathRelationship, ResourcePath};
    ///
    /// let p1 = ResourcePath::new("a/");
    /// let p2 = ResourcePath::new("a/b.txt");
    /// let desc = PathRelationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "file://a/ is an ancestor of file://a/b.txt");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &ResourcePath, path2: &ResourcePath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
