//! Resolution of `.` and `..` directory segments.
//!
//! A `..` cancels the directory accepted just before it. When there is
//! nothing left to cancel the `..` is consumed and dropped, so a resolved
//! directory list never contains `..` and never climbs above the path's own
//! root. `.` and empty segments are skipped.

/// The parent-directory segment.
pub const PARENT_DIR: &str = "..";

/// The current-directory segment.
pub const CURRENT_DIR: &str = ".";

/// Push one segment onto a resolved directory list.
///
/// Returns `false` if the segment was a `..` that had nothing to cancel.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::push_segment;
///
/// let mut dirs = vec!["a".to_string()];
/// assert!(push_segment(&mut dirs, "b"));
/// assert!(push_segment(&mut dirs, ".."));
/// assert_eq!(dirs, ["a"]);
/// assert!(push_segment(&mut dirs, ".."));
/// assert!(!push_segment(&mut dirs, ".."));
/// assert!(dirs.is_empty());
/// ```
pub fn push_segment(directories: &mut Vec<String>, segment: &str) -> bool {
    match segment {
        "" | CURRENT_DIR => true,
        PARENT_DIR => {
            if directories.pop().is_none() {
                log::debug!("dropping '..' with no directory left to cancel");
                false
            } else {
                true
            }
        }
        name => {
            directories.push(name.to_string());
            true
        }
    }
}

/// Resolve `segments` onto an existing resolved directory list.
///
/// Returns the number of `..` segments that were dropped at the root.
pub fn resolve_onto<'a, I>(directories: &mut Vec<String>, segments: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dropped = 0;
    for segment in segments {
        if !push_segment(directories, segment) {
            dropped += 1;
        }
    }
    dropped
}

/// Resolve a sequence of raw directory segments from scratch.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components(["a", "b", "..", "c"]), ["a", "c"]);
/// assert_eq!(resolve_components(["..", "a"]), ["a"]);
/// assert_eq!(resolve_components(["a", ".", "", "b"]), ["a", "b"]);
/// ```
#[must_use]
pub fn resolve_components<'a, I>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut directories = Vec::new();
    resolve_onto(&mut directories, segments);
    directories
}
