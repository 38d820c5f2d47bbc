//! Resource paths: parsing, resolution, composition and formatting.
//!
//! A resource path locates a file on disk or an entry inside an archive
//! using one grammar:
//!
//! ```text
//! protocol://drive:/dir1/dir2/filename.ext#portion
//! ```
//!
//! # Parsing
//!
//! [`ResourcePath::new`] never fails. Missing parts are simply empty, the
//! protocol defaults to `file`, and the empty string yields [`BAD_PATH`].
//! Drive letters are only recognised when the [`PlatformPolicy`] allows
//! them.
//!
//! # Resolution
//!
//! `..` cancels the preceding directory; a `..` with nothing to cancel is
//! dropped. `.` and empty segments are ignored.
//!
//! ```
//! use respath::ResourcePath;
//!
//! assert_eq!(ResourcePath::new("a/b/../c/").directories(), ["a", "c"]);
//! assert_eq!(ResourcePath::new("../a/").directories(), ["a"]);
//! ```
//!
//! # Composition
//!
//! [`ResourcePath::join`] (also `/` and `/=`) appends to a base path; the
//! base's filename becomes a directory.
//!
//! ```
//! use respath::ResourcePath;
//!
//! let base = ResourcePath::new("/Program Files/My Game/../Other Game/");
//! let exe = &base / "Game.exe";
//! assert_eq!(exe.to_string(), "file:///Program Files/Other Game/Game.exe");
//! assert_eq!(exe.parent(), base);
//! ```
//!
//! [`PlatformPolicy`]: crate::PlatformPolicy

pub mod compose;
mod format;
pub mod normalize;
pub mod parse;
pub mod protocol;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use compose::JoinOperand;
pub use parse::Fragment;
pub use protocol::{ProtocolHash, ProtocolTable};
pub use relationship::PathRelationship;
pub use types::{ResourcePath, BAD_PATH, DEFAULT_PROTOCOL, PORTION_SEPARATOR, PROTOCOL_SEPARATOR};
