#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # respath
//!
//! Resource paths for locating files on disk and entries inside archives.
//!
//! A resource path follows one grammar on every platform:
//!
//! ```text
//! protocol://drive:/dir1/dir2/filename.ext#portion
//! ```
//!
//! Parsing never fails; `..` segments are resolved while parsing; paths
//! compose with `/`; and every path has a canonical string that parses back
//! to an equal value.
//!
//! ## Core Types
//!
//! - [`ResourcePath`] and [`BAD_PATH`]: The path value type and its empty sentinel
//! - [`PlatformPolicy`]: Drive-letter and separator capabilities
//! - [`ProtocolHash`] and [`ProtocolTable`]: Protocol-keyed dispatch
//! - [`PathRelationship`]: Containment checks between paths
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use respath::{PlatformPolicy, ResourcePath};
//!
//! let policy = PlatformPolicy::WINDOWS;
//! let path = ResourcePath::parse_with(
//!     "zip://C:/Program Files/Game/media.zip#file.nxs",
//!     &policy,
//! );
//!
//! assert_eq!(path.protocol(), "zip");
//! assert_eq!(path.drive(), Some("C"));
//! assert_eq!(path.directories(), ["Program Files", "Game"]);
//! assert_eq!(path.filename(), "media.zip");
//! assert_eq!(path.portion(), "file.nxs");
//! assert_eq!(path.os_string_with(&policy), "C:\\Program Files\\Game\\media.zip");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    JoinOperand, PathRelationship, ProtocolHash, ProtocolTable, ResourcePath, BAD_PATH,
    DEFAULT_PROTOCOL,
};
pub use platform::{PlatformPolicy, Separator};
