//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show every component of a path
//! - `join`: Append parts to a base path
//! - `parent`: Show the parent of a path
//! - `relative`: Strip protocol, drive, root and portion
//! - `os_string`: Show the OS-native string
//! - `directory`: Show one directory of a path
//! - `relate`: Show how two paths relate
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod directory;
pub mod inspect;
pub mod join;
pub mod os_string;
pub mod parent;
pub mod relate;
pub mod relative;
pub mod validate;

pub use completions::CompletionsCommand;
pub use directory::DirectoryCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use os_string::OsStringCommand;
pub use parent::ParentCommand;
pub use relate::RelateCommand;
pub use relative::RelativeCommand;
pub use validate::ValidateCommand;
