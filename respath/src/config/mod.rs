//! Configuration system for respath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of protocol names
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RESPATH_*`)
//! 3. Private project config (`respath.local.yaml`)
//! 4. Project config (`respath.yaml`)
//! 5. User config (`~/.respath/config.yaml`)
//! 6. Built-in defaults (the native platform policy)
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use respath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! let policy = config.policy();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use respath::config::{Config, ConfigBuilder};
//! use respath::ResourcePath;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         drive_letters: Some(true),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let path = ResourcePath::parse_with("D:/saves/slot1.dat", &config.policy());
//! assert_eq!(path.drive(), Some("D"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
