//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! configuration loading, path parsing under the configured policy, and
//! output in the selected format.

use crate::error::CliError;
use respath::config::OutputFormat;
use respath::output::{PathReport, RelationReport};
use respath::{Config, ConfigBuilder, Logger, PlatformPolicy, ResourcePath};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Force drive-letter parsing on.
    pub drive_letters: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Output format from the command line.
    pub format: Option<OutputFormat>,

    /// Logger built from the verbosity flags.
    pub logger: Logger,
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(&expand_tilde(dir));
    }

    builder = builder.with_config(Config {
        drive_letters: global.drive_letters.then_some(true),
        output_format: global.format,
        ..Default::default()
    });

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Everything a command needs once configuration is loaded.
pub struct CommandContext {
    /// The merged configuration.
    pub config: Config,
    /// Policy derived from the configuration.
    pub policy: PlatformPolicy,
    /// Effective output format.
    pub format: OutputFormat,
    /// Diagnostics sink.
    pub logger: Logger,
}

impl CommandContext {
    /// Load configuration and derive the policy and output format.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let policy = config.policy();
        let format = config.output_format.unwrap_or_default();

        global.logger.debug(&format!(
            "policy: drive letters {}, separator {}; format {format}",
            if policy.drive_letters() { "on" } else { "off" },
            policy.separator(),
        ));

        Ok(Self {
            config,
            policy,
            format,
            logger: global.logger,
        })
    }

    /// Parse a raw path under the configured policy.
    ///
    /// Warns about empty input and about protocols the configuration does
    /// not list.
    pub fn parse(&self, raw: &str) -> ResourcePath {
        let path = ResourcePath::parse_with(raw, &self.policy);
        if path.is_bad() {
            self.logger.warn("empty path");
        } else if !self.config.knows_protocol(path.protocol()) {
            self.logger
                .warn(&format!("unknown protocol '{}' in {raw:?}", path.protocol()));
        }
        path
    }

    /// Print a path: the canonical string for human output, the full
    /// report otherwise.
    pub fn emit_path(&self, path: &ResourcePath) -> Result<(), CliError> {
        if self.format == OutputFormat::Human {
            println!("{path}");
            return Ok(());
        }
        self.emit_report(path)
    }

    /// Print the full report of a path in the selected format.
    pub fn emit_report(&self, path: &ResourcePath) -> Result<(), CliError> {
        let report = PathReport::new(path, &self.policy);
        let output = self.format.create_formatter().format_path(&report)?;
        println!("{output}");
        Ok(())
    }

    /// Print a relationship report in the selected format.
    pub fn emit_relation(&self, report: &RelationReport) -> Result<(), CliError> {
        let output = self.format.create_formatter().format_relation(report)?;
        println!("{output}");
        Ok(())
    }

    /// Print a single named value: bare for human output, as a one-field
    /// object otherwise.
    pub fn emit_value(&self, field: &str, value: &str) -> Result<(), CliError> {
        let output = format_value(self.format, field, value)?;
        println!("{output}");
        Ok(())
    }
}

/// Render a single named value in `format`.
pub fn format_value(format: OutputFormat, field: &str, value: &str) -> Result<String, CliError> {
    let mut object = BTreeMap::new();
    object.insert(field, value);

    match format {
        OutputFormat::Human => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&object)
            .map_err(|e| CliError::Library(respath::Error::from(e))),
        OutputFormat::Yaml => serde_yaml::to_string(&object)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|e| CliError::Library(respath::Error::from(e))),
    }
}
