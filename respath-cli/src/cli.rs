//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DirectoryCommand, InspectCommand, JoinCommand, OsStringCommand,
    ParentCommand, RelateCommand, RelativeCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use respath::config::OutputFormat;
use std::path::PathBuf;

/// Inspect, compose and convert protocol-qualified resource paths.
#[derive(Parser)]
#[command(name = "respath")]
#[command(version, about = "Inspect and compose resource paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Parse a leading `X:` as a drive letter
    ///
    /// `RESPATH_DRIVE_LETTERS` is read by the configuration layer instead.
    #[arg(long, global = true)]
    pub drive_letters: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "RESPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format (human, json, yaml)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every component of a path
    Inspect(InspectCommand),

    /// Append parts to a base path
    Join(JoinCommand),

    /// Show the parent of a path
    Parent(ParentCommand),

    /// Strip protocol, drive, root and portion
    Relative(RelativeCommand),

    /// Show the OS-native string of a path
    OsString(OsStringCommand),

    /// Show a directory counted up from the leaf
    Directory(DirectoryCommand),

    /// Show how two paths relate
    Relate(RelateCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
