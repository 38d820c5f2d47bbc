//! Main entry point for the respath CLI.
//!
//! This is the command-line interface to the respath library. It provides
//! commands for working with resource paths:
//! - `inspect`: Show every component of a path
//! - `join`: Append parts to a base path
//! - `parent`: Show the parent of a path
//! - `relate`: Show how two paths relate

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = respath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        drive_letters: cli.drive_letters,
        config_dir: cli.config_dir,
        format: cli.format,
        logger,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::OsString(cmd) => cmd.execute(&global),
        cli::Command::Directory(cmd) => cmd.execute(&global),
        cli::Command::Relate(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
