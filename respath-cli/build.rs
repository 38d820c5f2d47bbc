//! Build script for respath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("respath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and compose resource paths")
        .long_about(
            "Command-line tool for parsing, composing and converting protocol-qualified \
             resource paths of the form protocol://drive:/dir/file.ext#portion",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("drive-letters")
                .long("drive-letters")
                .help("Parse a leading `X:` as a drive letter")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("RESPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human, json, yaml)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show every component of a path")
                .long_about("Parse a path and print its protocol, drive, directories, filename, extension and portion"),
            Command::new("join")
                .about("Append parts to a base path")
                .long_about("Append one or more parts to a base path, resolving `..` against the base"),
            Command::new("parent")
                .about("Show the parent of a path")
                .long_about("Drop the filename and portion, or the last directory"),
            Command::new("relative")
                .about("Strip protocol, drive, root and portion")
                .long_about("Reduce a path to its directory chain and filename for re-rooting"),
            Command::new("os-string")
                .about("Show the OS-native string of a path")
                .long_about("Print the path without protocol or portion, using native separators"),
            Command::new("directory")
                .about("Show a directory counted up from the leaf")
                .long_about("Print one directory of a path; exits 1 if the path is not deep enough"),
            Command::new("relate")
                .about("Show how two paths relate")
                .long_about("Report whether one path is an ancestor or descendant of the other"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a respath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("respath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
