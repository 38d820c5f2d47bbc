//! Command to show one directory of a path.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Show the directory `level` steps up from the leaf.
///
/// Exits with status 1 if the path is not that deep.
#[derive(Args)]
pub struct DirectoryCommand {
    /// Resource path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Level counted from the innermost directory (0)
    #[arg(long, default_value_t = 0)]
    pub level: usize,
}

impl DirectoryCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let path = ctx.parse(&self.path);
        let directory = path.directory(self.level)?;
        ctx.emit_value("directory", directory)
    }
}
