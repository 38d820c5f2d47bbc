//! Command to strip a path down to its directories and filename.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Strip protocol, drive, root and portion from a path.
#[derive(Args)]
pub struct RelativeCommand {
    /// Resource path
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let path = ctx.parse(&self.path);
        ctx.emit_path(&path.relative())
    }
}
