//! Command to show every component of a resource path.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Show every component of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Resource path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let path = ctx.parse(&self.path);
        ctx.emit_report(&path)
    }
}
