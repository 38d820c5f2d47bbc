//! Command to append parts to a base path.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Append one or more parts to a base path.
///
/// Each part is joined in turn, so `join a/ b/ c.txt` equals
/// `join a/ b/c.txt`.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Parts to append, in order
    #[arg(value_name = "PART", required = true)]
    pub parts: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let base = ctx.parse(&self.base);

        let joined = self.parts.iter().fold(base, |path, part| {
            ctx.logger.debug(&format!("joining {part:?} onto {path}"));
            path.join_with(part, &ctx.policy)
        });

        ctx.emit_path(&joined)
    }
}
