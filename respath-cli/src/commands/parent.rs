//! Command to show the parent of a path.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Show the parent of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Resource path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// How many levels to go up
    #[arg(long, default_value_t = 1)]
    pub levels: usize,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let mut path = ctx.parse(&self.path);

        for level in 0..self.levels {
            let parent = path.parent();
            if parent == path {
                ctx.logger
                    .info(&format!("reached the top after {level} level(s)"));
                break;
            }
            path = parent;
        }

        ctx.emit_path(&path)
    }
}
