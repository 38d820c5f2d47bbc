//! Command to show the OS-native string of a path.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;

/// Show the OS-native string: no protocol, no portion, native separators.
#[derive(Args)]
pub struct OsStringCommand {
    /// Resource path
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl OsStringCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let path = ctx.parse(&self.path);
        if path.has_portion() {
            ctx.logger.info(&format!(
                "portion '{}' is not part of the OS string",
                path.portion()
            ));
        }
        ctx.emit_value("os_string", &path.os_string_with(&ctx.policy))
    }
}
