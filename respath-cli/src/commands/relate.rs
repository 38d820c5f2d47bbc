//! Command to show how two paths relate.

use crate::error::CliError;
use crate::utils::{CommandContext, GlobalOptions};
use clap::Args;
use respath::output::RelationReport;

/// Show whether one path contains the other.
#[derive(Args)]
pub struct RelateCommand {
    /// First path
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second path
    #[arg(value_name = "SECOND")]
    pub second: String,

    /// Exit with status 1 if the paths are unrelated
    #[arg(long)]
    pub require: bool,
}

impl RelateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = CommandContext::load(global)?;
        let first = ctx.parse(&self.first);
        let second = ctx.parse(&self.second);

        let report = RelationReport::new(&first, &second);
        ctx.emit_relation(&report)?;

        if self.require && !report.relationship.is_hierarchical() {
            return Err(CliError::SemanticFailure(
                "paths are not hierarchically related".to_string(),
            ));
        }
        Ok(())
    }
}
