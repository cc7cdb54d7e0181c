//! Check command implementation.
//!
//! Parses a trigger file and reports its bindings, active list, and any
//! rejected lines. Fails when any line was rejected.

use std::path::Path;

use super::{load_triggers, resolve_triggers_path, CommandContext, CommandError, Result};
use crate::output::{format_check_json, format_check_table};

/// Executes the check command.
///
/// # Errors
///
/// Returns an error if the trigger file cannot be read, or
/// [`CommandError::InvalidTriggers`] if any line was rejected.
pub fn execute(ctx: &mut CommandContext, triggers: Option<&Path>) -> Result<()> {
    let config = ctx.load_config()?;
    let path = resolve_triggers_path(triggers, &config);
    let triggers = load_triggers(&path)?;

    if ctx.json_output {
        println!("{}", format_check_json(&path, &triggers)?);
    } else if !ctx.quiet {
        print!("{}", format_check_table(&path, &triggers, ctx.use_colors));
    }

    let count = triggers.diagnostics().len();
    if count > 0 {
        return Err(CommandError::InvalidTriggers { count });
    }

    Ok(())
}
