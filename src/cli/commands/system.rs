use crate::cli::commands::DEFINITIONS;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

pub(crate) fn cmd_help(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_overview();
    Ok(())
}

pub(crate) fn print_overview() {
    output::section("Personal Finance Tracker");
    for definition in DEFINITIONS.iter() {
        let aliases = definition.aliases.join(", ");
        output::plain(format!(
            "  {:<48} {} ({})",
            definition.usage, definition.description, aliases
        ));
    }
}

/// Saves the ledger, then stops the shell. A failed save keeps the shell running.
pub(crate) fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.finish()?;
    output::success(format!(
        "Saved {} transactions to {}",
        context.ledger().len(),
        context.store_location()
    ));
    output::plain("Goodbye!");
    Err(CommandError::ExitRequested)
}
