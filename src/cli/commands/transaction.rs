use crate::cli::commands::Verb;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};

struct AddFields {
    kind: String,
    amount: String,
    category: String,
    date: String,
}

pub(crate) fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let fields = match args {
        [kind, amount, category, date] => AddFields {
            kind: kind.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        },
        [] if context.mode() == CliMode::Interactive => prompt_fields(context)?,
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {}",
                Verb::Add.definition().usage
            )))
        }
    };

    // the shell accepts any casing; the ledger itself only takes lower-case kinds
    context.ledger_mut().add(
        &fields.kind.to_lowercase(),
        &fields.amount,
        &fields.category.to_lowercase(),
        &fields.date,
    )?;
    output::success("Transaction added.");
    Ok(())
}

fn prompt_fields(context: &ShellContext) -> Result<AddFields, CommandError> {
    let theme = context.theme();
    Ok(AddFields {
        kind: io::prompt_text(theme, "Enter the type of transaction (income / outcome)")?,
        amount: io::prompt_text(theme, "Enter the transaction amount")?,
        category: io::prompt_text(theme, "Enter the transaction category")?,
        date: io::prompt_text(theme, "Enter the date (dd-mm-yyyy)")?,
    })
}
