use crate::cli::commands::Verb;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{self, TotalsScope};
use crate::cli::{io, output};
use crate::ledger::AggregateView;

pub(crate) fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage(Verb::Summary));
    }
    match context.ledger().summary() {
        Some(view) => {
            output::section("Overall Summary");
            print_view(&view, TotalsScope::Overall);
        }
        None => output::plain("No transactions found."),
    }
    Ok(())
}

pub(crate) fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (month, year) = match args {
        [month, year] => (month.to_string(), year.to_string()),
        [] if context.mode() == CliMode::Interactive => (
            io::prompt_text(context.theme(), "Enter month")?,
            io::prompt_text(context.theme(), "Enter year")?,
        ),
        _ => return Err(usage(Verb::Month)),
    };
    let (month, year) = parse_period(&month, &year)?;

    match context.ledger().month_summary(month, year)? {
        Some(view) => {
            output::section(formatters::section_title_month(month, year));
            print_view(&view, TotalsScope::Month);
        }
        None => output::plain("No transactions found for this month."),
    }
    Ok(())
}

pub(crate) fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let category = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(usage(Verb::Category));
        }
        io::prompt_text(context.theme(), "Enter category")?
    } else {
        args.join(" ")
    };
    let category = category.trim().to_lowercase();

    match context.ledger().category_summary(&category) {
        Some(view) => {
            output::section(formatters::section_title_category(&category));
            print_view(&view, TotalsScope::Category(&category));
        }
        None => output::plain("No transactions found for this category."),
    }
    Ok(())
}

fn parse_period(month: &str, year: &str) -> Result<(u32, i32), CommandError> {
    let month = month.trim().parse::<u32>();
    let year = year.trim().parse::<i32>();
    match (month, year) {
        (Ok(month), Ok(year)) => Ok((month, year)),
        _ => Err(CommandError::InvalidArguments(
            "Invalid date values. Enter a numeric month and year.".into(),
        )),
    }
}

fn print_view(view: &AggregateView<'_>, scope: TotalsScope<'_>) {
    for transaction in &view.transactions {
        output::plain(formatters::transaction_line(transaction));
    }
    output::plain("");
    for (label, value, signed) in formatters::totals(view, scope) {
        let amount = formatters::amount_column(value);
        if signed {
            output::plain(format!("{label} {}", output::signed(value, amount)));
        } else {
            output::plain(format!("{label} {amount}"));
        }
    }
}

fn usage(verb: Verb) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", verb.definition().usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_must_be_numeric() {
        assert_eq!(parse_period(" 1 ", "2024").unwrap(), (1, 2024));
        assert!(matches!(
            parse_period("jan", "2024"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(parse_period("-1", "2024").is_err());
    }
}
