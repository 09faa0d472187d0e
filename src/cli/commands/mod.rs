pub mod summary;
pub mod system;
pub mod transaction;

use crate::cli::core::{CommandResult, ShellContext};

/// Every action the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    Summary,
    Month,
    Category,
    Help,
    Exit,
}

pub struct VerbDefinition {
    pub verb: Verb,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
}

/// Listed in menu order; the numeric aliases mirror the classic numbered menu.
pub static DEFINITIONS: [VerbDefinition; 6] = [
    VerbDefinition {
        verb: Verb::Add,
        name: "add",
        aliases: &["1"],
        description: "Add a transaction",
        usage: "add [income|outcome AMOUNT CATEGORY DD-MM-YYYY]",
    },
    VerbDefinition {
        verb: Verb::Summary,
        name: "summary",
        aliases: &["2", "view"],
        description: "View all transactions with totals",
        usage: "summary",
    },
    VerbDefinition {
        verb: Verb::Month,
        name: "month",
        aliases: &["3", "monthly"],
        description: "View the summary of one month",
        usage: "month [MONTH YEAR]",
    },
    VerbDefinition {
        verb: Verb::Category,
        name: "category",
        aliases: &["4", "filter"],
        description: "Filter transactions by category",
        usage: "category [NAME]",
    },
    VerbDefinition {
        verb: Verb::Exit,
        name: "exit",
        aliases: &["5", "quit"],
        description: "Save and exit",
        usage: "exit",
    },
    VerbDefinition {
        verb: Verb::Help,
        name: "help",
        aliases: &["h"],
        description: "Show available commands",
        usage: "help",
    },
];

impl Verb {
    /// Matches a verb name or alias, ignoring case.
    pub fn parse(input: &str) -> Option<Verb> {
        let needle = input.trim().to_ascii_lowercase();
        DEFINITIONS
            .iter()
            .find(|definition| {
                definition.name == needle || definition.aliases.contains(&needle.as_str())
            })
            .map(|definition| definition.verb)
    }

    pub fn definition(self) -> &'static VerbDefinition {
        let index = match self {
            Verb::Add => 0,
            Verb::Summary => 1,
            Verb::Month => 2,
            Verb::Category => 3,
            Verb::Exit => 4,
            Verb::Help => 5,
        };
        &DEFINITIONS[index]
    }

    pub fn names() -> Vec<&'static str> {
        DEFINITIONS.iter().map(|definition| definition.name).collect()
    }
}

pub(crate) fn execute(verb: Verb, context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match verb {
        Verb::Add => transaction::cmd_add(context, args),
        Verb::Summary => summary::cmd_summary(context, args),
        Verb::Month => summary::cmd_month(context, args),
        Verb::Category => summary::cmd_category(context, args),
        Verb::Help => system::cmd_help(context, args),
        Verb::Exit => system::cmd_exit(context, args),
    }
}
