use std::{io, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cli::{
        commands::{self, Verb},
        io as cli_io, output,
    },
    config::ConfigError,
    errors::LedgerError,
    ledger::Ledger,
    storage::StorageBackend,
    time::Clock,
};

const PROMPT: &str = "finance> ";
const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that ends the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Session state shared by every command: the loaded ledger and where it is saved.
pub struct ShellContext {
    mode: CliMode,
    ledger: Ledger,
    store: Box<dyn StorageBackend>,
    theme: ColorfulTheme,
    pub(crate) running: bool,
    saved: bool,
}

impl ShellContext {
    /// Loads the ledger from `store`; a malformed store aborts startup.
    pub fn new(
        mode: CliMode,
        store: Box<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CliError> {
        let ledger = store.load(clock)?;
        Ok(Self {
            mode,
            ledger,
            store,
            theme: ColorfulTheme::default(),
            running: true,
            saved: false,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub fn prompt(&self) -> String {
        PROMPT.to_string()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(verb) = Verb::parse(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        debug!(?verb, args = args.len(), "dispatching command");
        match commands::execute(verb, self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Persists the ledger unless it was already saved; later calls are no-ops.
    pub fn finish(&mut self) -> Result<(), LedgerError> {
        if self.saved {
            return Ok(());
        }
        self.store.save(&self.ledger)?;
        self.saved = true;
        info!(location = %self.store.location(), "session saved");
        Ok(())
    }

    pub(crate) fn store_location(&self) -> String {
        self.store.location()
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = Verb::names()
            .into_iter()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Save and exit?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::info("Use `help` for usage details.");
            }
            other => output::error(other),
        }
    }
}
