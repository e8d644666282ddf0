//! Commands understood by the classic line-mode prompt

use crate::contact::{Contact, ContactId};
use crate::error::StoreError;
use crate::store::ContactStore;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name>, <number>`
    Add { name: String, number: String },
    /// `delete <id>`
    Delete(ContactId),
    /// `filter [text]`; no text clears the filter
    Filter(String),
    List,
    Help,
    Clear,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown command '{0}'. Type \\help for commands.")]
    Unknown(String),
}

/// Words the prompt offers for completion
pub const COMMAND_WORDS: &[&str] = &[
    "add", "delete", "filter", "list", "\\help", "\\clear", "\\log",
];

pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandParseError::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "add" => {
            // Names may contain spaces, so the comma separates the fields
            let (name, number) = rest
                .rsplit_once(',')
                .ok_or(CommandParseError::Usage("add <name>, <number>"))?;
            Ok(Command::Add {
                name: name.trim().to_string(),
                number: number.trim().to_string(),
            })
        }
        "delete" | "del" | "rm" => {
            if rest.is_empty() {
                return Err(CommandParseError::Usage("delete <id>"));
            }
            Ok(Command::Delete(ContactId::from(rest)))
        }
        "filter" | "find" => Ok(Command::Filter(rest.to_string())),
        "list" | "ls" => Ok(Command::List),
        "\\help" | "help" => Ok(Command::Help),
        "\\clear" => Ok(Command::Clear),
        "\\log" => Ok(Command::Log),
        other => Err(CommandParseError::Unknown(other.to_string())),
    }
}

/// What the prompt should show after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Contact),
    /// The removed contact, or `None` when the id was unknown
    Deleted(Option<Contact>),
    ShowList,
    ShowHelp,
    ClearScreen,
    ShowLog,
}

/// Run a parsed command against the store
pub fn execute(store: &mut ContactStore, command: Command) -> Result<CommandOutcome, StoreError> {
    debug!(target: "classic", "Executing {:?}", command);
    match command {
        Command::Add { name, number } => store.add_contact(&name, &number).map(CommandOutcome::Added),
        Command::Delete(id) => Ok(CommandOutcome::Deleted(store.delete_contact(&id))),
        Command::Filter(text) => {
            store.set_filter(text);
            Ok(CommandOutcome::ShowList)
        }
        Command::List => Ok(CommandOutcome::ShowList),
        Command::Help => Ok(CommandOutcome::ShowHelp),
        Command::Clear => Ok(CommandOutcome::ClearScreen),
        Command::Log => Ok(CommandOutcome::ShowLog),
    }
}
