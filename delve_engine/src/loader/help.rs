//! module `loader::help`
//!
//! Canonical usages and a one-line blurb for every command, read from TOML.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::CommandKey;

/// Help table compiled into the engine.
pub const EMBEDDED_HELP: &str = include_str!("../../data/help.toml");

/// Help for a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub usages: Vec<String>,
    pub blurb: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("parsing help table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("help entry for unknown command '{0}'")]
    UnknownCommand(String),
    #[error("no help entry for {0}")]
    Missing(CommandKey),
}

/// Help entries keyed by command.
#[derive(Debug, Clone, Default)]
pub struct HelpTable {
    entries: HashMap<CommandKey, HelpCommand>,
}

impl HelpTable {
    /// Parse a help table, requiring an entry for every command.
    /// # Errors
    /// - on TOML errors, entries naming unknown commands, or commands without an entry
    pub fn parse(text: &str) -> Result<HelpTable, HelpError> {
        let file: HelpCommandFile = toml::from_str(text)?;
        let mut entries = HashMap::new();
        for entry in file.commands {
            let key: CommandKey = entry
                .command
                .parse()
                .map_err(|_| HelpError::UnknownCommand(entry.command.clone()))?;
            entries.insert(key, entry);
        }
        if let Some(missing) = CommandKey::ALL.into_iter().find(|key| !entries.contains_key(key)) {
            return Err(HelpError::Missing(missing));
        }
        info!("{} help entries loaded", entries.len());
        Ok(HelpTable { entries })
    }

    /// The help table compiled into the engine.
    /// # Errors
    /// - if the embedded table is malformed or incomplete
    pub fn embedded() -> Result<HelpTable, HelpError> {
        Self::parse(EMBEDDED_HELP)
    }

    pub fn usages(&self, key: CommandKey) -> Vec<String> {
        self.entries.get(&key).map(|e| e.usages.clone()).unwrap_or_default()
    }

    pub fn blurb(&self, key: CommandKey) -> String {
        self.entries.get(&key).map(|e| e.blurb.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_help_covers_every_command() {
        let help = HelpTable::embedded().expect("embedded help parses");
        for key in CommandKey::ALL {
            assert!(!help.usages(key).is_empty(), "{key} has no usages");
            assert!(!help.blurb(key).is_empty(), "{key} has no blurb");
        }
    }

    #[test]
    fn incomplete_table_is_rejected() {
        let text = r#"
            [[commands]]
            command = "QUIT"
            usages = ["QUIT"]
            blurb = "Leave the game."
        "#;
        assert!(matches!(HelpTable::parse(text), Err(HelpError::Missing(_))));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let text = r#"
            [[commands]]
            command = "DANCE"
            usages = ["DANCE"]
            blurb = "Dance."
        "#;
        assert!(matches!(HelpTable::parse(text), Err(HelpError::UnknownCommand(name)) if name == "DANCE"));
    }
}
