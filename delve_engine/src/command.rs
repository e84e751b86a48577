//! Command module
//!
//! The command vocabulary and the tokenizer that folds raw input into a
//! command key plus argument tokens.
use std::fmt;
use std::str::FromStr;

use delve_data::UnknownName;

/// Every command verb the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKey {
    Attack,
    CastSpell,
    Drink,
    Drop,
    Equip,
    Unequip,
    Put,
    Take,
    PickUp,
    Lock,
    Unlock,
    Open,
    Close,
    PickLock,
    LookAt,
    Leave,
    Inventory,
    Status,
    Help,
    SetName,
    SetClass,
    Reroll,
    BeginGame,
    Quit,
}

impl CommandKey {
    pub const ALL: [CommandKey; 24] = [
        CommandKey::Attack,
        CommandKey::CastSpell,
        CommandKey::Drink,
        CommandKey::Drop,
        CommandKey::Equip,
        CommandKey::Unequip,
        CommandKey::Put,
        CommandKey::Take,
        CommandKey::PickUp,
        CommandKey::Lock,
        CommandKey::Unlock,
        CommandKey::Open,
        CommandKey::Close,
        CommandKey::PickLock,
        CommandKey::LookAt,
        CommandKey::Leave,
        CommandKey::Inventory,
        CommandKey::Status,
        CommandKey::Help,
        CommandKey::SetName,
        CommandKey::SetClass,
        CommandKey::Reroll,
        CommandKey::BeginGame,
        CommandKey::Quit,
    ];

    /// Commands legal before BEGIN GAME.
    pub const PREGAME: [CommandKey; 6] = [
        CommandKey::SetName,
        CommandKey::SetClass,
        CommandKey::Reroll,
        CommandKey::BeginGame,
        CommandKey::Help,
        CommandKey::Quit,
    ];

    /// Commands legal once the game has begun.
    pub const INGAME: [CommandKey; 20] = [
        CommandKey::Attack,
        CommandKey::CastSpell,
        CommandKey::Close,
        CommandKey::Drink,
        CommandKey::Drop,
        CommandKey::Equip,
        CommandKey::Help,
        CommandKey::Inventory,
        CommandKey::Leave,
        CommandKey::Lock,
        CommandKey::LookAt,
        CommandKey::Open,
        CommandKey::PickLock,
        CommandKey::PickUp,
        CommandKey::Put,
        CommandKey::Quit,
        CommandKey::Status,
        CommandKey::Take,
        CommandKey::Unequip,
        CommandKey::Unlock,
    ];

    /// Canonical spelling, as shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            CommandKey::Attack => "ATTACK",
            CommandKey::CastSpell => "CAST SPELL",
            CommandKey::Drink => "DRINK",
            CommandKey::Drop => "DROP",
            CommandKey::Equip => "EQUIP",
            CommandKey::Unequip => "UNEQUIP",
            CommandKey::Put => "PUT",
            CommandKey::Take => "TAKE",
            CommandKey::PickUp => "PICK UP",
            CommandKey::Lock => "LOCK",
            CommandKey::Unlock => "UNLOCK",
            CommandKey::Open => "OPEN",
            CommandKey::Close => "CLOSE",
            CommandKey::PickLock => "PICK LOCK",
            CommandKey::LookAt => "LOOK AT",
            CommandKey::Leave => "LEAVE",
            CommandKey::Inventory => "INVENTORY",
            CommandKey::Status => "STATUS",
            CommandKey::Help => "HELP",
            CommandKey::SetName => "SET NAME",
            CommandKey::SetClass => "SET CLASS",
            CommandKey::Reroll => "REROLL",
            CommandKey::BeginGame => "BEGIN GAME",
            CommandKey::Quit => "QUIT",
        }
    }

    /// Single-word verbs.
    fn from_verb(word: &str) -> Option<CommandKey> {
        Some(match word {
            "attack" => CommandKey::Attack,
            "drink" => CommandKey::Drink,
            "drop" => CommandKey::Drop,
            "equip" => CommandKey::Equip,
            "unequip" => CommandKey::Unequip,
            "put" => CommandKey::Put,
            "take" => CommandKey::Take,
            "lock" => CommandKey::Lock,
            "unlock" => CommandKey::Unlock,
            "open" => CommandKey::Open,
            "close" => CommandKey::Close,
            "leave" => CommandKey::Leave,
            "inventory" => CommandKey::Inventory,
            "status" => CommandKey::Status,
            "help" => CommandKey::Help,
            "reroll" => CommandKey::Reroll,
            "quit" => CommandKey::Quit,
            _ => return None,
        })
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKey {
    type Err = UnknownName;

    /// Accepts the canonical name in any case and with any spacing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        CommandKey::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Raw input after verb folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Command { key: CommandKey, args: Vec<String> },
    Unknown(String),
}

/// Split raw input into a command key and argument tokens.
///
/// Arguments are lowercased, except for SET NAME and SET CLASS whose
/// arguments are proper nouns and keep their original case.
pub fn parse_input(raw: &str) -> ParsedInput {
    let original: Vec<&str> = raw.split_whitespace().collect();
    let lowered: Vec<String> = original.iter().map(|t| t.to_lowercase()).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();

    let (key, consumed) = match words.as_slice() {
        [] => return ParsedInput::Unknown(String::new()),
        ["cast", "spell", ..] => (CommandKey::CastSpell, 2),
        ["look", "at", ..] => (CommandKey::LookAt, 2),
        ["pick", "up", ..] => (CommandKey::PickUp, 2),
        ["pick", "lock", ..] => (CommandKey::PickLock, 2),
        ["set", "name", "to", _, ..] => (CommandKey::SetName, 3),
        ["set", "name", ..] => (CommandKey::SetName, 2),
        ["set", "class", "to", _, ..] => (CommandKey::SetClass, 3),
        ["set", "class", ..] => (CommandKey::SetClass, 2),
        ["begin", "the", "game", ..] => (CommandKey::BeginGame, 3),
        ["begin", "game", ..] => (CommandKey::BeginGame, 2),
        ["begin", ..] => (CommandKey::BeginGame, 1),
        ["show", "inventory", ..] => (CommandKey::Inventory, 2),
        ["leave", "using" | "via", ..] => (CommandKey::Leave, 2),
        ["quit", "the", "game", ..] => (CommandKey::Quit, 3),
        ["quit", "game", ..] => (CommandKey::Quit, 2),
        [verb, ..] => match CommandKey::from_verb(verb) {
            Some(key) => (key, 1),
            None => return ParsedInput::Unknown(original[0].to_string()),
        },
    };

    let args = match key {
        CommandKey::SetName | CommandKey::SetClass => original[consumed..].iter().map(|t| (*t).to_string()).collect(),
        _ => lowered[consumed..].to_vec(),
    };
    ParsedInput::Command { key, args }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(raw: &str) -> (CommandKey, Vec<String>) {
        match parse_input(raw) {
            ParsedInput::Command { key, args } => (key, args),
            ParsedInput::Unknown(word) => panic!("'{raw}' parsed as unknown '{word}'"),
        }
    }

    #[test]
    fn multiword_verbs_fold() {
        assert_eq!(command("CAST SPELL").0, CommandKey::CastSpell);
        assert_eq!(command("look at kobold"), (CommandKey::LookAt, vec!["kobold".to_string()]));
        assert_eq!(command("Pick Up gold coin").0, CommandKey::PickUp);
        assert_eq!(command("pick lock north door").0, CommandKey::PickLock);
        assert_eq!(command("show inventory"), (CommandKey::Inventory, vec![]));
    }

    #[test]
    fn begin_and_quit_fillers() {
        for raw in ["begin", "BEGIN GAME", "begin the game"] {
            assert_eq!(command(raw), (CommandKey::BeginGame, vec![]), "{raw}");
        }
        for raw in ["quit", "quit game", "QUIT THE GAME"] {
            assert_eq!(command(raw), (CommandKey::Quit, vec![]), "{raw}");
        }
    }

    #[test]
    fn leave_filler_is_dropped() {
        let expected = (CommandKey::Leave, vec!["north".to_string(), "door".to_string()]);
        assert_eq!(command("LEAVE using north door"), expected);
        assert_eq!(command("leave via north door"), expected);
        assert_eq!(command("leave north door"), expected);
    }

    #[test]
    fn proper_noun_arguments_keep_case() {
        assert_eq!(command("SET NAME TO Arliss"), (CommandKey::SetName, vec!["Arliss".to_string()]));
        assert_eq!(command("set class Mage"), (CommandKey::SetClass, vec!["Mage".to_string()]));
        assert_eq!(command("set class to"), (CommandKey::SetClass, vec!["to".to_string()]));
        assert_eq!(command("DROP Gold Coin").1, vec!["gold".to_string(), "coin".to_string()]);
    }

    #[test]
    fn unknown_verbs() {
        assert_eq!(parse_input("dance wildly"), ParsedInput::Unknown("dance".into()));
        assert_eq!(parse_input("   "), ParsedInput::Unknown(String::new()));
        assert_eq!(parse_input("pick nose"), ParsedInput::Unknown("pick".into()));
    }

    #[test]
    fn phase_sets_cover_vocabulary() {
        for key in CommandKey::ALL {
            assert!(CommandKey::PREGAME.contains(&key) || CommandKey::INGAME.contains(&key), "{key}");
        }
    }

    #[test]
    fn canonical_names_round_trip() {
        for key in CommandKey::ALL {
            assert_eq!(key.name().to_lowercase().parse::<CommandKey>(), Ok(key));
        }
    }
}
