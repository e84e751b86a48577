//! View module.
//!
//! Resolvers never print. The REPL pushes each turn's outcomes into a `View`,
//! which sorts them into sections and renders them once at the end of the turn.

pub mod message;

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::outcome::Outcome;
use crate::style::{GameStyle, indented_block, normal_block};
use crate::view::message::room_details;

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
const ICON_HEALED: &str = "\u{2624}"; // caduceus
const ICON_DEATH: &str = "☠";
const ICON_CELEBRATE: &str = "🎉";

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// A room just entered.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// The creature's response and anything that ends the game.
    WorldResponse,
    /// Help, status and other meta feedback.
    System,
}

/// How a message should feel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Harm,
    Healing,
    Terminal,
    Info,
}

/// Which section an outcome belongs in.
pub fn section_of(outcome: &Outcome) -> Section {
    match outcome {
        Outcome::EnteredRoom(_) => Section::Environment,
        Outcome::RetaliationHit { .. }
        | Outcome::RetaliationMissed { .. }
        | Outcome::FoeSlain { .. }
        | Outcome::CharacterDied { .. }
        | Outcome::GameWon { .. } => Section::WorldResponse,
        Outcome::CommandList { .. }
        | Outcome::CommandHelp { .. }
        | Outcome::StatusReport(_)
        | Outcome::InventoryListing { .. }
        | Outcome::GameQuit => Section::System,
        _ => Section::DirectResult,
    }
}

/// The tone an outcome is rendered in.
pub fn tone_of(outcome: &Outcome) -> Tone {
    match outcome {
        _ if outcome.is_terminal() => Tone::Terminal,
        Outcome::RetaliationHit { .. } => Tone::Harm,
        Outcome::SpellHealed { .. } | Outcome::DrankHealthPotion { .. } | Outcome::DrankManaPotion { .. } => {
            Tone::Healing
        },
        Outcome::AttackHit { .. }
        | Outcome::FoeSlain { .. }
        | Outcome::SpellDamaged { .. }
        | Outcome::RetaliationMissed { .. }
        | Outcome::ItemDropped { .. }
        | Outcome::ItemPickedUp { .. }
        | Outcome::ItemPut { .. }
        | Outcome::ItemTaken { .. }
        | Outcome::ItemEquipped { .. }
        | Outcome::ItemUnequipped { .. }
        | Outcome::HasBeenLocked { .. }
        | Outcome::HasBeenUnlocked { .. }
        | Outcome::HasBeenOpened { .. }
        | Outcome::HasBeenClosed { .. }
        | Outcome::LockPicked { .. }
        | Outcome::LeftRoom { .. }
        | Outcome::NameSet { .. }
        | Outcome::ClassSet { .. }
        | Outcome::AbilityScoresRolled { .. } => Tone::Success,
        Outcome::EnteredRoom(_)
        | Outcome::LookedAtDoor { .. }
        | Outcome::LookedAtDoorway { .. }
        | Outcome::LookedAtCreature { .. }
        | Outcome::LookedAtChest { .. }
        | Outcome::LookedAtCorpse { .. }
        | Outcome::LookedAtItem { .. }
        | Outcome::InventoryListing { .. }
        | Outcome::StatusReport(_)
        | Outcome::CommandList { .. }
        | Outcome::CommandHelp { .. } => Tone::Info,
        _ => Tone::Failure,
    }
}

/// Outcomes collected over one turn.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<Outcome>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.items.push(outcome);
    }

    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        self.items.extend(outcomes);
    }

    /// Compose and display everything pushed this turn, then clear.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for section in [
            Section::Environment,
            Section::DirectResult,
            Section::WorldResponse,
            Section::System,
        ] {
            let entries: Vec<&Outcome> = self.items.iter().filter(|o| section_of(o) == section).collect();
            if entries.is_empty() {
                continue;
            }
            let label = match section {
                Section::Environment => "scene",
                Section::DirectResult => "results",
                Section::WorldResponse => "responses",
                Section::System => "game",
            };
            println!("{:.>width$}\n", label.section_style(), width = self.width);
            for outcome in entries {
                println!("{}\n", render(outcome));
            }
        }
        self.items.clear();
    }
}

/// Styled, wrapped text for one outcome.
pub fn render(outcome: &Outcome) -> String {
    if let Outcome::EnteredRoom(room) = outcome {
        let mut text = format!("{}\n", room.title.room_titlebar_style());
        text.push_str(&fill(&room.description, indented_block()).description_style().to_string());
        let details = room_details(room);
        if !details.is_empty() {
            text.push('\n');
            text.push_str(&fill(&details.join(" "), normal_block()));
        }
        return text;
    }
    let message = outcome.to_string();
    match tone_of(outcome) {
        Tone::Success => fill(&format!("{} {message}", ICON_SUCCESS.bright_green()), normal_block()),
        Tone::Failure => fill(&format!("{} {}", ICON_FAILURE.bright_red(), message.denied_style()), normal_block()),
        Tone::Harm => fill(&format!("{} {}", ICON_HARMED.red(), message.harm_style()), normal_block()),
        Tone::Healing => fill(&format!("{} {message}", ICON_HEALED.bright_green()), normal_block()),
        Tone::Terminal => {
            let icon = if outcome.is_game_won() { ICON_CELEBRATE } else { ICON_DEATH };
            fill(&format!("{icon} {}", message.terminal_style()), normal_block())
        },
        Tone::Info => message
            .lines()
            .map(|line| fill(line, normal_block()))
            .collect::<Vec<_>>()
            .join("\n")
            .system_style()
            .to_string(),
    }
}
