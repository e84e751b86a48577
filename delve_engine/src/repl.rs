//! REPL module.
//!
//! Reads player input, hands each line to the [`Session`] and renders the
//! resulting outcomes through a [`View`] until the game ends.

mod input;

use colored::Colorize;
use log::info;

use crate::session::Session;
use crate::style::GameStyle;
use crate::view::View;
use crate::world::Phase;

use input::{InputEvent, Terminal};

fn prompt_for(session: &Session) -> String {
    let state = session.state();
    let label = match (session.phase(), &state.character) {
        (Phase::InGame, Some(character)) => {
            let mut label = format!("{} HP {}", character.name, character.hit_points);
            if let Some(mana) = character.mana_points {
                label.push_str(&format!(" MP {mana}"));
            }
            label
        },
        _ => "new adventurer".to_string(),
    };
    format!("\n[{label}]>> ").prompt_style().to_string()
}

/// Run the read–eval–print loop until the session reaches the `Ended` phase.
///
/// End of input is treated as QUIT.
pub fn run_repl(session: &mut Session) {
    let mut view = View::new();
    let mut terminal = Terminal::open();
    let mut turn = 0_u32;

    while session.phase() != Phase::Ended {
        let prompt = prompt_for(session);
        terminal.refresh(session.state());
        let line = match terminal.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                println!("{}", "Command canceled.".system_style());
                continue;
            },
            Err(err) => {
                println!("{}", format!("Failed to read input ({err}). Try again.").red());
                continue;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        turn += 1;
        info!("================> TURN {turn}: '{}' <================", line.trim());
        view.extend(session.process(&line));
        view.flush();
    }
    info!("session ended after {turn} turns");
}
