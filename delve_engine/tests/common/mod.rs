#![allow(dead_code)]

use delve_data::WorldDef;
use delve_engine::{GameState, ScriptedRoller, Session, build_game_state};

pub const FIXTURE: &str = include_str!("../fixtures/world.toml");

pub fn fixture_state() -> GameState {
    let def: WorldDef = toml::from_str(FIXTURE).expect("fixture parses");
    build_game_state(&def).expect("fixture builds")
}

pub fn session_with(rolls: impl IntoIterator<Item = i32>) -> Session {
    Session::new(fixture_state(), Box::new(ScriptedRoller::new(rolls))).expect("session builds")
}

/// A character named Arliss of `class`, every ability 18, standing in the
/// entry hall with starter gear equipped. `rolls` are queued after the
/// ability rolls.
pub fn begin_as(class: &str, rolls: impl IntoIterator<Item = i32>) -> Session {
    let mut session = session_with(std::iter::repeat_n(6, 24).chain(rolls));
    session.process("set name Arliss");
    session.process(&format!("set class {class}"));
    let outcomes = session.process("begin game");
    assert!(
        matches!(outcomes.last(), Some(delve_engine::Outcome::EnteredRoom(_))),
        "{outcomes:?}"
    );
    session
}

/// Walk from the entry hall through the north door into the guard room.
pub fn into_guardroom(session: &mut Session) {
    session.process("pick up door key");
    session.process("unlock north door");
    let outcomes = session.process("leave north door");
    assert!(matches!(
        outcomes.as_slice(),
        [delve_engine::Outcome::LeftRoom { .. }, delve_engine::Outcome::EnteredRoom(_)]
    ));
    assert_eq!(session.state().rooms.current().id, "guardroom");
}
