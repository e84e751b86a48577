mod common;

use std::fs;

use common::FIXTURE;
use delve_engine as de;
use tempfile::tempdir;

#[test]
fn loads_a_world_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("world.toml");
    fs::write(&path, FIXTURE).expect("write fixture");

    let state = de::load_world(&path).expect("world loads");
    assert_eq!(state.title, "Test Crypt");
    assert_eq!(state.rooms.len(), 4);
    assert_eq!(state.rooms.current().id, "entry");
    assert_eq!(state.phase(), de::Phase::Pregame);
    assert!(state.character.is_none());
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nowhere.toml");
    let err = de::load_world(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nowhere.toml"));
}

#[test]
fn dangling_references_are_reported_together() {
    let broken = FIXTURE
        .replace("leads_to = \"vault\"", "leads_to = \"treasury\"")
        .replace("creature = \"kobold\"", "creature = \"ogre\"");
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("world.toml");
    fs::write(&path, broken).expect("write world");

    let message = format!("{:#}", de::load_world(&path).unwrap_err());
    assert!(message.contains("treasury"), "{message}");
    assert!(message.contains("ogre"), "{message}");
}

#[test]
fn bundled_world_is_valid() {
    let text = include_str!("../data/world.toml");
    let def: delve_data::WorldDef = toml::from_str(text).expect("bundled world parses");
    let state = de::build_game_state(&def).expect("bundled world builds");
    assert!(state.rooms.len() > 4);
}
