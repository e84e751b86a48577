#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Delve **
//! Find the way out of the dungeon.

use std::env;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use delve_engine::data_paths::data_path;
use delve_engine::dice::Roller;
use delve_engine::style::GameStyle;
use delve_engine::{DELVE_VERSION, RandomRoller, Session, load_world, run_repl};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Delve world...");
    let world_path = data_path("world.toml");
    let state = load_world(&world_path).context("while loading the dungeon")?;
    info!("world loaded from {}", world_path.display());

    let roller: Box<dyn Roller> = match env::var("DELVE_SEED").ok().and_then(|seed| seed.parse::<u64>().ok()) {
        Some(seed) => {
            info!("dice seeded with {seed}");
            Box::new(RandomRoller::seeded(seed))
        },
        None => Box::new(RandomRoller::from_os_rng()),
    };
    let mut session = Session::new(state, roller).context("while starting the session")?;

    println!(
        "{:^84}",
        format!("{} v{DELVE_VERSION}", session.state().title.to_uppercase())
            .bright_yellow()
            .underline()
    );
    println!("\n{}\n", session.state().intro.description_style());
    println!("{}", "Type HELP to see what you can do.".system_style());

    run_repl(&mut session);
    Ok(())
}
