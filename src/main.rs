//! Side Scroller headless runner
//!
//! Drives the simulation with a simple autopilot (jump when the hazard gets
//! close) and prints the final render snapshot as JSON.
//!
//! Usage: side-scroller [--config <file.json>] [--seed <u64>] [--ticks <n>] [--god]

use std::error::Error;

use side_scroller::consts::SIM_DT;
use side_scroller::sim::JumpState;
use side_scroller::{Command, Engine, SimConfig};

/// Hazard distance (pixels ahead of the player) that triggers a jump
const JUMP_TRIGGER_DISTANCE: f32 = 40.0;

struct Args {
    config: Option<String>,
    seed: u64,
    ticks: u64,
    god: bool,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        config: None,
        seed: 0x5eed,
        ticks: 60 * 60,
        god: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().ok_or("--config needs a path")?),
            "--seed" => args.seed = iter.next().ok_or("--seed needs a value")?.parse()?,
            "--ticks" => args.ticks = iter.next().ok_or("--ticks needs a value")?.parse()?,
            "--god" => args.god = true,
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Side Scroller (headless) starting...");

    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from {}", path);
            SimConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => SimConfig::default(),
    };
    if args.god {
        config.invulnerable = true;
    }

    let mut engine = Engine::new(config, args.seed)?;

    for _ in 0..args.ticks {
        if engine.is_game_over() {
            break;
        }
        autopilot(&mut engine);
        engine.tick(SIM_DT);
    }

    let snapshot = engine.render_state();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    println!(
        "Score: {} ({})",
        snapshot.display_score,
        if snapshot.is_game_over { "game over" } else { "still running" }
    );
    Ok(())
}

/// Jump over the hazard when it is about to reach a grounded player
fn autopilot(engine: &mut Engine) {
    let state = engine.state();
    let player = &state.player;
    let gap = state.hazard.body.left() - player.body.right();

    let command = match player.jump_state {
        JumpState::Grounded if (0.0..JUMP_TRIGGER_DISTANCE).contains(&gap) => Command::JumpPressed,
        JumpState::Jumping => Command::JumpReleased,
        _ => return,
    };
    engine.submit_command(command);
}
