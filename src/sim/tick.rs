//! Fixed-step simulation tick
//!
//! Order within a tick:
//! 1. session gate (game over = no-op)
//! 2. input commands
//! 3. spawn/recycle of hazard, collectibles, props
//! 4. hazard and collectible collisions
//! 5. player physics and landing
//! 6. parallax scroll
//! 7. survival score

use serde::{Deserialize, Serialize};

use super::collision::aabb_overlap;
use super::spawn;
use super::state::{GameState, PropKind};

/// Discrete input commands, already decoded from physical input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    JumpPressed,
    JumpReleased,
}

/// Input for a single tick, applied in order before anything moves
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

/// Things that happened during a tick (for audio/visual collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    Collected { value: f64 },
    /// Hazard touched the player (reported in god mode too)
    HazardHit,
    GameOver,
    PropSpawned { kind: PropKind },
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.session.is_game_over {
        return events;
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;

    for &command in &input.commands {
        if let Some(event) = state.player.apply_command(command, &state.config) {
            events.push(event);
        }
    }

    // --- SPAWN / RECYCLE ---
    spawn::advance_hazard(state);
    spawn::advance_collectibles(state);
    spawn::try_spawn_transient(state);
    spawn::advance_props(state);
    spawn::try_spawn_props(state, &mut events);

    // --- COLLISIONS ---
    let player_box = state.player.body;

    if aabb_overlap(&player_box, &state.hazard.body) {
        events.push(GameEvent::HazardHit);
        if state.session.invulnerable {
            spawn::recycle_hazard(state);
        } else {
            state.session.is_game_over = true;
            events.push(GameEvent::GameOver);
            log::info!(
                "Game over at tick {} with score {}",
                state.time_ticks,
                state.session.display_score()
            );
            return events;
        }
    }

    if aabb_overlap(&player_box, &state.fixed_collectible.body) {
        let value = state.fixed_collectible.value;
        state.session.score += value;
        events.push(GameEvent::Collected { value });
        log::debug!("Collected fixed coin (+{})", value);
        spawn::recycle_fixed_collectible(state);
    }

    let mut collected = 0.0;
    state.transients.retain(|coin| {
        if aabb_overlap(&player_box, &coin.body) {
            collected += coin.value;
            events.push(GameEvent::Collected { value: coin.value });
            false
        } else {
            true
        }
    });
    if collected > 0.0 {
        log::debug!("Collected transient coins (+{})", collected);
    }
    state.session.score += collected;

    // --- PLAYER PHYSICS ---
    if let Some(event) = state.player.integrate(&state.config, &state.platform) {
        events.push(event);
    }

    // --- PARALLAX ---
    for layer in &mut state.layers {
        layer.advance();
    }

    // --- SCORE ---
    state.session.score += state.config.survival_score_per_tick;

    state.normalize_order();
    events
}
