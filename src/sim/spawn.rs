//! Entity spawn and recycle controller
//!
//! One rule per category:
//! - Hazard: recycled to the right edge (same height) when past the left edge
//! - Fixed collectible: recycled to the right edge with a fresh random height
//! - Transient collectibles: spawned by chance under a cap, recycled like the
//!   fixed one when offscreen, removed only when collected
//! - Props: spawned in capped batches, removed once past the left edge

use rand::Rng;

use super::rect::Rect;
use super::state::{Collectible, CollectibleKind, GameState, Prop, PropKind};
use super::tick::GameEvent;

/// Gap between props spawned in the same batch
const PROP_BATCH_GAP: f32 = 16.0;

/// Move the hazard and recycle it once it has scrolled off
pub fn advance_hazard(state: &mut GameState) {
    let hazard = &mut state.hazard;
    hazard.body.pos.x -= hazard.speed;
    if hazard.body.is_past_left() {
        recycle_hazard(state);
    }
}

/// Put the hazard back at the right edge of the world
pub fn recycle_hazard(state: &mut GameState) {
    state.hazard.body.pos.x = state.config.world_width;
    log::trace!("Hazard recycled at tick {}", state.time_ticks);
}

/// Move and animate all collectibles, recycling the ones that scrolled off
pub fn advance_collectibles(state: &mut GameState) {
    let frames = state.config.collectible_frames;
    let frame_ticks = state.config.collectible_frame_ticks;

    state.fixed_collectible.body.pos.x -= state.fixed_collectible.speed;
    state.fixed_collectible.animate(frames, frame_ticks);
    if state.fixed_collectible.body.is_past_left() {
        recycle_fixed_collectible(state);
    }

    for i in 0..state.transients.len() {
        let coin = &mut state.transients[i];
        coin.body.pos.x -= coin.speed;
        coin.animate(frames, frame_ticks);
        if coin.body.is_past_left() {
            let y = state.random_collectible_y();
            let coin = &mut state.transients[i];
            coin.body.pos.x = state.config.world_width;
            coin.body.pos.y = y;
        }
    }
}

/// Send the fixed collectible back to the right edge at a new height
pub fn recycle_fixed_collectible(state: &mut GameState) {
    let y = state.random_collectible_y();
    state.fixed_collectible.body.pos.x = state.config.world_width;
    state.fixed_collectible.body.pos.y = y;
}

/// Roll for one new transient collectible (skipped at the cap)
pub fn try_spawn_transient(state: &mut GameState) -> bool {
    if state.transients.len() >= state.config.transient_cap {
        return false;
    }
    if !state.rng.random_bool(state.config.transient_spawn_chance) {
        return false;
    }

    let id = state.next_entity_id();
    let y = state.random_collectible_y();
    let config = &state.config;
    state.transients.push(Collectible {
        id,
        kind: CollectibleKind::Transient,
        body: Rect::new(config.world_width, y, config.collectible_width, config.collectible_height),
        speed: config.transient_collectible_speed,
        value: config.transient_collectible_bonus,
        frame: 0,
        frame_ticks: 0,
    });
    log::debug!("Spawned transient collectible {} at y={:.1}", id, y);
    true
}

/// Move props and drop the ones fully past the left edge
pub fn advance_props(state: &mut GameState) {
    for prop in &mut state.props {
        prop.body.pos.x -= prop.speed;
    }
    let before = state.props.len();
    state.props.retain(|p| !p.body.is_past_left());
    let removed = before - state.props.len();
    if removed > 0 {
        log::trace!("Removed {} offscreen props", removed);
    }
}

/// Roll for a batch of props; returns how many were spawned
///
/// Gated on the live count being under the cap and a per-tick chance. Each
/// prop in the batch picks a palette variant uniformly; a signpost is skipped
/// while another one is still on screen.
pub fn try_spawn_props(state: &mut GameState, events: &mut Vec<GameEvent>) -> usize {
    if state.props.len() >= state.config.prop_cap {
        return 0;
    }
    if !state.rng.random_bool(state.config.prop_spawn_chance) {
        return 0;
    }

    let batch = state.rng.random_range(1..=state.config.prop_batch_max);
    let mut spawned = 0;
    for slot in 0..batch {
        if state.props.len() >= state.config.prop_cap {
            break;
        }
        let kind = PropKind::PALETTE[state.rng.random_range(0..PropKind::PALETTE.len())];
        if kind == PropKind::Signpost && state.props.iter().any(|p| p.kind == PropKind::Signpost) {
            continue;
        }

        let id = state.next_entity_id();
        let config = &state.config;
        let x = config.world_width + slot as f32 * (config.prop_width + PROP_BATCH_GAP);
        state.props.push(Prop {
            id,
            kind,
            body: Rect::new(
                x,
                config.world_height - config.prop_height,
                config.prop_width,
                config.prop_height,
            ),
            speed: config.prop_speed,
        });
        events.push(GameEvent::PropSpawned { kind });
        spawned += 1;
    }
    if spawned > 0 {
        log::debug!("Spawned {} props ({} live)", spawned, state.props.len());
    }
    spawned
}
