//! Host-facing simulation engine
//!
//! Wraps `GameState` with a command queue and a frame-time accumulator. The
//! host submits commands as they are decoded, calls `tick` (or `advance`)
//! once per display frame, and reads `render_state` between ticks.

use crate::config::{ConfigError, SimConfig};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{Command, GameEvent, GameState, RenderState, TickInput, tick};

/// A running session
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    /// Commands waiting for the next tick
    pending: Vec<Command>,
    /// Unsimulated frame time (seconds)
    accumulator: f32,
    /// Events produced by the most recent tick
    events: Vec<GameEvent>,
}

impl Engine {
    /// Validate the config and start a session with the given seed
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::new(config, seed)?;
        log::info!(
            "Session started (seed {}, world {}x{}, god mode {})",
            seed,
            state.config.world_width,
            state.config.world_height,
            state.session.invulnerable
        );
        Ok(Self {
            state,
            pending: Vec::new(),
            accumulator: 0.0,
            events: Vec::new(),
        })
    }

    /// Queue a command for the start of the next tick
    pub fn submit_command(&mut self, command: Command) {
        if self.state.session.is_game_over {
            log::trace!("Dropped {:?} after game over", command);
            return;
        }
        self.pending.push(command);
    }

    /// Advance exactly one simulation step
    pub fn tick(&mut self, dt: f32) {
        let input = TickInput {
            commands: std::mem::take(&mut self.pending),
        };
        let was_over = self.state.session.is_game_over;
        self.events = tick(&mut self.state, &input, dt);

        if !was_over && self.state.session.is_game_over {
            log::info!(
                "Session ended: score {}, survived {} ticks ({:.1}s)",
                self.state.session.display_score(),
                self.state.time_ticks,
                self.state.elapsed
            );
        }
    }

    /// Accumulate variable host frame time and run whole `SIM_DT` ticks
    ///
    /// Returns the number of ticks run (at most `MAX_SUBSTEPS`). Leftover
    /// time beyond the cap is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if self.state.session.is_game_over {
            return 0;
        }

        self.accumulator += frame_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.tick(SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::warn!("Frame took too long, dropping {:.3}s of simulation", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    /// Snapshot for the renderer
    pub fn render_state(&self) -> RenderState {
        RenderState::capture(&self.state)
    }

    /// Events from the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_game_over(&self) -> bool {
        self.state.session.is_game_over
    }

    pub fn score(&self) -> f64 {
        self.state.session.score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted setups (tests, replays)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
