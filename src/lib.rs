//! Side Scroller - A deterministic 2D side-scrolling runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collisions, spawning, scoring)
//! - `config`: Constructor-time tuning with validation
//! - `engine`: Host-facing wrapper (command queue, frame accumulator, render snapshots)

pub mod config;
pub mod engine;
pub mod sim;

pub use config::{ConfigError, LayerConfig, SimConfig};
pub use engine::Engine;
pub use sim::{Command, GameEvent, RenderState};

/// Default tuning values (classic canvas game feel, all per tick)
pub mod consts {
    /// Nominal simulation timestep (one display frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per `Engine::advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 640.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Horizontal step per move command
    pub const PLAYER_STEP: f32 = 5.0;
    /// Rise above the jump anchor before the ascent ends
    pub const JUMP_HEIGHT: f32 = 120.0;
    /// Constant ascent rate (pixels/tick)
    pub const JUMP_SPEED: f32 = 6.0;
    /// Growth of the fall accumulator per tick
    pub const GRAVITY: f32 = 0.5;

    /// Hazard defaults (sits on the ground line)
    pub const HAZARD_SIZE: f32 = 30.0;
    pub const HAZARD_SPEED: f32 = 4.0;

    /// Platform defaults
    pub const PLATFORM_X: f32 = 200.0;
    pub const PLATFORM_Y: f32 = 100.0;
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 20.0;
    pub const COLLECTIBLE_SPEED: f32 = 3.0;
    pub const FIXED_COLLECTIBLE_BONUS: f64 = 10.0;
    pub const TRANSIENT_COLLECTIBLE_BONUS: f64 = 5.0;
    pub const TRANSIENT_SPAWN_CHANCE: f64 = 0.02;
    pub const TRANSIENT_CAP: usize = 6;
    /// Animation frames per collectible sprite cycle
    pub const COLLECTIBLE_FRAMES: u32 = 4;
    /// Ticks each animation frame is held
    pub const COLLECTIBLE_FRAME_TICKS: u32 = 8;

    /// Decorative prop defaults
    pub const PROP_SIZE: f32 = 40.0;
    pub const PROP_SPEED: f32 = 4.0;
    pub const PROP_SPAWN_CHANCE: f64 = 0.005;
    pub const PROP_CAP: usize = 5;
    pub const PROP_BATCH_MAX: usize = 2;

    /// Continuous survival score per tick
    pub const SURVIVAL_SCORE_PER_TICK: f64 = 0.1;
}
