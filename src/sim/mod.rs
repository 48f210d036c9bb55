//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, per-tick tuning constants
//! - Seeded RNG only (a single shared stream)
//! - Stable iteration order (by entity ID)
//! - No rendering, asset or platform dependencies

pub mod collision;
pub mod parallax;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, lands_on, stands_on};
pub use parallax::{BackgroundLayer, LayerKind};
pub use player::{JumpState, Player};
pub use rect::Rect;
pub use snapshot::{EntityView, LayerView, RenderState, VisualTag};
pub use state::{
    Collectible, CollectibleKind, GameState, Hazard, Prop, PropKind, SessionState,
};
pub use tick::{Command, GameEvent, TickInput, tick};
