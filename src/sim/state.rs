//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `GameState`, including the
//! single RNG stream that drives every spawn decision.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::parallax::BackgroundLayer;
use super::player::Player;
use super::rect::Rect;
use crate::config::{ConfigError, SimConfig};

/// The lethal obstacle (exactly one, always recycled)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub body: Rect,
    /// Leftward movement per tick
    pub speed: f32,
}

/// Which collectible population an instance belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// The always-present coin that recycles in place
    Fixed,
    /// Randomly spawned coins, removed when collected
    Transient,
}

/// A score pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    pub body: Rect,
    pub speed: f32,
    /// Score awarded on collection
    pub value: f64,
    /// Current animation frame
    pub frame: u32,
    /// Ticks spent on the current frame
    pub frame_ticks: u32,
}

impl Collectible {
    /// Step the animation by one tick
    pub fn animate(&mut self, frames: u32, ticks_per_frame: u32) {
        self.frame_ticks += 1;
        if self.frame_ticks >= ticks_per_frame {
            self.frame_ticks = 0;
            self.frame = (self.frame + 1) % frames;
        }
    }
}

/// Decorative prop variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    Bush,
    Rock,
    Tree,
    /// At most one on screen at a time
    Signpost,
}

impl PropKind {
    /// Variants chosen uniformly at spawn
    pub const PALETTE: [PropKind; 4] = [
        PropKind::Bush,
        PropKind::Rock,
        PropKind::Tree,
        PropKind::Signpost,
    ];
}

/// Scenery scrolling with the ground (no gameplay effect)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub id: u32,
    pub kind: PropKind,
    pub body: Rect,
    pub speed: f32,
}

/// Session flags and score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub is_game_over: bool,
    /// God mode
    pub invulnerable: bool,
    /// Fractional internally, shown as an integer
    pub score: f64,
}

impl SessionState {
    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Validated tuning
    pub config: SimConfig,
    /// Shared RNG stream for all spawn decisions
    pub rng: Pcg32,
    pub session: SessionState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sum of `dt` over advanced ticks (seconds)
    pub elapsed: f64,
    pub player: Player,
    pub hazard: Hazard,
    pub fixed_collectible: Collectible,
    /// Live transient collectibles (sorted by id)
    pub transients: Vec<Collectible>,
    /// Live decorative props (sorted by id)
    pub props: Vec<Prop>,
    /// Static landing surface
    pub platform: Rect,
    pub layers: Vec<BackgroundLayer>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state from a config and seed
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let fixed_y = random_y(&mut rng, config.world_height, config.collectible_height);

        let hazard = Hazard {
            body: Rect::new(
                config.world_width,
                config.world_height - config.hazard_height,
                config.hazard_width,
                config.hazard_height,
            ),
            speed: config.hazard_speed,
        };
        let fixed_collectible = Collectible {
            id: 1,
            kind: CollectibleKind::Fixed,
            body: Rect::new(
                config.world_width,
                fixed_y,
                config.collectible_width,
                config.collectible_height,
            ),
            speed: config.fixed_collectible_speed,
            value: config.fixed_collectible_bonus,
            frame: 0,
            frame_ticks: 0,
        };
        let platform = Rect::new(
            config.platform_x,
            config.platform_y,
            config.platform_width,
            config.platform_height,
        );
        let layers = config
            .layers
            .iter()
            .map(|layer| BackgroundLayer::new(layer.kind, layer.speed, config.world_width))
            .collect();

        Ok(Self {
            seed,
            player: Player::new(&config),
            session: SessionState {
                is_game_over: false,
                invulnerable: config.invulnerable,
                score: 0.0,
            },
            config,
            rng,
            time_ticks: 0,
            elapsed: 0.0,
            hazard,
            fixed_collectible,
            transients: Vec::new(),
            props: Vec::new(),
            platform,
            layers,
            next_id: 2,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform `y` for a collectible, keeping it fully inside the world
    pub fn random_collectible_y(&mut self) -> f32 {
        random_y(&mut self.rng, self.config.world_height, self.config.collectible_height)
    }

    /// Ensure entity lists are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.transients.sort_by_key(|c| c.id);
        self.props.sort_by_key(|p| p.id);
    }
}

fn random_y(rng: &mut Pcg32, world_height: f32, height: f32) -> f32 {
    let max_y = (world_height - height).max(0.0);
    rng.random_range(0.0..=max_y)
}
