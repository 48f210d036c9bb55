//! Simulation tuning and validation
//!
//! Every value is fixed at construction. Out-of-range values are rejected,
//! never clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::LayerKind;

/// Configuration errors surfaced by `SimConfig::validate`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be a probability in [0, 1] (got {value})")]
    Probability { field: &'static str, value: f64 },
    #[error("{field} does not fit inside the world")]
    EntityTooLarge { field: &'static str },
    #[error("player start position is outside the world")]
    PlayerOutOfBounds,
    #[error("background layer {0:?} is configured twice")]
    DuplicateLayer(LayerKind),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One parallax layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub kind: LayerKind,
    /// Leftward scroll per tick (0 = static)
    pub speed: f32,
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal step per move command
    pub player_step: f32,
    pub jump_height: f32,
    pub jump_speed: f32,
    /// Growth of the fall accumulator per tick
    pub gravity: f32,

    // === Hazard ===
    pub hazard_width: f32,
    pub hazard_height: f32,
    pub hazard_speed: f32,

    // === Platform ===
    pub platform_x: f32,
    pub platform_y: f32,
    pub platform_width: f32,
    pub platform_height: f32,

    // === Collectibles ===
    pub collectible_width: f32,
    pub collectible_height: f32,
    pub fixed_collectible_speed: f32,
    pub transient_collectible_speed: f32,
    pub fixed_collectible_bonus: f64,
    pub transient_collectible_bonus: f64,
    /// Per-tick chance of spawning one transient collectible
    pub transient_spawn_chance: f64,
    pub transient_cap: usize,
    pub collectible_frames: u32,
    /// Ticks each animation frame is held
    pub collectible_frame_ticks: u32,

    // === Decorative props ===
    pub prop_width: f32,
    pub prop_height: f32,
    pub prop_speed: f32,
    /// Per-tick chance of spawning a batch
    pub prop_spawn_chance: f64,
    pub prop_cap: usize,
    pub prop_batch_max: usize,

    // === Scoring ===
    pub survival_score_per_tick: f64,

    // === Session ===
    /// God mode: hazard collisions never end the session
    pub invulnerable: bool,

    // === Parallax ===
    pub layers: Vec<LayerConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            player_step: PLAYER_STEP,
            jump_height: JUMP_HEIGHT,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,

            hazard_width: HAZARD_SIZE,
            hazard_height: HAZARD_SIZE,
            hazard_speed: HAZARD_SPEED,

            platform_x: PLATFORM_X,
            platform_y: PLATFORM_Y,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,

            collectible_width: COLLECTIBLE_SIZE,
            collectible_height: COLLECTIBLE_SIZE,
            fixed_collectible_speed: COLLECTIBLE_SPEED,
            transient_collectible_speed: COLLECTIBLE_SPEED,
            fixed_collectible_bonus: FIXED_COLLECTIBLE_BONUS,
            transient_collectible_bonus: TRANSIENT_COLLECTIBLE_BONUS,
            transient_spawn_chance: TRANSIENT_SPAWN_CHANCE,
            transient_cap: TRANSIENT_CAP,
            collectible_frames: COLLECTIBLE_FRAMES,
            collectible_frame_ticks: COLLECTIBLE_FRAME_TICKS,

            prop_width: PROP_SIZE,
            prop_height: PROP_SIZE,
            prop_speed: PROP_SPEED,
            prop_spawn_chance: PROP_SPAWN_CHANCE,
            prop_cap: PROP_CAP,
            prop_batch_max: PROP_BATCH_MAX,

            survival_score_per_tick: SURVIVAL_SCORE_PER_TICK,

            invulnerable: false,

            layers: vec![
                LayerConfig { kind: LayerKind::Sky, speed: 0.0 },
                LayerConfig { kind: LayerKind::Mountains, speed: 0.5 },
                LayerConfig { kind: LayerKind::Hills, speed: 1.5 },
                LayerConfig { kind: LayerKind::Ground, speed: HAZARD_SPEED },
            ],
        }
    }
}

impl SimConfig {
    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the player's top edge when standing on the ground line
    pub fn ground_y(&self) -> f32 {
        self.world_height - self.player_height
    }

    /// Reject any out-of-range value
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("jump_height", self.jump_height),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("hazard_width", self.hazard_width),
            ("hazard_height", self.hazard_height),
            ("platform_width", self.platform_width),
            ("platform_height", self.platform_height),
            ("collectible_width", self.collectible_width),
            ("collectible_height", self.collectible_height),
            ("prop_width", self.prop_width),
            ("prop_height", self.prop_height),
        ] {
            positive(field, value)?;
        }

        for (field, value) in [
            ("player_start_x", self.player_start_x),
            ("player_start_y", self.player_start_y),
            ("platform_x", self.platform_x),
            ("platform_y", self.platform_y),
        ] {
            finite(field, value)?;
        }

        for (field, value) in [
            ("player_step", self.player_step),
            ("hazard_speed", self.hazard_speed),
            ("fixed_collectible_speed", self.fixed_collectible_speed),
            ("transient_collectible_speed", self.transient_collectible_speed),
            ("prop_speed", self.prop_speed),
        ] {
            non_negative(field, value as f64)?;
        }

        for (field, value) in [
            ("fixed_collectible_bonus", self.fixed_collectible_bonus),
            ("transient_collectible_bonus", self.transient_collectible_bonus),
            ("survival_score_per_tick", self.survival_score_per_tick),
        ] {
            non_negative(field, value)?;
        }

        for (field, value) in [
            ("transient_spawn_chance", self.transient_spawn_chance),
            ("prop_spawn_chance", self.prop_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { field, value });
            }
        }

        if self.collectible_frames == 0 {
            return Err(ConfigError::NonPositive { field: "collectible_frames", value: 0.0 });
        }
        if self.collectible_frame_ticks == 0 {
            return Err(ConfigError::NonPositive { field: "collectible_frame_ticks", value: 0.0 });
        }
        if self.prop_batch_max == 0 {
            return Err(ConfigError::NonPositive { field: "prop_batch_max", value: 0.0 });
        }

        for (field, width, height) in [
            ("player", self.player_width, self.player_height),
            ("hazard", self.hazard_width, self.hazard_height),
            ("collectible", self.collectible_width, self.collectible_height),
            ("prop", self.prop_width, self.prop_height),
        ] {
            if width > self.world_width || height > self.world_height {
                return Err(ConfigError::EntityTooLarge { field });
            }
        }

        let x_in = self.player_start_x >= 0.0
            && self.player_start_x + self.player_width <= self.world_width;
        let y_in = self.player_start_y >= 0.0 && self.player_start_y <= self.ground_y();
        if !x_in || !y_in {
            return Err(ConfigError::PlayerOutOfBounds);
        }

        for (i, layer) in self.layers.iter().enumerate() {
            non_negative("layers.speed", layer.speed as f64)?;
            if self.layers[..i].iter().any(|l| l.kind == layer.kind) {
                return Err(ConfigError::DuplicateLayer(layer.kind));
            }
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value: value as f64 })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ground_y(), 450.0);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let config = SimConfig {
            player_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "player_width", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = SimConfig {
            hazard_speed: -4.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "hazard_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = SimConfig {
            transient_spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Probability { field: "transient_spawn_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = SimConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFinite { field: "gravity" })));
    }

    #[test]
    fn test_rejects_player_outside_world() {
        let config = SimConfig {
            player_start_x: 630.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PlayerOutOfBounds)));
    }

    #[test]
    fn test_rejects_duplicate_layer() {
        let mut config = SimConfig::default();
        config.layers.push(LayerConfig { kind: LayerKind::Sky, speed: 1.0 });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateLayer(LayerKind::Sky))
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = SimConfig::from_json(r#"{ "invulnerable": true, "world_height": 600 }"#)
            .expect("valid json");
        assert!(config.invulnerable);
        assert_eq!(config.world_height, 600.0);
        assert_eq!(config.jump_speed, JUMP_SPEED);
    }

    #[test]
    fn test_from_json_validates() {
        assert!(matches!(
            SimConfig::from_json(r#"{ "jump_speed": 0 }"#),
            Err(ConfigError::NonPositive { field: "jump_speed", .. })
        ));
        assert!(matches!(SimConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }
}
