//! Player physics state machine
//!
//! The state owns `y` outright: Jumping rises at a constant rate,
//! Falling descends by an accumulator that grows every tick (so falls are
//! faster than rises), Grounded holds still. Horizontal motion only comes
//! from move commands.

use serde::{Deserialize, Serialize};

use super::collision::{lands_on, stands_on};
use super::rect::Rect;
use super::tick::{Command, GameEvent};
use crate::config::SimConfig;

/// Vertical state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    #[default]
    Grounded,
    Jumping,
    Falling,
}

/// The player-controlled body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Rect,
    /// Signed vertical speed of the last tick (negative = up)
    pub vel_y: f32,
    pub jump_state: JumpState,
    /// `y` when the current jump started (apex detection)
    pub jump_anchor_y: f32,
    /// Horizontal step per move command
    pub step: f32,
    /// Fall accumulator, grows by `gravity` every falling tick
    pub fall_speed: f32,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            body: Rect::new(
                config.player_start_x,
                config.player_start_y,
                config.player_width,
                config.player_height,
            ),
            vel_y: 0.0,
            jump_state: JumpState::Grounded,
            jump_anchor_y: config.player_start_y,
            step: config.player_step,
            fall_speed: 0.0,
        }
    }

    /// Apply one discrete input command
    pub fn apply_command(&mut self, command: Command, config: &SimConfig) -> Option<GameEvent> {
        match command {
            Command::MoveLeft => {
                self.body.pos.x = (self.body.pos.x - self.step).max(0.0);
                None
            }
            Command::MoveRight => {
                let max_x = config.world_width - self.body.size.x;
                self.body.pos.x = (self.body.pos.x + self.step).min(max_x);
                None
            }
            Command::JumpPressed => {
                if self.jump_state == JumpState::Jumping {
                    return None;
                }
                self.jump_state = JumpState::Jumping;
                self.jump_anchor_y = self.body.pos.y;
                self.vel_y = -config.jump_speed;
                self.fall_speed = 0.0;
                log::trace!("Jump from y={}", self.jump_anchor_y);
                Some(GameEvent::Jumped)
            }
            Command::JumpReleased => {
                // Releasing never cuts an ascent short
                if self.jump_state != JumpState::Jumping {
                    self.vel_y = 0.0;
                }
                None
            }
        }
    }

    /// Advance vertical motion by one tick and resolve ground/platform landing
    pub fn integrate(&mut self, config: &SimConfig, platform: &Rect) -> Option<GameEvent> {
        let ground_y = config.ground_y();

        // Walked off a platform edge (or spawned in the air)
        if self.jump_state == JumpState::Grounded
            && self.body.pos.y < ground_y
            && !stands_on(&self.body, platform)
        {
            self.jump_state = JumpState::Falling;
        }

        match self.jump_state {
            JumpState::Grounded => {
                self.vel_y = 0.0;
                None
            }
            JumpState::Jumping => {
                self.body.pos.y -= config.jump_speed;
                self.vel_y = -config.jump_speed;

                let apex = self.jump_anchor_y - config.jump_height;
                if self.body.pos.y <= 0.0 {
                    // Ceiling of the world
                    self.body.pos.y = 0.0;
                    self.jump_state = JumpState::Falling;
                } else if self.body.pos.y <= apex || self.body.pos.y >= ground_y {
                    self.jump_state = JumpState::Falling;
                }
                None
            }
            JumpState::Falling => {
                let prev_bottom = self.body.bottom();
                self.fall_speed += config.gravity;
                self.body.pos.y += self.fall_speed;
                self.vel_y = self.fall_speed;

                if lands_on(prev_bottom, &self.body, platform) {
                    self.land_at(platform.top() - self.body.size.y);
                    log::debug!("Landed on platform at y={}", self.body.pos.y);
                    Some(GameEvent::Landed)
                } else if self.body.pos.y >= ground_y {
                    self.land_at(ground_y);
                    log::debug!("Landed on ground");
                    Some(GameEvent::Landed)
                } else {
                    None
                }
            }
        }
    }

    fn land_at(&mut self, y: f32) {
        self.body.pos.y = y;
        self.vel_y = 0.0;
        self.fall_speed = 0.0;
        self.jump_state = JumpState::Grounded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_platform() -> Rect {
        // Out of the player's horizontal reach
        Rect::new(500.0, 100.0, 100.0, 20.0)
    }

    fn grounded_player(config: &SimConfig) -> Player {
        let mut player = Player::new(config);
        player.body.pos.y = config.ground_y();
        player
    }

    #[test]
    fn test_spawned_in_air_falls_to_ground() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        let platform = far_platform();

        let mut landed = false;
        for _ in 0..200 {
            if player.integrate(&config, &platform) == Some(GameEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(player.jump_state, JumpState::Grounded);
        assert_eq!(player.body.pos.y, config.ground_y());
        assert_eq!(player.fall_speed, 0.0);
    }

    #[test]
    fn test_fall_is_quadratic() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        let platform = far_platform();

        let y0 = player.body.pos.y;
        player.integrate(&config, &platform);
        let y1 = player.body.pos.y;
        player.integrate(&config, &platform);
        let y2 = player.body.pos.y;

        assert_eq!(y1 - y0, 0.5);
        assert_eq!(y2 - y1, 1.0);
    }

    #[test]
    fn test_jump_rises_linearly_to_apex() {
        let config = SimConfig::default();
        let mut player = grounded_player(&config);
        let platform = far_platform();

        assert_eq!(player.apply_command(Command::JumpPressed, &config), Some(GameEvent::Jumped));
        assert_eq!(player.jump_state, JumpState::Jumping);
        assert_eq!(player.vel_y, -config.jump_speed);

        for _ in 0..19 {
            player.integrate(&config, &platform);
            assert_eq!(player.jump_state, JumpState::Jumping);
        }
        player.integrate(&config, &platform);
        assert_eq!(player.jump_state, JumpState::Falling);
        assert_eq!(player.body.pos.y, config.ground_y() - config.jump_height);
    }

    #[test]
    fn test_no_double_jump_while_rising() {
        let config = SimConfig::default();
        let mut player = grounded_player(&config);
        player.apply_command(Command::JumpPressed, &config);
        player.integrate(&config, &far_platform());
        let anchor = player.jump_anchor_y;

        assert_eq!(player.apply_command(Command::JumpPressed, &config), None);
        assert_eq!(player.jump_anchor_y, anchor);
    }

    #[test]
    fn test_jump_stops_at_world_top() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        player.body.pos.y = 10.0;
        player.apply_command(Command::JumpPressed, &config);
        player.integrate(&config, &far_platform());
        player.integrate(&config, &far_platform());

        assert_eq!(player.body.pos.y, 0.0);
        assert_eq!(player.jump_state, JumpState::Falling);
    }

    #[test]
    fn test_lands_on_platform() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        // Directly above the default platform (200..400, top at 100)
        player.body.pos = glam::Vec2::new(250.0, 40.0);
        let platform = Rect::new(200.0, 100.0, 200.0, 20.0);

        let mut landed = false;
        for _ in 0..60 {
            if player.integrate(&config, &platform) == Some(GameEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(player.jump_state, JumpState::Grounded);
        assert_eq!(player.body.bottom(), 100.0);

        // Stays put while standing
        player.integrate(&config, &platform);
        assert_eq!(player.body.bottom(), 100.0);
        assert_eq!(player.jump_state, JumpState::Grounded);
    }

    #[test]
    fn test_walking_off_platform_falls() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        let platform = Rect::new(200.0, 100.0, 200.0, 20.0);
        player.body.pos = glam::Vec2::new(395.0, 70.0);
        player.integrate(&config, &platform);
        assert_eq!(player.jump_state, JumpState::Grounded);

        player.apply_command(Command::MoveRight, &config);
        player.integrate(&config, &platform);
        assert_eq!(player.jump_state, JumpState::Falling);
        assert!(player.body.pos.y > 70.0);
    }

    #[test]
    fn test_horizontal_moves_clamp_to_world() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);

        player.body.pos.x = 2.0;
        player.apply_command(Command::MoveLeft, &config);
        assert_eq!(player.body.pos.x, 0.0);

        player.body.pos.x = config.world_width - config.player_width - 1.0;
        player.apply_command(Command::MoveRight, &config);
        assert_eq!(player.body.right(), config.world_width);
    }

    #[test]
    fn test_jump_release_keeps_ascent() {
        let config = SimConfig::default();
        let mut player = grounded_player(&config);
        player.apply_command(Command::JumpPressed, &config);
        player.apply_command(Command::JumpReleased, &config);
        assert_eq!(player.jump_state, JumpState::Jumping);
        assert_eq!(player.vel_y, -config.jump_speed);
    }
}
