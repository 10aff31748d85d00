use glam::Vec2;

use crate::config::Config;

/// Paddle - a horizontally moving bat of fixed size
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,  // constant after creation
    pub height: f32, // constant after creation
    pub x_speed: f32, // movement step per tick
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, x_speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            x_speed,
        }
    }

    /// Add `delta` to x, then clamp so the paddle stays fully on the
    /// surface. Total: every call leaves `0 <= x <= surface_width - width`.
    pub fn move_by(&mut self, delta: f32, config: &Config) {
        self.x = config.clamp_paddle_x(self.x + delta, self.width);
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Ball - position, velocity and radius
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32, // constant
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }
}

/// The keyboard-controlled side; owns the bottom paddle
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub paddle: Paddle,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle: Paddle::new(
                config.paddle_start_x,
                config.player_paddle_y,
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed,
            ),
        }
    }
}

/// The computer-controlled side; owns the top paddle
#[derive(Debug, Clone, Copy)]
pub struct Computer {
    pub paddle: Paddle,
}

impl Computer {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle: Paddle::new(
                config.paddle_start_x,
                config.computer_paddle_y,
                config.paddle_width,
                config.paddle_height,
                config.paddle_speed,
            ),
        }
    }
}
