use glam::Vec2;

use crate::components::{Ball, Computer, Player};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{Events, InputState, Status};

/// Full state of one running game.
///
/// Everything the per-tick update touches lives here; there are no
/// ambient globals. The platform layer owns a `Game`, feeds `input` from
/// its key events, and calls [`crate::step`] once per animation frame
/// while `status` is running.
pub struct Game {
    pub config: Config,
    pub ball: Ball,
    pub player: Player,
    pub computer: Computer,
    pub input: InputState,
    pub status: Status,
    pub events: Events,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let ball = Ball::new(
            Vec2::new(Params::BALL_START_X, Params::BALL_START_Y),
            Vec2::new(0.0, Params::BALL_START_SPEED_Y),
            config.ball_radius,
        );
        let player = Player::new(&config);
        let computer = Computer::new(&config);

        Self {
            config,
            ball,
            player,
            computer,
            input: InputState::new(),
            status: Status::default(),
            events: Events::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::new())
    }
}
