use crate::components::Player;
use crate::config::Config;
use crate::resources::{InputState, Key};

/// Apply the held keys to the player's paddle.
///
/// Every held key contributes one full-speed move. Holding both
/// directions applies both deltas sequentially within the tick (not
/// averaged or cancelled); the held set iterates Left before Right, so
/// the order is deterministic.
pub fn steer_player(player: &mut Player, input: &InputState, config: &Config) {
    let speed = player.paddle.x_speed;
    for key in input.held() {
        match key {
            Key::Left => player.paddle.move_by(-speed, config),
            Key::Right => player.paddle.move_by(speed, config),
        }
    }
}
