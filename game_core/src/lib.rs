pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::Game;
pub use params::*;
pub use resources::*;

use systems::*;

/// Advance the simulation by one tick.
///
/// One tick corresponds to one scheduled animation frame; all speeds are
/// pixels per tick. Phases run in a fixed order:
///
/// 1. Integrate the ball and resolve its collisions: human paddle first,
///    then the computer paddle, then the walls. A tick flips the ball's
///    vertical speed at most once, via whichever paddle matched first.
/// 2. Move the player's paddle from the held keys.
/// 3. Move the computer's paddle toward the ball.
///
/// A top/bottom wall exit pauses the game; the rest of the tick still
/// runs so the final frame is consistent, and the caller is expected to
/// stop stepping afterwards.
pub fn step(game: &mut Game) {
    game.events.clear();

    move_ball(&mut game.ball);

    let hit = bounce_off_paddle(
        &mut game.ball,
        &game.player.paddle,
        &game.config,
        &mut game.events,
    );
    if !hit {
        bounce_off_paddle(
            &mut game.ball,
            &game.computer.paddle,
            &game.config,
            &mut game.events,
        );
    }
    bounce_off_walls(
        &mut game.ball,
        &game.config,
        &mut game.status,
        &mut game.events,
    );

    steer_player(&mut game.player, &game.input, &game.config);
    steer_computer(&mut game.computer, game.ball.pos.x, &game.config);
}
