use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, Status};

/// Bounce the ball off a paddle if it sits in the paddle's strike band.
///
/// The test is deliberately looser than a true circle-rectangle
/// intersection: the ball's x-center must lie strictly inside the
/// paddle's horizontal span, and the vertical gap
/// `|ball.y - paddle.y - radius|` must be within the paddle height. The
/// radius enters the y-term only. This reproduces the long-standing
/// behavior of the game and must not be "corrected".
///
/// On a hit the vertical speed is negated and the horizontal speed is
/// recomputed from where on the paddle the ball struck, so off-center
/// hits impart spin. Returns whether a hit happened.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    events: &mut Events,
) -> bool {
    if ball.pos.x <= paddle.x || ball.pos.x >= paddle.x + paddle.width {
        return false;
    }
    if (ball.pos.y - paddle.y - ball.radius).abs() > paddle.height {
        return false;
    }

    ball.vel.y = -ball.vel.y;
    ball.vel.x = (ball.pos.x - paddle.center_x()) / config.spin_damping;
    events.ball_hit_paddle = true;
    true
}

/// Resolve wall contact.
///
/// Top/bottom exits are terminal: the game pauses and the check returns
/// at once, with no bounce and no further ball mutation this tick. Side
/// contact reflects the horizontal speed and the game keeps running.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, status: &mut Status, events: &mut Events) {
    if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= config.surface_height {
        status.pause();
        events.ball_out = true;
        return;
    }

    if ball.pos.x <= 0.0 || ball.pos.x + ball.radius >= config.surface_width {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_wall = true;
    }
}
