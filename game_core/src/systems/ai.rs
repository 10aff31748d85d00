use crate::components::Computer;
use crate::config::Config;

/// Drive the computer paddle toward the ball's x position.
///
/// Proportional-only controller with a dead zone of a quarter paddle
/// width. The correction is always a full-speed step, not scaled by
/// distance, so the paddle visibly oscillates around a fast-moving ball
/// instead of tracking it smoothly. That wobble is the intended
/// difficulty tuning; do not make the step proportional.
pub fn steer_computer(computer: &mut Computer, ball_x: f32, config: &Config) {
    let speed = computer.paddle.x_speed;
    let center = computer.paddle.center_x();
    let dead_zone = computer.paddle.width * config.ai_dead_zone_ratio;

    if center - ball_x > dead_zone {
        computer.paddle.move_by(-speed, config);
    } else if ball_x - center > dead_zone {
        computer.paddle.move_by(speed, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, Computer) {
        let config = Config::new();
        let computer = Computer::new(&config);
        (config, computer)
    }

    #[test]
    fn test_chases_ball_to_the_right() {
        let (config, mut computer) = setup();
        // Paddle center starts at 200; ball held 30 units right of it,
        // well outside the 12.5 dead zone
        let ball_x = 230.0;
        let mut moved = 0;
        while computer.paddle.center_x() + computer.paddle.width * config.ai_dead_zone_ratio
            < ball_x
        {
            let before = computer.paddle.x;
            steer_computer(&mut computer, ball_x, &config);
            assert_eq!(computer.paddle.x, before + 4.0, "Full-speed step every tick");
            moved += 1;
        }
        // Inside the dead zone the paddle must stop
        let parked = computer.paddle.x;
        steer_computer(&mut computer, ball_x, &config);
        assert_eq!(computer.paddle.x, parked);
        assert!(moved > 0);
    }

    #[test]
    fn test_chases_ball_to_the_left() {
        let (config, mut computer) = setup();
        steer_computer(&mut computer, 100.0, &config);
        assert_eq!(computer.paddle.x, 171.0);
    }

    #[test]
    fn test_stays_put_inside_dead_zone() {
        let (config, mut computer) = setup();
        // Center 200, dead zone 12.5: anything in (187.5, 212.5) is ignored
        for ball_x in [200.0, 190.0, 210.0, 187.6, 212.4] {
            steer_computer(&mut computer, ball_x, &config);
            assert_eq!(computer.paddle.x, 175.0, "No correction for ball at {}", ball_x);
        }
    }

    #[test]
    fn test_dead_zone_boundary_is_exclusive() {
        let (config, mut computer) = setup();
        // Exactly dead_zone away: center - ball_x == 12.5, not > 12.5
        steer_computer(&mut computer, 187.5, &config);
        assert_eq!(computer.paddle.x, 175.0);
        // Just beyond it the paddle moves
        steer_computer(&mut computer, 187.4, &config);
        assert_eq!(computer.paddle.x, 171.0);
    }

    #[test]
    fn test_respects_surface_bounds() {
        let (config, mut computer) = setup();
        for _ in 0..200 {
            steer_computer(&mut computer, 0.0, &config);
        }
        assert_eq!(computer.paddle.x, 0.0);
        for _ in 0..200 {
            steer_computer(&mut computer, 400.0, &config);
        }
        assert_eq!(computer.paddle.x, config.surface_width - computer.paddle.width);
    }
}
