use crate::components::Ball;

/// Integrate the ball by one tick of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_ball_integrates_velocity() {
        let mut ball = Ball::new(Vec2::new(200.0, 300.0), Vec2::new(2.0, 3.0), 5.0);
        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(202.0, 303.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 3.0), "Velocity is untouched");
    }
}
