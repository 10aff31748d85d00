use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_start_x: f32,
    pub player_paddle_y: f32,
    pub computer_paddle_y: f32,
    pub ball_radius: f32,
    pub spin_damping: f32,
    pub ai_dead_zone_ratio: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_start_x: Params::PADDLE_START_X,
            player_paddle_y: Params::PLAYER_PADDLE_Y,
            computer_paddle_y: Params::COMPUTER_PADDLE_Y,
            ball_radius: Params::BALL_RADIUS,
            spin_damping: Params::SPIN_DAMPING,
            ai_dead_zone_ratio: Params::AI_DEAD_ZONE_RATIO,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a paddle X position so the whole paddle stays on the surface
    pub fn clamp_paddle_x(&self, x: f32, paddle_width: f32) -> f32 {
        x.clamp(0.0, self.surface_width - paddle_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_clamp_paddle_x() {
        let config = Config::new();
        let width = config.paddle_width;
        assert_eq!(config.clamp_paddle_x(-10.0, width), 0.0);
        assert_eq!(
            config.clamp_paddle_x(1000.0, width),
            config.surface_width - width
        );
        let valid_x = 175.0;
        assert_eq!(config.clamp_paddle_x(valid_x, width), valid_x);
    }

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.surface_width, 400.0);
        assert_eq!(config.surface_height, 600.0);
        assert_eq!(config.paddle_speed, 4.0);
        assert_eq!(config.ball_radius, 5.0);
    }
}
