/// Fixed tuning values for the paddle game.
///
/// All speeds are in pixels per tick; one tick is one animation frame, so
/// the simulation rate is coupled to the display refresh rate. That is a
/// known limitation of the original game and is kept for fidelity.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (logical canvas size)
    pub const SURFACE_WIDTH: f32 = 400.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 4.0;
    pub const PADDLE_START_X: f32 = 175.0;
    pub const PLAYER_PADDLE_Y: f32 = 580.0;
    pub const COMPUTER_PADDLE_Y: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 300.0;
    pub const BALL_START_SPEED_Y: f32 = 3.0; // downward

    // Spin imparted on paddle hits is (offset from paddle center) / damping
    pub const SPIN_DAMPING: f32 = 4.0;

    // Computer controller dead zone, as a fraction of paddle width
    pub const AI_DEAD_ZONE_RATIO: f32 = 0.25;
}
