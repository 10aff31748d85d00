//! Canvas 2D rendering

use game_core::{Ball, Game, Paddle};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const BACKGROUND_COLOR: &str = "#FF00FF";
const PADDLE_COLOR: &str = "#0000FF";
const BALL_COLOR: &str = "#000000";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Paint one frame. Draw order is fixed: background, player paddle,
    /// computer paddle, then the ball so it always ends up on top.
    pub fn render(&self, game: &Game) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.draw_paddle(&game.player.paddle);
        self.draw_paddle(&game.computer.paddle);
        self.draw_ball(&game.ball)?;
        Ok(())
    }

    fn draw_paddle(&self, paddle: &Paddle) {
        self.ctx.set_fill_style_str(PADDLE_COLOR);
        self.ctx.fill_rect(
            paddle.x as f64,
            paddle.y as f64,
            paddle.width as f64,
            paddle.height as f64,
        );
    }

    fn draw_ball(&self, ball: &Ball) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.set_fill_style_str(BALL_COLOR);
        self.ctx.fill();
        Ok(())
    }
}
