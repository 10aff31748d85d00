//! Browser client for the paddle game
//!
//! Thin platform glue around `game_core`: builds a 400x600 canvas, wires
//! keyboard listeners into the simulation's held-key set, and drives one
//! simulation tick plus one render per animation frame.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{step, Game, Params};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use crate::input::key_binding;
    use crate::renderer::Renderer;

    struct App {
        game: Game,
        renderer: Renderer,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;
        canvas.set_width(Params::SURFACE_WIDTH as u32);
        canvas.set_height(Params::SURFACE_HEIGHT as u32);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        let app = Rc::new(RefCell::new(App {
            game: Game::default(),
            renderer: Renderer::new(ctx, canvas.width(), canvas.height()),
        }));

        setup_key_listeners(&window, app.clone())?;

        log::info!("paddle game starting");
        request_animation_frame(app);
        Ok(())
    }

    fn setup_key_listeners(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_binding(&event.key()) {
                    app.borrow_mut().game.input.press(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_binding(&event.key()) {
                    app.borrow_mut().game.input.release(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move || frame(app));
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut app = app.borrow_mut();
            let App { game, renderer } = &mut *app;

            // While paused the body is a no-op so the last rendered frame
            // stays up, but the callback keeps being rescheduled below.
            if game.status.is_running() {
                step(game);
                if game.events.ball_out {
                    log::info!("ball left the surface; freezing final frame");
                }
                if let Err(e) = renderer.render(game) {
                    log::warn!("render error: {:?}", e);
                }
            }
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    web::run()
}
