//! Keyboard input handling

use game_core::Key;

/// Map a DOM `KeyboardEvent.key` value to a game key.
///
/// Only two logical keys exist; anything else is ignored so unexpected
/// key codes never reach the simulation.
pub fn key_binding(key: &str) -> Option<Key> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        _ => None,
    }
}
