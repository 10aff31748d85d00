use std::collections::BTreeSet;

/// Logical keys the simulation recognizes. The platform layer maps raw
/// key codes to these before they reach the core; everything else is
/// dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    Left,
    Right,
}

/// Live view of the currently held keys.
///
/// Populated and cleared by the platform's key-down/key-up notifications,
/// read-only from inside the tick. Backed by an ordered set so iteration
/// is deterministic: Left always comes before Right when both are held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }
}

/// Loop state. Starts `Running`; the only transition is to `Paused`,
/// fired when the ball exits through the top or bottom boundary. There
/// is no way back (restart is out of scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Running,
    Paused,
}

impl Status {
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }

    pub fn pause(&mut self) {
        *self = Status::Paused;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// The ball crossed the top or bottom boundary (terminal condition)
    pub ball_out: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.ball_out = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_press_release() {
        let mut input = InputState::new();
        assert!(!input.is_held(Key::Left));
        input.press(Key::Left);
        assert!(input.is_held(Key::Left));
        input.press(Key::Left); // held, not queued; repeat is a no-op
        input.release(Key::Left);
        assert!(!input.is_held(Key::Left));
    }

    #[test]
    fn test_input_iteration_order_is_left_then_right() {
        let mut input = InputState::new();
        input.press(Key::Right);
        input.press(Key::Left);
        let held: Vec<Key> = input.held().collect();
        assert_eq!(held, vec![Key::Left, Key::Right]);
    }

    #[test]
    fn test_status_starts_running_and_pauses_once() {
        let mut status = Status::default();
        assert!(status.is_running());
        status.pause();
        assert_eq!(status, Status::Paused);
        status.pause();
        assert_eq!(status, Status::Paused, "Pause is idempotent");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.ball_out = true;

        events.clear();

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.ball_out);
    }
}
