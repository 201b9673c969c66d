//! Raw key state to per-tick input
//!
//! Movement keys are levels (held), jump is an edge: one impulse per press
//! no matter how long the key stays down.

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    Left,
    Right,
    Up,
    Space,
    /// Cycle to the next level
    N,
    /// Respawn in the current level
    R,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key`/`code` style name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" | "A" | "KeyA" => Some(Key::A),
            "d" | "D" | "KeyD" => Some(Key::D),
            "w" | "W" | "KeyW" => Some(Key::W),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            " " | "Space" => Some(Key::Space),
            "n" | "N" | "KeyN" => Some(Key::N),
            "r" | "R" | "KeyR" => Some(Key::R),
            _ => None,
        }
    }
}

/// Which keys are currently down, plus press edges since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: Vec<Key>,
    pressed: Vec<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat sends repeated downs; only the first is a press
        if !self.held.contains(&key) {
            self.held.push(key);
            self.pressed.push(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.retain(|k| *k != key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Pressed since the last `take_tick`
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Build this tick's input and clear press edges
    pub fn take_tick(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_down(Key::A) || self.is_down(Key::Left),
            right: self.is_down(Key::D) || self.is_down(Key::Right),
            jump: [Key::Space, Key::W, Key::Up]
                .iter()
                .any(|k| self.was_pressed(*k)),
        };
        self.pressed.clear();
        input
    }

    /// First pressed level command, cleared by `take_tick`
    pub fn pending_command(&self) -> Option<Key> {
        [Key::N, Key::R].into_iter().find(|k| self.was_pressed(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_movement() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        let tick = input.take_tick();
        assert!(tick.left && !tick.right);

        // Still held next tick
        assert!(input.take_tick().left);

        input.key_up(Key::Left);
        assert!(!input.take_tick().left);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::new();
        input.key_down(Key::A);
        input.key_down(Key::Right);
        assert_eq!(input.take_tick().direction(), 0.0);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        assert!(input.take_tick().jump);

        // Held and auto-repeated: no new jump
        input.key_down(Key::Space);
        assert!(!input.take_tick().jump);

        input.key_up(Key::Space);
        input.key_down(Key::Up);
        assert!(input.take_tick().jump);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("KeyD"), Some(Key::D));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("Escape"), None);
    }

    #[test]
    fn test_commands() {
        let mut input = InputState::new();
        assert_eq!(input.pending_command(), None);
        input.key_down(Key::N);
        assert_eq!(input.pending_command(), Some(Key::N));
        input.take_tick();
        assert_eq!(input.pending_command(), None);
    }
}
