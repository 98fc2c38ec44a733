//! Polled input snapshot.
//!
//! The window layer writes key/button/mouse state into an `InputState`;
//! the frame driver and camera read it once per frame through the
//! `InputSource` trait and never own its lifecycle.

use bitflags::bitflags;
use glam::Vec2;
use winit::keyboard::KeyCode;

bitflags! {
    /// Logical keys read by the camera and frame driver.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u32 {
        const FORWARD  = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT     = 1 << 2;
        const RIGHT    = 1 << 3;
        const UP       = 1 << 4;
        const DOWN     = 1 << 5;
        /// Movement speed multiplier
        const FAST     = 1 << 6;
        /// Movement speed divider
        const SLOW     = 1 << 7;
        const QUIT     = 1 << 8;
    }
}

/// Read-only view of the input for the current frame.
pub trait InputSource {
    /// Keys currently held.
    fn keys(&self) -> Keys;

    /// Mouse movement accumulated since the last frame, in pixels.
    fn mouse_delta(&self) -> Vec2;

    /// Whether mouse-look is engaged (look button held).
    fn is_look_active(&self) -> bool;

    /// True when every key in `key` is held.
    fn is_key_down(&self, key: Keys) -> bool {
        self.keys().contains(key)
    }
}

/// Map a physical key to its logical binding.
pub fn key_binding(code: KeyCode) -> Option<Keys> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Keys::FORWARD),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Keys::BACKWARD),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Keys::LEFT),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Keys::RIGHT),
        KeyCode::Space => Some(Keys::UP),
        KeyCode::KeyX => Some(Keys::DOWN),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Keys::FAST),
        KeyCode::ControlLeft | KeyCode::ControlRight => Some(Keys::SLOW),
        KeyCode::Escape => Some(Keys::QUIT),
        _ => None,
    }
}

/// Mutable input snapshot fed by the window layer.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: Keys,
    mouse_delta: Vec2,
    look_active: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, keys: Keys) {
        self.keys.insert(keys);
    }

    pub fn release(&mut self, keys: Keys) {
        self.keys.remove(keys);
    }

    /// Record a physical key transition. Returns false for unbound keys.
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match key_binding(code) {
            Some(keys) => {
                self.keys.set(keys, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set_look_active(&mut self, active: bool) {
        self.look_active = active;
    }

    /// Accumulate raw mouse motion until the next `end_frame()`.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Clear per-frame accumulators. Held keys persist.
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }

    /// Release everything (e.g. when the window loses focus).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for InputState {
    fn keys(&self) -> Keys {
        self.keys
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    fn is_look_active(&self) -> bool {
        self.look_active
    }
}

/// Input source that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn keys(&self) -> Keys {
        Keys::empty()
    }

    fn mouse_delta(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn is_look_active(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
