//! Per-frame input state built from queued events.

use std::collections::HashSet;

use glam::Vec2;

use crate::input::queue::InputEvent;

/// Browser `keyCode` values for the keys games usually bind.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const F: u32 = 70;
}

/// Held keys plus the edge events (presses, releases, pointer-ups) of the
/// current frame.
///
/// Held state persists across frames. Edges are visible only to the first
/// fixed step of a frame, so a single key press never fires twice when a
/// slow frame runs several steps.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<u32>,
    pressed: Vec<u32>,
    released: Vec<u32>,
    pointer: Vec2,
    pointer_down: bool,
    pointer_ups: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state. Fullscreen reports are not input and
    /// are ignored here.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                // Browsers repeat keydown while a key is held; only the first counts.
                if self.held.insert(key_code) {
                    self.pressed.push(key_code);
                }
            }
            InputEvent::KeyUp { key_code } => {
                if self.held.remove(&key_code) {
                    self.released.push(key_code);
                }
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pointer_down = true;
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(x, y);
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer = Vec2::new(x, y);
                self.pointer_down = false;
                self.pointer_ups.push(self.pointer);
            }
            InputEvent::FullscreenChanged { .. } => {}
        }
    }

    /// Forget this frame's edge events. Held keys are kept.
    pub fn clear_edges(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.pointer_ups.clear();
    }

    /// Release everything, e.g. when the page loses focus.
    pub fn reset(&mut self) {
        self.held.clear();
        self.pointer_down = false;
        self.clear_edges();
    }

    pub fn is_down(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    /// Whether `key_code` went down this frame.
    pub fn just_pressed(&self, key_code: u32) -> bool {
        self.pressed.contains(&key_code)
    }

    pub fn just_released(&self, key_code: u32) -> bool {
        self.released.contains(&key_code)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Positions where the pointer was released this frame.
    pub fn pointer_ups(&self) -> &[Vec2] {
        &self.pointer_ups
    }
}
