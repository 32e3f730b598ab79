/// Input events the engine understands. Coordinates are in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// A key was pressed. `key_code` follows the browser's `keyCode`.
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// The host page entered or left fullscreen.
    FullscreenChanged { active: bool },
}

/// Events pushed by JS between frames, drained by the runner once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 37 });
        q.push(InputEvent::PointerUp { x: 750.0, y: 40.0 });
        assert_eq!(q.len(), 2);

        let events = q.drain();
        assert_eq!(events[0], InputEvent::KeyDown { key_code: 37 });
        assert!(q.is_empty());
    }
}
