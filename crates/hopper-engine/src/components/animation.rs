//! Sprite-sheet animation clips and per-entity playback state.

use std::collections::HashMap;

/// A named run of frames from one sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Frame indices in the sheet, in playback order.
    pub frames: Vec<u32>,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Restart from the first frame after the last.
    pub looping: bool,
}

impl AnimationClip {
    /// Consecutive frames `start..=end` at `fps`, played once.
    pub fn range(start: u32, end: u32, fps: f32) -> Self {
        Self {
            frames: (start..=end).collect(),
            frame_duration: 1.0 / fps,
            looping: false,
        }
    }

    /// A single held frame.
    pub fn still(frame: u32) -> Self {
        Self::range(frame, frame, 1.0)
    }

    pub fn looped(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animation state for an entity.
#[derive(Debug, Clone, Default)]
pub struct AnimationComponent {
    clips: HashMap<String, AnimationClip>,
    current: String,
    frame_index: usize,
    frame_timer: f32,
    playing: bool,
}

impl AnimationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip. Replaces any clip with the same name.
    pub fn with_clip(mut self, name: impl Into<String>, clip: AnimationClip) -> Self {
        self.clips.insert(name.into(), clip);
        self
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Name of the active clip; empty before the first `play`.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start a clip from its first frame. Unknown names are ignored and
    /// return `false`.
    pub fn play(&mut self, name: &str) -> bool {
        if !self.clips.contains_key(name) {
            log::warn!("animation: unknown clip '{}'", name);
            return false;
        }
        self.current = name.to_string();
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        true
    }

    /// Start a clip unless it is already the active one, so a held key
    /// does not restart a walk cycle every tick.
    pub fn play_if_different(&mut self, name: &str) -> bool {
        if self.current == name {
            return false;
        }
        self.play(name)
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Sheet frame currently shown.
    pub fn current_frame(&self) -> Option<u32> {
        self.clips
            .get(&self.current)
            .and_then(|clip| clip.frames.get(self.frame_index).copied())
    }

    /// Advance playback by `dt` seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        let Some(clip) = self.clips.get(&self.current) else {
            return false;
        };
        if clip.frames.is_empty() || clip.frame_duration <= 0.0 {
            return false;
        }

        self.frame_timer += dt;
        let mut changed = false;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;

            if self.frame_index + 1 < clip.frames.len() {
                self.frame_index += 1;
                changed = true;
            } else if clip.looping {
                changed |= self.frame_index != 0;
                self.frame_index = 0;
            } else {
                self.playing = false;
                self.frame_timer = 0.0;
                break;
            }
        }

        changed
    }
}
