//! Per-tick steering: arrow keys to player velocity and animation clip.

use hopper_engine::{keys, AnimationClip, EngineContext, EntityId, InputState};

/// Horizontal run speed, units per second.
pub const SPEED: f32 = 150.0;
/// Vertical velocity applied on jump. Negative is up.
pub const JUMP_VELOCITY: f32 = -700.0;

const WALK_FPS: f32 = 10.0;

/// The player's animation clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerClip {
    Left,
    Center,
    Right,
}

impl PlayerClip {
    pub const ALL: [PlayerClip; 3] = [PlayerClip::Left, PlayerClip::Center, PlayerClip::Right];

    pub fn name(self) -> &'static str {
        match self {
            PlayerClip::Left => "left",
            PlayerClip::Center => "center",
            PlayerClip::Right => "right",
        }
    }

    /// Frames of the `dude` sheet: 0-3 walk left, 4 faces the camera, 5-8 walk right.
    pub fn clip(self) -> AnimationClip {
        match self {
            PlayerClip::Left => AnimationClip::range(0, 3, WALK_FPS).looped(),
            PlayerClip::Center => AnimationClip::range(4, 4, WALK_FPS),
            PlayerClip::Right => AnimationClip::range(5, 8, WALK_FPS).looped(),
        }
    }
}

/// Directional keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl KeySnapshot {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.is_down(keys::LEFT),
            right: input.is_down(keys::RIGHT),
            up: input.is_down(keys::UP),
        }
    }
}

/// What the controller wants done to the player this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCommand {
    pub velocity_x: f32,
    /// `None` leaves vertical velocity to the physics engine.
    pub velocity_y: Option<f32>,
    pub clip: PlayerClip,
}

/// Left wins over right; a jump needs ground under the player.
pub fn steer(keys: KeySnapshot, grounded: bool) -> MotionCommand {
    let (velocity_x, clip) = if keys.left {
        (-SPEED, PlayerClip::Left)
    } else if keys.right {
        (SPEED, PlayerClip::Right)
    } else {
        (0.0, PlayerClip::Center)
    };
    MotionCommand {
        velocity_x,
        velocity_y: (keys.up && grounded).then_some(JUMP_VELOCITY),
        clip,
    }
}

/// Push a command into the engine. The clip only restarts when it changes.
pub fn apply(ctx: &mut EngineContext, player: EntityId, command: MotionCommand) {
    ctx.set_velocity_x(player, command.velocity_x);
    if let Some(vy) = command.velocity_y {
        ctx.set_velocity_y(player, vy);
    }
    ctx.play_animation_if_different(player, command.clip.name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopper_engine::InputEvent;

    fn snapshot(left: bool, right: bool, up: bool) -> KeySnapshot {
        KeySnapshot { left, right, up }
    }

    fn all_snapshots() -> impl Iterator<Item = KeySnapshot> {
        (0..8).map(|bits| snapshot(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    #[test]
    fn run_left_on_the_ground() {
        let cmd = steer(snapshot(true, false, false), true);
        assert_eq!(cmd.velocity_x, -150.0);
        assert_eq!(cmd.velocity_y, None);
        assert_eq!(cmd.clip, PlayerClip::Left);
        assert_eq!(cmd.clip.name(), "left");
    }

    #[test]
    fn jump_in_place() {
        let cmd = steer(snapshot(false, false, true), true);
        assert_eq!(cmd.velocity_x, 0.0);
        assert_eq!(cmd.velocity_y, Some(-700.0));
        assert_eq!(cmd.clip.name(), "center");
    }

    #[test]
    fn left_takes_priority_over_everything() {
        for keys in all_snapshots().filter(|k| k.left) {
            for grounded in [false, true] {
                let cmd = steer(keys, grounded);
                assert_eq!(cmd.velocity_x, -SPEED);
                assert_eq!(cmd.clip, PlayerClip::Left);
            }
        }
    }

    #[test]
    fn right_without_left_runs_right() {
        for keys in all_snapshots().filter(|k| !k.left && k.right) {
            let cmd = steer(keys, true);
            assert_eq!(cmd.velocity_x, SPEED);
            assert_eq!(cmd.clip, PlayerClip::Right);
        }
    }

    #[test]
    fn no_direction_stops_and_faces_center() {
        for keys in all_snapshots().filter(|k| !k.left && !k.right) {
            let cmd = steer(keys, false);
            assert_eq!(cmd.velocity_x, 0.0);
            assert_eq!(cmd.clip, PlayerClip::Center);
        }
    }

    #[test]
    fn jump_only_when_grounded() {
        for keys in all_snapshots() {
            assert_eq!(steer(keys, false).velocity_y, None);
            let expected = keys.up.then_some(JUMP_VELOCITY);
            assert_eq!(steer(keys, true).velocity_y, expected);
        }
    }

    #[test]
    fn snapshot_reads_arrow_keys() {
        let mut input = InputState::new();
        input.apply(&InputEvent::KeyDown { key_code: keys::RIGHT });
        input.apply(&InputEvent::KeyDown { key_code: keys::UP });
        assert_eq!(KeySnapshot::from_input(&input), snapshot(false, true, true));

        input.apply(&InputEvent::KeyUp { key_code: keys::UP });
        assert_eq!(KeySnapshot::from_input(&input), snapshot(false, true, false));
    }

    #[test]
    fn clip_frames_match_the_sheet() {
        assert_eq!(PlayerClip::Left.clip().frames, vec![0, 1, 2, 3]);
        assert_eq!(PlayerClip::Center.clip().frames, vec![4]);
        assert_eq!(PlayerClip::Right.clip().frames, vec![5, 6, 7, 8]);
        assert!(PlayerClip::Left.clip().looping);
        assert!(!PlayerClip::Center.clip().looping);
    }
}
