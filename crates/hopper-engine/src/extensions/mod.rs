// Tweening: property transitions keyed by EntityId, ticked over the Scene.

pub mod easing;
pub mod tween;

pub use easing::{ease, lerp, Easing};
pub use tween::{Tween, TweenId, TweenProperty, TweenRepeat, TweenState, TweenValue};
