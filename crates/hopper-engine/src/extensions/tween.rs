use std::collections::HashMap;

use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::extensions::easing::{ease, Easing};

/// Entity property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProperty {
    /// `Entity::rotation`, radians.
    Rotation,
    /// Sprite alpha. Entities without a sprite are left alone.
    Alpha,
}

/// End value of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// Absolute end value.
    To(f32),
    /// End value relative to the property's value when the tween first runs.
    By(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenRepeat {
    /// Play once, then remove the tween.
    #[default]
    Never,
    /// Replay from the start value this many extra times.
    Times(u32),
    /// Replay from the start value forever.
    Forever,
}

/// A single property transition.
#[derive(Debug, Clone)]
pub struct Tween {
    pub property: TweenProperty,
    pub value: TweenValue,
    /// Seconds per cycle.
    pub duration: f32,
    pub easing: Easing,
    pub repeat: TweenRepeat,
    elapsed: f32,
    /// Resolved on the first tick: (start, end).
    span: Option<(f32, f32)>,
}

impl Tween {
    pub fn new(property: TweenProperty, value: TweenValue, duration: f32) -> Self {
        Self {
            property,
            value,
            duration,
            easing: Easing::Linear,
            repeat: TweenRepeat::Never,
            elapsed: 0.0,
            span: None,
        }
    }

    /// Rotate by `radians` relative to the entity's rotation.
    pub fn rotate_by(radians: f32, duration: f32) -> Self {
        Self::new(TweenProperty::Rotation, TweenValue::By(radians), duration)
    }

    pub fn fade_to(alpha: f32, duration: f32) -> Self {
        Self::new(TweenProperty::Alpha, TweenValue::To(alpha), duration)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat: TweenRepeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Progress through the current cycle, 0..=1.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn resolve(&self, current: f32) -> (f32, f32) {
        match self.value {
            TweenValue::To(end) => (current, end),
            TweenValue::By(delta) => (current, current + delta),
        }
    }

    /// Advance by `dt`. Returns true when the tween has finished for good.
    fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.duration {
            return false;
        }
        match self.repeat {
            TweenRepeat::Never => true,
            TweenRepeat::Times(0) => true,
            TweenRepeat::Times(n) => {
                self.repeat = TweenRepeat::Times(n - 1);
                self.wrap();
                false
            }
            TweenRepeat::Forever => {
                self.wrap();
                false
            }
        }
    }

    fn wrap(&mut self) {
        if self.duration > 0.0 {
            self.elapsed %= self.duration;
        } else {
            self.elapsed = 0.0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// All running tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, (EntityId, Tween)>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (entity, tween));
        id
    }

    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Drop every tween that drives `entity`.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|_, (e, _)| *e != entity);
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id).map(|(_, t)| t)
    }

    /// Advance every tween and write the eased values into the scene.
    /// Tweens whose entity no longer exists are dropped.
    /// Returns the number of tweens that finished this tick.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> usize {
        let mut finished = Vec::new();

        for (&id, (entity_id, tween)) in self.tweens.iter_mut() {
            let Some(entity) = scene.get_mut(*entity_id) else {
                finished.push(id);
                continue;
            };

            let current = match tween.property {
                TweenProperty::Rotation => Some(entity.rotation),
                TweenProperty::Alpha => entity.sprite.as_ref().map(|s| s.alpha),
            };
            let Some(current) = current else {
                finished.push(id);
                continue;
            };
            let (from, to) = match tween.span {
                Some(span) => span,
                None => {
                    let span = tween.resolve(current);
                    tween.span = Some(span);
                    span
                }
            };

            let done = tween.advance(dt);
            let t = if done { 1.0 } else { tween.progress() };
            let value = ease(from, to, t, tween.easing);

            match tween.property {
                TweenProperty::Rotation => entity.rotation = value,
                TweenProperty::Alpha => {
                    if let Some(sprite) = &mut entity.sprite {
                        sprite.alpha = value;
                    }
                }
            }

            if done {
                finished.push(id);
            }
        }

        let count = finished.len();
        for id in finished {
            self.tweens.remove(&id);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::sprite::{SheetId, SpriteComponent};

    fn scene_with(entity: Entity) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(entity);
        scene
    }

    #[test]
    fn relative_rotation_starts_from_current_angle() {
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id).with_rotation(1.0));
        let mut tweens = TweenState::new();
        tweens.add(id, Tween::rotate_by(0.5, 2.0));

        tweens.tick(1.0, &mut scene);
        assert!((scene.get(id).unwrap().rotation - 1.25).abs() < 1e-5);

        assert_eq!(tweens.tick(1.0, &mut scene), 1);
        assert!((scene.get(id).unwrap().rotation - 1.5).abs() < 1e-5);
        assert!(tweens.is_empty());
    }

    #[test]
    fn forever_replays_from_the_original_start() {
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id).with_rotation(0.0));
        let mut tweens = TweenState::new();
        tweens.add(id, Tween::rotate_by(1.0, 4.0).with_repeat(TweenRepeat::Forever));

        for _ in 0..5 {
            tweens.tick(1.0, &mut scene);
        }
        // Five seconds into four-second cycles: one quarter into the second cycle.
        assert!((scene.get(id).unwrap().rotation - 0.25).abs() < 1e-5);
        assert_eq!(tweens.len(), 1);
    }

    #[test]
    fn counted_repeats_then_finish() {
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));
        let mut tweens = TweenState::new();
        tweens.add(id, Tween::rotate_by(1.0, 1.0).with_repeat(TweenRepeat::Times(1)));

        assert_eq!(tweens.tick(1.0, &mut scene), 0);
        assert_eq!(tweens.tick(1.0, &mut scene), 1);
        assert!((scene.get(id).unwrap().rotation - 1.0).abs() < 1e-5);
    }

    #[test]
    fn fades_sprite_alpha() {
        let id = EntityId(1);
        let sprite = SpriteComponent::new(SheetId(0), 0).with_alpha(1.0);
        let mut scene = scene_with(Entity::new(id).with_sprite(sprite));
        let mut tweens = TweenState::new();
        tweens.add(id, Tween::fade_to(0.0, 1.0).with_easing(Easing::QuadIn));

        tweens.tick(0.5, &mut scene);
        let alpha = scene.get(id).unwrap().sprite.as_ref().unwrap().alpha;
        assert!((alpha - 0.75).abs() < 1e-5);
    }

    #[test]
    fn tweens_on_despawned_entities_are_dropped() {
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));
        let mut tweens = TweenState::new();
        tweens.add(id, Tween::rotate_by(1.0, 1.0).with_repeat(TweenRepeat::Forever));

        scene.despawn(id);
        tweens.tick(0.1, &mut scene);
        assert!(tweens.is_empty());
    }

    #[test]
    fn remove_entity_drops_all_its_tweens() {
        let mut tweens = TweenState::new();
        tweens.add(EntityId(1), Tween::rotate_by(1.0, 1.0));
        tweens.add(EntityId(1), Tween::fade_to(0.0, 1.0));
        let keep = tweens.add(EntityId(2), Tween::rotate_by(1.0, 1.0));

        tweens.remove_entity(EntityId(1));
        assert_eq!(tweens.len(), 1);
        assert!(tweens.get(keep).is_some());
    }
}
