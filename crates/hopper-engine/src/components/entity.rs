use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::AnimationComponent;
use crate::components::sprite::SpriteComponent;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Fat Entity — a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for finding entities by role ("apple", "platform").
    pub tag: String,
    /// Inactive entities are skipped by animation and rendering.
    pub active: bool,
    /// Position in world space. For physics entities this is the body center.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rendered size in world units.
    pub size: Vec2,
    pub sprite: Option<SpriteComponent>,
    pub animation: Option<AnimationComponent>,
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ONE,
            sprite: None,
            animation: None,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.animation = Some(animation);
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the sprite frame directly. No-op for entities without a sprite.
    pub fn set_frame(&mut self, frame: u32) {
        if let Some(sprite) = &mut self.sprite {
            sprite.frame = frame;
        }
    }

    fn anchor(&self) -> Vec2 {
        self.sprite.as_ref().map_or(Vec2::splat(0.5), |s| s.anchor)
    }

    /// Center of the drawn rectangle (rotation ignored).
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * (Vec2::splat(0.5) - self.anchor())
    }

    /// Move the entity so its drawn rectangle is centered on `center`.
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * (Vec2::splat(0.5) - self.anchor());
    }

    /// Whether `point` lies inside the sprite's drawn rectangle (rotation ignored).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.pos - self.size * self.anchor();
        let max = min + self.size;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
