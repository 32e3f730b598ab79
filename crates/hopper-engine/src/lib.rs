pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, RenderContext, WORLD_BOUNDS_TAG};
pub use api::types::{DisplayRequest, EntityId, GameEvent};
pub use assets::error::AssetError;
pub use assets::manifest::{AssetManifest, SheetDescriptor};
pub use assets::registry::{SheetInfo, SheetRegistry};
pub use components::animation::{AnimationClip, AnimationComponent};
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{SheetId, SpriteComponent};
pub use crate::core::rng::Rng;
pub use crate::core::scale::ScaleManager;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{keys, InputState};
pub use renderer::camera::Camera2D;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::tick_animations;
pub use systems::text::{FontConfig, TextLabel};

#[cfg(feature = "physics")]
pub use crate::core::physics::{
    BodyDesc, BodyType, ColliderDesc, ColliderMaterial, CollisionLayers, CollisionPair,
    OverlapPair, PhysicsBody, PhysicsWorld, SensorDesc,
};

pub use extensions::{ease, lerp, Easing, Tween, TweenId, TweenProperty, TweenRepeat, TweenState, TweenValue};
