use glam::Vec2;

use crate::api::types::{EntityId, GameEvent};
use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SheetRegistry;
use crate::components::entity::Entity;
use crate::core::scale::ScaleManager;
use crate::core::scene::Scene;
use crate::extensions::tween::TweenState;
use crate::input::state::InputState;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::systems::animation::tick_animations;
use crate::systems::text::{build_text_entities, despawn_text, TextLabel};
#[cfg(feature = "physics")]
use crate::core::physics::{
    BodyDesc, ColliderDesc, ColliderMaterial, CollisionLayers, CollisionPair, OverlapPair,
    PhysicsWorld,
};

/// Tag carried by the walls spawned by `EngineContext::build_world_bounds`.
pub const WORLD_BOUNDS_TAG: &str = "world_bounds";

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// RGBA clear colour for the host renderer.
    pub clear_color: [f32; 4],
    /// Asset manifest JSON (see `AssetManifest`), loaded before `Game::init`.
    pub manifest: &'static str,
    /// Gravity vector. Y-down, so positive Y pulls toward the bottom of the screen.
    #[cfg(feature = "physics")]
    pub gravity: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 512,
            max_events: 32,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            manifest: r#"{ "sheets": [] }"#,
            #[cfg(feature = "physics")]
            gravity: Vec2::ZERO,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-tick logic, run before the physics step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// A sensor overlap began between two live entities during the last physics step.
    #[cfg(feature = "physics")]
    fn on_overlap(&mut self, _ctx: &mut EngineContext, _pair: OverlapPair) {}

    /// Optional pass for extra render instances after the scene is drawn.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to the `Game` hooks.
pub struct EngineContext {
    pub scene: Scene,
    pub scale: ScaleManager,
    pub camera: Camera2D,
    pub tweens: TweenState,
    pub events: Vec<GameEvent>,
    /// Sheets declared by the loaded manifest.
    pub assets: SheetRegistry,
    world_size: Vec2,
    next_id: u32,
    camera_target: Option<EntityId>,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    #[cfg(feature = "physics")]
    contacts: Vec<CollisionPair>,
    #[cfg(feature = "physics")]
    overlaps: Vec<OverlapPair>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context sized and configured for `config`.
    pub fn with_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut world = PhysicsWorld::new(config.gravity);
            world.set_dt(config.fixed_dt);
            world
        };
        Self {
            scene: Scene::new(),
            scale: ScaleManager::new(),
            camera: Camera2D::new(config.world_width, config.world_height),
            tweens: TweenState::new(),
            events: Vec::with_capacity(config.max_events),
            assets: SheetRegistry::new(),
            world_size: Vec2::new(config.world_width, config.world_height),
            next_id: 1,
            camera_target: None,
            #[cfg(feature = "physics")]
            physics,
            #[cfg(feature = "physics")]
            contacts: Vec::new(),
            #[cfg(feature = "physics")]
            overlaps: Vec::new(),
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Parse a manifest and make its sheets available through `assets`.
    /// On error the previous registry is kept. Returns the number of sheets.
    pub fn load_manifest(&mut self, json: &str) -> Result<usize, AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        self.assets = SheetRegistry::from_manifest(&manifest);
        log::info!("assets: {} sheets registered", self.assets.len());
        Ok(self.assets.len())
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, physics reports).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "physics")]
        {
            self.contacts.clear();
            self.overlaps.clear();
        }
    }

    /// Add a plain entity (no physics body) to the scene.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity together with its body and tweens.
    pub fn despawn(&mut self, id: EntityId) {
        self.tweens.remove_entity(id);
        if self.camera_target == Some(id) {
            self.camera_target = None;
        }
        let Some(_entity) = self.scene.despawn(id) else {
            return;
        };
        #[cfg(feature = "physics")]
        if let Some(body) = &_entity.body {
            self.physics.remove_body(body);
        }
    }

    /// Show the frame `frame` on an entity's sprite.
    pub fn set_frame(&mut self, id: EntityId, frame: u32) {
        if let Some(entity) = self.scene.get_mut(id) {
            entity.set_frame(frame);
        }
    }

    /// Play the named clip unless it is already the current one.
    /// Returns true if the clip was (re)started.
    pub fn play_animation_if_different(&mut self, id: EntityId, clip: &str) -> bool {
        self.scene
            .get_mut(id)
            .and_then(|e| e.animation.as_mut())
            .is_some_and(|anim| anim.play_if_different(clip))
    }

    /// Replace the glyphs of a text label with `text`.
    pub fn write_text(&mut self, label: &TextLabel, text: &str) {
        despawn_text(&mut self.scene, &label.tag);
        let mut next = self.next_id;
        let glyphs = build_text_entities(text, label, &mut || {
            let id = EntityId(next);
            next += 1;
            id
        });
        self.next_id = next;
        for glyph in glyphs {
            self.scene.spawn(glyph);
        }
    }

    /// Keep the camera on `id` each tick, clamped to the camera bounds.
    pub fn follow(&mut self, id: EntityId) {
        self.camera_target = Some(id);
        if let Some(entity) = self.scene.get(id) {
            self.camera.look_at(entity.center());
        }
    }

    pub fn camera_target(&self) -> Option<EntityId> {
        self.camera_target
    }

    /// Advance tweens, sprite animations and the camera by one tick.
    pub fn tick_presentation(&mut self, dt: f32) {
        self.tweens.tick(dt, &mut self.scene);
        tick_animations(&mut self.scene, dt);
        if let Some(target) = self.camera_target.and_then(|id| self.scene.get(id)) {
            self.camera.follow(target.center(), dt);
        }
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body centered on the entity's drawn rectangle.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let desc = desc.with_position(entity.center());
        let body = self.physics.create_body(id, &desc, material);
        self.scene.spawn(entity.with_body(body));
        id
    }

    /// Surround the world rectangle with four fixed walls of the given thickness.
    /// Returns the wall entity IDs (top, bottom, left, right).
    #[cfg(feature = "physics")]
    pub fn build_world_bounds(&mut self, thickness: f32, layers: CollisionLayers) -> [EntityId; 4] {
        let Vec2 { x: w, y: h } = self.world_size;
        let half = thickness / 2.0;
        let walls = [
            (Vec2::new(w / 2.0, -half), Vec2::new(w + thickness * 2.0, thickness)),
            (Vec2::new(w / 2.0, h + half), Vec2::new(w + thickness * 2.0, thickness)),
            (Vec2::new(-half, h / 2.0), Vec2::new(thickness, h)),
            (Vec2::new(w + half, h / 2.0), Vec2::new(thickness, h)),
        ];
        walls.map(|(center, size)| {
            let id = self.next_id();
            let entity = Entity::new(id)
                .with_tag(WORLD_BOUNDS_TAG)
                .with_pos(center)
                .with_size(size);
            let desc = BodyDesc::fixed(ColliderDesc::rect(size.x, size.y)).with_layers(layers);
            self.spawn_with_body(entity, desc, ColliderMaterial::default())
        })
    }

    /// Set the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body.as_ref()) {
            self.physics.set_velocity(body, vel);
        }
    }

    /// Set only the horizontal velocity, keeping the vertical component.
    #[cfg(feature = "physics")]
    pub fn set_velocity_x(&mut self, id: EntityId, vx: f32) {
        let vel = self.velocity(id);
        self.set_velocity(id, Vec2::new(vx, vel.y));
    }

    /// Set only the vertical velocity, keeping the horizontal component.
    #[cfg(feature = "physics")]
    pub fn set_velocity_y(&mut self, id: EntityId, vy: f32) {
        let vel = self.velocity(id);
        self.set_velocity(id, Vec2::new(vel.x, vy));
    }

    /// Linear velocity of an entity's body, zero if it has none.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Whether the entity's body is standing on something after the last step.
    #[cfg(feature = "physics")]
    pub fn is_grounded(&self, id: EntityId) -> bool {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .is_some_and(|body| self.physics.is_grounded(body))
    }

    /// Solid contacts started or stopped during the last physics step.
    #[cfg(feature = "physics")]
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.contacts
    }

    /// Sensor overlaps started during the last physics step.
    #[cfg(feature = "physics")]
    pub fn overlaps(&self) -> &[OverlapPair] {
        &self.overlaps
    }

    /// Take the overlaps of the last step, leaving none behind.
    #[cfg(feature = "physics")]
    pub fn take_overlaps(&mut self) -> Vec<OverlapPair> {
        std::mem::take(&mut self.overlaps)
    }

    /// Step the physics simulation and sync body positions back to entities.
    /// Called by the game runner after `Game::update()`.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.contacts.clear();
        self.overlaps.clear();
        self.physics.step_into(&mut self.contacts, &mut self.overlaps);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (center, rot) = self.physics.body_position(body);
                entity.set_center(center);
                entity.rotation = rot;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
