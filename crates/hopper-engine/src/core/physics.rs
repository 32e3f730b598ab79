use glam::Vec2;
use rapier2d::prelude::*;
use std::sync::Mutex;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// World units per meter. Rapier's contact tolerances scale with it.
const LENGTH_UNIT: f32 = 100.0;

/// Minimum downward component of a contact normal (unit length) for the
/// contact to count as standing on a surface.
const GROUND_NORMAL_MIN: f32 = 0.7;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Moved by gravity, velocity and contacts.
    Dynamic,
    /// Static collision geometry. Never moves.
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    /// Axis-aligned box from a full width and height.
    pub fn rect(width: f32, height: f32) -> Self {
        ColliderDesc::Cuboid {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Ball { radius } => ColliderBuilder::ball(radius),
            ColliderDesc::Cuboid { half_width, half_height } => {
                ColliderBuilder::cuboid(half_width, half_height)
            }
        }
    }
}

/// Physical material properties for a collider.
///
/// Restitution combines with `Max`, so a bouncy body keeps its own bounce
/// against the zero-restitution level geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.0,
            density: 1.0,
        }
    }
}

impl ColliderMaterial {
    pub fn bouncy(restitution: f32) -> Self {
        Self {
            restitution,
            ..Self::default()
        }
    }
}

/// Collision layer bitmasks. Two colliders interact when each one's
/// `memberships` intersects the other's `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionLayers {
    pub memberships: u32,
    pub filter: u32,
}

impl CollisionLayers {
    pub const ALL: Self = Self {
        memberships: u32::MAX,
        filter: u32::MAX,
    };

    pub const fn new(memberships: u32, filter: u32) -> Self {
        Self { memberships, filter }
    }

    fn to_rapier(self) -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(self.memberships),
            Group::from_bits_truncate(self.filter),
        )
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::ALL
    }
}

/// An extra non-solid collider attached to a body. It reports overlaps
/// without any collision response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorDesc {
    pub collider: ColliderDesc,
    pub layers: CollisionLayers,
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub fixed_rotation: bool,
    pub ccd: bool,
    pub collider: ColliderDesc,
    pub layers: CollisionLayers,
    pub sensor: Option<SensorDesc>,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            fixed_rotation: false,
            ccd: false,
            collider,
            layers: CollisionLayers::ALL,
            sensor: None,
        }
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            gravity_scale: 0.0,
            fixed_rotation: true,
            ..Self::dynamic(collider)
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn with_fixed_rotation(mut self, fixed: bool) -> Self {
        self.fixed_rotation = fixed;
        self
    }

    pub fn with_ccd(mut self, enabled: bool) -> Self {
        self.ccd = enabled;
        self
    }

    pub fn with_layers(mut self, layers: CollisionLayers) -> Self {
        self.layers = layers;
        self
    }

    /// Attach an overlap sensor to the body.
    pub fn with_sensor(mut self, collider: ColliderDesc, layers: CollisionLayers) -> Self {
        self.sensor = Some(SensorDesc { collider, layers });
        self
    }
}

/// Handles stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
    pub sensor_handle: Option<ColliderHandle>,
}

/// A contact between two solid colliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub entity_a: EntityId,
    pub entity_b: EntityId,
    /// `true` when the contact just started, `false` when it ended.
    pub started: bool,
}

/// A sensor overlap that began during the last step.
///
/// Rapier reports one start per continuous overlap span, so a pair is not
/// repeated while the two colliders stay intersecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapPair {
    pub entity_a: EntityId,
    pub entity_b: EntityId,
}

impl OverlapPair {
    /// Whether `id` is one of the two entities.
    pub fn involves(&self, id: EntityId) -> bool {
        self.entity_a == id || self.entity_b == id
    }

    /// The entity opposite `id`, if `id` is part of the pair.
    pub fn other(&self, id: EntityId) -> Option<EntityId> {
        if self.entity_a == id {
            Some(self.entity_b)
        } else if self.entity_b == id {
            Some(self.entity_a)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// WASM-safe event collector (no crossbeam)
// ---------------------------------------------------------------------------

struct DirectEventCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl DirectEventCollector {
    fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    fn drain_collisions(&self) -> Vec<CollisionEvent> {
        self.collisions
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl EventHandler for DirectEventCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let Ok(mut events) = self.collisions.lock() {
            events.push(event);
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: f32,
    ) {
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single struct.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    event_collector: DirectEventCollector,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    /// Y points down, so positive Y gravity pulls bodies toward the floor.
    pub fn new(gravity: Vec2) -> Self {
        let integration_parameters = IntegrationParameters {
            length_unit: LENGTH_UNIT,
            ..IntegrationParameters::default()
        };
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: DirectEventCollector::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    pub fn gravity(&self) -> Vec2 {
        na_to_vec2(&self.gravity)
    }

    /// Create a rigid body with its solid collider (and optional sensor).
    /// The EntityId is stored in the body's `user_data` for event lookups.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .linvel(vec2_to_na(desc.velocity))
            .gravity_scale(desc.gravity_scale)
            .locked_axes(if desc.fixed_rotation {
                LockedAxes::ROTATION_LOCKED
            } else {
                LockedAxes::empty()
            })
            .ccd_enabled(desc.ccd)
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .restitution(material.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .friction(material.friction)
            .density(material.density)
            .collision_groups(desc.layers.to_rapier())
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        let sensor_handle = desc.sensor.map(|sensor| {
            let collider = sensor
                .collider
                .build_collider()
                .sensor(true)
                .density(0.0)
                .collision_groups(sensor.layers.to_rapier())
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build();
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies)
        });

        PhysicsBody {
            body_handle,
            collider_handle,
            sensor_handle,
        }
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Step the simulation, then sort the raw Rapier events into solid
    /// contacts and sensor overlaps.
    pub fn step_into(
        &mut self,
        contacts: &mut Vec<CollisionPair>,
        overlaps: &mut Vec<OverlapPair>,
    ) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );

        for event in self.event_collector.drain_collisions() {
            let (h1, h2, started, flags) = match event {
                CollisionEvent::Started(h1, h2, flags) => (h1, h2, true, flags),
                CollisionEvent::Stopped(h1, h2, flags) => (h1, h2, false, flags),
            };

            // Colliders removed mid-step no longer resolve to an entity.
            let (Some(a), Some(b)) = (self.collider_to_entity(h1), self.collider_to_entity(h2))
            else {
                continue;
            };

            if flags.contains(CollisionEventFlags::SENSOR) {
                if started {
                    overlaps.push(OverlapPair { entity_a: a, entity_b: b });
                }
            } else {
                contacts.push(CollisionPair {
                    entity_a: a,
                    entity_b: b,
                    started,
                });
            }
        }
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| {
                let iso = rb.position();
                (
                    Vec2::new(iso.translation.x, iso.translation.y),
                    iso.rotation.angle(),
                )
            })
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Whether the body's solid collider rests on a surface below it.
    ///
    /// Reads the contact manifolds from the last step. A manifold normal is
    /// expressed from collider1 toward collider2, so it is flipped when the
    /// body is the second collider of the pair.
    pub fn is_grounded(&self, body: &PhysicsBody) -> bool {
        let handle = body.collider_handle;
        self.narrow_phase
            .contact_pairs_with(handle)
            .filter(|pair| pair.has_any_active_contact)
            .any(|pair| {
                let sign = if pair.collider1 == handle { 1.0 } else { -1.0 };
                pair.manifolds.iter().any(|manifold| {
                    !manifold.data.solver_contacts.is_empty()
                        && manifold.data.normal.y * sign > GROUND_NORMAL_MIN
                })
            })
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of colliders (solid and sensor) in the simulation.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    // -- private helpers --

    fn collider_to_entity(&self, collider_handle: ColliderHandle) -> Option<EntityId> {
        let collider = self.colliders.get(collider_handle)?;
        let body_handle = collider.parent()?;
        let body = self.bodies.get(body_handle)?;
        Some(EntityId(body.user_data as u32))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TERRAIN: u32 = 1 << 0;
    const HERO: u32 = 1 << 1;
    const PICKUP: u32 = 1 << 2;

    fn step_n(world: &mut PhysicsWorld, n: usize) -> (Vec<CollisionPair>, Vec<OverlapPair>) {
        let mut contacts = Vec::new();
        let mut overlaps = Vec::new();
        for _ in 0..n {
            world.step_into(&mut contacts, &mut overlaps);
        }
        (contacts, overlaps)
    }

    fn floor(world: &mut PhysicsWorld, id: u32, layers: CollisionLayers) -> PhysicsBody {
        // Top surface at y = 100.
        world.create_body(
            EntityId(id),
            &BodyDesc::fixed(ColliderDesc::rect(400.0, 20.0))
                .with_position(Vec2::new(0.0, 110.0))
                .with_layers(layers),
            ColliderMaterial::default(),
        )
    }

    #[test]
    fn create_and_remove_body_with_sensor() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 })
                .with_sensor(ColliderDesc::Ball { radius: 10.0 }, CollisionLayers::ALL),
            ColliderMaterial::default(),
        );
        assert!(body.sensor_handle.is_some());
        assert_eq!(world.body_count(), 1);
        assert_eq!(world.collider_count(), 2);

        world.remove_body(&body);
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
    }

    #[test]
    fn gravity_pulls_dynamic_body_down() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0)),
            ColliderMaterial::default(),
        );

        step_n(&mut world, 10);
        let (pos, _) = world.body_position(&body);
        assert!(pos.y > 0.0, "body should fall: y={}", pos.y);
    }

    #[test]
    fn fixed_body_does_not_move() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        let body = floor(&mut world, 1, CollisionLayers::ALL);

        step_n(&mut world, 10);
        let (pos, _) = world.body_position(&body);
        assert!((pos.y - 110.0).abs() < 0.001, "fixed body moved: y={}", pos.y);
    }

    #[test]
    fn set_velocity_directly() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 5.0 }),
            ColliderMaterial::default(),
        );

        world.set_velocity(&body, Vec2::new(-150.0, -700.0));
        let vel = world.velocity(&body);
        assert!((vel.x + 150.0).abs() < 0.001);
        assert!((vel.y + 700.0).abs() < 0.001);
    }

    #[test]
    fn body_resting_on_floor_is_grounded() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        floor(&mut world, 1, CollisionLayers::ALL);
        let hero = world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0))
                .with_position(Vec2::new(0.0, 40.0))
                .with_fixed_rotation(true),
            ColliderMaterial::default(),
        );

        assert!(!world.is_grounded(&hero), "not grounded before any step");
        step_n(&mut world, 90);
        assert!(world.is_grounded(&hero));

        let (pos, _) = world.body_position(&hero);
        assert!((pos.y - 76.0).abs() < 1.0, "should rest on the floor: y={}", pos.y);
    }

    #[test]
    fn airborne_body_is_not_grounded() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        floor(&mut world, 1, CollisionLayers::ALL);
        let hero = world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0))
                .with_position(Vec2::new(0.0, -400.0)),
            ColliderMaterial::default(),
        );

        step_n(&mut world, 2);
        assert!(!world.is_grounded(&hero));
    }

    #[test]
    fn ceiling_contact_is_not_grounded() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, -1000.0));
        world.set_dt(1.0 / 60.0);
        floor(&mut world, 1, CollisionLayers::ALL);
        // Gravity points up, so the body presses against the floor's underside.
        let hero = world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0))
                .with_position(Vec2::new(0.0, 150.0))
                .with_fixed_rotation(true),
            ColliderMaterial::default(),
        );

        step_n(&mut world, 90);
        assert!(!world.is_grounded(&hero));
    }

    #[test]
    fn layers_filter_solid_contacts() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        floor(&mut world, 1, CollisionLayers::new(TERRAIN, HERO));
        // A pickup only collides with terrain, and the floor only accepts heroes.
        let apple = world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 5.0 })
                .with_layers(CollisionLayers::new(PICKUP, TERRAIN)),
            ColliderMaterial::default(),
        );

        step_n(&mut world, 60);
        let (pos, _) = world.body_position(&apple);
        assert!(pos.y > 120.0, "apple should fall through: y={}", pos.y);
    }

    #[test]
    fn sensor_reports_overlap_once() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1000.0));
        world.set_dt(1.0 / 60.0);
        floor(&mut world, 1, CollisionLayers::new(TERRAIN, HERO | PICKUP));

        let hero = world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0))
                .with_position(Vec2::new(0.0, 76.0))
                .with_fixed_rotation(true)
                .with_layers(CollisionLayers::new(HERO, TERRAIN | PICKUP)),
            ColliderMaterial::default(),
        );
        let _apple = world.create_body(
            EntityId(3),
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 6.0 })
                .with_position(Vec2::new(0.0, -60.0))
                .with_layers(CollisionLayers::new(PICKUP, TERRAIN))
                .with_sensor(
                    ColliderDesc::Ball { radius: 6.0 },
                    CollisionLayers::new(PICKUP, HERO),
                ),
            ColliderMaterial::default(),
        );

        let (contacts, overlaps) = step_n(&mut world, 120);

        assert_eq!(overlaps.len(), 1, "overlaps: {:?}", overlaps);
        let pair = overlaps[0];
        assert!(pair.involves(EntityId(2)));
        assert_eq!(pair.other(EntityId(2)), Some(EntityId(3)));

        // Hero and apple never touch as solids.
        assert!(contacts
            .iter()
            .all(|c| !(c.entity_a == EntityId(2) && c.entity_b == EntityId(3))
                && !(c.entity_a == EntityId(3) && c.entity_b == EntityId(2))));
        assert!(world.is_grounded(&hero));
    }

    #[test]
    fn overlap_pair_other() {
        let pair = OverlapPair {
            entity_a: EntityId(4),
            entity_b: EntityId(9),
        };
        assert_eq!(pair.other(EntityId(9)), Some(EntityId(4)));
        assert_eq!(pair.other(EntityId(1)), None);
        assert!(!pair.involves(EntityId(1)));
    }

    #[test]
    fn builder_pattern() {
        let desc = BodyDesc::dynamic(ColliderDesc::rect(32.0, 48.0))
            .with_position(Vec2::new(100.0, 100.0))
            .with_velocity(Vec2::new(1.0, 2.0))
            .with_gravity_scale(0.5)
            .with_fixed_rotation(true)
            .with_ccd(true)
            .with_layers(CollisionLayers::new(HERO, TERRAIN));

        assert_eq!(desc.body_type, BodyType::Dynamic);
        assert_eq!(desc.position, Vec2::new(100.0, 100.0));
        assert_eq!(desc.collider, ColliderDesc::Cuboid { half_width: 16.0, half_height: 24.0 });
        assert!(desc.fixed_rotation && desc.ccd);
        assert_eq!(desc.layers.memberships, HERO);
        assert!(desc.sensor.is_none());

        let wall = BodyDesc::fixed(ColliderDesc::rect(10.0, 10.0));
        assert_eq!(wall.body_type, BodyType::Fixed);
        assert_eq!(wall.gravity_scale, 0.0);
    }

    #[test]
    fn material_defaults_are_arcade_style() {
        let mat = ColliderMaterial::default();
        assert_eq!(mat.restitution, 0.0);
        assert_eq!(mat.friction, 0.0);
        assert_eq!(ColliderMaterial::bouncy(0.3).restitution, 0.3);
    }
}
