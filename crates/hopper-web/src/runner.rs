use hopper_engine::systems::render::build_render_buffer;
use hopper_engine::{
    DisplayRequest, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
    InputState, RenderBuffer, RenderContext,
};

use crate::fullscreen;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner through
/// `export_game!`, because wasm-bindgen cannot export generic structs.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    queue: InputQueue,
    input: InputState,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    /// Requests forwarded to the host during the last tick.
    display_requests: Vec<DisplayRequest>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::with_config(&config),
            timestep: FixedTimestep::new(config.fixed_dt),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            game,
            queue: InputQueue::new(),
            input: InputState::new(),
            config,
            display_requests: Vec::new(),
            initialized: false,
        }
    }

    /// Load the game's manifest and build its scene. Call once after construction.
    pub fn init(&mut self) {
        if let Err(e) = self.ctx.load_manifest(self.config.manifest) {
            log::error!("assets: {e}");
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "runner: scene ready, {} entities, {}x{} world",
            self.ctx.scene.len(),
            self.config.world_width,
            self.config.world_height
        );
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame: fold input, run fixed steps, build the render buffer
    /// and forward display requests.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for event in self.queue.drain() {
            if let InputEvent::FullscreenChanged { active } = event {
                self.ctx.scale.set_fullscreen(active);
            }
            self.input.apply(&event);
        }

        let step_dt = self.timestep.dt();
        for _ in 0..self.timestep.accumulate(dt) {
            self.game.update(&mut self.ctx, &self.input);

            #[cfg(feature = "physics")]
            {
                self.ctx.step_physics();
                for pair in self.ctx.take_overlaps() {
                    // An earlier handler this step may have despawned either side.
                    if self.ctx.scene.contains(pair.entity_a) && self.ctx.scene.contains(pair.entity_b) {
                        self.game.on_overlap(&mut self.ctx, pair);
                    }
                }
            }

            self.ctx.tick_presentation(step_dt);
            self.input.clear_edges();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.display_requests = self.ctx.scale.drain_requests();
        for &request in &self.display_requests {
            fullscreen::forward(request);
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn display_requests(&self) -> &[DisplayRequest] {
        &self.display_requests
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn camera_x(&self) -> f32 {
        self.ctx.camera.scroll().x
    }

    pub fn camera_y(&self) -> f32 {
        self.ctx.camera.scroll().y
    }

    pub fn camera_zoom(&self) -> f32 {
        self.ctx.camera.zoom
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.config.clear_color
    }

    pub fn manifest_json(&self) -> &'static str {
        self.config.manifest
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}

#[cfg(all(test, feature = "physics"))]
mod tests {
    use super::*;
    use glam::Vec2;
    use hopper_engine::{
        keys, BodyDesc, ColliderDesc, ColliderMaterial, CollisionLayers, Entity, EntityId,
        GameEvent, OverlapPair, SheetId, SpriteComponent,
    };

    /// Counts hooks and reacts to a few inputs.
    #[derive(Default)]
    struct Probe {
        updates: u32,
        presses_seen: u32,
        overlaps: Vec<OverlapPair>,
        despawn_on_overlap: bool,
    }

    impl Game for Probe {
        fn config(&self) -> GameConfig {
            GameConfig {
                gravity: Vec2::new(0.0, 1000.0),
                manifest: r#"{ "sheets": [
                    { "name": "apple", "path": "apple.png", "frame_width": 16, "frame_height": 16 }
                ] }"#,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let sheet = ctx.assets.get("apple").map_or(SheetId(0), |s| s.id);
            let hero = ctx.next_id();
            ctx.spawn_with_body(
                Entity::new(hero)
                    .with_pos(Vec2::new(100.0, 100.0))
                    .with_size(Vec2::splat(16.0))
                    .with_sprite(SpriteComponent::new(sheet, 0)),
                BodyDesc::dynamic(ColliderDesc::rect(16.0, 16.0))
                    .with_gravity_scale(0.0)
                    .with_layers(CollisionLayers::new(1, 2)),
                ColliderMaterial::default(),
            );
            for _ in 0..2 {
                let apple = ctx.next_id();
                ctx.spawn_with_body(
                    Entity::new(apple).with_pos(Vec2::new(100.0, 100.0)).with_size(Vec2::splat(16.0)),
                    BodyDesc::dynamic(ColliderDesc::rect(16.0, 16.0))
                        .with_gravity_scale(0.0)
                        .with_layers(CollisionLayers::new(2, 0))
                        .with_sensor(ColliderDesc::rect(16.0, 16.0), CollisionLayers::new(2, 1)),
                    ColliderMaterial::default(),
                );
            }
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
            self.updates += 1;
            if input.just_pressed(keys::F) {
                self.presses_seen += 1;
                ctx.scale.start_fullscreen();
                ctx.emit_event(GameEvent::new(7.0, 1.0));
            }
        }

        fn on_overlap(&mut self, ctx: &mut EngineContext, pair: OverlapPair) {
            self.overlaps.push(pair);
            if self.despawn_on_overlap {
                // Despawn the hero so later pairs of the same step lose a side.
                ctx.despawn(EntityId(1));
            }
        }
    }

    fn runner(game: Probe) -> GameRunner<Probe> {
        let mut runner = GameRunner::new(game);
        runner.init();
        runner
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(Probe::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn init_loads_manifest_and_builds_scene() {
        let runner = runner(Probe::default());
        assert_eq!(runner.context().assets.len(), 1);
        assert_eq!(runner.context().scene.len(), 3);
    }

    #[test]
    fn fixed_steps_follow_frame_time() {
        let mut runner = runner(Probe::default());
        runner.tick(3.0 / 60.0 + 0.001);
        assert_eq!(runner.game().updates, 3);
        assert_eq!(runner.instance_count(), 1);
    }

    #[test]
    fn key_press_is_seen_by_one_step_only() {
        let mut runner = runner(Probe::default());
        runner.push_input(InputEvent::KeyDown { key_code: keys::F });
        runner.tick(4.0 / 60.0 + 0.001);

        assert_eq!(runner.game().presses_seen, 1);
        assert_eq!(runner.display_requests(), &[DisplayRequest::EnterFullscreen]);
        assert_eq!(runner.game_events_len(), 1);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().presses_seen, 1);
        assert!(runner.display_requests().is_empty());
        assert_eq!(runner.game_events_len(), 0);
    }

    #[test]
    fn host_fullscreen_reports_update_scale_state() {
        let mut runner = runner(Probe::default());
        runner.push_input(InputEvent::FullscreenChanged { active: true });
        runner.tick(1.0 / 60.0);
        assert!(runner.context().scale.is_fullscreen());
    }

    #[test]
    fn overlaps_are_delivered_once_per_pair() {
        let mut runner = runner(Probe::default());
        for _ in 0..10 {
            runner.tick(1.0 / 60.0);
        }
        assert_eq!(runner.game().overlaps.len(), 2);
    }

    #[test]
    fn overlaps_with_despawned_entities_are_skipped() {
        let mut runner = runner(Probe {
            despawn_on_overlap: true,
            ..Probe::default()
        });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.game().overlaps.len(), 1);
    }
}
