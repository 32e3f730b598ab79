//! One-time scene setup: backdrop, rays, terrain, player, apples, HUD, camera.

use glam::Vec2;
use hopper_engine::{
    AnimationComponent, BodyDesc, ColliderDesc, ColliderMaterial, CollisionLayers, EngineContext,
    Entity, EntityId, FontConfig, RenderLayer, Rng, SheetId, SheetInfo, SpriteComponent,
    TextLabel, Tween, TweenRepeat,
};

use crate::controller::PlayerClip;

pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 600.0;
pub const GRAVITY: f32 = 1000.0;
/// White.
pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const WALL_THICKNESS: f32 = 64.0;

const GROUND_HEIGHT: f32 = 128.0;
const GROUND_TOP: f32 = WORLD_H - GROUND_HEIGHT;
/// Platform centers. Each is the ground tile scaled 2 x 0.5.
pub const PLATFORMS: [Vec2; 3] = [
    Vec2::new(450.0, 350.0),
    Vec2::new(700.0, 150.0),
    Vec2::new(100.0, 200.0),
];
const PLATFORM_SCALE: Vec2 = Vec2::new(2.0, 0.5);

const RAY_COUNT_PER_SIDE: i32 = 10;
const RAY_ORIGIN: Vec2 = Vec2::new(WORLD_W / 2.0, WORLD_H - 100.0);
const RAY_HEIGHT: f32 = 1.2 * WORLD_H;
const RAY_ALPHA: f32 = 0.2;
const RAY_STEP_DEG: f32 = 10.0;
const RAY_SWEEP_DEG: f32 = 20.0;
const RAY_SWEEP_SECS: f32 = 8.0;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);
const PLAYER_START_FRAME: u32 = 4;
const PLAYER_BOUNCE: f32 = 0.3;

pub const FRUIT_COUNT: usize = 9;
const FRUIT_START_X: f32 = 10.0;
const FRUIT_STEP_X: f32 = 100.0;
const FRUIT_SCALE: f32 = 0.2;
const FRUIT_BOUNCE_MIN: f32 = 0.4;
const FRUIT_BOUNCE_MAX: f32 = 0.7;

const SCORE_POS: Vec2 = Vec2::new(16.0, 16.0);
const SCORE_FONT_SIZE: f32 = 32.0;
const BUTTON_POS: Vec2 = Vec2::new(WORLD_W - 16.0, 16.0);
pub const BUTTON_FRAME_WINDOWED: u32 = 0;
pub const BUTTON_FRAME_FULLSCREEN: u32 = 1;

/// Collision layer bits.
pub mod layers {
    pub const TERRAIN: u32 = 1 << 0;
    pub const PLAYER: u32 = 1 << 1;
    pub const FRUIT: u32 = 1 << 2;
    pub const WORLD: u32 = 1 << 3;
}

/// Entities the game keeps talking to after setup.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    pub player: EntityId,
    pub button: EntityId,
    pub fruits: Vec<EntityId>,
    pub score_label: TextLabel,
}

/// Look up a sheet, falling back to an empty placeholder so the scene
/// still builds (and plays) without art.
fn sheet(ctx: &EngineContext, name: &str, fallback: Vec2) -> SheetInfo {
    ctx.assets.require(name).unwrap_or_else(|e| {
        log::error!("scene: {e}, using a {}x{} placeholder", fallback.x, fallback.y);
        SheetInfo {
            id: SheetId(0),
            frame_size: fallback,
            frames: 1,
        }
    })
}

/// Build the whole scene. `initial_text` is drawn in the score label.
pub fn build(ctx: &mut EngineContext, rng: &mut Rng, initial_text: &str) -> SceneHandles {
    spawn_backdrop(ctx);
    spawn_rays(ctx);
    spawn_terrain(ctx);
    ctx.build_world_bounds(WALL_THICKNESS, CollisionLayers::new(layers::WORLD, layers::PLAYER));

    let player = spawn_player(ctx);
    let fruits = spawn_fruits(ctx, rng);

    let font = sheet(ctx, "font", Vec2::splat(SCORE_FONT_SIZE));
    let score_label = TextLabel::new("score", SCORE_POS, SCORE_FONT_SIZE, FontConfig::new(font.id));
    ctx.write_text(&score_label, initial_text);
    let button = spawn_fullscreen_button(ctx);

    ctx.camera.set_bounds(0.0, 0.0, WORLD_W, WORLD_H);
    ctx.camera.set_zoom(1.0);
    ctx.follow(player);

    log::info!(
        "scene: {} entities, {} fruits, {} platforms",
        ctx.scene.len(),
        fruits.len(),
        PLATFORMS.len()
    );

    SceneHandles {
        player,
        button,
        fruits,
        score_label,
    }
}

fn spawn_backdrop(ctx: &mut EngineContext) {
    let sky = sheet(ctx, "sky", Vec2::new(WORLD_W, WORLD_H));
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag("sky")
            .with_pos(Vec2::ZERO)
            .with_size(Vec2::new(WORLD_W, sky.frame_size.y))
            .with_sprite(
                SpriteComponent::new(sky.id, 0)
                    .with_anchor(0.0, 0.0)
                    .with_layer(RenderLayer::Background),
            ),
    );
}

/// Fan of translucent rays pivoting on their bottom edge, each swinging
/// forward 20 degrees over eight seconds and snapping back.
fn spawn_rays(ctx: &mut EngineContext) {
    let ray = sheet(ctx, "ray", Vec2::new(64.0, 512.0));
    for i in -RAY_COUNT_PER_SIDE..=RAY_COUNT_PER_SIDE {
        let id = ctx.next_id();
        ctx.spawn(
            Entity::new(id)
                .with_tag("ray")
                .with_pos(RAY_ORIGIN)
                .with_rotation((i as f32 * RAY_STEP_DEG).to_radians())
                .with_size(Vec2::new(ray.frame_size.x, RAY_HEIGHT))
                .with_sprite(
                    SpriteComponent::new(ray.id, 0)
                        .with_anchor(0.5, 1.0)
                        .with_alpha(RAY_ALPHA)
                        .with_layer(RenderLayer::Decoration),
                ),
        );
        ctx.tweens.add(
            id,
            Tween::rotate_by(RAY_SWEEP_DEG.to_radians(), RAY_SWEEP_SECS)
                .with_repeat(TweenRepeat::Forever),
        );
    }
}

fn terrain_layers() -> CollisionLayers {
    CollisionLayers::new(layers::TERRAIN, layers::PLAYER | layers::FRUIT)
}

fn spawn_terrain(ctx: &mut EngineContext) {
    let ground = sheet(ctx, "ground", Vec2::splat(GROUND_HEIGHT));

    let id = ctx.next_id();
    let strip = Vec2::new(WORLD_W, GROUND_HEIGHT);
    ctx.spawn_with_body(
        Entity::new(id)
            .with_tag("ground")
            .with_pos(Vec2::new(0.0, GROUND_TOP))
            .with_size(strip)
            .with_sprite(
                SpriteComponent::new(ground.id, 0)
                    .with_anchor(0.0, 0.0)
                    .with_layer(RenderLayer::Terrain)
                    .tiled(),
            ),
        BodyDesc::fixed(ColliderDesc::rect(strip.x, strip.y)).with_layers(terrain_layers()),
        ColliderMaterial::default(),
    );

    let size = ground.scaled(PLATFORM_SCALE.x, PLATFORM_SCALE.y);
    for center in PLATFORMS {
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id)
                .with_tag("platform")
                .with_pos(center)
                .with_size(size)
                .with_sprite(SpriteComponent::new(ground.id, 0).with_layer(RenderLayer::Terrain)),
            BodyDesc::fixed(ColliderDesc::rect(size.x, size.y)).with_layers(terrain_layers()),
            ColliderMaterial::default(),
        );
    }
}

fn spawn_player(ctx: &mut EngineContext) -> EntityId {
    let dude = sheet(ctx, "dude", Vec2::new(32.0, 48.0));
    let animation = PlayerClip::ALL
        .iter()
        .fold(AnimationComponent::new(), |anim, clip| anim.with_clip(clip.name(), clip.clip()));

    let id = ctx.next_id();
    ctx.spawn_with_body(
        Entity::new(id)
            .with_tag("player")
            .with_pos(PLAYER_SPAWN)
            .with_size(dude.frame_size)
            .with_sprite(SpriteComponent::new(dude.id, PLAYER_START_FRAME))
            .with_animation(animation),
        BodyDesc::dynamic(ColliderDesc::rect(dude.frame_size.x, dude.frame_size.y))
            .with_fixed_rotation(true)
            .with_layers(CollisionLayers::new(
                layers::PLAYER,
                layers::TERRAIN | layers::WORLD | layers::FRUIT,
            )),
        ColliderMaterial::bouncy(PLAYER_BOUNCE),
    )
}

/// A row of apples dropped from the top edge. Each bounces off the terrain
/// with its own restitution and carries a sensor that only the player trips.
fn spawn_fruits(ctx: &mut EngineContext, rng: &mut Rng) -> Vec<EntityId> {
    let apple = sheet(ctx, "apple", Vec2::splat(128.0));
    let size = apple.scaled(FRUIT_SCALE, FRUIT_SCALE);

    (0..FRUIT_COUNT)
        .map(|k| {
            let id = ctx.next_id();
            let pos = Vec2::new(FRUIT_START_X + FRUIT_STEP_X * k as f32, 0.0);
            let bounce = rng.float_between(FRUIT_BOUNCE_MIN, FRUIT_BOUNCE_MAX);
            ctx.spawn_with_body(
                Entity::new(id)
                    .with_tag("apple")
                    .with_pos(pos)
                    .with_size(size)
                    .with_sprite(SpriteComponent::new(apple.id, 0)),
                BodyDesc::dynamic(ColliderDesc::rect(size.x, size.y))
                    .with_fixed_rotation(true)
                    .with_layers(CollisionLayers::new(layers::FRUIT, layers::TERRAIN))
                    .with_sensor(
                        ColliderDesc::rect(size.x, size.y),
                        CollisionLayers::new(layers::FRUIT, layers::PLAYER),
                    ),
                ColliderMaterial::bouncy(bounce),
            )
        })
        .collect()
}

fn spawn_fullscreen_button(ctx: &mut EngineContext) -> EntityId {
    let icon = sheet(ctx, "fullscreen", Vec2::splat(64.0));
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag("fullscreen_button")
            .with_pos(BUTTON_POS)
            .with_size(icon.frame_size)
            .with_sprite(
                SpriteComponent::new(icon.id, BUTTON_FRAME_WINDOWED)
                    .with_anchor(1.0, 0.0)
                    .with_layer(RenderLayer::Ui),
            ),
    )
}
