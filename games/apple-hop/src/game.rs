use glam::Vec2;
use hopper_engine::{
    keys, EngineContext, EntityId, Game, GameConfig, GameEvent, InputState, OverlapPair, Rng,
};

use crate::controller::{self, KeySnapshot};
use crate::scene::{self, SceneHandles, BUTTON_FRAME_FULLSCREEN, BUTTON_FRAME_WINDOWED};
use crate::scoring::{eat_fruit, Orchard, Overlap, ScoreBoard};

const MANIFEST: &str = include_str!("../assets/manifest.json");
const RNG_SEED: u64 = 0xA991E;

/// Game event kinds sent to the host page.
pub const EVENT_SCORE: f32 = 1.0;

pub struct AppleHop {
    rng: Rng,
    handles: Option<SceneHandles>,
    board: ScoreBoard,
    orchard: Orchard,
}

impl AppleHop {
    pub fn new() -> Self {
        Self {
            rng: Rng::new(RNG_SEED),
            handles: None,
            board: ScoreBoard::new(),
            orchard: Orchard::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn handles(&self) -> Option<&SceneHandles> {
        self.handles.as_ref()
    }

    pub fn orchard(&self) -> &Orchard {
        &self.orchard
    }

    /// Flip between windowed and fullscreen. The button shows the mode being
    /// switched to; the scale manager only changes once the host confirms.
    fn toggle_fullscreen(ctx: &mut EngineContext, button: EntityId) {
        if ctx.scale.is_fullscreen() {
            ctx.set_frame(button, BUTTON_FRAME_WINDOWED);
            ctx.scale.stop_fullscreen();
        } else {
            ctx.set_frame(button, BUTTON_FRAME_FULLSCREEN);
            ctx.scale.start_fullscreen();
        }
    }

    fn button_released(ctx: &EngineContext, button: EntityId, input: &InputState) -> bool {
        ctx.scene
            .get(button)
            .is_some_and(|b| input.pointer_ups().iter().any(|&p| b.contains_point(p)))
    }
}

impl Default for AppleHop {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for AppleHop {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: scene::WORLD_W,
            world_height: scene::WORLD_H,
            gravity: Vec2::new(0.0, scene::GRAVITY),
            clear_color: scene::BACKGROUND,
            manifest: MANIFEST,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let handles = scene::build(ctx, &mut self.rng, self.board.text());
        for &fruit in &handles.fruits {
            self.orchard.plant(fruit);
        }
        self.handles = Some(handles);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState) {
        let Some(handles) = &self.handles else {
            return;
        };

        let grounded = ctx.is_grounded(handles.player);
        let command = controller::steer(KeySnapshot::from_input(input), grounded);
        controller::apply(ctx, handles.player, command);

        if input.just_pressed(keys::F) {
            Self::toggle_fullscreen(ctx, handles.button);
        }
        if Self::button_released(ctx, handles.button, input) {
            Self::toggle_fullscreen(ctx, handles.button);
        }
    }

    fn on_overlap(&mut self, ctx: &mut EngineContext, pair: OverlapPair) {
        let Some(handles) = &self.handles else {
            return;
        };
        let Some(overlap) = Overlap::from_pair(pair, handles.player) else {
            return;
        };
        if !self.orchard.consume(overlap.collectible) {
            log::debug!("overlap with {:?} ignored, not an uneaten fruit", overlap.collectible);
            return;
        }

        let delta = eat_fruit(overlap);
        ctx.despawn(delta.consumed);
        let text = self.board.apply(delta);
        ctx.write_text(&handles.score_label, text);
        ctx.emit_event(GameEvent::new(EVENT_SCORE, self.board.score() as f32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopper_engine::{DisplayRequest, InputEvent};

    fn started() -> (AppleHop, EngineContext) {
        let mut game = AppleHop::new();
        let mut ctx = EngineContext::with_config(&game.config());
        ctx.load_manifest(game.config().manifest).unwrap();
        game.init(&mut ctx);
        (game, ctx)
    }

    fn input(events: &[InputEvent]) -> InputState {
        let mut input = InputState::new();
        for event in events {
            input.apply(event);
        }
        input
    }

    fn player(game: &AppleHop) -> EntityId {
        game.handles().unwrap().player
    }

    fn score_glyphs(ctx: &EngineContext) -> usize {
        ctx.scene.count_tagged("score")
    }

    /// One fixed step the way the runner drives it.
    fn step(game: &mut AppleHop, ctx: &mut EngineContext, input: &InputState) {
        game.update(ctx, input);
        ctx.step_physics();
        for pair in ctx.take_overlaps() {
            if ctx.scene.contains(pair.entity_a) && ctx.scene.contains(pair.entity_b) {
                game.on_overlap(ctx, pair);
            }
        }
        ctx.tick_presentation(1.0 / 60.0);
    }

    #[test]
    fn eating_a_fruit_scores_and_removes_it() {
        let (mut game, mut ctx) = started();
        let fruit = game.handles().unwrap().fruits[3];
        let pair = OverlapPair { entity_a: fruit, entity_b: player(&game) };

        game.on_overlap(&mut ctx, pair);
        assert_eq!(game.score(), 10);
        assert!(!ctx.scene.contains(fruit));
        assert!(game.orchard().is_consumed(fruit));
        assert_eq!(score_glyphs(&ctx), "Score: 10".len());
        assert_eq!(ctx.events, vec![GameEvent::new(EVENT_SCORE, 10.0)]);
    }

    #[test]
    fn repeated_report_for_an_eaten_fruit_is_ignored() {
        let (mut game, mut ctx) = started();
        let fruit = game.handles().unwrap().fruits[3];
        let pair = OverlapPair { entity_a: player(&game), entity_b: fruit };

        game.on_overlap(&mut ctx, pair);
        game.on_overlap(&mut ctx, pair);
        assert_eq!(game.score(), 10);
        assert_eq!(ctx.events.len(), 1);
    }

    #[test]
    fn overlaps_without_the_player_are_ignored() {
        let (mut game, mut ctx) = started();
        let fruits = game.handles().unwrap().fruits.clone();
        game.on_overlap(&mut ctx, OverlapPair { entity_a: fruits[0], entity_b: fruits[1] });
        assert_eq!(game.score(), 0);
        assert_eq!(game.orchard().remaining(), fruits.len());
    }

    #[test]
    fn player_lands_and_can_jump() {
        let (mut game, mut ctx) = started();
        let hero = player(&game);
        let idle = InputState::new();
        for _ in 0..180 {
            step(&mut game, &mut ctx, &idle);
        }
        assert!(ctx.is_grounded(hero), "player should have landed");

        let jump = input(&[InputEvent::KeyDown { key_code: keys::UP }]);
        game.update(&mut ctx, &jump);
        assert_eq!(ctx.velocity(hero).y, controller::JUMP_VELOCITY);
    }

    #[test]
    fn running_picks_the_matching_clip() {
        let (mut game, mut ctx) = started();
        let hero = player(&game);
        let run = input(&[InputEvent::KeyDown { key_code: keys::RIGHT }]);
        game.update(&mut ctx, &run);

        assert_eq!(ctx.velocity(hero).x, controller::SPEED);
        let anim = ctx.scene.get(hero).unwrap().animation.as_ref().unwrap();
        assert_eq!(anim.current(), "right");
    }

    #[test]
    fn f_key_toggles_fullscreen() {
        let (mut game, mut ctx) = started();
        let button = game.handles().unwrap().button;

        game.update(&mut ctx, &input(&[InputEvent::KeyDown { key_code: keys::F }]));
        assert_eq!(ctx.scale.drain_requests(), vec![DisplayRequest::EnterFullscreen]);
        assert_eq!(ctx.scene.get(button).unwrap().sprite.as_ref().unwrap().frame, 1);

        ctx.scale.set_fullscreen(true);
        game.update(&mut ctx, &input(&[InputEvent::KeyDown { key_code: keys::F }]));
        assert_eq!(ctx.scale.drain_requests(), vec![DisplayRequest::ExitFullscreen]);
        assert_eq!(ctx.scene.get(button).unwrap().sprite.as_ref().unwrap().frame, 0);
    }

    #[test]
    fn button_toggles_only_when_released_on_it() {
        let (mut game, mut ctx) = started();

        game.update(&mut ctx, &input(&[InputEvent::PointerUp { x: 300.0, y: 300.0 }]));
        assert!(ctx.scale.pending().is_empty());

        game.update(&mut ctx, &input(&[InputEvent::PointerUp { x: 750.0, y: 40.0 }]));
        assert_eq!(ctx.scale.pending(), &[DisplayRequest::EnterFullscreen]);
    }

    #[test]
    fn fruits_fall_onto_the_terrain() {
        let (mut game, mut ctx) = started();
        let idle = InputState::new();
        for _ in 0..600 {
            step(&mut game, &mut ctx, &idle);
        }
        let apples: Vec<_> = ctx.scene.iter().filter(|e| e.tag == "apple").collect();
        assert!(!apples.is_empty());
        for apple in apples {
            assert!(apple.pos.y > 0.0, "apple never fell: {:?}", apple.pos);
            assert!(apple.pos.y < 472.0, "apple sank into the ground: {:?}", apple.pos);
        }
        // Whatever the player picked up on the way down was scored.
        let eaten = scene::FRUIT_COUNT - game.orchard().remaining();
        assert_eq!(game.score(), 10 * eaten as u32);
    }
}
