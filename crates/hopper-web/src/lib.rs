pub mod fullscreen;
pub mod runner;

pub use hopper_engine;
pub use log;
pub use runner::GameRunner;

/// Install the panic hook and the console logger. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Expands to a `thread_local!` GameRunner, a `with_runner()` helper and the
/// exported functions the host page calls: `game_init`, `game_tick`, input
/// handlers and buffer accessors.
///
/// # Usage
///
/// ```ignore
/// mod game;
/// use game::MyGame;
///
/// hopper_web::export_game!(MyGame, "my-game");
/// ```
///
/// `$game_type` must implement `hopper_engine::Game` and have a `new()`
/// constructor; `$game_name` is used in log messages. The calling crate
/// depends on `wasm-bindgen`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use wasm_bindgen::prelude::*;
        use $crate::hopper_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` on the runner. Calls made before `game_init` are logged and dropped.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        $crate::log::warn!("{}: called before game_init()", $game_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            $crate::init_logging($crate::log::Level::Info);

            let runner = $crate::GameRunner::new(<$game_type>::new());
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        /// Called by the host on `fullscreenchange`.
        #[wasm_bindgen]
        pub fn game_fullscreen_changed(active: bool) {
            with_runner(|r| r.push_input(InputEvent::FullscreenChanged { active }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_camera_x() -> f32 {
            with_runner(|r| r.camera_x()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_camera_y() -> f32 {
            with_runner(|r| r.camera_y()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_camera_zoom() -> f32 {
            with_runner(|r| r.camera_zoom()).unwrap_or(1.0)
        }

        /// RGBA clear colour as a 4-element array.
        #[wasm_bindgen]
        pub fn get_clear_color() -> Vec<f32> {
            with_runner(|r| r.clear_color().to_vec()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_manifest_json() -> String {
            with_runner(|r| r.manifest_json().to_string()).unwrap_or_default()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
