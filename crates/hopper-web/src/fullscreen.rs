//! Forwards display requests to the browser Fullscreen API.

use hopper_engine::DisplayRequest;

/// Carry out a display request. Failures are logged, never raised: the
/// browser reports the real outcome back through `game_fullscreen_changed`.
pub fn forward(request: DisplayRequest) {
    #[cfg(target_arch = "wasm32")]
    if let Err(message) = browser::apply(request) {
        log::warn!("fullscreen: {request:?} failed: {message}");
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("fullscreen: {request:?} (no browser)");
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use hopper_engine::DisplayRequest;
    use wasm_bindgen::{JsCast, JsValue};

    fn describe(err: JsValue) -> String {
        match err.dyn_into::<js_sys::Error>() {
            Ok(error) => String::from(error.message()),
            Err(other) => other.as_string().unwrap_or_else(|| format!("{other:?}")),
        }
    }

    pub fn apply(request: DisplayRequest) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_string())?;
        match request {
            DisplayRequest::EnterFullscreen => {
                let root = document
                    .document_element()
                    .ok_or_else(|| "no document element".to_string())?;
                root.request_fullscreen().map_err(describe)
            }
            DisplayRequest::ExitFullscreen => {
                if document.fullscreen_element().is_some() {
                    document.exit_fullscreen();
                }
                Ok(())
            }
        }
    }
}
