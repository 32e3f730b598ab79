//! Display scale state: fullscreen tracking and requests for the host.

use crate::api::types::DisplayRequest;

/// Tracks whether the game is fullscreen and queues requests for the host page.
///
/// The flag follows what the host reports, not what was requested, so a user
/// leaving fullscreen with Esc keeps the state in sync.
#[derive(Debug, Default)]
pub struct ScaleManager {
    fullscreen: bool,
    requests: Vec<DisplayRequest>,
}

impl ScaleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn start_fullscreen(&mut self) {
        self.requests.push(DisplayRequest::EnterFullscreen);
    }

    pub fn stop_fullscreen(&mut self) {
        self.requests.push(DisplayRequest::ExitFullscreen);
    }

    /// Record the display mode the host reports.
    pub fn set_fullscreen(&mut self, active: bool) {
        if self.fullscreen != active {
            log::debug!("scale: fullscreen {}", if active { "on" } else { "off" });
        }
        self.fullscreen = active;
    }

    /// Take the queued requests, oldest first.
    pub fn drain_requests(&mut self) -> Vec<DisplayRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn pending(&self) -> &[DisplayRequest] {
        &self.requests
    }
}
