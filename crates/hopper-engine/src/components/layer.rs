/// Render layer — controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, Ui last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Sky and other full-screen backdrops.
    Background = 0,
    /// Cosmetic elements with no gameplay effect.
    Decoration = 1,
    /// Ground strips and platforms.
    Terrain = 2,
    #[default]
    Objects = 3,
    /// Score labels, buttons. Drawn in screen space.
    Ui = 4,
}

impl RenderLayer {
    pub const COUNT: usize = 5;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Decoration),
            2 => Some(Self::Terrain),
            3 => Some(Self::Objects),
            4 => Some(Self::Ui),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether entities on this layer ignore the camera.
    pub fn is_screen_space(self) -> bool {
        self == Self::Ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Decoration);
        assert!(RenderLayer::Decoration < RenderLayer::Terrain);
        assert!(RenderLayer::Terrain < RenderLayer::Objects);
        assert!(RenderLayer::Objects < RenderLayer::Ui);
    }

    #[test]
    fn u8_conversion() {
        for val in 0..RenderLayer::COUNT as u8 {
            assert_eq!(RenderLayer::from_u8(val).map(RenderLayer::as_u8), Some(val));
        }
        assert!(RenderLayer::from_u8(RenderLayer::COUNT as u8).is_none());
    }

    #[test]
    fn only_ui_is_screen_space() {
        assert!(RenderLayer::Ui.is_screen_space());
        assert!(!RenderLayer::Objects.is_screen_space());
    }
}
