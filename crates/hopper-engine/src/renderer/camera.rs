use glam::{Mat4, Vec2};

/// Orthographic 2D camera with optional follow target and world bounds.
pub struct Camera2D {
    /// Viewport size in world units at zoom 1.
    pub viewport: Vec2,
    /// Camera center in world space.
    pub center: Vec2,
    pub zoom: f32,
    /// Clamp rectangle as (min, max) corners.
    pub bounds: Option<(Vec2, Vec2)>,
    /// Follow smoothing: 0.0 snaps, values toward 1.0 lag more.
    pub smoothing: f32,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            center: Vec2::new(width / 2.0, height / 2.0),
            zoom: 1.0,
            bounds: None,
            smoothing: 0.0,
        }
    }

    /// Visible area size after zoom.
    pub fn visible_size(&self) -> Vec2 {
        self.viewport / self.zoom
    }

    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.bounds = Some((Vec2::new(x, y), Vec2::new(x + width, y + height)));
        self.clamp_to_bounds();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.01);
        self.clamp_to_bounds();
    }

    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    /// Move toward `target`. Call once per tick with the followed entity's position.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        if self.smoothing <= 0.0 {
            self.look_at(target);
            return;
        }
        let t = 1.0 - self.smoothing.powf(dt * 60.0);
        self.center += (target - self.center) * t;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let Some((min, max)) = self.bounds else {
            return;
        };
        let half = self.visible_size() / 2.0;

        // A viewport wider than the bounds centers on them instead.
        self.center.x = if max.x - min.x <= half.x * 2.0 {
            (min.x + max.x) / 2.0
        } else {
            self.center.x.clamp(min.x + half.x, max.x - half.x)
        };
        self.center.y = if max.y - min.y <= half.y * 2.0 {
            (min.y + max.y) / 2.0
        } else {
            self.center.y.clamp(min.y + half.y, max.y - half.y)
        };
    }

    /// Top-left corner of the visible area in world space.
    pub fn scroll(&self) -> Vec2 {
        self.center - self.visible_size() / 2.0
    }

    /// Orthographic projection, Y down (top of the view maps to +1 in clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        let half = self.visible_size() / 2.0;
        Mat4::orthographic_rh(
            self.center.x - half.x,
            self.center.x + half.x,
            self.center.y + half.y,
            self.center.y - half.y,
            0.0,
            1.0,
        )
    }
}
