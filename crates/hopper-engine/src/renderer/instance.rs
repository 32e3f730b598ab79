use bytemuck::{Pod, Zeroable};

/// Per-sprite render data read by the host renderer straight from WASM memory.
/// 12 floats = 48 bytes stride; the JS side mirrors this layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Anchor point position. World space, or screen space for the Ui layer.
    pub x: f32,
    pub y: f32,
    /// Rotation in radians around the anchor.
    pub rotation: f32,
    /// Drawn size in world units.
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
    /// Sheet index from the asset manifest.
    pub sheet: f32,
    /// Frame index within the sheet.
    pub frame: f32,
    pub alpha: f32,
    /// `RenderLayer` as a number, for batching on the JS side.
    pub layer: f32,
    /// 1.0 when the frame repeats across the size instead of stretching.
    pub tiled: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All sprite instances for one frame, ordered back-to-front by layer.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for direct memory reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<RenderInstance, f32>(&self.instances).as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
