#[cfg(feature = "physics")]
pub mod physics;
pub mod rng;
pub mod scale;
pub mod scene;
pub mod time;
