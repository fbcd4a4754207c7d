//! Flipcam - follow camera for a portrait pinball arena
//!
//! Core modules:
//! - `camera`: Smoothed follow camera (state, config, shake)
//! - `math`: Pure interpolation and coordinate-mapping utilities
//! - `transform`: Per-frame view transform consumed by the renderer
//!
//! The camera tracks a physics body across a world larger than the
//! viewport, exponentially smoothing toward a clamped target each tick.
//! It never owns the body: callers pass a read-only [`TargetSnapshot`]
//! into [`Camera::update`] once per frame, after the physics step.

pub mod camera;
pub mod math;
pub mod transform;

pub use camera::{Camera, CameraConfig, TargetSnapshot};
pub use transform::ViewTransform;

/// Camera configuration constants
pub mod consts {
    /// Frame-rate baseline the smoothing factor is normalized against.
    /// `follow_speed` means "fraction of remaining distance closed per
    /// 1/60 s frame"; other tick rates scale proportionally.
    pub const BASELINE_FPS: f32 = 60.0;

    /// Visible table area (portrait, pixels)
    pub const VIEWPORT_WIDTH: f32 = 540.0;
    pub const VIEWPORT_HEIGHT: f32 = 960.0;

    /// Full scrollable table (3x the viewport on both axes)
    pub const WORLD_WIDTH: f32 = 1620.0;
    pub const WORLD_HEIGHT: f32 = 2880.0;

    /// Fraction of remaining distance closed per baseline frame
    pub const FOLLOW_SPEED: f32 = 0.08;
    /// Seconds of ball velocity added ahead of the ball
    pub const LOOK_AHEAD_FACTOR: f32 = 0.5;

    /// Zoom hard limits; min must stay positive so screen-to-world
    /// mapping is always invertible
    pub const ZOOM_MIN: f32 = 0.5;
    pub const ZOOM_MAX: f32 = 2.0;
    pub const DEFAULT_ZOOM: f32 = 1.0;

    /// Shake trauma decay per baseline frame
    pub const SHAKE_DECAY: f32 = 0.9;
    /// Trauma below this snaps to zero
    pub const SHAKE_CUTOFF: f32 = 0.01;
    /// Maximum shake displacement at full trauma (world units)
    pub const SHAKE_MAX_OFFSET: f32 = 12.0;
}
