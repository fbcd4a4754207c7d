//! Camera configuration
//!
//! Fixed at construction; one instance per table/session. Explicit config
//! rather than module-level globals so split-screen or test cameras never
//! share mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable camera parameters, supplied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Visible screen size in pixels
    pub viewport: Vec2,
    /// Total scrollable world bounds; expected >= viewport on both axes
    pub world: Vec2,
    /// Fraction of remaining distance closed per 1/60 s frame, in (0, 1]
    pub follow_speed: f32,
    /// Scales target velocity into an anticipatory offset, >= 0
    pub look_ahead_factor: f32,
    /// Zoom hard lower bound, must be positive
    pub zoom_min: f32,
    /// Zoom hard upper bound, >= zoom_min
    pub zoom_max: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            world: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            follow_speed: FOLLOW_SPEED,
            look_ahead_factor: LOOK_AHEAD_FACTOR,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
        }
    }
}

impl CameraConfig {
    /// Repair out-of-contract values instead of rejecting them; the render
    /// loop must never be handed a camera that can divide by zero. Each
    /// repair is logged once, at construction.
    pub fn sanitized(mut self) -> Self {
        if !(self.follow_speed > 0.0 && self.follow_speed <= 1.0) {
            log::warn!(
                "follow_speed {} outside (0, 1], clamping",
                self.follow_speed
            );
            self.follow_speed = self.follow_speed.clamp(f32::EPSILON, 1.0);
        }
        if self.look_ahead_factor < 0.0 {
            log::warn!(
                "look_ahead_factor {} negative, clamping to 0",
                self.look_ahead_factor
            );
            self.look_ahead_factor = 0.0;
        }
        if self.zoom_min <= 0.0 {
            log::warn!("zoom_min {} not positive, raising", self.zoom_min);
            self.zoom_min = f32::EPSILON;
        }
        if self.zoom_max < self.zoom_min {
            log::warn!(
                "zoom_max {} below zoom_min {}, collapsing range",
                self.zoom_max,
                self.zoom_min
            );
            self.zoom_max = self.zoom_min;
        }
        if self.world.x < self.viewport.x || self.world.y < self.viewport.y {
            // Allowed, but scrolling degenerates on that axis (pins to 0)
            log::warn!(
                "world {:?} smaller than viewport {:?} on an axis",
                self.world,
                self.viewport
            );
        }
        self
    }

    /// Largest legal camera position: the viewport's top-left corner may
    /// range over `[0, world - viewport]`. An axis where the world is
    /// smaller than the viewport pins to 0.
    #[inline]
    pub fn max_scroll(&self) -> Vec2 {
        (self.world - self.viewport).max(Vec2::ZERO)
    }

    /// Clamp a target position to the scrollable range.
    #[inline]
    pub fn clamp_scroll(&self, pos: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.max_scroll())
    }

    /// Clamp a zoom level to the configured bounds.
    #[inline]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.zoom_min, self.zoom_max)
    }
}
