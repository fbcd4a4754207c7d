//! Per-frame view transform published by the camera
//!
//! The renderer applies this as a translate + scale on its root layer;
//! input hit-testing uses the inverse mapping. The transform is a plain
//! value snapshot: it stays valid (and cheap to copy) across the frame
//! even while the camera keeps mutating.

use glam::{Mat4, Vec2};
use serde::{Deserialize, Serialize};

use crate::math;

/// Translation + scale snapshot for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Top-left corner of the viewport in world units (shake included)
    pub offset: Vec2,
    /// Scale factor, always positive
    pub zoom: f32,
    /// Viewport size in screen pixels
    pub viewport: Vec2,
}

impl ViewTransform {
    /// Map a world-space point into screen pixels.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        math::world_to_screen(world, self.offset, self.zoom)
    }

    /// Map a screen-pixel point (e.g. a pointer event) into world space.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        math::screen_to_world(screen, self.offset, self.zoom)
    }

    /// Orthographic projection for a GPU renderer. World y grows downward
    /// (screen convention), so the world-space top edge maps to NDC top.
    pub fn projection_matrix(&self) -> Mat4 {
        let left = self.offset.x;
        let right = self.offset.x + self.viewport.x / self.zoom;
        let top = self.offset.y;
        let bottom = self.offset.y + self.viewport.y / self.zoom;
        Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0)
    }

    /// World-space rectangle currently visible, as (min, max) corners.
    /// Used for entity culling.
    pub fn visible_world_rect(&self) -> (Vec2, Vec2) {
        let min = self.offset;
        let max = self.offset + self.viewport / self.zoom;
        (min, max)
    }
}
