//! Camera state and the per-tick update algorithm
//!
//! The camera interpolates a viewport across the table, chasing either a
//! followed physics body, a scripted pan, or a manually pinned position.
//! `update` runs once per frame after the physics step; everything it
//! does is O(1) and it never fails.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::CameraConfig;
use super::shake::ShakeState;
use crate::consts::*;
use crate::math::{clamp, smooth_step};
use crate::transform::ViewTransform;

/// Read-only per-tick view of the followed body, produced by the physics
/// step. The camera never owns or mutates the body itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    /// World position of the body's center
    pub pos: Vec2,
    /// World velocity (units per second)
    pub vel: Vec2,
}

/// An in-flight scripted pan: eases `target_pos` from `from` to `goal`
/// over `duration` seconds with smooth-step easing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PanState {
    from: Vec2,
    goal: Vec2,
    duration: f32,
    elapsed: f32,
}

/// Smoothed follow camera over a world larger than the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    config: CameraConfig,
    /// Viewport top-left, continuously interpolated
    current_pos: Vec2,
    current_zoom: f32,
    /// Where the smoothing is headed this tick
    target_pos: Vec2,
    target_zoom: f32,
    /// Entity id being tracked, if any. The id is opaque to the camera;
    /// the caller resolves it to a [`TargetSnapshot`] each tick.
    followed: Option<u32>,
    pan: Option<PanState>,
    shake: ShakeState,
}

impl Camera {
    /// Create a camera at the world origin. `seed` feeds the shake
    /// jitter stream so identical sessions replay identically.
    pub fn new(config: CameraConfig, seed: u64) -> Self {
        let config = config.sanitized();
        let zoom = config.clamp_zoom(DEFAULT_ZOOM);
        log::debug!(
            "camera created: viewport {:?}, world {:?}, scroll range {:?}",
            config.viewport,
            config.world,
            config.max_scroll()
        );
        Self {
            config,
            current_pos: Vec2::ZERO,
            current_zoom: zoom,
            target_pos: Vec2::ZERO,
            target_zoom: zoom,
            followed: None,
            pan: None,
            shake: ShakeState::new(seed),
        }
    }

    /// Begin tracking an entity. Cancels any manual pin or scripted pan.
    pub fn follow(&mut self, entity: u32) {
        self.followed = Some(entity);
        self.pan = None;
    }

    /// Detach from the followed entity. The target holds its last
    /// computed value until `set_position`, `pan_to` or `follow`.
    pub fn stop_following(&mut self) {
        self.followed = None;
    }

    /// Entity id the caller should snapshot this tick, if any.
    pub fn followed_entity(&self) -> Option<u32> {
        self.followed
    }

    /// Pin the target position manually (fixed-camera mode). Implies
    /// `stop_following`.
    pub fn set_position(&mut self, pos: Vec2) {
        self.stop_following();
        self.pan = None;
        self.target_pos = self.config.clamp_scroll(pos);
    }

    /// Set the zoom target. Out-of-range input is silently clamped to the
    /// configured bounds, never rejected.
    pub fn set_zoom(&mut self, level: f32) {
        self.target_zoom = self.config.clamp_zoom(level);
    }

    /// Scripted pan: ease the target from its current value to `goal`
    /// over `duration` seconds. Implies `stop_following`; once complete
    /// the target stays pinned at `goal`.
    pub fn pan_to(&mut self, goal: Vec2, duration: f32) {
        self.stop_following();
        let goal = self.config.clamp_scroll(goal);
        if duration <= 0.0 {
            self.target_pos = goal;
            self.pan = None;
            return;
        }
        self.pan = Some(PanState {
            from: self.target_pos,
            goal,
            duration,
            elapsed: 0.0,
        });
    }

    /// Add shake trauma from an impact (bumper hit, tilt, multiball).
    pub fn add_shake(&mut self, intensity: f32) {
        self.shake.add(intensity);
    }

    /// Advance the camera by `dt` seconds. Call once per frame, after the
    /// physics step, passing the snapshot for [`Self::followed_entity`]
    /// (or `None`, in which case the target holds its last value).
    ///
    /// `update(0.0, ..)` leaves the interpolated state unchanged.
    pub fn update(&mut self, dt: f32, target: Option<&TargetSnapshot>) {
        // 1. Re-aim the target
        if self.followed.is_some() {
            if let Some(snap) = target {
                let centered = snap.pos - self.config.viewport / 2.0;
                let look_ahead = snap.vel * self.config.look_ahead_factor;
                self.target_pos = centered + look_ahead;
            }
        } else if let Some(mut pan) = self.pan {
            pan.elapsed += dt;
            let t = smooth_step(0.0, pan.duration, pan.elapsed);
            self.target_pos = pan.from.lerp(pan.goal, t);
            self.pan = if pan.elapsed >= pan.duration {
                None
            } else {
                Some(pan)
            };
        }

        // 2. The viewport may never show area outside the world
        self.target_pos = self.config.clamp_scroll(self.target_pos);

        // 3. Exponential smoothing, normalized to the 60 fps baseline.
        // Saturates to an instant snap at very large dt; that saturation
        // is part of the observable easing behavior.
        let smooth = clamp(self.config.follow_speed * dt * BASELINE_FPS, 0.0, 1.0);
        self.current_pos += (self.target_pos - self.current_pos) * smooth;
        self.current_zoom += (self.target_zoom - self.current_zoom) * smooth;

        self.shake.decay(dt);
    }

    /// Publish the transform for this frame. Takes `&mut self` because
    /// the shake jitter advances its RNG; call once per rendered frame.
    /// The shaken offset is re-clamped so even a violent shake never
    /// reveals area outside the world.
    pub fn transform(&mut self) -> ViewTransform {
        let offset = self.config.clamp_scroll(self.current_pos + self.shake.offset());
        ViewTransform {
            offset,
            zoom: self.current_zoom,
            viewport: self.config.viewport,
        }
    }

    /// Map a world point to screen pixels using the current (un-shaken)
    /// interpolated state.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        crate::math::world_to_screen(world, self.current_pos, self.current_zoom)
    }

    /// Inverse of [`Self::world_to_screen`], for pointer hit-testing.
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        crate::math::screen_to_world(screen, self.current_pos, self.current_zoom)
    }

    /// Current interpolated viewport top-left.
    pub fn position(&self) -> Vec2 {
        self.current_pos
    }

    /// Current interpolated zoom.
    pub fn zoom(&self) -> f32 {
        self.current_zoom
    }

    /// Position the smoothing is converging toward.
    pub fn target_position(&self) -> Vec2 {
        self.target_pos
    }

    /// Zoom the smoothing is converging toward.
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Configuration this camera was built with.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}
