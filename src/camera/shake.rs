//! Screen shake
//!
//! Trauma model: impacts add trauma, trauma decays exponentially each
//! tick, and the published transform gets a jitter offset proportional to
//! the current trauma. Jitter comes from a per-camera seeded PCG stream
//! so replays of the same session shake identically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Shake state, serialized as trauma + seed (the live RNG is rebuilt).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShakeState {
    /// Current trauma in [0, 1]
    trauma: f32,
    /// Seed for the jitter stream
    seed: u64,
    #[serde(skip)]
    rng: Option<Pcg32>,
}

impl ShakeState {
    pub fn new(seed: u64) -> Self {
        Self {
            trauma: 0.0,
            seed,
            rng: None,
        }
    }

    /// Add trauma from an impact, saturating at full intensity.
    pub fn add(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount.max(0.0)).min(1.0);
    }

    /// Current trauma level.
    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    /// Decay trauma toward zero, normalized to the 60 fps baseline.
    pub fn decay(&mut self, dt: f32) {
        self.trauma *= SHAKE_DECAY.powf(dt * BASELINE_FPS);
        if self.trauma < SHAKE_CUTOFF {
            self.trauma = 0.0;
        }
    }

    /// Jitter offset for this frame, in world units. Advances the RNG
    /// only while shaking, so an idle camera stays bit-identical.
    pub fn offset(&mut self) -> Vec2 {
        if self.trauma == 0.0 {
            return Vec2::ZERO;
        }
        let rng = self
            .rng
            .get_or_insert_with(|| Pcg32::seed_from_u64(self.seed));
        let amplitude = self.trauma * SHAKE_MAX_OFFSET;
        Vec2::new(
            rng.random_range(-1.0..=1.0) * amplitude,
            rng.random_range(-1.0..=1.0) * amplitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trauma_saturates() {
        let mut shake = ShakeState::new(7);
        shake.add(0.8);
        shake.add(0.8);
        assert_eq!(shake.trauma(), 1.0);
        shake.add(-5.0); // negative impacts are ignored
        assert_eq!(shake.trauma(), 1.0);
    }

    #[test]
    fn test_decay_reaches_zero() {
        let mut shake = ShakeState::new(7);
        shake.add(1.0);
        for _ in 0..600 {
            shake.decay(1.0 / 60.0);
        }
        assert_eq!(shake.trauma(), 0.0);
        assert_eq!(shake.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_offset_bounded_by_trauma() {
        let mut shake = ShakeState::new(42);
        shake.add(0.5);
        for _ in 0..100 {
            let offset = shake.offset();
            let limit = 0.5 * SHAKE_MAX_OFFSET;
            assert!(offset.x.abs() <= limit && offset.y.abs() <= limit);
        }
    }

    #[test]
    fn test_same_seed_same_jitter() {
        let mut a = ShakeState::new(99);
        let mut b = ShakeState::new(99);
        a.add(1.0);
        b.add(1.0);
        for _ in 0..50 {
            assert_eq!(a.offset(), b.offset());
            a.decay(1.0 / 60.0);
            b.decay(1.0 / 60.0);
        }
    }
}
