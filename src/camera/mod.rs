//! Smoothed follow camera
//!
//! All camera logic lives here. The module is deterministic and
//! platform-free:
//! - Fixed or variable timestep, normalized to a 60 fps baseline
//! - Seeded RNG only (shake jitter)
//! - No rendering or platform dependencies; the renderer consumes the
//!   published [`ViewTransform`](crate::transform::ViewTransform)

pub mod config;
pub mod shake;
pub mod state;

pub use config::CameraConfig;
pub use shake::ShakeState;
pub use state::{Camera, TargetSnapshot};
