//! Tracked celestial bodies and their world-space orientations.

mod body;
mod orientation;

pub use body::{CelestialBody, angle_to_zenith_deg};
pub use orientation::Orientation;
