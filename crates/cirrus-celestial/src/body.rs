//! Celestial bodies tracked by the sky: one sun, zero or more moons.

use glam::Vec3;

use crate::Orientation;

/// A tracked celestial body: a label for logging plus its current
/// world-space orientation, re-supplied by the host every frame.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    label: String,
    orientation: Orientation,
}

impl CelestialBody {
    pub fn new(label: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            label: label.into(),
            orientation,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Replace the orientation for the current frame.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

/// Angle in degrees between world up (+Y) and the body's forward vector.
///
/// Range [0, 180]. Near 0 the body is directly overhead; below 90 it is
/// above the horizon; past 90 it has set.
pub fn angle_to_zenith_deg(orientation: &Orientation) -> f32 {
    Vec3::Y.angle_between(orientation.forward()).to_degrees()
}
