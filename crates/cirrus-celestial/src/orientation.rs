//! World-space rotation of a tracked body, exposed as an orthonormal basis.
//!
//! The host scene graph supplies one [`Orientation`] per celestial body per
//! frame. The lighting resolver and uniform bindings only ever read the
//! basis vectors; the orientation is immutable within a single invocation.

use glam::{Quat, Vec3};

/// A 3D rotation with forward/up/right basis accessors.
///
/// Host convention: forward = rotation · +Z, up = rotation · +Y,
/// right = rotation · +X. A body's forward vector points from the scene
/// toward its position in the sky, so forward = +Y means directly overhead;
/// the direction its light travels is the negated forward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    rotation: Quat,
}

impl Orientation {
    /// Identity rotation: forward along +Z.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
    };

    /// Build from a rotation quaternion. The input is normalized.
    pub fn from_quat(rotation: Quat) -> Self {
        Self {
            rotation: rotation.normalize(),
        }
    }

    /// Build from yaw/pitch/roll angles in radians (YXZ order: yaw about
    /// +Y, then pitch about +X, then roll about +Z).
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::from_quat(Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, roll))
    }

    /// The underlying rotation quaternion.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Forward basis vector (rotation · +Z), unit length.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Up basis vector (rotation · +Y), unit length.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Right basis vector (rotation · +X), unit length.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
