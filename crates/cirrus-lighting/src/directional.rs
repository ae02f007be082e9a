//! The scene's main directional light, driven by the sunset resolver.
//!
//! [`DirectionalLight`] is the CPU-side light the host renders with;
//! [`DirectionalLightUniform`] is the GPU-side representation written to a
//! uniform buffer each frame.

use bytemuck::{Pod, Zeroable};

use crate::MainLightSample;

/// CPU-side directional light description.
///
/// Represents a single infinitely-distant light source. Each frame it is
/// re-pointed at whichever celestial body the resolver picked.
#[derive(Clone, Debug)]
pub struct DirectionalLight {
    /// Normalized direction the light travels (away from the body).
    pub direction: glam::Vec3,
    /// Linear RGB color of the light (not premultiplied by intensity).
    pub color: glam::Vec3,
    /// Scalar intensity from the resolver. Unclamped; follows the sunset
    /// blend wherever it lands.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: glam::Vec3::new(0.0, -1.0, 0.0),
            // Warm white, approximating daylight.
            color: glam::Vec3::new(1.0, 0.96, 0.90),
            intensity: 1.0,
        }
    }
}

impl DirectionalLight {
    /// Set the light direction, normalizing the input.
    ///
    /// # Panics
    ///
    /// Panics if the input vector has near-zero length.
    pub fn set_direction(&mut self, dir: glam::Vec3) {
        let len = dir.length();
        assert!(len > 1e-6, "directional light direction must not be zero");
        self.direction = dir / len;
    }

    /// Take intensity and direction from a resolved main-light sample.
    ///
    /// The light travels opposite the body's forward vector.
    pub fn apply_sample(&mut self, sample: &MainLightSample) {
        self.intensity = sample.intensity;
        self.set_direction(-sample.orientation.forward());
    }

    /// Build the GPU-side uniform from this light's properties.
    pub fn to_uniform(&self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            direction_intensity: [
                self.direction.x,
                self.direction.y,
                self.direction.z,
                self.intensity,
            ],
            color_padding: [self.color.x, self.color.y, self.color.z, 0.0],
        }
    }
}

/// GPU-side representation, 32 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = direction (normalized), w = intensity.
    pub direction_intensity: [f32; 4],
    /// xyz = color (linear RGB), w = padding.
    pub color_padding: [f32; 4],
}
