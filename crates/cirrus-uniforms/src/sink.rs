//! The uniform sink capability.

use glam::{Mat4, Vec4};

/// Receiver for named shader parameters.
///
/// The sky never talks to a process-wide shader property table; the host
/// passes a sink into the per-frame update instead. Writes are
/// last-one-wins per name.
pub trait UniformSink {
    /// Write a scalar parameter. Flags are written as 0.0 / 1.0.
    fn set_float(&mut self, name: &str, value: f32);

    /// Write a direction or color parameter.
    fn set_vector(&mut self, name: &str, value: Vec4);

    /// Write a 4x4 matrix parameter.
    fn set_matrix(&mut self, name: &str, value: Mat4);
}
