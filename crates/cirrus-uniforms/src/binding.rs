//! Fixed uniform names and the per-frame body bindings.
//!
//! One generic path handles any number of moons; the first moon keeps the
//! unsuffixed parameter names so existing sky materials keep working.

use cirrus_celestial::Orientation;

use crate::{UniformSink, body_space_matrix};

/// Sun direction parameter: the direction sunlight travels.
pub const SUN_DIR: &str = "_SunDir";

/// Direction parameter name for moon `index` (0-based).
///
/// The first moon is unsuffixed: `_MoonDir`, `_MoonDir1`, `_MoonDir2`, ...
pub fn moon_dir_name(index: usize) -> String {
    if index == 0 {
        "_MoonDir".to_string()
    } else {
        format!("_MoonDir{index}")
    }
}

/// Body-space matrix parameter name for moon `index` (0-based).
pub fn moon_space_matrix_name(index: usize) -> String {
    if index == 0 {
        "_MoonSpaceMatrix".to_string()
    } else {
        format!("_MoonSpaceMatrix{index}")
    }
}

/// Write the per-body uniforms for one frame.
///
/// The sun gets its travel direction (negated forward); every moon gets a
/// travel direction plus the body-space matrix its cubemap is sampled
/// through. Pure data hand-off, no other transformation.
pub fn write_body_uniforms(sink: &mut dyn UniformSink, sun: &Orientation, moons: &[Orientation]) {
    sink.set_vector(SUN_DIR, (-sun.forward()).extend(0.0));
    for (i, moon) in moons.iter().enumerate() {
        sink.set_vector(&moon_dir_name(i), (-moon.forward()).extend(0.0));
        sink.set_matrix(&moon_space_matrix_name(i), body_space_matrix(moon));
    }
    log::trace!("wrote body uniforms for sun and {} moon(s)", moons.len());
}
