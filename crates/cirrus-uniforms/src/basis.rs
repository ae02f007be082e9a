//! Body-space basis matrix for cubemap-oriented shading.

use glam::{Mat4, Vec4};

use cirrus_celestial::Orientation;

/// Build the body-space matrix the sky shader uses to orient a moon's
/// cubemap: the negated forward/up/right basis vectors as matrix columns
/// with a zero fourth column, then transposed so they land in the rows.
pub fn body_space_matrix(orientation: &Orientation) -> Mat4 {
    Mat4::from_cols(
        (-orientation.forward()).extend(0.0),
        (-orientation.up()).extend(0.0),
        (-orientation.right()).extend(0.0),
        Vec4::ZERO,
    )
    .transpose()
}
