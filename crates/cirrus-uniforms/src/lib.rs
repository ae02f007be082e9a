//! Shader uniform hand-off: the sink the sky writes into each frame,
//! the in-memory property table, and the per-body uniform bindings.

mod basis;
mod binding;
mod sink;
mod table;

pub use basis::body_space_matrix;
pub use binding::{SUN_DIR, moon_dir_name, moon_space_matrix_name, write_body_uniforms};
pub use sink::UniformSink;
pub use table::{ShaderPropertyTable, UniformValue};
