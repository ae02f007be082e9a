//! In-memory shader property table.

use std::collections::HashMap;

use glam::{Mat4, Vec4};

use crate::UniformSink;

/// A uniform value held by the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vector(Vec4),
    Matrix(Mat4),
}

/// [`UniformSink`] implementation backed by a hash map.
///
/// Stands in for the renderer's parameter table in tests and the demo; a
/// GPU host would instead implement the sink over its own uniform buffers.
#[derive(Debug, Default)]
pub struct ShaderPropertyTable {
    values: HashMap<String, UniformValue>,
}

impl ShaderPropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct parameters written so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Scalar parameter, if present and a float.
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Vector parameter, if present and a vector.
    pub fn vector(&self, name: &str) -> Option<Vec4> {
        match self.values.get(name) {
            Some(UniformValue::Vector(v)) => Some(*v),
            _ => None,
        }
    }

    /// Matrix parameter, if present and a matrix.
    pub fn matrix(&self, name: &str) -> Option<Mat4> {
        match self.values.get(name) {
            Some(UniformValue::Matrix(m)) => Some(*m),
            _ => None,
        }
    }
}

impl UniformSink for ShaderPropertyTable {
    fn set_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), UniformValue::Float(value));
    }

    fn set_vector(&mut self, name: &str, value: Vec4) {
        self.values
            .insert(name.to_string(), UniformValue::Vector(value));
    }

    fn set_matrix(&mut self, name: &str, value: Mat4) {
        self.values
            .insert(name.to_string(), UniformValue::Matrix(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_typed_and_retrievable() {
        let mut table = ShaderPropertyTable::new();
        table.set_float("_SunRadius", 0.05);
        table.set_vector("_SunDir", Vec4::new(0.0, -1.0, 0.0, 0.0));
        table.set_matrix("_MoonSpaceMatrix", Mat4::IDENTITY);

        assert_eq!(table.len(), 3);
        assert_eq!(table.float("_SunRadius"), Some(0.05));
        assert_eq!(table.vector("_SunDir"), Some(Vec4::new(0.0, -1.0, 0.0, 0.0)));
        assert_eq!(table.matrix("_MoonSpaceMatrix"), Some(Mat4::IDENTITY));
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = ShaderPropertyTable::new();
        table.set_float("_Cloudiness", 0.0);
        table.set_float("_Cloudiness", 0.8);
        assert_eq!(table.float("_Cloudiness"), Some(0.8));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_type_mismatch_returns_none() {
        let mut table = ShaderPropertyTable::new();
        table.set_float("_SunRadius", 0.05);
        assert_eq!(table.vector("_SunRadius"), None);
        assert_eq!(table.matrix("_SunRadius"), None);
        assert_eq!(table.float("_Missing"), None);
    }
}
