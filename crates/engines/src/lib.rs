#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations and provides
//! CPU-side magnitude snapshot rendering.
//!
//! This crate sits between `magnet-sketch-core` (which defines the
//! `FieldEngine` trait) and the individual engine crates
//! (`magnet-sketch-dipole`). The CLI depends on this crate so dispatch
//! logic lives in one place.

pub mod pixel;
pub mod style;

#[cfg(feature = "png")]
pub mod snapshot;

use magnet_sketch_core::error::FieldError;
use magnet_sketch_core::field::VectorField;
use magnet_sketch_core::grid::SampleGrid;
use magnet_sketch_core::FieldEngine;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["dipole"];

/// Enumeration of all available field synthesis engines.
///
/// Wraps each engine implementation and delegates `FieldEngine` trait
/// methods. Use [`EngineKind::from_name`] for string-based construction.
pub enum EngineKind {
    /// Softened point-dipole superposition over polygonal magnets.
    Dipole(magnet_sketch_dipole::DipoleField),
}

impl EngineKind {
    /// Constructs an engine by name from a JSON params object (which may
    /// carry a `magnets` array alongside the engine's tunables).
    ///
    /// Returns `FieldError::UnknownEngine` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, FieldError> {
        match name {
            "dipole" => Ok(EngineKind::Dipole(
                magnet_sketch_dipole::DipoleField::from_json(params)?,
            )),
            _ => Err(FieldError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl FieldEngine for EngineKind {
    fn synthesize(&self, grid: &SampleGrid) -> Result<VectorField, FieldError> {
        match self {
            EngineKind::Dipole(e) => e.synthesize(grid),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Dipole(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Dipole(e) => e.param_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn triangle_params() -> Value {
        json!({
            "intensity": 5.0,
            "magnets": [{
                "boundary": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]],
                "positive_pole": [1.0, 0.5],
                "negative_pole": [1.0, 1.2],
            }],
        })
    }

    #[test]
    fn from_name_dipole_succeeds() {
        let engine = EngineKind::from_name("dipole", &json!({}));
        assert!(engine.is_ok());
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = EngineKind::from_name("nonexistent", &json!({}));
        assert!(matches!(result, Err(FieldError::UnknownEngine(_))));
    }

    #[test]
    fn list_engines_includes_dipole() {
        assert!(EngineKind::list_engines().contains(&"dipole"));
    }

    #[test]
    fn trait_delegation_synthesize() {
        let engine = EngineKind::from_name("dipole", &triangle_params()).unwrap();
        let grid = SampleGrid::centered_square(10, 3.0).unwrap();
        let field = engine.synthesize(&grid).unwrap();
        assert_eq!((field.nx(), field.ny()), (10, 10));
        assert!(field.finite_count() > 0, "triangle interior must be sampled");
        assert!(field.finite_count() < field.len(), "exterior must be masked");
    }

    #[test]
    fn trait_delegation_params_and_schema() {
        let engine = EngineKind::from_name("dipole", &triangle_params()).unwrap();
        assert_eq!(engine.params()["intensity"], 5.0);
        assert!(engine.param_schema().get("intensity").is_some());
    }

    #[test]
    fn determinism_same_params() {
        let grid = SampleGrid::centered_square(10, 3.0).unwrap();
        let a = EngineKind::from_name("dipole", &triangle_params())
            .unwrap()
            .synthesize(&grid)
            .unwrap();
        let b = EngineKind::from_name("dipole", &triangle_params())
            .unwrap()
            .synthesize(&grid)
            .unwrap();
        assert!(a
            .bx()
            .iter()
            .zip(b.bx().iter())
            .all(|(va, vb)| va.to_bits() == vb.to_bits()));
        assert!(a
            .by()
            .iter()
            .zip(b.by().iter())
            .all(|(va, vb)| va.to_bits() == vb.to_bits()));
    }

    #[test]
    fn object_safety() {
        let engine = EngineKind::from_name("dipole", &json!({})).unwrap();
        let boxed: Box<dyn FieldEngine> = Box::new(engine);
        let grid = SampleGrid::centered_square(4, 1.0).unwrap();
        assert_eq!(boxed.synthesize(&grid).unwrap().len(), 16);
    }
}
