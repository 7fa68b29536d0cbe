//! The core `FieldEngine` trait implemented by every field synthesis engine.
//!
//! The trait is object-safe so engines can be used as `dyn FieldEngine` for
//! runtime switching between synthesis algorithms.

use crate::error::FieldError;
use crate::field::VectorField;
use crate::grid::SampleGrid;
use serde_json::Value;

/// Core trait for field synthesis engines.
///
/// An engine holds its own inputs (geometry, tunables) and produces a
/// freshly allocated [`VectorField`] per call. Synthesis is a pure,
/// blocking computation: no state is retained between calls and every
/// call is a full recomputation over the given grid.
///
/// This trait is **object-safe**: `Box<dyn FieldEngine>` and
/// `&dyn FieldEngine` both work for runtime polymorphism.
pub trait FieldEngine {
    /// Computes the (bx, by) field over `grid`.
    ///
    /// Returns `FieldError` only for structural problems (e.g. a grid the
    /// result cannot be allocated for); degenerate geometry degrades to
    /// zero or non-finite output instead of erroring.
    fn synthesize(&self, grid: &SampleGrid) -> Result<VectorField, FieldError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges,
    /// and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal engine used to verify trait object safety.
    struct MockEngine {
        scale: f64,
    }

    impl FieldEngine for MockEngine {
        fn synthesize(&self, grid: &SampleGrid) -> Result<VectorField, FieldError> {
            let mut field = VectorField::zeros(grid.nx(), grid.ny())?;
            field.scale_assign(self.scale);
            Ok(field)
        }

        fn params(&self) -> Value {
            json!({"scale": self.scale})
        }

        fn param_schema(&self) -> Value {
            json!({
                "scale": {
                    "type": "number",
                    "default": 1.0,
                    "description": "Uniform output scale"
                }
            })
        }
    }

    #[test]
    fn field_engine_trait_is_object_safe() {
        let engine: Box<dyn FieldEngine> = Box::new(MockEngine { scale: 1.0 });
        let grid = SampleGrid::centered_square(8, 1.0).unwrap();
        let field = engine.synthesize(&grid).unwrap();
        assert_eq!(field.nx(), 8);
        assert_eq!(field.ny(), 8);
    }

    #[test]
    fn dyn_engine_reference_works() {
        let engine = MockEngine { scale: 2.0 };
        let engine_ref: &dyn FieldEngine = &engine;
        assert_eq!(engine_ref.params()["scale"], 2.0);
        assert!(engine_ref.param_schema().get("scale").is_some());
    }

    #[test]
    fn synthesize_output_matches_grid_shape() {
        let engine = MockEngine { scale: 1.0 };
        let grid = SampleGrid::new(5, 7, (-1.0, 1.0), (-1.0, 1.0)).unwrap();
        let field = engine.synthesize(&grid).unwrap();
        assert_eq!((field.nx(), field.ny()), (grid.nx(), grid.ny()));
    }
}
