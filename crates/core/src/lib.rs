#![deny(unsafe_code)]
//! Core types for the magnet-sketch field synthesis system.
//!
//! Provides the `FieldEngine` trait, `SampleGrid` and `VectorField` grid
//! types, `Polygon`/`Magnet` geometry, the `MagnetSketch` drawing workflow
//! state machine, `Palette` for magnitude coloring, and parameter helpers.

pub mod engine;
pub mod error;
pub mod field;
pub mod grid;
pub mod magnet;
pub mod palette;
pub mod params;
pub mod polygon;
pub mod sketch;

pub use engine::FieldEngine;
pub use error::FieldError;
pub use field::VectorField;
pub use grid::SampleGrid;
pub use magnet::Magnet;
pub use palette::{Palette, Srgb};
pub use polygon::Polygon;
pub use sketch::{MagnetSketch, SketchOutcome, SketchPhase};
