//! Serde description of the engine's input contract.
//!
//! A scene file is the serialized form of what the drawing UI hands the
//! engine: magnet geometries plus the slider intensity. Points serialize
//! as `[x, y]` pairs, so a scene reads naturally as JSON:
//!
//! ```json
//! {
//!   "magnets": [{
//!     "boundary": [[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]],
//!     "positive_pole": [1.0, 0.5],
//!     "negative_pole": [1.0, 1.2]
//!   }],
//!   "intensity": 5.0
//! }
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use magnet_sketch_core::error::FieldError;
use magnet_sketch_core::magnet::Magnet;

use crate::DEFAULT_INTENSITY;

/// One magnet's geometry as it appears in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetSpec {
    /// Ordered boundary points; implicitly closed.
    pub boundary: Vec<DVec2>,
    /// Positive (north) pole, inside the boundary.
    pub positive_pole: DVec2,
    /// Negative (south) pole, inside the boundary.
    pub negative_pole: DVec2,
}

impl From<MagnetSpec> for Magnet {
    fn from(spec: MagnetSpec) -> Self {
        Magnet::new(spec.boundary, spec.positive_pole, spec.negative_pole)
    }
}

impl From<&Magnet> for MagnetSpec {
    fn from(magnet: &Magnet) -> Self {
        Self {
            boundary: magnet.boundary().vertices().to_vec(),
            positive_pole: magnet.positive_pole(),
            negative_pole: magnet.negative_pole(),
        }
    }
}

/// A full scene: magnets plus the intensity the slider currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Magnet geometries; missing key reads as an empty list.
    #[serde(default)]
    pub magnets: Vec<MagnetSpec>,
    /// Field strength multiplier; missing key reads as the default.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    DEFAULT_INTENSITY
}

impl Scene {
    /// Parses a scene from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, FieldError> {
        serde_json::from_str(text).map_err(|e| FieldError::InvalidScene(e.to_string()))
    }

    /// Converts the magnet specs into engine magnets.
    pub fn into_magnets(self) -> Vec<Magnet> {
        self.magnets.into_iter().map(Magnet::from).collect()
    }
}
