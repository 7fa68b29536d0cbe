#![deny(unsafe_code)]
//! Dipole-superposition field synthesis engine.
//!
//! Each magnet's interior is discretized into point sources on an auxiliary
//! lattice; every source contributes a softened point-dipole field oriented
//! along the magnet's pole-to-pole axis, and contributions from all magnets
//! accumulate additively. Cells outside every magnet's polygon are marked
//! absent (NaN) so a streamline renderer can skip them.
//!
//! This is a stylized, visually plausible approximation, not a calibrated
//! magnetostatics solver. The softening constant keeps the field finite
//! everywhere, which streamline integration requires.

pub mod scene;

use glam::DVec2;
use serde_json::{json, Value};

use magnet_sketch_core::error::FieldError;
use magnet_sketch_core::field::VectorField;
use magnet_sketch_core::grid::SampleGrid;
use magnet_sketch_core::magnet::Magnet;
use magnet_sketch_core::params::{param_f64, param_usize};
use magnet_sketch_core::FieldEngine;

use scene::MagnetSpec;

/// Default field strength multiplier.
pub const DEFAULT_INTENSITY: f64 = 5.0;
/// Lower bound of the intensity slider range.
pub const INTENSITY_MIN: f64 = 0.1;
/// Upper bound of the intensity slider range.
pub const INTENSITY_MAX: f64 = 20.0;
/// Step of the intensity slider.
pub const INTENSITY_STEP: f64 = 0.1;
/// Default squared-distance softening offset.
pub const DEFAULT_SOFTENING: f64 = 0.3;
/// Default interior source lattice points per axis.
pub const DEFAULT_SOURCE_RESOLUTION: usize = 40;
/// Display grid points per axis used by the reference renderer.
pub const DISPLAY_RESOLUTION: usize = 150;
/// Half-extent of the reference display domain (`[-6, 6]` on both axes).
pub const DOMAIN_HALF_EXTENT: f64 = 6.0;

/// Tunable parameters for [`DipoleField`].
///
/// Use [`Default`] for the reference configuration (intensity 5.0,
/// softening 0.3, 40x40 source lattice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipoleParams {
    /// Uniform multiplier applied to every source contribution. The UI
    /// clamps its slider to [`INTENSITY_MIN`]..[`INTENSITY_MAX`]; the
    /// engine itself accepts any value.
    pub intensity: f64,
    /// Offset added to squared distance, bounding the field near sources.
    pub softening: f64,
    /// Interior source lattice points per axis.
    pub source_resolution: usize,
}

impl Default for DipoleParams {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            softening: DEFAULT_SOFTENING,
            source_resolution: DEFAULT_SOURCE_RESOLUTION,
        }
    }
}

impl DipoleParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            intensity: param_f64(params, "intensity", DEFAULT_INTENSITY),
            softening: param_f64(params, "softening", DEFAULT_SOFTENING),
            source_resolution: param_usize(
                params,
                "source_resolution",
                DEFAULT_SOURCE_RESOLUTION,
            ),
        }
    }
}

/// Field synthesis engine over a set of polygonal magnets.
///
/// Holds the magnet list and tunables; every [`FieldEngine::synthesize`]
/// call is a full recomputation into a freshly allocated field. Invalid
/// magnets (fewer than three boundary points) are skipped. Coincident
/// poles make a magnet's direction undefined and propagate NaN into the
/// cells its sources reach; the engine neither raises nor repairs this.
pub struct DipoleField {
    magnets: Vec<Magnet>,
    params: DipoleParams,
}

impl DipoleField {
    /// Creates an engine over the given magnets.
    pub fn new(magnets: Vec<Magnet>, params: DipoleParams) -> Self {
        Self { magnets, params }
    }

    /// Creates an engine from a JSON object holding optional `magnets`
    /// (an array of `{boundary, positive_pole, negative_pole}`) plus the
    /// [`DipoleParams`] keys.
    ///
    /// Returns `FieldError::InvalidScene` if the magnets array is present
    /// but malformed.
    pub fn from_json(params: &Value) -> Result<Self, FieldError> {
        let magnets = match params.get("magnets") {
            Some(value) => {
                let specs: Vec<MagnetSpec> = serde_json::from_value(value.clone())
                    .map_err(|e| FieldError::InvalidScene(e.to_string()))?;
                specs.into_iter().map(Magnet::from).collect()
            }
            None => Vec::new(),
        };
        Ok(Self::new(magnets, DipoleParams::from_json(params)))
    }

    /// The magnet list.
    pub fn magnets(&self) -> &[Magnet] {
        &self.magnets
    }

    /// Current parameter values.
    pub fn dipole_params(&self) -> DipoleParams {
        self.params
    }

    /// Interior point sources for one magnet: the auxiliary lattice points
    /// (spanning the main grid's domain at `source_resolution` per axis)
    /// that fall inside the magnet's polygon.
    fn interior_sources(&self, magnet: &Magnet, lattice: &SampleGrid) -> Vec<DVec2> {
        lattice
            .iter_points()
            .filter(|(_, _, p)| magnet.contains(*p))
            .map(|(_, _, p)| p)
            .collect()
    }

    /// Adds one magnet's source contributions into `field`.
    fn accumulate(
        &self,
        magnet: &Magnet,
        grid: &SampleGrid,
        lattice: &SampleGrid,
        field: &mut VectorField,
    ) {
        let m = magnet.magnetization();
        let intensity = self.params.intensity;
        let softening = self.params.softening;
        let (nx, ny) = (grid.nx(), grid.ny());
        let xs: Vec<f64> = (0..nx).map(|i| grid.x(i)).collect();
        let ys: Vec<f64> = (0..ny).map(|j| grid.y(j)).collect();
        let (bx, by) = field.components_mut();

        for s in self.interior_sources(magnet, lattice) {
            for j in 0..ny {
                let dy = ys[j] - s.y;
                for i in 0..nx {
                    let dx = xs[i] - s.x;
                    let r2 = dx * dx + dy * dy + softening;
                    let r = r2.sqrt();
                    let rx = dx / r;
                    let ry = dy / r;
                    let dot = rx * m.x + ry * m.y;
                    // Point-dipole form, scaled by 1 / r2^(3/2).
                    let k = intensity / (r2 * r);
                    let idx = j * nx + i;
                    bx[idx] += k * (3.0 * dot * rx - m.x);
                    by[idx] += k * (3.0 * dot * ry - m.y);
                }
            }
        }
    }
}

impl FieldEngine for DipoleField {
    /// Computes (bx, by) over `grid`.
    ///
    /// With no valid magnet the result is all-zero and fully finite.
    /// Otherwise contributions from every valid magnet are summed, then a
    /// cell is marked absent iff it lies outside *every* valid magnet's
    /// polygon (union masking: overlapping magnets keep each other's
    /// interiors defined, and the result is independent of magnet order).
    fn synthesize(&self, grid: &SampleGrid) -> Result<VectorField, FieldError> {
        let mut field = VectorField::zeros(grid.nx(), grid.ny())?;
        let valid: Vec<&Magnet> = self.magnets.iter().filter(|m| m.is_valid()).collect();
        if valid.is_empty() {
            return Ok(field);
        }
        let lattice =
            grid.with_resolution(self.params.source_resolution, self.params.source_resolution)?;
        for &magnet in &valid {
            self.accumulate(magnet, grid, &lattice, &mut field);
        }
        field.mask_where(|i, j| {
            let p = grid.point(i, j);
            !valid.iter().any(|m| m.contains(p))
        });
        Ok(field)
    }

    fn params(&self) -> Value {
        json!({
            "intensity": self.params.intensity,
            "softening": self.params.softening,
            "source_resolution": self.params.source_resolution,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "intensity": {
                "type": "number",
                "default": DEFAULT_INTENSITY,
                "min": INTENSITY_MIN,
                "max": INTENSITY_MAX,
                "step": INTENSITY_STEP,
                "description": "Uniform field strength multiplier"
            },
            "softening": {
                "type": "number",
                "default": DEFAULT_SOFTENING,
                "description": "Squared-distance offset keeping the field finite near sources"
            },
            "source_resolution": {
                "type": "integer",
                "default": DEFAULT_SOURCE_RESOLUTION,
                "description": "Interior source lattice points per axis"
            }
        })
    }
}
