//! Streamline styling derived from intensity.
//!
//! The renderer draws denser, thicker streamlines as the field gets
//! stronger. The derivation is pure so the excluded plotting layer can
//! ask for it without recomputing the field.

/// Streamline density at zero intensity.
const DENSITY_BASE: f64 = 1.0;
/// Density gained per unit of intensity.
const DENSITY_PER_INTENSITY: f64 = 0.3;
/// Line width at zero intensity.
const LINEWIDTH_BASE: f64 = 0.5;
/// Line width gained per unit of intensity.
const LINEWIDTH_PER_INTENSITY: f64 = 0.1;

/// Rendering parameters for a streamline plot of the synthesized field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamlineStyle {
    /// Streamline seeding density.
    pub density: f64,
    /// Streamline width.
    pub linewidth: f64,
}

impl StreamlineStyle {
    /// Derives the style for the given field intensity.
    pub fn for_intensity(intensity: f64) -> Self {
        Self {
            density: DENSITY_BASE + DENSITY_PER_INTENSITY * intensity,
            linewidth: LINEWIDTH_BASE + LINEWIDTH_PER_INTENSITY * intensity,
        }
    }
}
