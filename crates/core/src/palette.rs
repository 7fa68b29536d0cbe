//! Palette of sRGB color stops, sampled by linear interpolation.
//!
//! Used to color field magnitude for snapshot rendering. Stops are evenly
//! spaced along the `t` parameter: `sample(0.0)` returns the first color,
//! `sample(1.0)` the last. NaN input clamps to the first stop.

use crate::error::FieldError;

/// An sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Parses `"#rrggbb"` or `"rrggbb"` (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, FieldError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FieldError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f64, FieldError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| FieldError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Palette names recognized by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["plasma", "viridis", "monochrome"];

/// A palette of evenly spaced sRGB stops.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a palette from at least one color stop.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, FieldError> {
        if colors.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, FieldError> {
        let colors: Result<Vec<Srgb>, FieldError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Constructs a named preset palette.
    ///
    /// Recognized names: `plasma` (the reference colormap for field
    /// magnitude), `viridis`, `monochrome`.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "plasma" => Self::from_hex(&[
                "#0d0887", "#6a00a8", "#b12a90", "#e16462", "#fca636", "#f0f921",
            ]),
            "viridis" => Self::from_hex(&["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]),
            "monochrome" => Self::from_hex(&["#000000", "#ffffff"]),
            _ => Err(FieldError::InvalidPalette(format!(
                "unknown palette: {name}"
            ))),
        }
    }

    /// Returns all recognized preset names.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a valid palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Samples the palette at `t` in [0, 1], clamping out-of-range and NaN.
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let scaled = t * (n - 1) as f64;
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f64;
        let c0 = self.colors[idx];
        let c1 = self.colors[idx + 1];
        Srgb {
            r: c0.r + frac * (c1.r - c0.r),
            g: c0.g + frac * (c1.g - c0.g),
            b: c0.b + frac * (c1.b - c0.b),
        }
    }
}
