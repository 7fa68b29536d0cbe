//! CPU-side PNG rendering of a [`VectorField`] magnitude map.
//!
//! Feature-gated behind `png` (default on) so embedders can depend on the
//! registry without pulling in the `image` crate. The pixel buffer
//! conversion itself lives in [`crate::pixel`] (always available).

use magnet_sketch_core::error::FieldError;
use magnet_sketch_core::field::VectorField;
use magnet_sketch_core::palette::Palette;
use std::path::Path;

use crate::pixel::field_to_rgba;

/// Writes a field's magnitude as a PNG image, mapping values through the
/// given palette. Masked cells come out transparent.
///
/// Returns `FieldError::InvalidDimensions` if the field dimensions
/// overflow `u32`, or `FieldError::Io` on write failure.
pub fn write_png(field: &VectorField, palette: &Palette, path: &Path) -> Result<(), FieldError> {
    let rgba = field_to_rgba(field, palette);
    let w = u32::try_from(field.nx()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(field.ny()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_png_round_trip() {
        let mut field = VectorField::zeros(16, 16).unwrap();
        field.set(3, 3, 1.0, 2.0);
        field.set_absent(0, 0);
        let palette = Palette::from_name("plasma").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.png");

        write_png(&field, &palette, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        // The masked corner survives the round trip as transparent.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(3, 3)[3], 255);
    }
}
