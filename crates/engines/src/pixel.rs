//! Pure-computation pixel buffer conversion from a [`VectorField`].
//!
//! This module is always available (no feature gate) so the `png` snapshot
//! path and any embedding renderer share the same conversion.

use magnet_sketch_core::field::VectorField;
use magnet_sketch_core::palette::Palette;

/// Maps field magnitude through a palette to an RGBA8 pixel buffer.
///
/// Magnitudes are normalized by the maximum finite magnitude so the
/// brightest defined cell samples the palette at `t = 1`. Cells where the
/// field is absent (NaN) become fully transparent pixels. An all-masked
/// or all-zero field maps every defined cell to `t = 0`. The buffer
/// length is `nx * ny * 4`.
pub fn field_to_rgba(field: &VectorField, palette: &Palette) -> Vec<u8> {
    let magnitude = field.magnitude();
    let max = magnitude
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    magnitude
        .iter()
        .flat_map(|&m| {
            if !m.is_finite() {
                return [0, 0, 0, 0];
            }
            let t = if max > 0.0 { m / max } else { 0.0 };
            let srgb = palette.sample(t);
            let r = (srgb.r * 255.0).round() as u8;
            let g = (srgb.g * 255.0).round() as u8;
            let b = (srgb.b * 255.0).round() as u8;
            [r, g, b, 255u8]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_four_bytes_per_cell() {
        let field = VectorField::zeros(8, 4).unwrap();
        let palette = Palette::from_name("plasma").unwrap();
        let buf = field_to_rgba(&field, &palette);
        assert_eq!(buf.len(), 8 * 4 * 4);
    }

    #[test]
    fn masked_cells_are_transparent() {
        let mut field = VectorField::zeros(2, 2).unwrap();
        field.set_absent(1, 1);
        let palette = Palette::from_name("plasma").unwrap();
        let buf = field_to_rgba(&field, &palette);
        // Cell (1,1) is the last pixel; its alpha must be zero.
        assert_eq!(buf[15], 0, "masked cell alpha");
        assert_eq!(&buf[12..16], &[0, 0, 0, 0]);
        // Defined cells stay opaque.
        assert_eq!(buf[3], 255, "defined cell alpha");
    }

    #[test]
    fn strongest_cell_samples_palette_top() {
        let mut field = VectorField::zeros(2, 1).unwrap();
        field.set(0, 0, 3.0, 4.0); // |B| = 5
        field.set(1, 0, 0.3, 0.4); // |B| = 0.5
        let palette = Palette::from_name("monochrome").unwrap();
        let buf = field_to_rgba(&field, &palette);
        // Monochrome runs black -> white; the strongest cell is white.
        assert!(buf[0] > 245, "max-magnitude cell should be near white");
        // The weak cell normalizes to t = 0.1 -> dark gray.
        assert!(buf[4] < 40, "weak cell should be near black, got {}", buf[4]);
    }

    #[test]
    fn all_zero_field_renders_palette_bottom() {
        let field = VectorField::zeros(3, 3).unwrap();
        let palette = Palette::from_name("monochrome").unwrap();
        let buf = field_to_rgba(&field, &palette);
        for pixel in buf.chunks(4) {
            assert_eq!(pixel[3], 255);
            assert!(pixel[0] < 10);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn opaque_pixels_match_defined_cells(
                nx in 1_usize..=24,
                ny in 1_usize..=24,
                stride in 2_usize..=5,
            ) {
                let mut field = VectorField::zeros(nx, ny).unwrap();
                field.mask_where(|i, j| (i + j) % stride == 0);
                let palette = Palette::from_name("plasma").unwrap();
                let buf = field_to_rgba(&field, &palette);
                prop_assert_eq!(buf.len(), nx * ny * 4);
                let opaque = buf.chunks(4).filter(|px| px[3] == 255).count();
                prop_assert_eq!(opaque, field.finite_count());
                prop_assert!(buf.chunks(4).all(|px| px[3] == 255 || px[3] == 0));
            }
        }
    }
}
