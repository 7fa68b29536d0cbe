//! Error types for the magnet-sketch core.

use thiserror::Error;

/// Errors produced by field synthesis and its surrounding surface.
///
/// Degenerate *geometry* is deliberately not represented here: invalid
/// magnets are skipped, coincident poles propagate as non-finite field
/// values, and an empty magnet list yields a zero field (see the engine
/// contract). Errors are reserved for structural problems.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero (or overflowed) when creating a grid or field.
    #[error("invalid dimensions: nx and ny must be non-zero")]
    InvalidDimensions,

    /// Two grids had incompatible dimensions for an element-wise operation.
    #[error("dimension mismatch: ({lhs_nx}, {lhs_ny}) vs ({rhs_nx}, {rhs_ny})")]
    DimensionMismatch {
        lhs_nx: usize,
        lhs_ny: usize,
        rhs_nx: usize,
        rhs_ny: usize,
    },

    /// A requested engine name was not found in the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A scene description could not be decoded.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// An I/O failure while writing a snapshot or dump.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = FieldError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("nx") && msg.contains("ny"),
            "expected message mentioning nx and ny, got: {msg}"
        );
    }

    #[test]
    fn dimension_mismatch_includes_all_dimensions() {
        let err = FieldError::DimensionMismatch {
            lhs_nx: 10,
            lhs_ny: 20,
            rhs_nx: 30,
            rhs_ny: 40,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"), "missing lhs_nx in: {msg}");
        assert!(msg.contains("20"), "missing lhs_ny in: {msg}");
        assert!(msg.contains("30"), "missing rhs_nx in: {msg}");
        assert!(msg.contains("40"), "missing rhs_ny in: {msg}");
    }

    #[test]
    fn unknown_engine_includes_name() {
        let err = FieldError::UnknownEngine("vortex".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("vortex"),
            "expected message containing 'vortex', got: {msg}"
        );
    }

    #[test]
    fn invalid_scene_includes_message() {
        let err = FieldError::InvalidScene("missing boundary".into());
        assert!(format!("{err}").contains("missing boundary"));
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = FieldError::InvalidColor("bad hex".into());
        assert!(format!("{err}").contains("bad hex"));
    }

    #[test]
    fn invalid_palette_includes_message() {
        let err = FieldError::InvalidPalette("empty".into());
        assert!(format!("{err}").contains("empty"));
    }

    #[test]
    fn io_error_includes_message() {
        let err = FieldError::Io("disk full".into());
        assert!(format!("{err}").contains("disk full"));
    }

    #[test]
    fn field_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }

    #[test]
    fn field_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<FieldError>();
    }
}
