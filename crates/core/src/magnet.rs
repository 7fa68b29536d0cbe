//! A hand-drawn polygonal magnet with two interior poles.

use glam::DVec2;

use crate::polygon::Polygon;

/// Minimum number of boundary points for a magnet to produce field.
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// A polygonal magnet: a drawn outline plus a positive and negative pole.
///
/// Construction never fails and performs no validation; callers filter
/// with [`Magnet::is_valid`] before field synthesis (engines additionally
/// skip invalid magnets defensively). Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnet {
    boundary: Polygon,
    positive_pole: DVec2,
    negative_pole: DVec2,
}

impl Magnet {
    /// Creates a magnet from an ordered boundary and two pole points.
    pub fn new(boundary: Vec<DVec2>, positive_pole: DVec2, negative_pole: DVec2) -> Self {
        Self {
            boundary: Polygon::new(boundary),
            positive_pole,
            negative_pole,
        }
    }

    /// The boundary polygon.
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// The positive (north) pole.
    pub fn positive_pole(&self) -> DVec2 {
        self.positive_pole
    }

    /// The negative (south) pole.
    pub fn negative_pole(&self) -> DVec2 {
        self.negative_pole
    }

    /// True if the boundary has enough points to enclose area.
    pub fn is_valid(&self) -> bool {
        self.boundary.len() >= MIN_BOUNDARY_POINTS
    }

    /// True iff `p` lies inside the boundary polygon.
    pub fn contains(&self, p: DVec2) -> bool {
        self.boundary.contains(p)
    }

    /// Unit magnetization direction, from the positive toward the negative
    /// pole.
    ///
    /// Coincident poles make the direction undefined: the division by a
    /// zero length yields NaN components, which callers let propagate into
    /// the synthesized field rather than papering over (the intent of such
    /// input is ambiguous).
    pub fn magnetization(&self) -> DVec2 {
        let d = self.negative_pole - self.positive_pole;
        d / d.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Magnet {
        Magnet::new(
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(2.0, 0.0),
                DVec2::new(1.0, 2.0),
            ],
            DVec2::new(1.0, 0.5),
            DVec2::new(1.0, 1.2),
        )
    }

    #[test]
    fn triangle_is_valid_and_contains_its_poles() {
        let m = triangle();
        assert!(m.is_valid());
        assert!(m.contains(m.positive_pole()));
        assert!(m.contains(m.negative_pole()));
    }

    #[test]
    fn construction_never_fails_for_degenerate_boundary() {
        let m = Magnet::new(vec![DVec2::ZERO], DVec2::ZERO, DVec2::X);
        assert!(!m.is_valid());
        assert!(!m.contains(DVec2::ZERO));
    }

    #[test]
    fn two_point_boundary_is_invalid() {
        let m = Magnet::new(vec![DVec2::ZERO, DVec2::X], DVec2::ZERO, DVec2::X);
        assert!(!m.is_valid());
    }

    #[test]
    fn magnetization_points_from_positive_to_negative() {
        let m = triangle();
        let dir = m.magnetization();
        // Poles are vertically separated: direction is +y.
        assert!(dir.x.abs() < 1e-12);
        assert!((dir.y - 1.0).abs() < 1e-12);
        assert!((dir.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_poles_yield_non_finite_direction() {
        let p = DVec2::new(0.5, 0.5);
        let m = Magnet::new(
            vec![DVec2::ZERO, DVec2::X, DVec2::new(0.5, 1.0)],
            p,
            p,
        );
        let dir = m.magnetization();
        assert!(!dir.x.is_finite() || !dir.y.is_finite());
    }

    #[test]
    fn containment_matches_boundary_polygon() {
        let m = triangle();
        assert!(m.contains(DVec2::new(1.0, 0.8)));
        assert!(!m.contains(DVec2::new(-1.0, 0.8)));
    }
}
