//! Geometric predicates
//!
//! - Tolerance comparisons for scalars, points and edges
//! - Orientation of a point against a directed line
//! - Circumcircle construction and containment

use super::{Edge, Point2, VertexId};

/// Scalar near-equality with a combined relative/absolute tolerance
///
/// True when the difference is within `2 * EPSILON * |x + y|`, or below the
/// smallest positive normal f64 (which covers values near zero).
pub fn almost_equal(x: f64, y: f64) -> bool {
    let diff = (x - y).abs();
    diff <= f64::EPSILON * (x + y).abs() * 2.0 || diff < f64::MIN_POSITIVE
}

/// Both coordinates near-equal
pub fn points_almost_equal(p: Point2, q: Point2) -> bool {
    almost_equal(p.x, q.x) && almost_equal(p.y, q.y)
}

/// Position-based edge comparison, order-independent
///
/// `position` resolves a vertex id to its coordinates. Only the triangulation
/// engine uses this, to cancel edges shared by two cavity triangles; graph
/// code compares edges by identity.
pub fn edges_almost_equal<F>(left: &Edge, right: &Edge, position: F) -> bool
where
    F: Fn(VertexId) -> Point2,
{
    let (lu, lv) = (position(left.u), position(left.v));
    let (ru, rv) = (position(right.u), position(right.v));

    (points_almost_equal(lu, ru) && points_almost_equal(lv, rv))
        || (points_almost_equal(lu, rv) && points_almost_equal(lv, ru))
}

/// Twice the signed area of `a, b, c`: positive when `c` lies left of the
/// directed line `a -> b`, negative when right, zero when collinear
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Circle through the three corners of a triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    pub center: Point2,
    /// Squared radius
    pub radius_sq: f64,
}

impl Circumcircle {
    /// Compute the circumcircle from squared vertex magnitudes.
    ///
    /// Collinear or coincident corners drive the denominators to zero and
    /// yield non-finite values; use [`Circumcircle::checked`] when that
    /// must be detected.
    pub fn from_corners(a: Point2, b: Point2, c: Point2) -> Self {
        let ab = a.length_sq();
        let cd = b.length_sq();
        let ef = c.length_sq();

        let circum_x = (ab * (c.y - b.y) + cd * (a.y - c.y) + ef * (b.y - a.y))
            / (a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y));
        let circum_y = (ab * (c.x - b.x) + cd * (a.x - c.x) + ef * (b.x - a.x))
            / (a.y * (c.x - b.x) + b.y * (a.x - c.x) + c.y * (b.x - a.x));

        let center = Point2::new(circum_x / 2.0, circum_y / 2.0);
        Self {
            center,
            radius_sq: a.distance_sq(center),
        }
    }

    /// Like [`Circumcircle::from_corners`], `None` when the result is not finite
    pub fn checked(a: Point2, b: Point2, c: Point2) -> Option<Self> {
        let circle = Self::from_corners(a, b, c);
        if circle.center.is_finite() && circle.radius_sq.is_finite() {
            Some(circle)
        } else {
            None
        }
    }

    /// Point lies inside or on the circle
    pub fn contains(&self, point: Point2) -> bool {
        point.distance_sq(self.center) <= self.radius_sq
    }
}

/// Check whether `point` lies in the circumcircle of the triangle `corners`.
///
/// Precondition: the corners are not collinear. Degenerate input is not
/// detected here and gives a meaningless answer.
pub fn circumcircle_contains(corners: [Point2; 3], point: Point2) -> bool {
    Circumcircle::from_corners(corners[0], corners[1], corners[2]).contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almost_equal_scalars() {
        assert!(almost_equal(1.0, 1.0));
        assert!(almost_equal(0.0, 0.0));
        assert!(almost_equal(0.1 + 0.2, 0.3));
        assert!(!almost_equal(1.0, 1.0001));
        assert!(!almost_equal(0.0, 1e-9));
    }

    #[test]
    fn test_orientation_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        assert!(orientation(a, b, Point2::new(1.0, 2.0)) > 0.0);
        assert!(orientation(a, b, Point2::new(1.0, -2.0)) < 0.0);
        assert_eq!(orientation(a, b, Point2::new(9.0, 0.0)), 0.0);
        assert_eq!(orientation(a, b, Point2::new(1.0, 2.0)), 8.0);
    }

    #[test]
    fn test_edges_almost_equal_both_orientations() {
        let positions = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ];
        let pos = |id: VertexId| positions[id.index()];

        let e01 = Edge::new(VertexId(0), VertexId(1));
        let e23 = Edge::new(VertexId(2), VertexId(3));
        let e32 = Edge::new(VertexId(3), VertexId(2));
        let e04 = Edge::new(VertexId(0), VertexId(4));

        // Distinct ids at equal positions are near-equal but not identical
        assert!(edges_almost_equal(&e01, &e23, pos));
        assert!(edges_almost_equal(&e01, &e32, pos));
        assert_ne!(e01, e23);
        assert!(!edges_almost_equal(&e01, &e04, pos));
    }

    #[test]
    fn test_circumcircle_right_triangle() {
        let c = Circumcircle::from_corners(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        );
        assert!((c.center.x - 1.0).abs() < 1e-12);
        assert!((c.center.y - 1.0).abs() < 1e-12);
        assert!((c.radius_sq - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains_inside_boundary_outside() {
        let corners = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(circumcircle_contains(corners, Point2::new(0.5, 0.5)));
        // (1, 1) lies exactly on the circle
        assert!(circumcircle_contains(corners, Point2::new(1.0, 1.0)));
        assert!(!circumcircle_contains(corners, Point2::new(2.0, 2.0)));
    }

    #[test]
    fn test_collinear_is_not_finite() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(Circumcircle::checked(a, b, c).is_none());
        assert!(!Circumcircle::from_corners(a, b, c).center.is_finite());
    }

    #[test]
    fn test_coincident_is_not_finite() {
        let a = Point2::new(3.0, 1.0);
        assert!(Circumcircle::checked(a, a, Point2::new(0.0, 5.0)).is_none());
    }
}
