//! Small helpers on simple 2D polygons given as closed vertex loops.

use crate::math::{Point2, Real};

/// Twice the signed area of a closed 2D polygon.
///
/// The result is positive if the polygon is oriented counter-clockwise.
pub fn signed_area2d_x2(poly: &[Point2<Real>]) -> Real {
    let mut res = 0.0;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        res += a.coords.perp(&b.coords);
    }

    res
}

/// Removes, in-place, the vertices of a closed polygon that lie on the line joining their
/// neighbors.
///
/// A vertex is removed if its distance to the line through its two neighbors is smaller than
/// `epsilon * max(1, l)` where `l` is the distance between the neighbors, or if both neighbors
/// are closer than `epsilon` to each other.
pub fn remove_collinear_points(poly: &mut Vec<Point2<Real>>, epsilon: Real) {
    let mut i = 0;
    let mut checked_since_last_removal = 0;

    while poly.len() > 2 && checked_since_last_removal < poly.len() {
        let n = poly.len();
        let prev = poly[(i + n - 1) % n];
        let curr = poly[i % n];
        let next = poly[(i + 1) % n];

        let base = next - prev;
        let base_len = base.norm();
        let deviation = (curr - prev).perp(&base).abs();

        if base_len <= epsilon || deviation <= epsilon * base_len * base_len.max(1.0) {
            let _ = poly.remove(i % n);
            checked_since_last_removal = 0;
            if i >= poly.len() {
                i = 0;
            }
        } else {
            checked_since_last_removal += 1;
            i = (i + 1) % n;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_area_of_unit_square() {
        let ccw = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let mut cw = ccw;
        cw.reverse();

        assert_relative_eq!(signed_area2d_x2(&ccw), 2.0);
        assert_relative_eq!(signed_area2d_x2(&cw), -2.0);
    }

    #[test]
    fn collinear_points_are_removed() {
        let mut poly = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.0, 1.0),
        ];

        remove_collinear_points(&mut poly, 1.0e-5);

        assert_eq!(
            poly,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ]
        );
    }
}
