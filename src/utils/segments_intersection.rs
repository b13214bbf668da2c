use crate::math::{Point2, Real};
use crate::utils::{corner_direction, Orientation};

/// Tests if the segments `[a, b]` and `[c, d]` cross at a single point interior to both.
///
/// Segments sharing an endpoint, touching at an endpoint or overlapping along a line are not
/// considered crossing.
pub fn segments_cross2d(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
) -> bool {
    let opposite = |o1: Orientation, o2: Orientation| {
        matches!(
            (o1, o2),
            (Orientation::Ccw, Orientation::Cw) | (Orientation::Cw, Orientation::Ccw)
        )
    };

    opposite(corner_direction(a, b, c), corner_direction(a, b, d))
        && opposite(corner_direction(c, d, a), corner_direction(c, d, b))
}
