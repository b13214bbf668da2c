//! Orientation predicates on 2D points, used by the planar triangulation routines.

use crate::math::{Point2, Real};
use core::cmp::Ordering;

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line, or a corner with a non-finite coordinate)
    None,
}

/// Returns the direction of the turn made when going through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// ```text
///             o p3
///           .
/// o p1 . . o p2
/// ```
///
/// Clockwise example:
/// ```text
/// o p1 . . o p2
///           .
///             o p3
/// ```
pub fn corner_direction(p1: &Point2<Real>, p2: &Point2<Real>, p3: &Point2<Real>) -> Orientation {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    match cross.partial_cmp(&0.0) {
        Some(Ordering::Less) => Orientation::Ccw,
        Some(Ordering::Greater) => Orientation::Cw,
        Some(Ordering::Equal) | None => Orientation::None,
    }
}

/// Returns `true` if point `p` is in triangle with corners `v1`, `v2` and `v3`.
///
/// Points lying on the triangle boundary are considered inside.
/// Returns `None` if the triangle is invalid i.e. all points are the same or on a straight line.
pub fn is_point_in_triangle(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
) -> Option<bool> {
    let d1 = corner_direction(p, v1, v2);
    let d2 = corner_direction(p, v2, v3);
    let d3 = corner_direction(p, v3, v1);

    let has_cw = d1 == Orientation::Cw || d2 == Orientation::Cw || d3 == Orientation::Cw;
    let has_ccw = d1 == Orientation::Ccw || d2 == Orientation::Ccw || d3 == Orientation::Ccw;

    if d1 == Orientation::None && d2 == Orientation::None && d3 == Orientation::None {
        None
    } else {
        Some(!(has_cw && has_ccw))
    }
}
