use crate::math::{Point2, Real};
use ordered_float::OrderedFloat;

/// Computes the convex hull of a set of 2d points.
///
/// The computed convex hull has its points given in counter-clockwise order.
pub fn convex_hull2(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    convex_hull2_idx(points)
        .into_iter()
        .map(|id| points[id])
        .collect()
}

/// Computes the convex hull of a set of 2d points, using the monotone chain algorithm.
///
/// The computed convex hull has its points indices given in counter-clockwise order. Collinear
/// points along the hull boundary are not part of the result. Points with non-finite coordinates
/// are ignored.
pub fn convex_hull2_idx(points: &[Point2<Real>]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len())
        .filter(|i| points[*i].iter().all(|x| x.is_finite()))
        .collect();
    sorted.sort_by_key(|i| (OrderedFloat(points[*i].x), OrderedFloat(points[*i].y)));
    sorted.dedup_by_key(|i| (OrderedFloat(points[*i].x), OrderedFloat(points[*i].y)));

    if sorted.len() < 3 {
        return sorted;
    }

    let turns_left = |hull: &[usize], p: usize| {
        let a = points[hull[hull.len() - 2]];
        let b = points[hull[hull.len() - 1]];
        (b - a).perp(&(points[p] - a)) > 0.0
    };

    let mut lower: Vec<usize> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && !turns_left(&lower, p) {
            let _ = lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper, p) {
            let _ = upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other one.
    let _ = lower.pop();
    let _ = upper.pop();
    lower.extend(upper);
    lower
}
