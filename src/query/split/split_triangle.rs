use crate::math::{Point, Real};
use crate::shape::{Plane, PlaneSide, Triangle, TriangleVertex};
use arrayvec::ArrayVec;

/// The output of a plane/triangle split.
///
/// This is a scratch buffer meant to be reused across many calls to [`split_triangle`]: it is
/// cleared at the beginning of every split. A successful split yields at most two triangles on
/// each side of the plane, and the two points where the triangle crosses the plane.
#[derive(Clone, Debug, Default)]
pub struct IntersectionResult {
    upper: ArrayVec<Triangle, 2>,
    lower: ArrayVec<Triangle, 2>,
    points: ArrayVec<Point<Real>, 2>,
}

impl IntersectionResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties this result.
    pub fn clear(&mut self) {
        self.upper.clear();
        self.lower.clear();
        self.points.clear();
    }

    /// `true` if the last split produced triangles on both sides of the plane.
    pub fn is_valid(&self) -> bool {
        !self.upper.is_empty() && !self.lower.is_empty()
    }

    /// The triangles above the plane.
    pub fn upper(&self) -> &[Triangle] {
        &self.upper
    }

    /// The triangles below the plane.
    pub fn lower(&self) -> &[Triangle] {
        &self.lower
    }

    /// The points where the split triangle crosses the plane.
    ///
    /// These are the two ends of the triangle's contribution to the cross-section boundary.
    pub fn intersection_points(&self) -> &[Point<Real>] {
        &self.points
    }

    fn push(&mut self, side: PlaneSide, triangle: Triangle) {
        match side {
            PlaneSide::Up => self.upper.push(triangle),
            PlaneSide::Down => self.lower.push(triangle),
            PlaneSide::On => log::warn!("Dropping a split triangle lying on the plane."),
        }
    }
}

impl Triangle {
    /// Splits this triangle by `plane`.
    ///
    /// See [`split_triangle`]. Returns `true` if the triangle was actually split.
    pub fn split(&self, plane: &Plane, epsilon: Real, result: &mut IntersectionResult) -> bool {
        split_triangle(plane, self, epsilon, result)
    }
}

/// Splits `triangle` by `plane`, writing the pieces to `result`.
///
/// Vertices closer than `epsilon` to the plane are considered to lie on it. The triangle is split
/// only if the plane goes through its interior:
/// - One vertex on the plane and the two others on opposite sides: one triangle on each side.
/// - No vertex on the plane and one vertex alone on its side: one triangle on the side of the lone
///   vertex, two triangles on the other side.
///
/// In every other configuration (triangle fully on one side, edge or face on the plane, or an
/// edge intersection rejected by the segment tolerance) nothing is written and `false` is
/// returned. The pieces keep the winding of `triangle`. The attributes of the new vertices are
/// interpolated from the attributes of `triangle`.
pub fn split_triangle(
    plane: &Plane,
    triangle: &Triangle,
    epsilon: Real,
    result: &mut IntersectionResult,
) -> bool {
    result.clear();

    let sides = triangle.sides(plane, epsilon);
    let num_on = sides.iter().filter(|s| **s == PlaneSide::On).count();

    if num_on == 0 && sides[0] == sides[1] && sides[1] == sides[2] {
        return false;
    }

    let pts = triangle.vertices();
    let vtx = |i: usize| triangle.vertex(i);
    let cut = |i: usize, j: usize| -> Option<TriangleVertex> {
        plane
            .intersect_segment(&pts[i], &pts[j])
            .map(|pt| triangle.interpolate(&pt))
    };

    match num_on {
        1 => {
            let i = sides.iter().position(|s| *s == PlaneSide::On).unwrap_or(0);
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            if sides[j] == sides[k] {
                return false;
            }

            let Some(q) = cut(j, k) else {
                return false;
            };

            result.points.push(q.position);
            result.points.push(pts[i]);
            result.push(sides[j], Triangle::from_vertices([vtx(i), vtx(j), q]));
            result.push(sides[k], Triangle::from_vertices([vtx(i), q, vtx(k)]));
            true
        }
        0 => {
            // The lone vertex is the one whose two neighbors share a side.
            let Some(i) = (0..3).find(|i| sides[(i + 1) % 3] == sides[(i + 2) % 3]) else {
                return false;
            };
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            let (Some(qa), Some(qb)) = (cut(i, j), cut(i, k)) else {
                return false;
            };

            result.points.push(qa.position);
            result.points.push(qb.position);
            result.push(sides[i], Triangle::from_vertices([vtx(i), qa, qb]));
            result.push(sides[j], Triangle::from_vertices([qa, vtx(j), vtx(k)]));
            result.push(sides[j], Triangle::from_vertices([qa, vtx(k), qb]));
            true
        }
        // At least one edge lies on the plane.
        _ => false,
    }
}
