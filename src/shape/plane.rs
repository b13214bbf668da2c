//! Definition of the cutting plane.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::Segment;
use na::Unit;

/// Tolerance on the segment parameter `t ∈ [-ε, 1 + ε]` accepted by plane/segment intersections.
pub const LINE_EPSILON: Real = 1.0e-4;

/// Default distance below which a point is classified as lying on a plane.
///
/// This matches [`LINE_EPSILON`]. Larger values snap more vertices of thin, sliver triangles
/// onto the cutting plane (which then avoids splitting them), smaller values split them into
/// very thin sub-triangles.
pub const DEFAULT_SIDE_EPSILON: Real = 1.0e-4;

/// The location of a point relative to a [`Plane`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PlaneSide {
    /// The point lies in the half-space pointed to by the plane normal.
    Up,
    /// The point lies in the half-space opposite to the plane normal.
    Down,
    /// The point lies on the plane, up to the classification tolerance.
    On,
}

impl PlaneSide {
    /// Classifies a signed distance to a plane.
    #[inline]
    pub fn from_signed_distance(distance: Real, epsilon: Real) -> Self {
        if distance > epsilon {
            PlaneSide::Up
        } else if distance < -epsilon {
            PlaneSide::Down
        } else {
            PlaneSide::On
        }
    }

}

/// An infinite plane, i.e., the set of points `p` such that `normal · p + distance = 0`.
///
/// The half-space pointed to by `normal` is the "upper" side of the plane.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance added to `normal · p`.
    pub distance: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and its distance term.
    #[inline]
    pub fn new(normal: UnitVector<Real>, distance: Real) -> Self {
        Plane { normal, distance }
    }

    /// Builds a new plane from a normal that is not necessarily unit-length.
    ///
    /// The normal is normalized while `distance` is kept as-is. Returns `None` if the normal is
    /// too close to zero.
    pub fn try_new(normal: Vector<Real>, distance: Real) -> Option<Self> {
        let normal = Unit::try_new(normal, DEFAULT_EPSILON)?;
        Some(Plane { normal, distance })
    }

    /// Builds the plane passing through `point` with the given normal.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: &UnitVector<Real>) -> Self {
        Plane {
            normal: *normal,
            distance: -normal.dot(&point.coords),
        }
    }

    /// The signed distance from `pt` to this plane, positive on its upper side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.distance
    }

    /// Classifies `pt` with respect to this plane.
    ///
    /// Points closer than `epsilon` to the plane are classified as [`PlaneSide::On`].
    #[inline]
    pub fn side_of(&self, pt: &Point<Real>, epsilon: Real) -> PlaneSide {
        PlaneSide::from_signed_distance(self.signed_distance(pt), epsilon)
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn point_on_plane(&self) -> Point<Real> {
        Point::from(*self.normal * -self.distance)
    }

    /// The same plane with its upper and lower sides swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// This plane transformed by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        let normal = m.rotation * self.normal;
        Self::from_point_normal(&(m * self.point_on_plane()), &normal)
    }

    /// This plane transformed by the inverse of `m`.
    ///
    /// If `m` maps the local-space of a mesh to world-space, this turns a world-space cutting
    /// plane into the mesh local-space, where slicing happens.
    pub fn inverse_transformed(&self, m: &Isometry<Real>) -> Self {
        let normal = m.inverse_transform_unit_vector(&self.normal);
        Self::from_point_normal(&m.inverse_transform_point(&self.point_on_plane()), &normal)
    }

    /// Intersects the segment `[a, b]` with this plane.
    ///
    /// See [`Segment::intersect_plane`].
    #[inline]
    pub fn intersect_segment(&self, a: &Point<Real>, b: &Point<Real>) -> Option<Point<Real>> {
        Segment::new(*a, *b).intersect_plane(self).map(|(pt, _)| pt)
    }
}
