//! Definition of the segment shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use core::mem;
use na::Unit;

/// A segment, i.e., the straight line between two points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The squared length of this segment.
    #[inline]
    pub fn squared_length(&self) -> Real {
        self.scaled_direction().norm_squared()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` if both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The point at parameter `t`, i.e., `a + (b - a) * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}

#[cfg(test)]
mod test {
    use super::Segment;
    use crate::math::Point;

    #[test]
    fn segment_lengths() {
        let seg = Segment::new(Point::new(1.0, 1.0, 1.0), Point::new(4.0, 5.0, 1.0));
        assert_relative_eq!(seg.length(), 5.0);
        assert_relative_eq!(seg.squared_length(), 25.0);
        assert_relative_eq!(seg.point_at(0.5), Point::new(2.5, 3.0, 1.0));

        let degenerate = Segment::new(Point::origin(), Point::origin());
        assert_eq!(degenerate.length(), 0.0);
        assert!(degenerate.direction().is_none());
    }
}
