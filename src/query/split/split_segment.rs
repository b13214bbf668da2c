use crate::math::{Point, Real};
use crate::shape::{Plane, Segment, LINE_EPSILON};

impl Segment {
    /// Intersects this segment with a plane.
    ///
    /// Returns the intersection point together with its parameter `t` along the segment, i.e.,
    /// `point = a + (b - a) * t`. The intersection is accepted whenever `t` lies within
    /// `[-LINE_EPSILON, 1 + LINE_EPSILON]`. A segment parallel to the plane produces a non-finite
    /// parameter which is rejected by the same range check.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<(Point<Real>, Real)> {
        let dir = self.scaled_direction();
        let t = (-plane.distance - plane.normal.dot(&self.a.coords)) / plane.normal.dot(&dir);

        if t >= -LINE_EPSILON && t <= 1.0 + LINE_EPSILON {
            Some((self.a + dir * t, t))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Vector};
        use crate::shape::{Plane, Segment};

    #[test]
    fn intersection_in_range() {
        let plane = Plane::new(Vector::x_axis(), -0.25);
        let seg = Segment::new(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0));
        let (pt, t) = seg.intersect_plane(&plane).unwrap();
        assert_relative_eq!(t, 0.25);
        assert_relative_eq!(pt, Point::new(0.25, 1.0, 0.0));
    }

    #[test]
    fn intersection_tolerance_at_endpoints() {
        let seg = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));

        // Slightly past the endpoint, within tolerance.
        let plane = Plane::new(Vector::x_axis(), -1.00005);
        assert!(seg.intersect_plane(&plane).is_some());

        // Clearly past the endpoint.
        let plane = Plane::new(Vector::x_axis(), -1.01);
        assert!(seg.intersect_plane(&plane).is_none());
        assert!(plane
            .intersect_segment(&Point::new(0.0, 0.0, 0.0), &Point::new(1.0, 0.0, 0.0))
            .is_none());
    }

    #[test]
    fn parallel_segment_has_no_intersection() {
        let plane = Plane::new(Vector::y_axis(), 0.0);
        let above = Segment::new(Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0));
        let inside = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        assert!(above.intersect_plane(&plane).is_none());
        assert!(inside.intersect_plane(&plane).is_none());
    }
}
