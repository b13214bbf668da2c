//! Definition of the tetrahedron shape.

use crate::math::{Matrix, Point, Real};

/// A tetrahedron with 4 vertices.
///
/// Only used as the volume element of closed triangle meshes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal
    /// of the oriented triangle `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        let p1p4 = self.d - self.a;

        let mat = Matrix::from_columns(&[p1p2, p1p3, p1p4]);

        mat.determinant() / 6.0
    }

    /// Computes the center of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords + self.d.coords) / 4.0)
    }
}

#[cfg(test)]
mod test {
    use super::Tetrahedron;
    use crate::math::Point;

    #[test]
    fn unit_tetrahedron_volume() {
        let tetra = Tetrahedron::new(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        );
        assert_relative_eq!(tetra.signed_volume(), 1.0 / 6.0);

        let flipped = Tetrahedron::new(tetra.a, tetra.c, tetra.b, tetra.d);
        assert_relative_eq!(flipped.signed_volume(), -1.0 / 6.0);
        assert_relative_eq!(flipped.volume(), 1.0 / 6.0);
        assert_relative_eq!(tetra.center(), Point::new(0.25, 0.25, 0.25));
    }
}
