use crate::math::{Point, Real};
use crate::shape::Tetrahedron;
use crate::utils;
use num::Zero;

/// Computes the signed volume and the center of mass of a closed triangle mesh.
///
/// The volume is positive if the triangles are counter-clockwise when seen from the outside of
/// the mesh. Each triangle is the base of a tetrahedron with its apex at the geometric center of
/// the vertices. If the volume is zero, the geometric center is returned as center of mass.
pub fn trimesh_signed_volume_and_center_of_mass(
    vertices: &[Point<Real>],
    indices: &[[u32; 3]],
) -> (Real, Point<Real>) {
    let geometric_center = utils::center(vertices).unwrap_or_else(Point::origin);

    let mut res = Point::origin();
    let mut vol = 0.0;

    for t in indices {
        let p2 = vertices[t[0] as usize];
        let p3 = vertices[t[1] as usize];
        let p4 = vertices[t[2] as usize];

        let tetra = Tetrahedron::new(geometric_center, p2, p3, p4);
        let volume = tetra.signed_volume();

        res += tetra.center().coords * volume;
        vol += volume;
    }

    if vol.is_zero() {
        (vol, geometric_center)
    } else {
        (vol, res / vol)
    }
}

/// Computes the signed volume of a closed triangle mesh.
///
/// See [`trimesh_signed_volume_and_center_of_mass`].
pub fn trimesh_signed_volume(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Real {
    trimesh_signed_volume_and_center_of_mass(vertices, indices).0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    fn unit_tetrahedron() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let vertices = vec![
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        // Outward-facing faces.
        let indices = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        (vertices, indices)
    }

    #[test]
    fn tetrahedron_mesh_volume() {
        let (vertices, indices) = unit_tetrahedron();
        let (vol, com) = trimesh_signed_volume_and_center_of_mass(&vertices, &indices);
        assert_relative_eq!(vol, 1.0 / 6.0, epsilon = 1.0e-6);
        assert_relative_eq!(com, Point::new(0.25, 0.25, 0.25), epsilon = 1.0e-6);

        let flipped: Vec<_> = indices.iter().map(|t| [t[0], t[2], t[1]]).collect();
        assert_relative_eq!(
            trimesh_signed_volume(&vertices, &flipped),
            -1.0 / 6.0,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn empty_mesh_has_no_volume() {
        let (vol, com) = trimesh_signed_volume_and_center_of_mass(&[], &[]);
        assert_eq!(vol, 0.0);
        assert_eq!(com, Point::origin());
    }
}
