use crate::common::{sub_mesh_triangles, total_area};
use approx::assert_relative_eq;
use bisect3d::math::Vector;
use bisect3d::shape::Plane;
use bisect3d::slicer::{self, SliceOptions, SourceMesh};

#[test]
fn random_slices_preserve_volume_and_area() {
    let mut rng = oorandom::Rand32::new(42);
    let cube = SourceMesh::cuboid(Vector::new(1.0, 1.5, 2.0));
    let volume = 2.0 * 3.0 * 4.0;
    let area = 2.0 * (2.0 * 3.0 + 2.0 * 4.0 + 3.0 * 4.0);

    for _ in 0..100 {
        let dir = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        let distance = rng.rand_float() * 1.8 - 0.9;

        let Some(plane) = Plane::try_new(dir, distance) else {
            continue;
        };
        let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();
        let upper = hull.upper().unwrap();
        let lower = hull.lower().unwrap();

        assert_relative_eq!(hull.source_volume(), volume, epsilon = 1.0e-3);
        assert_relative_eq!(upper.signed_volume(), hull.upper_volume(), epsilon = 1.0e-3);
        assert_relative_eq!(lower.signed_volume(), hull.lower_volume(), epsilon = 1.0e-3);

        let surface = total_area(&sub_mesh_triangles(upper, 0))
            + total_area(&sub_mesh_triangles(lower, 0));
        assert_relative_eq!(surface, area, epsilon = 1.0e-3);
        assert_relative_eq!(
            total_area(&sub_mesh_triangles(upper, 1)),
            total_area(&sub_mesh_triangles(lower, 1)),
            epsilon = 1.0e-4
        );
    }
}
