use crate::common::{l_prism, sub_mesh_triangles, total_area};
use approx::assert_relative_eq;
use bisect3d::math::Vector;
use bisect3d::shape::Plane;
use bisect3d::slicer::{self, SliceOptions};

#[test]
fn l_prism_sealed_with_a_concave_cap() {
    let prism = l_prism();
    let plane = Plane::new(Vector::z_axis(), -0.5);
    let hull = slicer::slice(&prism, &plane, &SliceOptions::default()).unwrap();

    assert_relative_eq!(hull.upper_volume(), 1.5, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower_volume(), 1.5, epsilon = 1.0e-4);

    for mesh in [hull.upper().unwrap(), hull.lower().unwrap()] {
        let cap = sub_mesh_triangles(mesh, 1);
        // The convex hull of the L would have an area of 3.5.
        assert_relative_eq!(total_area(&cap), 3.0, epsilon = 1.0e-4);

        for tri in &cap {
            let center = tri.center();
            assert!(!(center.x > 1.0 && center.y > 1.0));
        }
    }

    assert_relative_eq!(hull.upper().unwrap().signed_volume(), 1.5, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower().unwrap().signed_volume(), 1.5, epsilon = 1.0e-4);
}

#[test]
fn l_prism_cut_across_both_arms() {
    let prism = l_prism();
    // x + y = 2.5 cuts the tips of both arms of the L.
    let plane = Plane::try_new(Vector::new(1.0, 1.0, 0.0), -2.5 / 2.0f32.sqrt()).unwrap();
    let hull = slicer::slice(&prism, &plane, &SliceOptions::default()).unwrap();

    // Each arm tip is a triangle of legs 0.5.
    assert_relative_eq!(hull.upper_volume(), 0.25, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower_volume(), 2.75, epsilon = 1.0e-4);

    let upper_cap = sub_mesh_triangles(hull.upper().unwrap(), 1);
    assert_relative_eq!(
        total_area(&upper_cap),
        2.0 * 0.5 * 2.0f32.sqrt(),
        epsilon = 1.0e-4
    );
}
