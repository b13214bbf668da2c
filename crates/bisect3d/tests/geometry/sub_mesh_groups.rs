use crate::common::sub_mesh_triangles;
use approx::assert_relative_eq;
use bisect3d::math::Vector;
use bisect3d::shape::Plane;
use bisect3d::slicer::{self, SliceOptions, SourceMesh};

/// A cube whose sides, top and bottom are three distinct sub-meshes.
fn painted_cube() -> SourceMesh {
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    let indices = &cube.sub_meshes()[0];
    // Faces are ordered +x, -x, +y, -y, +z, -z with six indices each.
    let sub_meshes = vec![
        indices[..24].to_vec(),
        indices[24..30].to_vec(),
        indices[30..].to_vec(),
    ];

    SourceMesh::with_sub_meshes(cube.vertices().to_vec(), sub_meshes)
        .with_uvs(cube.uvs().unwrap().to_vec())
        .with_normals(cube.normals().unwrap().to_vec())
        .with_tangents(cube.tangents().unwrap().to_vec())
}

#[test]
fn cap_merged_into_the_cross_section_material() {
    let cube = painted_cube();
    let materials = ["sides", "top", "bottom"];
    let plane = Plane::new(Vector::x_axis(), 0.0);
    let hull = slicer::try_slice_with_materials(
        &cube,
        &plane,
        &materials,
        Some(&"top"),
        &SliceOptions::default(),
    )
    .unwrap();

    assert!(!hull.cap_appended_as_sub_mesh());
    assert_eq!(hull.upper_material_count(), 3);

    let upper = hull.upper().unwrap();
    // Half of the top face split in 3 triangles, plus the 2 cap triangles.
    let top = sub_mesh_triangles(upper, 1);
    assert_eq!(top.len(), 5);
    assert_eq!(
        top.iter()
            .filter(|t| t.normals.unwrap()[0] == -Vector::x())
            .count(),
        2
    );
}

#[test]
fn cap_appended_for_a_new_material() {
    let cube = painted_cube();
    let materials = ["sides", "top", "bottom"];
    let plane = Plane::new(Vector::x_axis(), 0.0);
    let hull = slicer::try_slice_with_materials(
        &cube,
        &plane,
        &materials,
        Some(&"inside"),
        &SliceOptions::default(),
    )
    .unwrap();

    assert!(hull.cap_appended_as_sub_mesh());
    assert_eq!(hull.upper_material_count(), 4);
    assert_eq!(hull.lower_material_count(), 4);
    assert_eq!(hull.lower().unwrap().sub_meshes()[3].len(), 2);
}

#[test]
fn sub_mesh_order_is_preserved() {
    let cube = painted_cube();
    let plane = Plane::new(Vector::x_axis(), 0.0);
    let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();
    let lower = hull.lower().unwrap();

    for tri in sub_mesh_triangles(lower, 1) {
        assert_relative_eq!(tri.normals.unwrap()[0], Vector::z(), epsilon = 1.0e-6);
    }
    for tri in sub_mesh_triangles(lower, 2) {
        assert_relative_eq!(tri.normals.unwrap()[0], -Vector::z(), epsilon = 1.0e-6);
    }
    for tri in sub_mesh_triangles(lower, 3) {
        assert_relative_eq!(tri.normals.unwrap()[0], Vector::x());
    }
}

#[test]
fn independent_meshes_sliced_from_many_threads() {
    let cube = &painted_cube();
    let expected = slicer::slice(
        cube,
        &Plane::new(Vector::y_axis(), 0.25),
        &SliceOptions::default(),
    );

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    slicer::slice(
                        cube,
                        &Plane::new(Vector::y_axis(), 0.25),
                        &SliceOptions::default(),
                    )
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
