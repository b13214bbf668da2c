use crate::common::{sub_mesh_triangles, total_area};
use approx::assert_relative_eq;
use bisect3d::math::{Isometry, Vector};
use bisect3d::shape::{Plane, VertexChannels};
use bisect3d::slicer::{self, SliceOptions, SourceMesh};
use bisect3d::transformation::TextureRegion;

#[test]
fn cube_sliced_through_its_center() {
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    let plane = Plane::new(Vector::x_axis(), 0.0);
    let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();

    assert_relative_eq!(hull.upper_volume(), 4.0, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower_volume(), 4.0, epsilon = 1.0e-4);
    assert_relative_eq!(hull.source_volume(), 8.0, epsilon = 1.0e-4);
    assert!(hull.cap_appended_as_sub_mesh());

    for mesh in [hull.upper().unwrap(), hull.lower().unwrap()] {
        assert_eq!(mesh.num_sub_meshes(), 2);
        assert_eq!(mesh.channels(), VertexChannels::all());
        assert_eq!(mesh.uvs().unwrap().len(), mesh.vertices().len());
        assert_eq!(mesh.normals().unwrap().len(), mesh.vertices().len());
        assert_eq!(mesh.tangents().unwrap().len(), mesh.vertices().len());

        let cap = sub_mesh_triangles(mesh, 1);
        assert_eq!(cap.len(), 2);
        assert_relative_eq!(total_area(&cap), 4.0, epsilon = 1.0e-4);
        // The split faces keep their total area.
        assert_relative_eq!(total_area(&sub_mesh_triangles(mesh, 0)), 12.0, epsilon = 1.0e-4);
    }
}

#[test]
fn unit_cube_halves() {
    let cube = SourceMesh::cuboid(Vector::repeat(0.5));
    let plane = Plane::new(Vector::y_axis(), 0.0);
    let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();

    assert_relative_eq!(hull.upper_volume(), 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower_volume(), 0.5, epsilon = 1.0e-4);

    // Both hulls are closed with outward-facing triangles.
    assert_relative_eq!(hull.upper().unwrap().signed_volume(), 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower().unwrap().signed_volume(), 0.5, epsilon = 1.0e-4);

    let (_, upper_com) = hull.upper().unwrap().volume_and_center_of_mass();
    assert_relative_eq!(upper_com.y, 0.25, epsilon = 1.0e-4);
}

#[test]
fn caps_face_away_from_their_hull() {
    let cube = SourceMesh::cuboid(Vector::new(1.0, 2.0, 0.5));
    let plane = Plane::try_new(Vector::new(0.3, 1.0, -0.2), 0.4).unwrap();
    let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();
    let upper_cap = sub_mesh_triangles(hull.upper().unwrap(), 1);
    let lower_cap = sub_mesh_triangles(hull.lower().unwrap(), 1);

    assert_eq!(upper_cap.len(), lower_cap.len());
    assert_relative_eq!(total_area(&upper_cap), total_area(&lower_cap), epsilon = 1.0e-4);

    for (up, low) in upper_cap.iter().zip(lower_cap.iter()) {
        assert!(up.scaled_normal().dot(&plane.normal) < 0.0);
        assert!(low.scaled_normal().dot(&plane.normal) > 0.0);
        assert_relative_eq!(up.normals.unwrap()[0], -*plane.normal, epsilon = 1.0e-5);
        assert_relative_eq!(low.normals.unwrap()[0], *plane.normal, epsilon = 1.0e-5);
    }
}

#[test]
fn cap_uvs_stay_in_the_texture_region() {
    let region = TextureRegion::from_pixels(64, 128, 64, 32, 256, 256).unwrap();
    let options = SliceOptions::default().with_texture_region(region);
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    let plane = Plane::try_new(Vector::new(1.0, 1.0, 1.0), 0.1).unwrap();
    let hull = slicer::slice(&cube, &plane, &options).unwrap();

    for tri in sub_mesh_triangles(hull.lower().unwrap(), 1) {
        for uv in tri.uvs.unwrap() {
            assert!(uv.x >= 0.25 - 1.0e-5 && uv.x <= 0.5 + 1.0e-5);
            assert!(uv.y >= 0.5 - 1.0e-5 && uv.y <= 0.625 + 1.0e-5);
        }
    }
}

#[test]
fn world_space_plane_moved_to_object_space() {
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    // The cube is placed at x = 5 in the world, the cut goes through x = 5.5.
    let pose = Isometry::translation(5.0, 0.0, 0.0);
    let world_plane = Plane::new(Vector::x_axis(), -5.5);
    let local_plane = world_plane.inverse_transformed(&pose);
    let hull = slicer::slice(&cube, &local_plane, &SliceOptions::default()).unwrap();

    assert_relative_eq!(hull.upper_volume(), 2.0, epsilon = 1.0e-4);
    assert_relative_eq!(hull.lower_volume(), 6.0, epsilon = 1.0e-4);
}

#[test]
fn missing_plane_gives_no_hull() {
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    let plane = Plane::new(Vector::z_axis(), 10.0);

    for _ in 0..3 {
        assert!(slicer::slice(&cube, &plane, &SliceOptions::default()).is_none());
    }
}

#[test]
fn hulls_can_be_sliced_again() {
    let cube = SourceMesh::cuboid(Vector::repeat(1.0));
    let first = Plane::new(Vector::x_axis(), 0.0);
    let hull = slicer::slice(&cube, &first, &SliceOptions::default()).unwrap();
    let (upper, _) = hull.into_parts();

    let half = SourceMesh::from(upper.unwrap());
    let second = Plane::new(Vector::y_axis(), 0.0);
    let quarter = slicer::slice(&half, &second, &SliceOptions::default()).unwrap();

    assert_relative_eq!(quarter.upper_volume(), 2.0, epsilon = 1.0e-4);
    assert_relative_eq!(quarter.lower_volume(), 2.0, epsilon = 1.0e-4);
    assert_eq!(quarter.upper_material_count(), 3);
}
