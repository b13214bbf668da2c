use bisect3d::math::{Point, Real};
use bisect3d::shape::Triangle;
use bisect3d::slicer::{MeshBuffers, SourceMesh};

/// A prism of height 1 whose base is an L made of three unit squares.
pub fn l_prism() -> SourceMesh {
    let outline = [
        [0.0, 0.0],
        [2.0, 0.0],
        [2.0, 1.0],
        [1.0, 1.0],
        [1.0, 2.0],
        [0.0, 2.0],
    ];
    let n = outline.len() as u32;

    let mut vertices = Vec::new();
    for z in [0.0, 1.0] {
        vertices.extend(outline.iter().map(|[x, y]| Point::new(*x, *y, z)));
    }

    let mut indices = Vec::new();
    // The L is star-shaped around its corner at the origin.
    for i in 1..n - 1 {
        indices.extend_from_slice(&[0, i + 1, i]);
        indices.extend_from_slice(&[n, n + i, n + i + 1]);
    }
    for i in 0..n {
        let j = (i + 1) % n;
        indices.extend_from_slice(&[i, j, n + j]);
        indices.extend_from_slice(&[i, n + j, n + i]);
    }

    SourceMesh::new(vertices, indices)
}

/// The triangles of one sub-mesh of a hull.
pub fn sub_mesh_triangles(mesh: &MeshBuffers, sub_mesh: usize) -> Vec<Triangle> {
    mesh.sub_meshes()[sub_mesh]
        .iter()
        .map(|idx| mesh.triangle(idx))
        .collect()
}

pub fn total_area(triangles: &[Triangle]) -> Real {
    triangles.iter().map(|t| t.area()).sum()
}
