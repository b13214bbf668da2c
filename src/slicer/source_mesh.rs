use crate::math::{Point, Point2, Real, Vector, Vector4};
use crate::shape::{Triangle, VertexChannels};
use crate::slicer::SliceError;

/// An indexed triangle mesh to be sliced.
///
/// The triangles are partitioned into sub-meshes, typically one per material. All the sub-meshes
/// share the same vertex buffers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SourceMesh {
    vertices: Vec<Point<Real>>,
    sub_meshes: Vec<Vec<u32>>,
    uvs: Option<Vec<Point2<Real>>>,
    normals: Option<Vec<Vector<Real>>>,
    tangents: Option<Vec<Vector4<Real>>>,
}

impl SourceMesh {
    /// A mesh made of a single sub-mesh.
    ///
    /// Every three consecutive elements of `indices` form a triangle.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<u32>) -> Self {
        Self::with_sub_meshes(vertices, vec![indices])
    }

    /// A mesh with several sub-meshes sharing the same vertices.
    pub fn with_sub_meshes(vertices: Vec<Point<Real>>, sub_meshes: Vec<Vec<u32>>) -> Self {
        SourceMesh {
            vertices,
            sub_meshes,
            uvs: None,
            normals: None,
            tangents: None,
        }
    }

    /// A mesh with one sub-mesh made of the given triangles.
    ///
    /// Each triangle gets its own three vertices. An attribute is kept only if all the triangles
    /// have it.
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let vertices = triangles.iter().flat_map(|t| t.vertices()).collect();
        let indices = (0..triangles.len() as u32 * 3).collect();

        SourceMesh {
            vertices,
            sub_meshes: vec![indices],
            uvs: triangles
                .iter()
                .map(|t| t.uvs)
                .collect::<Option<Vec<_>>>()
                .map(|uvs| uvs.concat()),
            normals: triangles
                .iter()
                .map(|t| t.normals)
                .collect::<Option<Vec<_>>>()
                .map(|ns| ns.concat()),
            tangents: triangles
                .iter()
                .map(|t| t.tangents)
                .collect::<Option<Vec<_>>>()
                .map(|ts| ts.concat()),
        }
    }

    /// An axis-aligned box centered at the origin, with outward-facing triangles.
    ///
    /// Each face has its own four vertices with texture coordinates spanning the whole texture,
    /// normals, and tangents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let x = Vector::x();
        let y = Vector::y();
        let z = Vector::z();
        // (normal, u, v) with u × v = normal.
        let faces = [
            (x, y, z),
            (-x, z, y),
            (y, z, x),
            (-y, x, z),
            (z, x, y),
            (-z, y, x),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut uvs = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut tangents = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (n, u, v) in faces {
            let base = vertices.len() as u32;
            let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

            for (su, sv) in corners {
                let pt = (n + u * su + v * sv).component_mul(&half_extents);
                vertices.push(Point::from(pt));
                uvs.push(Point2::new((su + 1.0) / 2.0, (sv + 1.0) / 2.0));
                normals.push(n);
                tangents.push(Vector4::new(u.x, u.y, u.z, 1.0));
            }

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::new(vertices, indices)
            .with_uvs(uvs)
            .with_normals(normals)
            .with_tangents(tangents)
    }

    /// Sets the per-vertex texture coordinates.
    #[must_use]
    pub fn with_uvs(mut self, uvs: Vec<Point2<Real>>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Sets the per-vertex normals.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<Vector<Real>>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Sets the per-vertex tangents.
    #[must_use]
    pub fn with_tangents(mut self, tangents: Vec<Vector4<Real>>) -> Self {
        self.tangents = Some(tangents);
        self
    }

    /// The vertex positions.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffers of every sub-mesh.
    pub fn sub_meshes(&self) -> &[Vec<u32>] {
        &self.sub_meshes
    }

    /// The number of sub-meshes.
    pub fn num_sub_meshes(&self) -> usize {
        self.sub_meshes.len()
    }

    /// The total number of triangles of all the sub-meshes.
    pub fn num_triangles(&self) -> usize {
        self.sub_meshes.iter().map(|idx| idx.len() / 3).sum()
    }

    /// The per-vertex texture coordinates, if any.
    pub fn uvs(&self) -> Option<&[Point2<Real>]> {
        self.uvs.as_deref()
    }

    /// The per-vertex normals, if any.
    pub fn normals(&self) -> Option<&[Vector<Real>]> {
        self.normals.as_deref()
    }

    /// The per-vertex tangents, if any.
    pub fn tangents(&self) -> Option<&[Vector4<Real>]> {
        self.tangents.as_deref()
    }

    /// The attributes carried by the vertices of this mesh.
    pub fn channels(&self) -> VertexChannels {
        let mut channels = VertexChannels::empty();
        channels.set(VertexChannels::UV, self.uvs.is_some());
        channels.set(VertexChannels::NORMAL, self.normals.is_some());
        channels.set(VertexChannels::TANGENT, self.tangents.is_some());
        channels
    }

    /// Checks that this mesh can be sliced.
    ///
    /// The mesh must have at least one vertex and one triangle, one attribute element per vertex,
    /// index buffers made of whole triangles, and indices referencing existing vertices.
    pub fn validate(&self) -> Result<(), SliceError> {
        if self.vertices.is_empty() {
            return Err(SliceError::EmptyMesh);
        }

        let expected = self.vertices.len();
        let lengths = [
            ("uv", self.uvs.as_ref().map(Vec::len)),
            ("normal", self.normals.as_ref().map(Vec::len)),
            ("tangent", self.tangents.as_ref().map(Vec::len)),
        ];

        for (channel, len) in lengths {
            if let Some(len) = len.filter(|len| *len != expected) {
                return Err(SliceError::AttributeLengthMismatch {
                    channel,
                    len,
                    expected,
                });
            }
        }

        for (sub_mesh, indices) in self.sub_meshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(SliceError::IncompleteTriangle {
                    sub_mesh,
                    len: indices.len(),
                });
            }

            if let Some(index) = indices.iter().find(|i| **i as usize >= expected) {
                return Err(SliceError::IndexOutOfBounds {
                    sub_mesh,
                    index: *index,
                    num_vertices: expected,
                });
            }
        }

        if self.sub_meshes.iter().all(Vec::is_empty) {
            return Err(SliceError::EmptyMesh);
        }

        Ok(())
    }

    /// The `i`-th triangle of the given sub-mesh, with all the attributes of this mesh.
    ///
    /// # Panics
    /// If the triangle or one of its vertices does not exist.
    pub fn triangle(&self, sub_mesh: usize, i: usize) -> Triangle {
        let idx = &self.sub_meshes[sub_mesh][i * 3..i * 3 + 3];
        let ids = [idx[0] as usize, idx[1] as usize, idx[2] as usize];

        Triangle {
            a: self.vertices[ids[0]],
            b: self.vertices[ids[1]],
            c: self.vertices[ids[2]],
            uvs: self.uvs.as_ref().map(|uvs| ids.map(|i| uvs[i])),
            normals: self.normals.as_ref().map(|ns| ids.map(|i| ns[i])),
            tangents: self.tangents.as_ref().map(|ts| ids.map(|i| ts[i])),
        }
    }

    /// Iterates through the triangles of the given sub-mesh.
    pub fn triangles(&self, sub_mesh: usize) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.sub_meshes[sub_mesh].len() / 3).map(move |i| self.triangle(sub_mesh, i))
    }
}
