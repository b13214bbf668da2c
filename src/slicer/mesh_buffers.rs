use crate::mass_properties;
use crate::math::{Point, Point2, Real, Vector, Vector4};
use crate::shape::{Triangle, VertexChannels};
use crate::slicer::SourceMesh;

/// The vertex and index buffers of one hull resulting from a slice.
///
/// Every triangle owns three vertices: vertices are never shared between triangles, so each
/// sub-mesh covers a contiguous range of the vertex buffers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshBuffers {
    vertices: Vec<Point<Real>>,
    sub_meshes: Vec<Vec<[u32; 3]>>,
    uvs: Option<Vec<Point2<Real>>>,
    normals: Option<Vec<Vector<Real>>>,
    tangents: Option<Vec<Vector4<Real>>>,
}

impl MeshBuffers {
    /// Empty buffers for vertices with the given attributes.
    pub fn new(channels: VertexChannels) -> Self {
        MeshBuffers {
            vertices: Vec::new(),
            sub_meshes: Vec::new(),
            uvs: channels.contains(VertexChannels::UV).then(Vec::new),
            normals: channels.contains(VertexChannels::NORMAL).then(Vec::new),
            tangents: channels.contains(VertexChannels::TANGENT).then(Vec::new),
        }
    }

    /// Appends a new sub-mesh made of the given triangles.
    ///
    /// # Panics
    /// If a triangle lacks one of the attributes of these buffers.
    pub fn push_sub_mesh<'a>(&mut self, triangles: impl IntoIterator<Item = &'a Triangle>) {
        let mut indices = Vec::new();

        for tri in triangles {
            let base = self.vertices.len() as u32;
            self.vertices.extend_from_slice(&tri.vertices());

            if let Some(uvs) = &mut self.uvs {
                let tri_uvs = tri.uvs;
                assert!(tri_uvs.is_some(), "Triangle without the mesh UVs.");
                uvs.extend(tri_uvs.into_iter().flatten());
            }

            if let Some(normals) = &mut self.normals {
                let tri_normals = tri.normals;
                assert!(tri_normals.is_some(), "Triangle without the mesh normals.");
                normals.extend(tri_normals.into_iter().flatten());
            }

            if let Some(tangents) = &mut self.tangents {
                let tri_tangents = tri.tangents;
                assert!(tri_tangents.is_some(), "Triangle without the mesh tangents.");
                tangents.extend(tri_tangents.into_iter().flatten());
            }

            indices.push([base, base + 1, base + 2]);
        }

        self.sub_meshes.push(indices);
    }

    /// The vertex positions.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangles of every sub-mesh, as indices into the vertex buffers.
    pub fn sub_meshes(&self) -> &[Vec<[u32; 3]>] {
        &self.sub_meshes
    }

    /// The number of sub-meshes.
    pub fn num_sub_meshes(&self) -> usize {
        self.sub_meshes.len()
    }

    /// The total number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.sub_meshes.iter().map(Vec::len).sum()
    }

    /// The triangles of all the sub-meshes, in order.
    pub fn indices(&self) -> impl Iterator<Item = &[u32; 3]> + '_ {
        self.sub_meshes.iter().flatten()
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

    /// The attributes carried by the vertices.
    pub fn channels(&self) -> VertexChannels {
        let mut channels = VertexChannels::empty();
        channels.set(VertexChannels::UV, self.uvs.is_some());
        channels.set(VertexChannels::NORMAL, self.normals.is_some());
        channels.set(VertexChannels::TANGENT, self.tangents.is_some());
        channels
    }

    /// The triangle with the given vertex indices, with all its attributes.
    pub fn triangle(&self, idx: &[u32; 3]) -> Triangle {
        let ids = idx.map(|i| i as usize);
        Triangle {
            a: self.vertices[ids[0]],
            b: self.vertices[ids[1]],
            c: self.vertices[ids[2]],
            uvs: self.uvs.as_ref().map(|uvs| ids.map(|i| uvs[i])),
            normals: self.normals.as_ref().map(|ns| ids.map(|i| ns[i])),
            tangents: self.tangents.as_ref().map(|ts| ids.map(|i| ts[i])),
        }
    }

    /// Iterates through all the triangles, with their attributes.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices().map(move |idx| self.triangle(idx))
    }

    /// The signed volume enclosed by all the triangles.
    ///
    /// This is positive if the hull is closed and its triangles face outward.
    pub fn signed_volume(&self) -> Real {
        let indices: Vec<[u32; 3]> = self.indices().copied().collect();
        mass_properties::trimesh_signed_volume(&self.vertices, &indices)
    }

    /// The volume enclosed by all the triangles.
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// The signed volume and the center of mass of the enclosed region.
    pub fn volume_and_center_of_mass(&self) -> (Real, Point<Real>) {
        let indices: Vec<[u32; 3]> = self.indices().copied().collect();
        mass_properties::trimesh_signed_volume_and_center_of_mass(&self.vertices, &indices)
    }
}

impl From<MeshBuffers> for SourceMesh {
    fn from(buffers: MeshBuffers) -> Self {
        let sub_meshes = buffers
            .sub_meshes
            .into_iter()
            .map(|tris| tris.into_iter().flatten().collect())
            .collect();
        let mut mesh = SourceMesh::with_sub_meshes(buffers.vertices, sub_meshes);

        if let Some(uvs) = buffers.uvs {
            mesh = mesh.with_uvs(uvs);
        }
        if let Some(normals) = buffers.normals {
            mesh = mesh.with_normals(normals);
        }
        if let Some(tangents) = buffers.tangents {
            mesh = mesh.with_tangents(tangents);
        }

        mesh
    }
}
