/// Errors that prevent a mesh from being sliced.
///
/// [`slice`](crate::slicer::slice) reports all of them as `None`, while
/// [`try_slice`](crate::slicer::try_slice) gives the reason.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SliceError {
    /// The mesh has no vertex or no triangle.
    #[error("the mesh to slice has no vertex or no triangle")]
    EmptyMesh,
    /// A vertex attribute array does not have one element per vertex.
    #[error("the mesh has {expected} vertices but its {channel} array has {len} elements")]
    AttributeLengthMismatch {
        /// The name of the mismatching attribute.
        channel: &'static str,
        /// The length of the attribute array.
        len: usize,
        /// The number of vertices.
        expected: usize,
    },
    /// A triangle references a vertex that does not exist.
    #[error("sub-mesh {sub_mesh} references the vertex {index} but the mesh only has {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The sub-mesh containing the faulty index.
        sub_mesh: usize,
        /// The faulty index.
        index: u32,
        /// The number of vertices.
        num_vertices: usize,
    },
    /// The index buffer of a sub-mesh does not describe whole triangles.
    #[error("sub-mesh {sub_mesh} has {len} indices, which is not a multiple of 3")]
    IncompleteTriangle {
        /// The faulty sub-mesh.
        sub_mesh: usize,
        /// The number of indices of this sub-mesh.
        len: usize,
    },
    /// The number of materials does not match the number of sub-meshes.
    #[error("the mesh has {sub_meshes} sub-meshes but {materials} materials were given")]
    MaterialCountMismatch {
        /// The number of sub-meshes.
        sub_meshes: usize,
        /// The number of materials.
        materials: usize,
    },
    /// The plane does not cut through the mesh: no sub-mesh has triangles on both of its sides.
    #[error("the plane does not cut through the mesh")]
    NoIntersection,
}
