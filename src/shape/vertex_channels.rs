#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// The optional per-vertex attributes carried by a triangle or a mesh.
///
/// Positions are always present and have no flag.
pub struct VertexChannels(u8);

bitflags::bitflags! {
    impl VertexChannels: u8 {
        /// Texture coordinates.
        const UV = 1;
        /// Vertex normals.
        const NORMAL = 1 << 1;
        /// Vertex tangents, with the bitangent sign stored in `w`.
        const TANGENT = 1 << 2;
    }
}
