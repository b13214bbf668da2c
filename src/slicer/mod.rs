//! Slicing of triangle meshes by a plane.
//!
//! [`slice`] cuts a [`SourceMesh`] in two [`MeshBuffers`], one on each side of the cutting plane,
//! and seals the cut with a triangulated cross-section on both of them:
//!
//! 1. Every triangle crossing the plane is split with
//!    [`split_triangle`](crate::query::split_triangle). The other triangles go to the hull their
//!    vertices lie on.
//! 2. The points where triangles cross the plane are chained into the boundary of the cut, which
//!    is triangulated by [`CrossSection::build`](crate::transformation::CrossSection::build).
//! 3. Each hull gets one sub-mesh per source sub-mesh, plus the cross-section, either merged into
//!    an existing sub-mesh or appended as a new one.

pub use self::mesh_buffers::MeshBuffers;
pub use self::slice_error::SliceError;
pub use self::slice_options::SliceOptions;
pub use self::sliced_hull::SlicedHull;
pub use self::slicer::{
    assemble_hull, cross_section_index_for, slice, try_slice, try_slice_with_materials, HullSide,
};
pub use self::source_mesh::SourceMesh;

mod mesh_buffers;
mod slice_error;
mod slice_options;
mod sliced_hull;
mod slicer;
mod source_mesh;
