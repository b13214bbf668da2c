//! Geometric primitives manipulated by the slicer.

pub use self::plane::{Plane, PlaneSide, DEFAULT_SIDE_EPSILON, LINE_EPSILON};
pub use self::segment::Segment;
pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::{Triangle, TriangleVertex};
pub use self::vertex_channels::VertexChannels;

mod plane;
mod segment;
mod tetrahedron;
mod triangle;
mod vertex_channels;
