//! Splitting segments and triangles with a plane.

pub use self::split_triangle::{split_triangle, IntersectionResult};

mod split_segment;
mod split_triangle;
