//! Non-persistent geometric queries.
//!
//! The queries implemented here are the building blocks of the slicer:
//!
//! * [`Segment::intersect_plane`](crate::shape::Segment::intersect_plane) to intersect a segment
//!   with a plane.
//! * [`split_triangle`] to cut a triangle in at most three pieces along a plane.

pub use self::split::{split_triangle, IntersectionResult};

pub mod split;
