//! Transformation and triangulation of meshes and polygons.

pub use self::convex_hull2::{convex_hull2, convex_hull2_idx};
pub use self::cross_section::{triangulate_cross_section, CrossSection, TextureRegion};
pub use self::ear_clipping::triangulate_ear_clipping;

mod convex_hull2;
mod cross_section;
pub(crate) mod ear_clipping;

#[cfg(feature = "wavefront")]
pub mod wavefront;
