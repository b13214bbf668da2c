/*!
bisect3d
========

**bisect3d** slices 3-dimensional triangle meshes with a plane. The result is
made of two hulls (the parts of the mesh above and below the plane), each
sealed by a triangulated cross-section cap, with UVs, normals and tangents
carried over from the source mesh.

```
# #[cfg(feature = "f32")] {
use bisect3d::math::Vector;
use bisect3d::shape::Plane;
use bisect3d::slicer::{self, SliceOptions, SourceMesh};

let cube = SourceMesh::cuboid(Vector::new(1.0, 1.0, 1.0));
let plane = Plane::new(Vector::x_axis(), 0.0);
let hull = slicer::slice(&cube, &plane, &SliceOptions::default()).unwrap();

assert!((hull.upper_volume() - 4.0).abs() < 1.0e-4);
assert!((hull.lower_volume() - 4.0).abs() < 1.0e-4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod mass_properties;
pub mod query;
pub mod shape;
pub mod slicer;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point2, Point3, UnitVector3, Vector2, Vector3, Vector4};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
