//! Various unsorted geometrical and logical operators.

pub use self::basis::orthonormal_basis;
pub use self::center::center;
pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::polygon2d::{remove_collinear_points, signed_area2d_x2};
pub use self::segments_intersection::segments_cross2d;
pub use self::sorted_pair::SortedPair;

mod basis;
mod center;
pub mod hashmap;
mod point_in_poly2d;
pub mod point_in_triangle;
mod polygon2d;
mod segments_intersection;
mod sorted_pair;
