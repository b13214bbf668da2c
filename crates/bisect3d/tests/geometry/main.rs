mod common;
mod cube_slice;
mod non_convex_slice;
mod random_planes;
mod sub_mesh_groups;
mod triangle_split;
