//! Volume and center of mass of closed triangle meshes.

pub use self::mass_properties_trimesh3d::{
    trimesh_signed_volume, trimesh_signed_volume_and_center_of_mass,
};

mod mass_properties_trimesh3d;
