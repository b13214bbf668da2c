use crate::slicer::MeshBuffers;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl MeshBuffers {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Each sub-mesh becomes a group named `sub_mesh_<i>`. Texture coordinates and normals are
    /// written if these buffers have them.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    #[allow(clippy::unnecessary_cast)]
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        let has_uvs = self.uvs().is_some();
        let has_normals = self.normals().is_some();

        let groups = self
            .sub_meshes()
            .iter()
            .enumerate()
            .map(|(i, triangles)| Group {
                polys: triangles
                    .iter()
                    .map(|tri| {
                        SimplePolygon(
                            tri.iter()
                                .map(|id| {
                                    let id = *id as usize;
                                    IndexTuple(
                                        id,
                                        has_uvs.then_some(id),
                                        has_normals.then_some(id),
                                    )
                                })
                                .collect(),
                        )
                    })
                    .collect(),
                name: format!("sub_mesh_{}", i),
                index: 0,
                material: None,
            })
            .collect();

        ObjData {
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            texture: self
                .uvs()
                .unwrap_or_default()
                .iter()
                .map(|uv| [uv.x as f32, uv.y as f32])
                .collect(),
            normal: self
                .normals()
                .unwrap_or_default()
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            objects: vec![Object {
                groups,
                name: "hull".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
