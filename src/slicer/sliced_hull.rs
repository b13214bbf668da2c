use crate::math::Real;
use crate::slicer::MeshBuffers;

/// The two parts of a mesh cut by a plane.
///
/// The upper hull lies on the side the plane normal points to, the lower hull on the other side.
/// Either of them may be missing if no triangle of the source mesh ended up on its side.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SlicedHull {
    pub(crate) upper: Option<MeshBuffers>,
    pub(crate) lower: Option<MeshBuffers>,
    pub(crate) upper_volume: Real,
    pub(crate) lower_volume: Real,
    pub(crate) cap_appended: bool,
}

impl SlicedHull {
    /// Builds a sliced hull from its two meshes, computing their volumes.
    ///
    /// `cap_appended` indicates whether the cross-section of each hull is stored as an extra
    /// trailing sub-mesh.
    pub fn new(upper: Option<MeshBuffers>, lower: Option<MeshBuffers>, cap_appended: bool) -> Self {
        let upper_volume = upper.as_ref().map(MeshBuffers::volume).unwrap_or(0.0);
        let lower_volume = lower.as_ref().map(MeshBuffers::volume).unwrap_or(0.0);

        SlicedHull {
            upper,
            lower,
            upper_volume,
            lower_volume,
            cap_appended,
        }
    }

    /// The mesh of the part above the plane, if any.
    pub fn upper(&self) -> Option<&MeshBuffers> {
        self.upper.as_ref()
    }

    /// The mesh of the part below the plane, if any.
    pub fn lower(&self) -> Option<&MeshBuffers> {
        self.lower.as_ref()
    }

    /// Moves the upper and lower meshes out of this hull.
    pub fn into_parts(self) -> (Option<MeshBuffers>, Option<MeshBuffers>) {
        (self.upper, self.lower)
    }

    /// The volume enclosed by the upper mesh, zero if there is none.
    pub fn upper_volume(&self) -> Real {
        self.upper_volume
    }

    /// The volume enclosed by the lower mesh, zero if there is none.
    pub fn lower_volume(&self) -> Real {
        self.lower_volume
    }

    /// The sum of the volumes of both hulls.
    pub fn source_volume(&self) -> Real {
        self.upper_volume + self.lower_volume
    }

    /// Whether the cross-section is stored as an extra sub-mesh after the ones of the source
    /// mesh.
    ///
    /// If so, callers assigning one material per sub-mesh need to append the cross-section
    /// material to the source materials.
    pub fn cap_appended_as_sub_mesh(&self) -> bool {
        self.cap_appended
    }

    /// The number of materials needed to render the upper mesh.
    pub fn upper_material_count(&self) -> usize {
        self.upper.as_ref().map_or(0, MeshBuffers::num_sub_meshes)
    }

    /// The number of materials needed to render the lower mesh.
    pub fn lower_material_count(&self) -> usize {
        self.lower.as_ref().map_or(0, MeshBuffers::num_sub_meshes)
    }
}
