use crate::math::Real;
use crate::shape::DEFAULT_SIDE_EPSILON;
use crate::transformation::TextureRegion;

/// Parameters of a slicing operation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceOptions {
    /// Vertices closer than this distance to the cutting plane are considered to lie on it.
    pub epsilon: Real,
    /// The region of the texture space the cross-section UVs are mapped to.
    pub texture_region: TextureRegion,
    /// The sub-mesh the cross-section triangles are added to.
    ///
    /// If `None`, or if it is not smaller than the number of sub-meshes of the sliced mesh, the
    /// cross-section becomes an extra sub-mesh placed after all the others.
    pub cross_section_index: Option<usize>,
}

impl Default for SliceOptions {
    fn default() -> Self {
        SliceOptions {
            epsilon: DEFAULT_SIDE_EPSILON,
            texture_region: TextureRegion::full(),
            cross_section_index: None,
        }
    }
}

impl SliceOptions {
    /// Sets the distance under which vertices are considered to lie on the cutting plane.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Real) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the texture region the cross-section is mapped to.
    #[must_use]
    pub fn with_texture_region(mut self, region: TextureRegion) -> Self {
        self.texture_region = region;
        self
    }

    /// Sets the sub-mesh the cross-section triangles are added to.
    #[must_use]
    pub fn with_cross_section_index(mut self, index: usize) -> Self {
        self.cross_section_index = Some(index);
        self
    }
}
