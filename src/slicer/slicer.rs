use crate::math::{Point, Real};
use crate::query::IntersectionResult;
use crate::shape::{Plane, PlaneSide, Triangle, VertexChannels};
use crate::slicer::{MeshBuffers, SliceError, SliceOptions, SlicedHull, SourceMesh};
use crate::transformation::CrossSection;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::SortedPair;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One of the two parts of a sliced mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum HullSide {
    /// The part on the side the plane normal points to.
    Upper,
    /// The part on the other side of the plane.
    Lower,
}

impl HullSide {
    /// The hull a triangle with a vertex on the given side of the cutting plane belongs to.
    ///
    /// Points lying on the plane are given to the upper hull.
    pub fn from_plane_side(side: PlaneSide) -> Self {
        match side {
            PlaneSide::Down => HullSide::Lower,
            PlaneSide::Up | PlaneSide::On => HullSide::Upper,
        }
    }
}

/// The triangles of one source sub-mesh, sorted by hull.
#[derive(Clone, Debug, Default)]
pub(crate) struct SlicedSubMesh {
    upper: Vec<Triangle>,
    lower: Vec<Triangle>,
    channels: Option<VertexChannels>,
}

impl SlicedSubMesh {
    fn push(&mut self, side: HullSide, triangle: Triangle) {
        let _ = self.channels.get_or_insert(triangle.channels());

        match side {
            HullSide::Upper => self.upper.push(triangle),
            HullSide::Lower => self.lower.push(triangle),
        }
    }

    /// `true` if this sub-mesh has triangles on both sides of the plane.
    pub fn is_valid(&self) -> bool {
        !self.upper.is_empty() && !self.lower.is_empty()
    }

    /// The attributes of the first triangle added to this sub-mesh.
    pub fn channels(&self) -> Option<VertexChannels> {
        self.channels
    }
}

/// An edge lying on the cutting plane, bordering a triangle that was not split.
#[derive(Copy, Clone, Debug)]
struct CoplanarEdge {
    endpoints: [Point<Real>; 2],
    /// The side of the third vertex of the triangle.
    side: PlaneSide,
}

/// Everything a single sub-mesh contributes to a slice.
#[derive(Clone, Debug, Default)]
struct SubMeshCut {
    sub_mesh: SlicedSubMesh,
    /// Pairs of points where split triangles cross the plane.
    boundary: Vec<Point<Real>>,
    coplanar_edges: Vec<CoplanarEdge>,
}

fn cut_sub_mesh(mesh: &SourceMesh, sub_mesh: usize, plane: &Plane, epsilon: Real) -> SubMeshCut {
    let mut cut = SubMeshCut::default();
    let mut result = IntersectionResult::new();

    for tri in mesh.triangles(sub_mesh) {
        if tri.split(plane, epsilon, &mut result) {
            for piece in result.upper() {
                cut.sub_mesh.push(HullSide::Upper, *piece);
            }
            for piece in result.lower() {
                cut.sub_mesh.push(HullSide::Lower, *piece);
            }
            cut.boundary.extend_from_slice(result.intersection_points());
            continue;
        }

        let sides = tri.sides(plane, epsilon);
        let side = sides
            .iter()
            .copied()
            .find(|side| *side != PlaneSide::On)
            .unwrap_or(PlaneSide::On);

        if let Some(edge) = coplanar_edge(&tri, &sides) {
            cut.coplanar_edges.push(edge);
        }

        cut.sub_mesh.push(HullSide::from_plane_side(side), tri);
    }

    cut
}

/// The edge of `tri` lying on the plane, if exactly two of its vertices are on it.
fn coplanar_edge(tri: &Triangle, sides: &[PlaneSide; 3]) -> Option<CoplanarEdge> {
    let vertices = tri.vertices();
    let off = sides.iter().position(|side| *side != PlaneSide::On)?;

    if sides.iter().filter(|side| **side == PlaneSide::On).count() != 2 {
        return None;
    }

    Some(CoplanarEdge {
        endpoints: [vertices[(off + 1) % 3], vertices[(off + 2) % 3]],
        side: sides[off],
    })
}

fn cut_sub_meshes(mesh: &SourceMesh, plane: &Plane, epsilon: Real) -> Vec<SubMeshCut> {
    #[cfg(feature = "parallel")]
    {
        (0..mesh.num_sub_meshes())
            .into_par_iter()
            .map(|i| cut_sub_mesh(mesh, i, plane, epsilon))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..mesh.num_sub_meshes())
            .map(|i| cut_sub_mesh(mesh, i, plane, epsilon))
            .collect()
    }
}

/// Bit-exact hashable key of a position. Both zeros map to the same key.
fn position_key(pt: &Point<Real>) -> [u64; 3] {
    [pt.x, pt.y, pt.z].map(|x| u64::from((x + 0.0).to_bits()))
}

/// The coplanar edges shared by triangles of both hulls, as pairs of points.
///
/// These are the parts of the cross-section boundary going exactly through mesh edges, where no
/// triangle needed to be split.
fn coplanar_boundary<'a>(edges: impl IntoIterator<Item = &'a CoplanarEdge>) -> Vec<Point<Real>> {
    const UP: u8 = 1;
    const DOWN: u8 = 2;

    let mut ids: HashMap<_, usize> = HashMap::new();
    let mut found: Vec<([Point<Real>; 2], u8)> = Vec::new();

    for edge in edges {
        let key = SortedPair::new(
            position_key(&edge.endpoints[0]),
            position_key(&edge.endpoints[1]),
        );
        let mask = match edge.side {
            PlaneSide::Up => UP,
            PlaneSide::Down => DOWN,
            PlaneSide::On => 0,
        };

        match ids.entry(key) {
            Entry::Occupied(entry) => found[*entry.get()].1 |= mask,
            Entry::Vacant(entry) => {
                let _ = entry.insert(found.len());
                found.push((edge.endpoints, mask));
            }
        }
    }

    found
        .into_iter()
        .filter(|(_, mask)| *mask == UP | DOWN)
        .flat_map(|(endpoints, _)| endpoints)
        .collect()
}

/// Builds the mesh of one hull from its triangles, grouped by sub-mesh, and the cross-section.
///
/// `cap` is the cross-section as built by [`CrossSection::build`], facing the lower side of the
/// plane. It is reversed for the lower hull. The cap triangles are added to the sub-mesh
/// `cross_section_index` if it exists, otherwise they form a new sub-mesh after all the others.
///
/// Returns `None` if `sub_meshes` contains no triangle.
///
/// # Panics
/// If a triangle lacks one of the attributes in `channels`.
pub fn assemble_hull(
    sub_meshes: &[Vec<Triangle>],
    cap: Option<&CrossSection>,
    cross_section_index: Option<usize>,
    side: HullSide,
    channels: VertexChannels,
) -> Option<MeshBuffers> {
    if sub_meshes.iter().all(Vec::is_empty) {
        return None;
    }

    let reversed;
    let cap = match side {
        HullSide::Upper => cap,
        HullSide::Lower => {
            reversed = cap.map(CrossSection::reversed);
            reversed.as_ref()
        }
    };
    let cap_triangles = cap.map(CrossSection::triangles).unwrap_or_default();
    let merge_into = cross_section_index.filter(|i| *i < sub_meshes.len());

    let mut buffers = MeshBuffers::new(channels);

    for (i, triangles) in sub_meshes.iter().enumerate() {
        if merge_into == Some(i) {
            buffers.push_sub_mesh(triangles.iter().chain(cap_triangles));
        } else {
            buffers.push_sub_mesh(triangles);
        }
    }

    if merge_into.is_none() && !cap_triangles.is_empty() {
        buffers.push_sub_mesh(cap_triangles);
    }

    Some(buffers)
}

/// Slices `mesh` by `plane`, returning the two capped hulls.
///
/// Returns `None` if the plane does not go through the mesh or if the mesh is invalid. Use
/// [`try_slice`] to know why no hull was produced.
pub fn slice(mesh: &SourceMesh, plane: &Plane, options: &SliceOptions) -> Option<SlicedHull> {
    match try_slice(mesh, plane, options) {
        Ok(hull) => Some(hull),
        Err(SliceError::NoIntersection) => None,
        Err(err) => {
            log::warn!("Cannot slice the mesh: {}.", err);
            None
        }
    }
}

/// Slices `mesh` by `plane`, returning the two capped hulls.
///
/// Every triangle crossing the plane is split. The other triangles are given to the hull of their
/// first vertex not lying on the plane, or to the upper hull if they lie entirely on the plane.
/// The cut is then sealed on both hulls by a triangulated cross-section, added to the sub-mesh
/// selected by [`SliceOptions::cross_section_index`].
///
/// If the cross-section cannot be triangulated (less than three distinct points on the cut), the
/// hulls are returned with an open boundary.
pub fn try_slice(
    mesh: &SourceMesh,
    plane: &Plane,
    options: &SliceOptions,
) -> Result<SlicedHull, SliceError> {
    mesh.validate()?;

    let channels = mesh.channels();
    let cuts = cut_sub_meshes(mesh, plane, options.epsilon);

    if !cuts.iter().any(|cut| cut.sub_mesh.is_valid()) {
        log::debug!("The plane does not cut through any sub-mesh.");
        return Err(SliceError::NoIntersection);
    }

    let mut boundary: Vec<Point<Real>> = cuts
        .iter()
        .flat_map(|cut| cut.boundary.iter().copied())
        .collect();
    boundary.extend(coplanar_boundary(
        cuts.iter().flat_map(|cut| &cut.coplanar_edges),
    ));

    if boundary.is_empty() {
        log::debug!("The plane only touches the mesh surface.");
        return Err(SliceError::NoIntersection);
    }

    let cap = CrossSection::build(&boundary, plane, &options.texture_region);
    if cap.is_none() {
        log::warn!("The cross-section could not be triangulated, the hulls are left open.");
    }

    let mut upper = Vec::with_capacity(cuts.len());
    let mut lower = Vec::with_capacity(cuts.len());

    for cut in cuts {
        assert!(
            cut.sub_mesh.channels().map_or(true, |c| c == channels),
            "Sliced triangles must carry the attributes of the source mesh."
        );
        upper.push(cut.sub_mesh.upper);
        lower.push(cut.sub_mesh.lower);
    }

    let index = options.cross_section_index;
    let cap_appended = cap.is_some() && index.map_or(true, |i| i >= mesh.num_sub_meshes());
    let upper = assemble_hull(&upper, cap.as_ref(), index, HullSide::Upper, channels);
    let lower = assemble_hull(&lower, cap.as_ref(), index, HullSide::Lower, channels);
    let hull = SlicedHull::new(upper, lower, cap_appended);

    log::debug!(
        "Sliced a mesh of {} triangles: {} upper and {} lower triangles, volumes {} and {}.",
        mesh.num_triangles(),
        hull.upper().map_or(0, MeshBuffers::num_triangles),
        hull.lower().map_or(0, MeshBuffers::num_triangles),
        hull.upper_volume(),
        hull.lower_volume(),
    );

    Ok(hull)
}

/// Slices a mesh with one material per sub-mesh.
///
/// The cross-section is added to the sub-mesh using `cross_section_material` if there is one.
/// Otherwise it becomes an extra sub-mesh, and
/// [`SlicedHull::cap_appended_as_sub_mesh`] is `true`.
pub fn try_slice_with_materials<M: PartialEq>(
    mesh: &SourceMesh,
    plane: &Plane,
    materials: &[M],
    cross_section_material: Option<&M>,
    options: &SliceOptions,
) -> Result<SlicedHull, SliceError> {
    if materials.len() != mesh.num_sub_meshes() {
        return Err(SliceError::MaterialCountMismatch {
            sub_meshes: mesh.num_sub_meshes(),
            materials: materials.len(),
        });
    }

    let options = SliceOptions {
        cross_section_index: Some(cross_section_index_for(materials, cross_section_material)),
        ..*options
    };
    try_slice(mesh, plane, &options)
}

/// The sub-mesh receiving the cross-section: the index of `cross_section_material` in
/// `materials`, or `materials.len()` if it is not there.
pub fn cross_section_index_for<M: PartialEq>(
    materials: &[M],
    cross_section_material: Option<&M>,
) -> usize {
    cross_section_material
        .and_then(|material| materials.iter().position(|m| m == material))
        .unwrap_or(materials.len())
}
