//! Triangulation of the planar section left open by a plane cut.

use crate::math::{Point, Point2, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Plane, Triangle};
use crate::transformation::{convex_hull2_idx, ear_clipping::triangulate_ear_clipping};
use crate::utils::hashmap::{HashMap, HashSet};
use crate::utils::{
    self, point_in_poly2d, remove_collinear_points, segments_cross2d, signed_area2d_x2, SortedPair,
};
use smallvec::SmallVec;

/// A rectangle of the texture space the cross-section UVs are mapped to.
///
/// This lets the cap of a cut sample a sub-region of a texture atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TextureRegion {
    start: Point2<Real>,
    end: Point2<Real>,
}

impl Default for TextureRegion {
    fn default() -> Self {
        Self::full()
    }
}

impl TextureRegion {
    /// The texture region spanning from `start` to `end`.
    ///
    /// `end` may be smaller than `start` to mirror the mapped texture.
    pub fn new(start: Point2<Real>, end: Point2<Real>) -> Self {
        TextureRegion { start, end }
    }

    /// The region covering the whole texture.
    pub fn full() -> Self {
        Self::new(Point2::origin(), Point2::new(1.0, 1.0))
    }

    /// The region covering a rectangle of pixels of a `texture_width × texture_height` texture.
    ///
    /// Returns `None` if the texture has a zero dimension.
    pub fn from_pixels(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        texture_width: u32,
        texture_height: u32,
    ) -> Option<Self> {
        if texture_width == 0 || texture_height == 0 {
            return None;
        }

        let tw = texture_width as Real;
        let th = texture_height as Real;
        let start = Point2::new(x as Real / tw, y as Real / th);
        let end = Point2::new((x + width) as Real / tw, (y + height) as Real / th);
        Some(Self::new(start, end))
    }

    /// The texture coordinates of the region corner mapped from `(0, 0)`.
    pub fn start(&self) -> Point2<Real> {
        self.start
    }

    /// The texture coordinates of the region corner mapped from `(1, 1)`.
    pub fn end(&self) -> Point2<Real> {
        self.end
    }

    /// Maps a point of the unit square to this region.
    #[inline]
    pub fn map(&self, uv: &Point2<Real>) -> Point2<Real> {
        self.start + (self.end - self.start).component_mul(&uv.coords)
    }
}

/// The triangles sealing the section of a mesh cut by a plane.
///
/// The triangles of a cross-section built with [`CrossSection::build`] face the direction opposite
/// to the cutting plane normal, i.e., they close the hull lying above the plane.
/// [`CrossSection::reversed`] gives the cap of the hull below the plane.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CrossSection {
    triangles: Vec<Triangle>,
}

impl CrossSection {
    /// Triangulates the polygon bounded by the segments `[points[2 * i], points[2 * i + 1]]`.
    ///
    /// All the points are expected to lie on `plane`. The segments are chained into closed
    /// loops, nested loops being treated as holes, and each resulting polygon is ear-clipped. If
    /// the segments do not form closed loops, or if the triangulation fails, the cap falls back
    /// to the triangulated convex hull of all the points.
    ///
    /// Every vertex gets the normal `-plane.normal`, texture coordinates normalized over the
    /// bounding rectangle of the cap then mapped to `region`, and tangents computed from both.
    ///
    /// Returns `None` if there are less than three distinct points. The cut then stays open.
    pub fn build(points: &[Point<Real>], plane: &Plane, region: &TextureRegion) -> Option<Self> {
        let [u, v] = utils::orthonormal_basis(&plane.normal);
        let origin = plane.point_on_plane();
        let projected: Vec<Point2<Real>> = points
            .iter()
            .map(|pt| Point2::new(u.dot(&pt.coords), v.dot(&pt.coords)))
            .collect();

        let Some(tolerance) = welding_tolerance(&projected) else {
            log::warn!("Cross-section has no finite point, the cut is left open.");
            return None;
        };

        let loops = boundary_loops(&projected, tolerance);
        let polygons2d = match loops.and_then(|loops| triangulate_loops(loops, tolerance)) {
            Some(triangles) if !triangles.is_empty() => triangles,
            _ => {
                log::debug!(
                    "Cross-section boundary is not a set of simple loops, using its convex hull."
                );
                triangulate_convex_hull(&projected)
            }
        };

        if polygons2d.is_empty() {
            log::warn!(
                "Cross-section has less than three distinct points ({} given), the cut is left open.",
                points.len()
            );
            return None;
        }

        let (mins, maxs) = bounding_rect(polygons2d.iter().flatten());
        let extents = maxs - mins;
        let to_uv = |pt: &Point2<Real>| {
            let normalize = |x: Real, min: Real, extent: Real| {
                if extent > DEFAULT_EPSILON {
                    (x - min) / extent
                } else {
                    0.0
                }
            };
            region.map(&Point2::new(
                normalize(pt.x, mins.x, extents.x),
                normalize(pt.y, mins.y, extents.y),
            ))
        };
        let to_3d = |pt: &Point2<Real>| origin + u * pt.x + v * pt.y;
        let normal: Vector<Real> = -*plane.normal;

        let triangles = polygons2d
            .iter()
            .map(|[a, b, c]| {
                // The 2D triangles are counter-clockwise around the plane normal.
                let mut tri = Triangle::new(to_3d(a), to_3d(c), to_3d(b))
                    .with_uvs([to_uv(a), to_uv(c), to_uv(b)])
                    .with_normals([normal; 3]);
                tri.compute_tangents();
                tri
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Cross-section triangulated into {} triangles from {} points.",
            triangles.len(),
            points.len()
        );

        Some(CrossSection { triangles })
    }

    /// The cap triangles.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Moves the cap triangles out of this cross-section.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// The number of cap triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// `true` if this cross-section has no triangle.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The total area of the cap.
    pub fn area(&self) -> Real {
        self.triangles.iter().map(|t| t.area()).sum()
    }

    /// The same cap seen from the other side of the plane.
    ///
    /// The winding of every triangle is reversed, the normals are negated, and the tangents keep
    /// their direction with their handedness flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let triangles = self
            .triangles
            .iter()
            .map(|tri| {
                let mut tri = tri.flipped();
                tri.normals = tri.normals.map(|ns| ns.map(|n| -n));
                tri.tangents = tri.tangents.map(|ts| {
                    ts.map(|mut t| {
                        t.w = -t.w;
                        t
                    })
                });
                tri
            })
            .collect();
        CrossSection { triangles }
    }
}

/// Triangulates the cross-section bounded by the segments `[points[2 * i], points[2 * i + 1]]`.
///
/// See [`CrossSection::build`].
pub fn triangulate_cross_section(
    points: &[Point<Real>],
    plane: &Plane,
    region: &TextureRegion,
) -> Option<Vec<Triangle>> {
    CrossSection::build(points, plane, region).map(CrossSection::into_triangles)
}

fn bounding_rect<'a>(
    points: impl IntoIterator<Item = &'a Point2<Real>>,
) -> (Point2<Real>, Point2<Real>) {
    let mut mins = Point2::new(Real::MAX, Real::MAX);
    let mut maxs = Point2::new(-Real::MAX, -Real::MAX);

    for pt in points {
        mins = mins.inf(pt);
        maxs = maxs.sup(pt);
    }

    (mins, maxs)
}

/// The distance under which two projected points are merged.
fn welding_tolerance(points: &[Point2<Real>]) -> Option<Real> {
    let finite = points.iter().filter(|pt| pt.iter().all(|x| x.is_finite()));
    let (mins, maxs) = bounding_rect(finite);

    if mins.x > maxs.x {
        return None;
    }

    let diag = (maxs - mins).norm();
    let magnitude = mins.coords.abs().max().max(maxs.coords.abs().max());
    Some(1.0e-5 * diag.max(magnitude) + DEFAULT_EPSILON)
}

/// Merges points closer than a tolerance, using a grid of cells as large as the tolerance.
struct Welder {
    tolerance: Real,
    cells: HashMap<(i64, i64), SmallVec<[usize; 2]>>,
    points: Vec<Point2<Real>>,
}

impl Welder {
    fn new(tolerance: Real) -> Self {
        Welder {
            tolerance,
            cells: HashMap::default(),
            points: Vec::new(),
        }
    }

    fn cell(&self, pt: &Point2<Real>) -> (i64, i64) {
        (
            (pt.x / self.tolerance).floor() as i64,
            (pt.y / self.tolerance).floor() as i64,
        )
    }

    fn insert(&mut self, pt: &Point2<Real>) -> usize {
        let (cx, cy) = self.cell(pt);

        for i in -1..=1 {
            for j in -1..=1 {
                if let Some(ids) = self.cells.get(&(cx + i, cy + j)) {
                    for id in ids {
                        if na::distance(&self.points[*id], pt) <= self.tolerance {
                            return *id;
                        }
                    }
                }
            }
        }

        let id = self.points.len();
        self.points.push(*pt);
        self.cells.entry((cx, cy)).or_default().push(id);
        id
    }
}

/// Chains the segments `[points[2 * i], points[2 * i + 1]]` into closed loops.
///
/// Returns `None` if the segments do not form disjoint closed loops.
fn boundary_loops(points: &[Point2<Real>], tolerance: Real) -> Option<Vec<Vec<Point2<Real>>>> {
    let mut welder = Welder::new(tolerance);
    let mut seen = HashSet::default();
    let mut adjacency: Vec<SmallVec<[usize; 2]>> = Vec::new();

    for seg in points.chunks_exact(2) {
        if seg.iter().any(|pt| pt.iter().any(|x| !x.is_finite())) {
            continue;
        }

        let a = welder.insert(&seg[0]);
        let b = welder.insert(&seg[1]);

        if a == b || !seen.insert(SortedPair::new(a, b)) {
            continue;
        }

        adjacency.resize(welder.points.len(), SmallVec::new());
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    if adjacency.iter().any(|adj| !adj.is_empty() && adj.len() != 2) {
        return None;
    }

    let mut visited = vec![false; adjacency.len()];
    let mut loops = Vec::new();

    for start in 0..adjacency.len() {
        if visited[start] || adjacency[start].is_empty() {
            continue;
        }

        let mut polyline = Vec::new();
        let mut prev = usize::MAX;
        let mut curr = start;

        loop {
            visited[curr] = true;
            polyline.push(welder.points[curr]);

            let next = if adjacency[curr][0] != prev {
                adjacency[curr][0]
            } else {
                adjacency[curr][1]
            };
            prev = curr;
            curr = next;

            if curr == start {
                break;
            }

            if visited[curr] {
                return None;
            }
        }

        loops.push(polyline);
    }

    Some(loops)
}

/// Triangulates closed loops, nested loops being holes of their closest enclosing loop.
///
/// The output triangles are counter-clockwise.
fn triangulate_loops(
    mut loops: Vec<Vec<Point2<Real>>>,
    tolerance: Real,
) -> Option<Vec<[Point2<Real>; 3]>> {
    for polyline in &mut loops {
        remove_collinear_points(polyline, tolerance);
    }
    loops.retain(|polyline| {
        polyline.len() >= 3 && signed_area2d_x2(polyline).abs() > tolerance * tolerance
    });

    let areas: Vec<Real> = loops.iter().map(|l| signed_area2d_x2(l).abs()).collect();
    let mut depth = vec![0; loops.len()];
    let mut parent: Vec<Option<usize>> = vec![None; loops.len()];

    for i in 0..loops.len() {
        let probe = loops[i][0];

        for j in 0..loops.len() {
            if i != j && areas[j] > areas[i] && point_in_poly2d(&probe, &loops[j]) {
                depth[i] += 1;

                if parent[i].map_or(true, |p| areas[j] < areas[p]) {
                    parent[i] = Some(j);
                }
            }
        }
    }

    // Outer loops are counter-clockwise, holes are clockwise.
    for (polyline, depth) in loops.iter_mut().zip(depth.iter()) {
        let ccw = signed_area2d_x2(polyline) > 0.0;
        if ccw != (depth % 2 == 0) {
            polyline.reverse();
        }
    }

    let mut result = Vec::new();

    for outer_id in (0..loops.len()).filter(|i| depth[*i] % 2 == 0) {
        let mut holes: Vec<usize> = (0..loops.len())
            .filter(|i| depth[*i] % 2 == 1 && parent[*i] == Some(outer_id))
            .collect();
        holes.sort_by(|a, b| max_x(&loops[*b]).total_cmp(&max_x(&loops[*a])));

        let mut polygon = loops[outer_id].clone();
        for (k, hole) in holes.iter().enumerate() {
            let others: Vec<&[Point2<Real>]> =
                holes[k + 1..].iter().map(|h| &loops[*h][..]).collect();
            polygon = bridge_hole(&polygon, &loops[*hole], &others)?;
        }

        let indices = triangulate_ear_clipping(&polygon)?;
        result.extend(indices.iter().map(|idx| idx.map(|i| polygon[i as usize])));
    }

    Some(result)
}

fn max_x(polyline: &[Point2<Real>]) -> Real {
    polyline.iter().map(|pt| pt.x).fold(-Real::MAX, Real::max)
}

fn crosses_polyline(a: &Point2<Real>, b: &Point2<Real>, polyline: &[Point2<Real>]) -> bool {
    (0..polyline.len()).any(|i| {
        let p = &polyline[i];
        let q = &polyline[(i + 1) % polyline.len()];
        segments_cross2d(a, b, p, q)
    })
}

/// Merges a clockwise hole into its counter-clockwise enclosing polygon, by connecting them with
/// a pair of coincident edges.
fn bridge_hole(
    outer: &[Point2<Real>],
    hole: &[Point2<Real>],
    obstacles: &[&[Point2<Real>]],
) -> Option<Vec<Point2<Real>>> {
    let (mi, m) = hole
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.x.total_cmp(&b.1.x))?;

    let mut candidates: Vec<usize> = (0..outer.len()).collect();
    candidates.sort_by(|a, b| {
        na::distance_squared(&outer[*a], m).total_cmp(&na::distance_squared(&outer[*b], m))
    });

    let vi = candidates.into_iter().find(|vi| {
        let v = &outer[*vi];
        let mid = na::center(v, m);
        !crosses_polyline(v, m, outer)
            && !crosses_polyline(v, m, hole)
            && !obstacles.iter().any(|o| crosses_polyline(v, m, o))
            && point_in_poly2d(&mid, outer)
            && !point_in_poly2d(&mid, hole)
    })?;

    let mut merged = Vec::with_capacity(outer.len() + hole.len() + 2);
    merged.extend_from_slice(&outer[..=vi]);
    merged.extend_from_slice(&hole[mi..]);
    merged.extend_from_slice(&hole[..=mi]);
    merged.extend_from_slice(&outer[vi..]);
    Some(merged)
}

/// Fan-triangulates the convex hull of all the finite points.
fn triangulate_convex_hull(points: &[Point2<Real>]) -> Vec<[Point2<Real>; 3]> {
    let hull = convex_hull2_idx(points);

    if hull.len() < 3 {
        return Vec::new();
    }

    (1..hull.len() - 1)
        .map(|i| [points[hull[0]], points[hull[i]], points[hull[i + 1]]])
        .collect()
}
