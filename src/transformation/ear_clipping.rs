//! Ear-clipping algorithm for creating a triangle mesh from a simple polygon.
//! Based on <https://github.com/ivanfratric/polypartition>, contributed by embotech AG.

use crate::{
    math::{Point2, Real},
    utils::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation},
};

/// The information stored for each vertex in the ear clipping algorithm.
#[derive(Clone, Default)]
struct VertexInfo {
    /// Whether the vertex is still active i.e. it has not been clipped yet.
    is_active: bool,
    /// Whether the vertex is the tip of an ear and should be clipped.
    is_ear: bool,
    /// How small the angle of the ear is. Ears with a smaller angle are clipped first.
    pointiness: Real,
    /// The index of the previous vertex.
    p_prev: usize,
    /// The index of the next vertex.
    p_next: usize,
}

/// Updates the fields `pointiness` and `is_ear` for a given vertex index.
fn update_vertex(
    idx: usize,
    vertex_info: &mut VertexInfo,
    active: &[bool],
    points: &[Point2<Real>],
) -> bool {
    // Get the point and its neighbors.
    let p = points[idx];
    let p1 = points[vertex_info.p_prev];
    let p3 = points[vertex_info.p_next];

    // Get the pointiness.
    let vec1 = (p1 - p).normalize();
    let vec3 = (p3 - p).normalize();
    vertex_info.pointiness = vec1.dot(&vec3);
    if vertex_info.pointiness.is_nan() {
        return false;
    }

    // A point is considered an ear when it is convex and no other points are
    // inside the triangle spanned by it and its two neighbors.
    //
    // Points duplicated on one of the ear corners (created by bridging holes) are ignored.
    let mut error = false;
    vertex_info.is_ear = corner_direction(&p1, &p, &p3) == Orientation::Ccw
        && (0..points.len())
            .filter(|&i| {
                active[i] && i != vertex_info.p_prev && i != idx && i != vertex_info.p_next
            })
            .filter(|&i| points[i] != p1 && points[i] != p && points[i] != p3)
            .all(|i| {
                if let Some(is) = is_point_in_triangle(&points[i], &p1, &p, &p3) {
                    !is
                } else {
                    error = true;
                    true
                }
            });
    !error
}

/// Ear clipping triangulation algorithm.
///
/// The polygon must be simple (it may touch itself at duplicated vertices) and oriented
/// counter-clockwise. Returns `None` if it has less than three vertices or if no ear can be found
/// at some point of the algorithm, which happens with clockwise or self-intersecting polygons.
pub fn triangulate_ear_clipping(vertices: &[Point2<Real>]) -> Option<Vec<[u32; 3]>> {
    let n_vertices = vertices.len();

    if n_vertices < 3 {
        return None;
    }

    // Create a new vector to hold the information about vertices.
    let mut vertex_info = vec![VertexInfo::default(); n_vertices];
    let mut active = vec![true; n_vertices];

    // Initialize information for each vertex.
    let success = vertex_info.iter_mut().enumerate().all(|(i, info)| {
        info.is_active = true;
        info.p_prev = if i == 0 { n_vertices - 1 } else { i - 1 };
        info.p_next = if i == n_vertices - 1 { 0 } else { i + 1 };
        update_vertex(i, info, &active, vertices)
    });
    if !success {
        return None;
    }

    // The output shapes
    let mut output_indices = Vec::with_capacity(n_vertices - 2);

    for i in 0..n_vertices - 3 {
        // Search through all active ears and pick out the pointiest.
        let (ear_i, _) = vertex_info
            .iter()
            .enumerate()
            .filter(|(_, info)| info.is_active && info.is_ear)
            .max_by(|(_, info1), (_, info2)| info1.pointiness.total_cmp(&info2.pointiness))?;

        // Deactivate the tip of the ear.
        vertex_info[ear_i].is_active = false;
        active[ear_i] = false;

        // Get the indices of the neighbors.
        let VertexInfo { p_prev, p_next, .. } = vertex_info[ear_i];

        // Extract the triangle that is the ear and add it to the index buffer.
        output_indices.push([p_prev as u32, ear_i as u32, p_next as u32]);

        // Connect the remaining two vertices.
        vertex_info[p_prev].p_next = p_next;
        vertex_info[p_next].p_prev = p_prev;

        // Only three vertices remain and those are guaranteed to be convex so
        // there is no point in updating the remaining vertex information.
        if i == n_vertices - 4 {
            break;
        };

        // Update the info for the remaining two vertices.
        if !update_vertex(p_prev, &mut vertex_info[p_prev], &active, vertices)
            || !update_vertex(p_next, &mut vertex_info[p_next], &active, vertices)
        {
            return None;
        }
    }

    // Add the remaining triangle.
    if let Some((i, info)) = vertex_info
        .iter()
        .enumerate()
        .find(|(_, info)| info.is_active)
    {
        output_indices.push([info.p_prev as u32, i as u32, info.p_next as u32]);
    }

    Some(output_indices)
}
