//! Definition of the triangle shape, with its optional vertex attributes.

use crate::math::{Point, Point2, Real, Vector, Vector4, DEFAULT_EPSILON};
use crate::shape::{Plane, PlaneSide, Segment, VertexChannels};
use crate::utils;

/// A single corner of a [`Triangle`] with all its attributes.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct TriangleVertex {
    /// The vertex position.
    pub position: Point<Real>,
    /// The vertex texture coordinates, if any.
    pub uv: Option<Point2<Real>>,
    /// The vertex normal, if any.
    pub normal: Option<Vector<Real>>,
    /// The vertex tangent, if any.
    pub tangent: Option<Vector4<Real>>,
}

impl TriangleVertex {
    /// A vertex with a position and no attribute.
    #[inline]
    pub fn new(position: Point<Real>) -> Self {
        TriangleVertex {
            position,
            uv: None,
            normal: None,
            tangent: None,
        }
    }
}

/// A triangle shape.
///
/// Every attribute channel is either set on all three vertices or absent.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
    /// Texture coordinates of `a`, `b`, `c`.
    pub uvs: Option<[Point2<Real>; 3]>,
    /// Normals of `a`, `b`, `c`.
    pub normals: Option<[Vector<Real>; 3]>,
    /// Tangents of `a`, `b`, `c`.
    pub tangents: Option<[Vector4<Real>; 3]>,
}

#[inline]
fn zip3<T>(a: Option<T>, b: Option<T>, c: Option<T>) -> Option<[T; 3]> {
    Some([a?, b?, c?])
}

#[inline]
fn swap_bc<T: Copy>(arr: [T; 3]) -> [T; 3] {
    [arr[0], arr[2], arr[1]]
}

/// Twice the signed area of the 2D triangle `(x1, y1), (x2, y2), (x3, y3)`.
#[inline]
fn tri_area2d(x1: Real, y1: Real, x2: Real, y2: Real, x3: Real, y3: Real) -> Real {
    (x1 - x2) * (y2 - y3) - (x2 - x3) * (y1 - y2)
}

impl Triangle {
    /// Creates a triangle from three vertices, without attributes.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle {
            a,
            b,
            c,
            uvs: None,
            normals: None,
            tangents: None,
        }
    }

    /// Creates a triangle from three attributed vertices.
    ///
    /// A channel is kept only if all three vertices have it.
    pub fn from_vertices(vertices: [TriangleVertex; 3]) -> Triangle {
        let [va, vb, vc] = vertices;
        Triangle {
            a: va.position,
            b: vb.position,
            c: vc.position,
            uvs: zip3(va.uv, vb.uv, vc.uv),
            normals: zip3(va.normal, vb.normal, vc.normal),
            tangents: zip3(va.tangent, vb.tangent, vc.tangent),
        }
    }

    /// Sets the texture coordinates of this triangle.
    #[must_use]
    pub fn with_uvs(mut self, uvs: [Point2<Real>; 3]) -> Self {
        self.uvs = Some(uvs);
        self
    }

    /// Sets the vertex normals of this triangle.
    #[must_use]
    pub fn with_normals(mut self, normals: [Vector<Real>; 3]) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Sets the vertex tangents of this triangle.
    #[must_use]
    pub fn with_tangents(mut self, tangents: [Vector4<Real>; 3]) -> Self {
        self.tangents = Some(tangents);
        self
    }

    /// The three vertex positions of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The `i`-th corner of this triangle together with its attributes.
    ///
    /// # Panics
    /// If `i >= 3`.
    pub fn vertex(&self, i: usize) -> TriangleVertex {
        TriangleVertex {
            position: self.vertices()[i],
            uv: self.uvs.map(|uvs| uvs[i]),
            normal: self.normals.map(|ns| ns[i]),
            tangent: self.tangents.map(|ts| ts[i]),
        }
    }

    /// The attribute channels set on this triangle.
    pub fn channels(&self) -> VertexChannels {
        let mut channels = VertexChannels::empty();
        channels.set(VertexChannels::UV, self.uvs.is_some());
        channels.set(VertexChannels::NORMAL, self.normals.is_some());
        channels.set(VertexChannels::TANGENT, self.tangents.is_some());
        channels
    }

    /// The edges `ab`, `bc`, `ca` of this triangle.
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of this triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Vector<Real>> {
        self.scaled_normal().try_normalize(DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() / 2.0
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// This triangle with reversed winding, i.e., with `b` and `c` swapped along with their
    /// attributes.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Triangle {
            a: self.a,
            b: self.c,
            c: self.b,
            uvs: self.uvs.map(swap_bc),
            normals: self.normals.map(swap_bc),
            tangents: self.tangents.map(swap_bc),
        }
    }

    /// The side of `plane` on which each vertex of this triangle lies.
    #[inline]
    pub fn sides(&self, plane: &Plane, epsilon: Real) -> [PlaneSide; 3] {
        self.vertices().map(|pt| plane.side_of(&pt, epsilon))
    }

    /// The barycentric coordinates of `p` with respect to `a`, `b`, `c`.
    ///
    /// `p` is assumed to lie on the triangle plane. The computation is carried out on the
    /// coordinate plane where the triangle projection has the largest area. The weights of a
    /// degenerate triangle are taken from the projection of `p` on its edge closest to `p`.
    pub fn barycentric(&self, p: &Point<Real>) -> [Real; 3] {
        let (a, b, c) = (&self.a, &self.b, &self.c);
        let m = self.scaled_normal();
        let (x, y, z) = (m.x.abs(), m.y.abs(), m.z.abs());

        let (nu, nv, ood) = if x >= y && x >= z {
            (
                tri_area2d(p.y, p.z, b.y, b.z, c.y, c.z),
                tri_area2d(p.y, p.z, c.y, c.z, a.y, a.z),
                m.x,
            )
        } else if y >= x && y >= z {
            (
                tri_area2d(p.x, p.z, b.x, b.z, c.x, c.z),
                tri_area2d(p.x, p.z, c.x, c.z, a.x, a.z),
                -m.y,
            )
        } else {
            (
                tri_area2d(p.x, p.y, b.x, b.y, c.x, c.y),
                tri_area2d(p.x, p.y, c.x, c.y, a.x, a.y),
                m.z,
            )
        };

        let longest_sq = self
            .edges()
            .iter()
            .map(|e| e.squared_length())
            .fold(0.0, Real::max);

        if ood.abs() <= DEFAULT_EPSILON * longest_sq || ood == 0.0 {
            return self.degenerate_barycentric(p);
        }

        let u = nu / ood;
        let v = nv / ood;
        [u, v, 1.0 - u - v]
    }

    fn degenerate_barycentric(&self, p: &Point<Real>) -> [Real; 3] {
        let pts = self.vertices();
        let mut weights = [0.0; 3];
        // (distance to p, edge length, edge, parameter) of the edge closest to `p`.
        let mut best: Option<(Real, Real, (usize, usize), Real)> = None;

        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let dir = pts[j] - pts[i];
            let len_sq = dir.norm_squared();
            if len_sq == 0.0 {
                continue;
            }

            let t = ((p - pts[i]).dot(&dir) / len_sq).clamp(0.0, 1.0);
            let dist_sq = (pts[i] + dir * t - p).norm_squared();
            let closer = best.map_or(true, |(best_dist, best_len, _, _)| {
                dist_sq < best_dist || (dist_sq == best_dist && len_sq > best_len)
            });

            if closer {
                best = Some((dist_sq, len_sq, (i, j), t));
            }
        }

        match best {
            Some((_, _, (i, j), t)) => {
                weights[i] = 1.0 - t;
                weights[j] = t;
            }
            None => weights[0] = 1.0,
        }

        weights
    }

    /// The texture coordinates at `p`, interpolated from the vertex ones.
    pub fn interpolate_uv(&self, p: &Point<Real>) -> Option<Point2<Real>> {
        let uvs = self.uvs?;
        let [u, v, w] = self.barycentric(p);
        Some(Point2::from(
            uvs[0].coords * u + uvs[1].coords * v + uvs[2].coords * w,
        ))
    }

    /// The normal at `p`, interpolated from the vertex ones.
    ///
    /// The result is re-normalized when it is not degenerate.
    pub fn interpolate_normal(&self, p: &Point<Real>) -> Option<Vector<Real>> {
        let ns = self.normals?;
        let [u, v, w] = self.barycentric(p);
        let n = ns[0] * u + ns[1] * v + ns[2] * w;
        Some(n.try_normalize(DEFAULT_EPSILON).unwrap_or(n))
    }

    /// The tangent at `p`, interpolated from the vertex ones.
    ///
    /// The `w` component is snapped back to `±1`.
    pub fn interpolate_tangent(&self, p: &Point<Real>) -> Option<Vector4<Real>> {
        let ts = self.tangents?;
        let [u, v, w] = self.barycentric(p);
        let t = ts[0] * u + ts[1] * v + ts[2] * w;
        let xyz = t.xyz();
        let xyz = xyz.try_normalize(DEFAULT_EPSILON).unwrap_or(xyz);
        let sign = if t.w < 0.0 { -1.0 } else { 1.0 };
        Some(Vector4::new(xyz.x, xyz.y, xyz.z, sign))
    }

    /// The vertex at `p` with every channel of this triangle interpolated.
    pub fn interpolate(&self, p: &Point<Real>) -> TriangleVertex {
        TriangleVertex {
            position: *p,
            uv: self.interpolate_uv(p),
            normal: self.interpolate_normal(p),
            tangent: self.interpolate_tangent(p),
        }
    }

    /// Computes the vertex tangents from the positions, texture coordinates and normals.
    ///
    /// The tangent is aligned with the direction of increasing `u`, orthonormalized against each
    /// vertex normal. Its `w` component is the handedness of the `(normal, tangent, bitangent)`
    /// frame. This does nothing if the triangle has no texture coordinates or no normals.
    pub fn compute_tangents(&mut self) {
        let (Some(uvs), Some(normals)) = (self.uvs, self.normals) else {
            return;
        };

        let e1 = self.b - self.a;
        let e2 = self.c - self.a;
        let s1 = uvs[1].x - uvs[0].x;
        let s2 = uvs[2].x - uvs[0].x;
        let t1 = uvs[1].y - uvs[0].y;
        let t2 = uvs[2].y - uvs[0].y;
        let det = s1 * t2 - s2 * t1;

        let (sdir, tdir) = if det.abs() > DEFAULT_EPSILON {
            let r = 1.0 / det;
            ((e1 * t2 - e2 * t1) * r, (e2 * s1 - e1 * s2) * r)
        } else {
            // Degenerate texture mapping.
            (e1, self.scaled_normal().cross(&e1))
        };

        let tangents = normals.map(|n| {
            let n = n.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::z);
            let t = (sdir - n * n.dot(&sdir))
                .try_normalize(DEFAULT_EPSILON)
                .unwrap_or_else(|| utils::orthonormal_basis(&n)[0]);
            let w = if n.cross(&t).dot(&tdir) < 0.0 {
                -1.0
            } else {
                1.0
            };
            Vector4::new(t.x, t.y, t.z, w)
        });

        self.tangents = Some(tangents);
    }
}
