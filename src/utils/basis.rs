use crate::math::{Real, Vector};

/// Computes two unit vectors `[b1, b2]` such that `(b1, b2, n)` is a right-handed orthonormal
/// basis, i.e., `b1 × b2 = n`.
///
/// `n` must be a unit vector. This is the robust and branchless construction from Pixar:
/// <https://graphics.pixar.com/library/OrthonormalB/paper.pdf>
pub fn orthonormal_basis(n: &Vector<Real>) -> [Vector<Real>; 2] {
    let sign = n.z.signum();
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    [
        Vector::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vector::new(b, sign + n.y * n.y * a, -n.y),
    ]
}
