//! Corner canonicalization.
//!
//! Box producers emit their 8 corners in whatever order their corner loop
//! yields. The fixed triangulation needs one agreed ordering, so every
//! corner set is rewritten into the min/max bit scheme of
//! [`CanonicalCorners`] first.

use std::cmp::Ordering;

use bbox_types::{frame, CanonicalCorners, Matrix3, Point3, Rotation3, Vector3};

use crate::error::{MeshError, MeshResult};

/// Relative tolerance for near-ties in the third-edge projection.
const TIE_TOLERANCE: f64 = 1e-9;

/// Canonicalize 8 box corners of unknown orientation.
///
/// The local frame is re-derived from the corner geometry:
///
/// 1. The lexicographically smallest corner (by x, then y, then z) is the
///    reference origin `p0`, so the result does not depend on input order.
/// 2. The two corners nearest `p0` are edge-adjacent (edge-adjacent corners
///    of a rectangular parallelepiped are strictly closer than any diagonal
///    corner), giving edge vectors `v1` and `v2`. Equal distances resolve
///    lexicographically.
/// 3. Among the remaining corners, the one whose displacement projects
///    strongest onto the `v1 x v2` normal sits over the third edge.
///    Near-ties (a cube face has four equally projecting candidates)
///    resolve toward the corner nearest `p0`, which is the pure edge
///    corner.
/// 4. Every corner is expressed in the normalized `[e1 e2 e3]` basis; the
///    per-axis min/max combinations, mapped back to world space, are the
///    canonical corners.
///
/// The operation is idempotent and invariant under input permutation.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateBox`] when corners coincide or an edge
/// vector has near-zero length, and [`MeshError::Geometry`] when the
/// derived frame is near-singular. Both signal that the input does not form
/// a valid box.
///
/// # Example
///
/// ```
/// use bbox_mesh::canonicalize;
/// use bbox_types::Point3;
///
/// // Unit cube corners in a scrambled order
/// let corners = [
///     Point3::new(1.0, 1.0, 1.0),
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(1.0, 0.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
///
/// let canonical = canonicalize(&corners).unwrap();
/// let span = canonical.max_corner() - canonical.min_corner();
/// assert!((span.norm() - 3.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn canonicalize(corners: &[Point3<f64>; 8]) -> MeshResult<CanonicalCorners> {
    let (reference, basis) = reconstruct_basis(corners)?;
    reorder_in_basis(corners, reference, &basis)
}

/// Canonicalize 8 box corners whose local frame is already known.
///
/// Skips the geometric frame reconstruction of [`canonicalize`]; use this
/// when the producer carries its frame along, which also sidesteps the
/// reconstruction tie-break on perfectly symmetric boxes.
///
/// # Errors
///
/// Returns [`MeshError::Geometry`] if the frame matrix cannot be inverted.
pub fn canonicalize_with_frame(
    corners: &[Point3<f64>; 8],
    rotation: &Rotation3<f64>,
) -> MeshResult<CanonicalCorners> {
    reorder_in_basis(corners, 0, rotation.matrix())
}

/// Total order on points: by x, then y, then z.
fn lexicographic(a: &Point3<f64>, b: &Point3<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        .then(a.z.partial_cmp(&b.z).unwrap_or(Ordering::Equal))
}

/// Derive the reference corner and edge basis `[e1 e2 e3]` from the corner
/// geometry alone.
fn reconstruct_basis(corners: &[Point3<f64>; 8]) -> MeshResult<(usize, Matrix3<f64>)> {
    // Reference corner: lexicographically smallest, independent of order
    let reference = (0..8)
        .min_by(|&i, &j| lexicographic(&corners[i], &corners[j]))
        .unwrap_or(0);
    let p0 = corners[reference];

    // Remaining corners sorted by squared distance from p0, then
    // lexicographically so exact ties stay order-independent
    let mut order: Vec<usize> = (0..8).filter(|&i| i != reference).collect();
    order.sort_by(|&i, &j| {
        let di = (corners[i] - p0).norm_squared();
        let dj = (corners[j] - p0).norm_squared();
        di.partial_cmp(&dj)
            .unwrap_or(Ordering::Equal)
            .then_with(|| lexicographic(&corners[i], &corners[j]))
    });

    let v1 = corners[order[0]] - p0;
    let v2 = corners[order[1]] - p0;
    if v1.norm() <= frame::DEGENERACY_EPSILON {
        return Err(MeshError::degenerate("coincident corners"));
    }

    let normal = v1.cross(&v2);
    let n_hat = frame::unit(&normal).map_err(|_| {
        MeshError::degenerate("nearest corners are collinear with the reference corner")
    })?;

    let v3 = third_edge(corners, &p0, &n_hat, reference, order[0], order[1]);

    let e1 = unit_edge(&v1)?;
    let e2 = unit_edge(&v2)?;
    let e3 = unit_edge(&v3)?;

    Ok((reference, Matrix3::from_columns(&[e1, e2, e3])))
}

/// The displacement of the corner sitting over the `v1 x v2` face.
///
/// Maximizes the projection magnitude onto the face normal; projection
/// near-ties resolve toward the corner nearest `p0`.
fn third_edge(
    corners: &[Point3<f64>; 8],
    p0: &Point3<f64>,
    n_hat: &Vector3<f64>,
    reference: usize,
    skip_a: usize,
    skip_b: usize,
) -> Vector3<f64> {
    let mut best_index = skip_a;
    let mut best_projection = f64::NEG_INFINITY;
    let mut best_distance = f64::INFINITY;

    for i in 0..8 {
        if i == reference || i == skip_a || i == skip_b {
            continue;
        }
        let d = corners[i] - p0;
        let projection = d.dot(n_hat).abs();
        let distance = d.norm_squared();

        let margin = TIE_TOLERANCE * projection.max(best_projection.max(0.0));
        let wins = projection > best_projection + margin
            || ((projection - best_projection).abs() <= margin && distance < best_distance);
        if wins {
            best_index = i;
            best_projection = projection;
            best_distance = distance;
        }
    }

    corners[best_index] - p0
}

fn unit_edge(v: &Vector3<f64>) -> MeshResult<Vector3<f64>> {
    frame::unit(v).map_err(|_| MeshError::degenerate("edge vector has near-zero length"))
}

/// Express the corners in the basis, take per-axis extremes, and emit the
/// min/max combinations in bit order (index = b0 + 2*b1 + 4*b2).
fn reorder_in_basis(
    corners: &[Point3<f64>; 8],
    reference: usize,
    basis: &Matrix3<f64>,
) -> MeshResult<CanonicalCorners> {
    let p0 = corners[reference];
    let inverse = frame::invert(basis)?;

    let mut local_min = Vector3::repeat(f64::INFINITY);
    let mut local_max = Vector3::repeat(f64::NEG_INFINITY);
    for corner in corners {
        let local = inverse * (corner - p0);
        local_min = local_min.inf(&local);
        local_max = local_max.sup(&local);
    }

    let ordered = std::array::from_fn(|i| {
        let local = Vector3::new(
            if i & 1 == 0 { local_min.x } else { local_max.x },
            if i & 2 == 0 { local_min.y } else { local_max.y },
            if i & 4 == 0 { local_min.z } else { local_max.z },
        );
        p0 + basis * local
    });

    Ok(CanonicalCorners::new(ordered))
}
