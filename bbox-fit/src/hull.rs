//! Incremental 3D convex hull.
//!
//! Builds the hull face list used by the minimal-box search. Faces are
//! wound counter-clockwise when viewed from outside, so the cross product
//! of their edges points outward.

use std::collections::HashSet;

use bbox_types::{Point3, Vector3};

use crate::error::{FitError, FitResult};

/// A triangular hull face with its outward (unnormalized) normal.
#[derive(Debug, Clone)]
pub(crate) struct HullFace {
    /// Indices into the input point slice.
    pub indices: [usize; 3],
    /// Outward normal, magnitude twice the face area.
    pub normal: Vector3<f64>,
}

impl HullFace {
    fn new(points: &[Point3<f64>], indices: [usize; 3]) -> Self {
        let [a, b, c] = indices;
        let normal = (points[b] - points[a]).cross(&(points[c] - points[a]));
        Self { indices, normal }
    }

    /// Signed distance of a point from the face's supporting plane.
    fn signed_distance(&self, points: &[Point3<f64>], p: usize) -> f64 {
        self.normal.dot(&(points[p] - points[self.indices[0]]))
    }
}

/// Compute the convex hull of a 3D point set.
///
/// # Errors
///
/// Returns [`FitError::HullConstruction`] when fewer than 4 affinely
/// independent points exist (coincident, collinear or coplanar input).
pub(crate) fn convex_hull(points: &[Point3<f64>]) -> FitResult<Vec<HullFace>> {
    if points.len() < 4 {
        return Err(FitError::hull(format!(
            "need at least 4 points for a 3D hull, got {}",
            points.len()
        )));
    }

    let scale = spread(points);
    if scale <= f64::EPSILON {
        return Err(FitError::hull("all points coincident"));
    }
    let tolerance = scale * 1e-12;

    let [i0, i1, i2, i3] = initial_tetrahedron(points, tolerance)?;

    // Four faces of the seed tetrahedron, each wound away from the
    // remaining vertex.
    let mut faces = Vec::with_capacity(points.len() * 2);
    for (tri, opposite) in [
        ([i0, i1, i2], i3),
        ([i0, i1, i3], i2),
        ([i0, i2, i3], i1),
        ([i1, i2, i3], i0),
    ] {
        let mut face = HullFace::new(points, tri);
        if face.signed_distance(points, opposite) > 0.0 {
            face = HullFace::new(points, [tri[0], tri[2], tri[1]]);
        }
        faces.push(face);
    }

    let seed = [i0, i1, i2, i3];
    for p in 0..points.len() {
        if seed.contains(&p) {
            continue;
        }
        add_point(points, &mut faces, p, tolerance);
    }

    Ok(faces)
}

/// Longest AABB edge of the input, used to scale tolerances.
fn spread(points: &[Point3<f64>]) -> f64 {
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);
    for p in points {
        min = min.inf(&p.coords);
        max = max.sup(&p.coords);
    }
    (max - min).max()
}

/// Pick four affinely independent seed points.
fn initial_tetrahedron(points: &[Point3<f64>], tolerance: f64) -> FitResult<[usize; 4]> {
    let i0 = 0;

    let (i1, d1) = farthest(points, |p| (p - points[i0]).norm());
    if d1 <= tolerance {
        return Err(FitError::hull("all points coincident"));
    }

    let line = (points[i1] - points[i0]) / d1;
    let (i2, d2) = farthest(points, |p| (p - points[i0]).cross(&line).norm());
    if d2 <= tolerance {
        return Err(FitError::hull("all points collinear"));
    }

    let normal = (points[i1] - points[i0]).cross(&(points[i2] - points[i0]));
    let (i3, d3) = farthest(points, |p| normal.dot(&(p - points[i0])).abs() / normal.norm());
    if d3 <= tolerance {
        return Err(FitError::hull("all points coplanar"));
    }

    Ok([i0, i1, i2, i3])
}

fn farthest(points: &[Point3<f64>], metric: impl Fn(&Point3<f64>) -> f64) -> (usize, f64) {
    let mut best = (0, 0.0);
    for (i, p) in points.iter().enumerate() {
        let d = metric(p);
        if d > best.1 {
            best = (i, d);
        }
    }
    best
}

/// Grow the hull by one point: delete the faces it sees, close the horizon.
fn add_point(points: &[Point3<f64>], faces: &mut Vec<HullFace>, p: usize, tolerance: f64) {
    let visible: Vec<usize> = (0..faces.len())
        .filter(|&f| faces[f].signed_distance(points, p) > tolerance)
        .collect();
    if visible.is_empty() {
        return;
    }

    // Directed edges of the visible region; an edge whose reverse is not in
    // the region lies on the horizon.
    let mut region = HashSet::new();
    for &f in &visible {
        let [a, b, c] = faces[f].indices;
        region.insert((a, b));
        region.insert((b, c));
        region.insert((c, a));
    }

    // Sorted so the face list (and every downstream tie-break) does not
    // depend on hash iteration order.
    let mut horizon: Vec<(usize, usize)> = region
        .iter()
        .filter(|&&(a, b)| !region.contains(&(b, a)))
        .copied()
        .collect();
    horizon.sort_unstable();

    let visible_set: HashSet<usize> = visible.into_iter().collect();
    let kept: Vec<HullFace> = faces
        .drain(..)
        .enumerate()
        .filter(|(i, _)| !visible_set.contains(i))
        .map(|(_, face)| face)
        .collect();
    *faces = kept;

    for (a, b) in horizon {
        faces.push(HullFace::new(points, [a, b, p]));
    }
}
