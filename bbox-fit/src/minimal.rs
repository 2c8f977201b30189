//! Minimal-volume oriented box search.

use bbox_types::{frame, BoundingBox, Point3, PointSet, Rotation3};
use nalgebra::Matrix3;
use tracing::debug;

use crate::error::{FitError, FitResult};
use crate::hull::{convex_hull, HullFace};
use crate::pca::{box_in_frame, pca_box};

/// Fit an approximation of the minimum-volume oriented box.
///
/// Every convex-hull face normal is tried as a candidate box axis; each of
/// the face's edges, orthogonalized against the normal, seeds an in-plane
/// basis for that axis. All points are projected into each candidate frame
/// and the frame with the smallest extent product wins. The world frame
/// seeds the search, bounding the result by the axis-aligned volume. Ties
/// keep the first candidate found, so repeated runs on identical input
/// produce identical output.
///
/// When the hull cannot be built (coplanar or collinear input), the search
/// falls back to the PCA box instead of failing.
///
/// # Errors
///
/// Returns [`FitError::InsufficientPoints`] for fewer than 3 points.
///
/// # Example
///
/// ```
/// use bbox_fit::{axis_aligned_box, minimal_box};
/// use bbox_types::{Point3, PointSet, Rotation3};
///
/// // A tilted box of points: the minimal box is much smaller than the AABB
/// let rotation = Rotation3::from_euler_angles(0.4, 0.6, 0.2);
/// let points: PointSet = (0..8)
///     .map(|i| {
///         let corner = Point3::new(
///             f64::from(i & 1) * 4.0,
///             f64::from((i >> 1) & 1) * 2.0,
///             f64::from((i >> 2) & 1),
///         );
///         rotation * corner
///     })
///     .collect();
///
/// let minimal = minimal_box(&points).unwrap();
/// let aabb = axis_aligned_box(&points).unwrap();
/// assert!(minimal.volume <= aabb.volume + 1e-9);
/// assert!((minimal.volume - 8.0).abs() < 1e-6);
/// ```
pub fn minimal_box(points: &PointSet) -> FitResult<BoundingBox> {
    if points.len() < 3 {
        return Err(FitError::InsufficientPoints {
            required: 3,
            actual: points.len(),
        });
    }

    let faces = match convex_hull(&points.points) {
        Ok(faces) => faces,
        Err(FitError::HullConstruction { reason }) => {
            debug!(%reason, "convex hull failed, falling back to PCA box");
            return pca_box(points);
        }
        Err(err) => return Err(err),
    };

    // The world frame seeds the search, so the result can never be worse
    // than the axis-aligned box over the same points.
    let mut best = box_in_frame(points, &Rotation3::identity());
    for face in &faces {
        for rotation in face_frames(&points.points, face) {
            let candidate = box_in_frame(points, &rotation);
            if candidate.volume < best.volume {
                best = candidate;
            }
        }
    }

    Ok(best)
}

/// Candidate orthonormal frames for one hull face.
///
/// The face normal is the third axis of every candidate; each face edge,
/// orthogonalized against the normal, yields one in-plane first axis, and
/// the cross product closes the right-handed frame. Degenerate normals or
/// edges contribute no candidate.
fn face_frames(points: &[Point3<f64>], face: &HullFace) -> Vec<Rotation3<f64>> {
    let Ok(e3) = frame::unit(&face.normal) else {
        return Vec::new();
    };

    let [a, b, c] = face.indices;
    [(a, b), (b, c), (c, a)]
        .into_iter()
        .filter_map(|(from, to)| {
            let edge = points[to] - points[from];
            let e1 = frame::unit(&(edge - e3 * edge.dot(&e3))).ok()?;
            let e2 = e3.cross(&e1);
            Some(Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[
                e1, e2, e3,
            ])))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rotated_box_points(rotation: &Rotation3<f64>) -> PointSet {
        let mut points = PointSet::new();
        for i in 0..8_u8 {
            let corner = Point3::new(
                f64::from(i & 1) * 3.0,
                f64::from((i >> 1) & 1) * 2.0,
                f64::from((i >> 2) & 1),
            );
            points.push(rotation * corner);
        }
        points
    }

    #[test]
    fn too_few_points() {
        let points = PointSet::from_positions(&[Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        assert!(matches!(
            minimal_box(&points),
            Err(FitError::InsufficientPoints {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn recovers_tilted_box_volume() {
        let rotation = Rotation3::from_euler_angles(0.3, -0.4, 0.9);
        let points = rotated_box_points(&rotation);

        let bbox = minimal_box(&points).unwrap();
        assert_relative_eq!(bbox.volume, 6.0, epsilon = 1e-6);
    }

    #[test]
    fn contains_all_points() {
        let rotation = Rotation3::from_euler_angles(1.1, 0.2, -0.5);
        let points = rotated_box_points(&rotation);

        let bbox = minimal_box(&points).unwrap();
        for p in points.iter() {
            assert!(bbox.contains(p), "point {p} outside minimal box");
        }
    }

    #[test]
    fn never_worse_than_world_frame() {
        let points: PointSet = (0..60)
            .map(|i| {
                let t = f64::from(i) * 0.41;
                Point3::new(t.sin() * 3.0, (t * 0.7).cos() * 2.0, (t * 1.3).sin())
            })
            .collect();

        let minimal = minimal_box(&points).unwrap();
        let aabb = crate::axis_aligned_box(&points).unwrap();
        assert!(minimal.volume <= aabb.volume + 1e-9);
    }

    #[test]
    fn coplanar_points_fall_back_to_pca() {
        // A tilted planar 4 x 3 grid: the hull fails, PCA takes over.
        // Distinct in-plane variances keep the principal axes grid-aligned.
        let rotation = Rotation3::from_euler_angles(0.5, 0.3, 0.0);
        let points: PointSet = (0..12)
            .map(|i| {
                let p = Point3::new(f64::from(i % 4), f64::from(i / 4), 0.0);
                rotation * p
            })
            .collect();

        let bbox = minimal_box(&points).unwrap();
        assert!(bbox.volume.abs() < 1e-9);
        assert_relative_eq!(bbox.extents().max(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn deterministic_across_runs() {
        let rotation = Rotation3::from_euler_angles(0.2, 0.8, 0.4);
        let points = rotated_box_points(&rotation);

        let first = minimal_box(&points).unwrap();
        let second = minimal_box(&points).unwrap();
        for (a, b) in first.corners.iter().zip(second.corners.iter()) {
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-15);
        }
    }
}
