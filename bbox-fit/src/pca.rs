//! PCA-oriented box fitting.

use bbox_types::{BoundingBox, PointSet};
use nalgebra::{Matrix3, Point3, Rotation3, Vector3};

use crate::error::{FitError, FitResult};

/// Fit an oriented box whose axes are the principal axes of the point set.
///
/// The covariance matrix of the centered points is eigen-decomposed; its
/// orthonormal eigenvectors become the box frame, and the per-axis extents
/// of the points in that frame give the box dimensions. Which eigenvector is
/// labeled first/second/third under eigenvalue ties is unconstrained.
///
/// This is an approximation: it is only optimal when the distribution's
/// principal axes coincide with the true minimal box's axes.
///
/// # Errors
///
/// Returns [`FitError::InsufficientPoints`] for fewer than 3 points.
///
/// # Example
///
/// ```
/// use bbox_fit::pca_box;
/// use bbox_types::{Point3, PointSet};
///
/// let points = PointSet::from_positions(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(10.0, 1.0, 0.0),
/// ]);
///
/// let bbox = pca_box(&points).unwrap();
/// // The long axis dominates the extents
/// assert!((bbox.extents().max() - 10.0).abs() < 1e-9);
/// ```
pub fn pca_box(points: &PointSet) -> FitResult<BoundingBox> {
    if points.len() < 3 {
        return Err(FitError::InsufficientPoints {
            required: 3,
            actual: points.len(),
        });
    }

    // centroid() only fails on empty input, which is excluded above
    let centroid = points.centroid().unwrap_or_else(Point3::origin);
    let covariance = covariance_matrix(points, &centroid);

    let eigen = covariance.symmetric_eigen();
    let mut axes = eigen.eigenvectors;

    // Keep the frame right-handed
    if axes.determinant() < 0.0 {
        axes = -axes;
    }

    let rotation = Rotation3::from_matrix_unchecked(axes);
    Ok(box_in_frame(points, &rotation))
}

/// Covariance matrix of the centered points.
#[allow(clippy::cast_precision_loss)]
// Point counts beyond 2^52 are unsupported
fn covariance_matrix(points: &PointSet, centroid: &Point3<f64>) -> Matrix3<f64> {
    let mut covariance = Matrix3::zeros();
    for p in points.iter() {
        let centered = p - centroid;
        covariance += centered * centered.transpose();
    }
    covariance / points.len() as f64
}

/// Tightest box around the points whose axes follow the given frame.
///
/// Projects every point onto the frame axes, takes the per-axis min/max in
/// local coordinates, and maps the resulting box back to world space.
pub(crate) fn box_in_frame(points: &PointSet, rotation: &Rotation3<f64>) -> BoundingBox {
    let mut local_min = Vector3::repeat(f64::INFINITY);
    let mut local_max = Vector3::repeat(f64::NEG_INFINITY);

    let inverse = rotation.inverse();
    for p in points.iter() {
        let local = inverse * p.coords;
        local_min = local_min.inf(&local);
        local_max = local_max.sup(&local);
    }

    let half_extents = (local_max - local_min) / 2.0;
    let local_center = (local_max + local_min) / 2.0;
    let center = Point3::from(rotation * local_center);

    BoundingBox::from_frame(*rotation, center, half_extents)
}
