//! Axis-aligned box fitting.

use bbox_types::{Aabb, BoundingBox, PointSet};
use nalgebra::Rotation3;

use crate::error::{FitError, FitResult};

/// Fit the axis-aligned bounding box of a point set.
///
/// A single O(n) pass tracks the per-axis running minimum and maximum. The
/// resulting box carries the identity frame and volume equal to the product
/// of the per-axis extents.
///
/// # Errors
///
/// Returns [`FitError::InsufficientPoints`] for an empty point set; a single
/// point yields a valid zero-volume box.
///
/// # Example
///
/// ```
/// use bbox_fit::axis_aligned_box;
/// use bbox_types::{Point3, PointSet};
///
/// let points = PointSet::from_positions(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 3.0, 4.0),
/// ]);
///
/// let bbox = axis_aligned_box(&points).unwrap();
/// assert!((bbox.volume - 24.0).abs() < 1e-12);
/// ```
pub fn axis_aligned_box(points: &PointSet) -> FitResult<BoundingBox> {
    if points.is_empty() {
        return Err(FitError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }

    let aabb = Aabb::from_points(points.iter());

    Ok(BoundingBox::from_frame(
        Rotation3::identity(),
        aabb.center(),
        aabb.size() / 2.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bbox_types::Point3;

    #[test]
    fn empty_set_is_an_error() {
        let result = axis_aligned_box(&PointSet::new());
        assert!(matches!(
            result,
            Err(FitError::InsufficientPoints {
                required: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn single_point_has_zero_volume() {
        let points = PointSet::from_positions(&[Point3::new(1.0, 2.0, 3.0)]);
        let bbox = axis_aligned_box(&points).unwrap();

        assert!(bbox.volume.abs() < f64::EPSILON);
        assert_relative_eq!(bbox.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bbox.center.z, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn two_points_span_the_box() {
        let points = PointSet::from_positions(&[
            Point3::new(-1.0, -2.0, -3.0),
            Point3::new(1.0, 2.0, 3.0),
        ]);
        let bbox = axis_aligned_box(&points).unwrap();

        assert_relative_eq!(bbox.volume, 2.0 * 4.0 * 6.0, epsilon = 1e-12);
        assert_relative_eq!(bbox.center.coords.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn coplanar_points_give_zero_volume() {
        let points = PointSet::from_positions(&[
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 5.0),
            Point3::new(0.0, 1.0, 5.0),
            Point3::new(1.0, 1.0, 5.0),
        ]);
        let bbox = axis_aligned_box(&points).unwrap();
        assert!(bbox.volume.abs() < f64::EPSILON);
    }

    #[test]
    fn volume_is_extent_product() {
        let points = PointSet::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.25, 2.0),
            Point3::new(1.0, 0.5, 1.0),
        ]);
        let bbox = axis_aligned_box(&points).unwrap();
        let e = bbox.extents();
        assert_relative_eq!(bbox.volume, e.x * e.y * e.z, epsilon = 1e-12);
    }

    #[test]
    fn frame_is_world_axes() {
        let points = PointSet::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ]);
        let bbox = axis_aligned_box(&points).unwrap();
        let [x, y, z] = bbox.axes();
        assert_relative_eq!(x.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(y.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(z.z, 1.0, epsilon = 1e-12);
    }
}
