//! Ordered 3D point collections.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of 3D points.
///
/// This is the read-only input to every box computation. The set itself
/// carries no invariant beyond ordering; individual computations state their
/// own minimum-size requirements.
///
/// # Example
///
/// ```
/// use bbox_types::{Point3, PointSet};
///
/// let points = PointSet::from_positions(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
///
/// assert_eq!(points.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSet {
    /// The points, in insertion order.
    pub points: Vec<Point3<f64>>,
}

impl PointSet {
    /// Create an empty point set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point set with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point set from a slice of positions.
    ///
    /// # Example
    ///
    /// ```
    /// use bbox_types::{Point3, PointSet};
    ///
    /// let points = PointSet::from_positions(&[Point3::new(1.0, 2.0, 3.0)]);
    /// assert_eq!(points.len(), 1);
    /// ```
    #[must_use]
    pub fn from_positions(positions: &[Point3<f64>]) -> Self {
        Self {
            points: positions.to_vec(),
        }
    }

    /// Number of points in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the set has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point.
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    /// Append a point given its coordinates.
    pub fn push_coords(&mut self, x: f64, y: f64, z: f64) {
        self.points.push(Point3::new(x, y, z));
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Mean of all points, or `None` for an empty set.
    ///
    /// # Example
    ///
    /// ```
    /// use bbox_types::{Point3, PointSet};
    ///
    /// let points = PointSet::from_positions(&[
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 4.0, 6.0),
    /// ]);
    /// let c = points.centroid().unwrap();
    /// assert!((c.y - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.points.is_empty() {
            return None;
        }

        let sum: Vector3<f64> = self.points.iter().map(|p| p.coords).sum();

        #[allow(clippy::cast_precision_loss)]
        // Point counts beyond 2^52 are unsupported
        let centroid = sum / self.points.len() as f64;

        Some(Point3::from(centroid))
    }
}

impl From<Vec<Point3<f64>>> for PointSet {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3<f64>> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_set() {
        let points = PointSet::new();
        assert!(points.is_empty());
        assert!(points.centroid().is_none());
    }

    #[test]
    fn push_and_len() {
        let mut points = PointSet::with_capacity(4);
        points.push(Point3::new(1.0, 0.0, 0.0));
        points.push_coords(0.0, 1.0, 0.0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn centroid_is_mean() {
        let points = PointSet::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ]);
        let c = points.centroid().unwrap();
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn from_iterator() {
        let points: PointSet = (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        assert_eq!(points.len(), 5);
    }
}
