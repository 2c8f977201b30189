//! Canonically ordered box corners.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 8 corners of a box in the fixed min/max bit order.
///
/// Corner index = `b0 + 2*b1 + 4*b2`, where bit `b_k = 0` selects the
/// minimum and `b_k = 1` the maximum along the box's k-th local axis.
/// Corner 0 is therefore the all-min corner and corner 7 the all-max corner.
///
/// This ordering is the invariant the fixed box triangulation depends on:
/// producers with arbitrary corner order must go through canonicalization
/// before meshing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalCorners {
    corners: [Point3<f64>; 8],
}

impl CanonicalCorners {
    /// Wrap corners already in canonical bit order.
    ///
    /// The caller asserts the ordering; this constructor does not verify it.
    #[inline]
    #[must_use]
    pub const fn new(corners: [Point3<f64>; 8]) -> Self {
        Self { corners }
    }

    /// The corners as a fixed-size array.
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Point3<f64>; 8] {
        &self.corners
    }

    /// The all-min corner (index 0).
    #[inline]
    #[must_use]
    pub const fn min_corner(&self) -> Point3<f64> {
        self.corners[0]
    }

    /// The all-max corner (index 7).
    #[inline]
    #[must_use]
    pub const fn max_corner(&self) -> Point3<f64> {
        self.corners[7]
    }

    /// Iterate over the corners in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.corners.iter()
    }
}

impl std::ops::Index<usize> for CanonicalCorners {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.corners[index]
    }
}

impl From<CanonicalCorners> for [Point3<f64>; 8] {
    fn from(corners: CanonicalCorners) -> Self {
        corners.corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_corners() -> [Point3<f64>; 8] {
        std::array::from_fn(|i| {
            Point3::new(
                f64::from(u8::from(i & 1 != 0)),
                f64::from(u8::from(i & 2 != 0)),
                f64::from(u8::from(i & 4 != 0)),
            )
        })
    }

    #[test]
    fn min_and_max_corners() {
        let corners = CanonicalCorners::new(unit_corners());
        assert!((corners.min_corner() - Point3::new(0.0, 0.0, 0.0)).norm() < f64::EPSILON);
        assert!((corners.max_corner() - Point3::new(1.0, 1.0, 1.0)).norm() < f64::EPSILON);
    }

    #[test]
    fn indexing() {
        let corners = CanonicalCorners::new(unit_corners());
        // index 5 = b0 + 4*b2: max x, min y, max z
        assert!((corners[5] - Point3::new(1.0, 0.0, 1.0)).norm() < f64::EPSILON);
        assert_eq!(corners.iter().count(), 8);
    }
}
