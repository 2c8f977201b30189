//! Oriented bounding box with corners in producer-native order.

use nalgebra::{Point3, Rotation3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An oriented box: an orthonormal local frame, a center, half-extents,
/// the resulting volume, and the 8 world-space corners.
///
/// The corner order is **producer-native and unspecified**; feed the corners
/// through corner canonicalization before triangulating. An axis-aligned box
/// is the special case with an identity frame.
///
/// # Example
///
/// ```
/// use bbox_types::{BoundingBox, Point3, Rotation3, Vector3};
///
/// let bbox = BoundingBox::from_frame(
///     Rotation3::identity(),
///     Point3::new(0.5, 0.5, 0.5),
///     Vector3::new(0.5, 0.5, 0.5),
/// );
///
/// assert!((bbox.volume - 1.0).abs() < 1e-12);
/// assert!(bbox.contains(&Point3::new(0.9, 0.1, 0.5)));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Local frame: columns are the box axes in world space.
    pub rotation: Rotation3<f64>,
    /// Center of the box in world space.
    pub center: Point3<f64>,
    /// Half-extents along each local axis (all >= 0).
    pub half_extents: Vector3<f64>,
    /// Volume of the box (product of the full extents).
    pub volume: f64,
    /// The 8 corners in world space, producer-native order.
    pub corners: [Point3<f64>; 8],
}

/// Local-frame corner signs, walking the bottom ring then the top ring.
const CORNER_SIGNS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

impl BoundingBox {
    /// Build a box from its frame, center and half-extents.
    ///
    /// Computes the volume and the 8 world-space corners.
    #[must_use]
    pub fn from_frame(
        rotation: Rotation3<f64>,
        center: Point3<f64>,
        half_extents: Vector3<f64>,
    ) -> Self {
        let volume = 8.0 * half_extents.x * half_extents.y * half_extents.z;

        let corners = CORNER_SIGNS.map(|[sx, sy, sz]| {
            let local = Vector3::new(
                sx * half_extents.x,
                sy * half_extents.y,
                sz * half_extents.z,
            );
            Point3::from(center.coords + rotation * local)
        });

        Self {
            rotation,
            center,
            half_extents,
            volume,
            corners,
        }
    }

    /// Full extents (2 * half-extents) along each local axis.
    #[inline]
    #[must_use]
    pub fn extents(&self) -> Vector3<f64> {
        self.half_extents * 2.0
    }

    /// The box's local axes in world space.
    #[must_use]
    pub fn axes(&self) -> [Vector3<f64>; 3] {
        [
            self.rotation * Vector3::x(),
            self.rotation * Vector3::y(),
            self.rotation * Vector3::z(),
        ]
    }

    /// True if the point lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let local = self.rotation.inverse() * (point - self.center);
        local.x.abs() <= self.half_extents.x + f64::EPSILON.sqrt()
            && local.y.abs() <= self.half_extents.y + f64::EPSILON.sqrt()
            && local.z.abs() <= self.half_extents.z + f64::EPSILON.sqrt()
    }
}
