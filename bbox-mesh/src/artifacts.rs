//! Per-box display artifacts.

use bbox_types::{BoundingBox, BoxColor, BoxMesh, CanonicalCorners};

use crate::builder::box_mesh;
use crate::canonical::canonicalize_with_frame;
use crate::error::MeshResult;

/// Everything a consumer needs to display one computed box.
#[derive(Debug, Clone)]
pub struct BoxArtifacts {
    /// Volume of the box.
    pub volume: f64,
    /// The 8 corners in canonical order.
    pub corners: CanonicalCorners,
    /// The triangulated box, colored when a color was requested.
    pub mesh: BoxMesh,
}

/// Canonicalize and triangulate a fitted box in one step.
///
/// Uses the box's own frame for canonicalization, so no geometric frame
/// reconstruction (and none of its tie-breaking) is involved.
///
/// # Errors
///
/// Returns [`MeshError::Geometry`](crate::MeshError::Geometry) if the box
/// frame cannot be inverted, which only happens for boxes not produced by a
/// valid fit.
///
/// # Example
///
/// ```
/// use bbox_mesh::box_artifacts;
/// use bbox_types::{BoundingBox, BoxColor, Point3, Rotation3, Vector3};
///
/// let bbox = BoundingBox::from_frame(
///     Rotation3::identity(),
///     Point3::new(0.5, 0.5, 0.5),
///     Vector3::new(0.5, 0.5, 0.5),
/// );
///
/// let artifacts = box_artifacts(&bbox, Some(BoxColor::GREEN)).unwrap();
/// assert!((artifacts.volume - 1.0).abs() < 1e-12);
/// assert_eq!(artifacts.mesh.face_count(), 12);
/// ```
pub fn box_artifacts(bbox: &BoundingBox, color: Option<BoxColor>) -> MeshResult<BoxArtifacts> {
    let corners = canonicalize_with_frame(&bbox.corners, &bbox.rotation)?;
    let mesh = box_mesh(&corners, color);

    Ok(BoxArtifacts {
        volume: bbox.volume,
        corners,
        mesh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bbox_types::{Point3, Rotation3, Vector3};

    #[test]
    fn artifacts_for_rotated_box() {
        let rotation = Rotation3::from_euler_angles(0.4, 0.1, -0.7);
        let bbox = BoundingBox::from_frame(
            rotation,
            Point3::new(2.0, -1.0, 0.5),
            Vector3::new(1.5, 1.0, 0.25),
        );

        let artifacts = box_artifacts(&bbox, None).unwrap();
        assert_relative_eq!(artifacts.volume, bbox.volume, epsilon = 1e-12);

        // Canonical corners are the producer's corners, reordered
        for corner in &bbox.corners {
            let found = artifacts.corners.iter().any(|c| (c - corner).norm() < 1e-9);
            assert!(found);
        }
    }

    #[test]
    fn color_is_carried_into_the_mesh() {
        let bbox = BoundingBox::from_frame(
            Rotation3::identity(),
            Point3::origin(),
            Vector3::new(1.0, 1.0, 1.0),
        );

        let artifacts = box_artifacts(&bbox, Some(BoxColor::RED)).unwrap();
        let colors = artifacts.mesh.colors.unwrap();
        assert!(colors.iter().all(|&c| c == BoxColor::RED));
    }
}
