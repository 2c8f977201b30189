//! Triangulated box mesh.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::BoxColor;

/// A closed triangle mesh over a small fixed vertex set, with optional
/// per-vertex color.
///
/// # Winding
///
/// Faces wind **clockwise when viewed from outside**; the outward face
/// normal is `(v2 - v0) x (v1 - v0)`. [`face_normal`](Self::face_normal)
/// follows this convention.
///
/// # Example
///
/// ```
/// use bbox_types::{BoxMesh, Point3};
///
/// let mesh = BoxMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 2, 1]],
///     None,
/// );
///
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Triangles as vertex-index triples.
    pub faces: Vec<[u32; 3]>,
    /// Per-vertex colors; when present, one entry per vertex.
    pub colors: Option<Vec<BoxColor>>,
}

impl BoxMesh {
    /// Create a mesh from vertices, faces and optional colors.
    #[inline]
    #[must_use]
    pub const fn from_parts(
        vertices: Vec<Point3<f64>>,
        faces: Vec<[u32; 3]>,
        colors: Option<Vec<BoxColor>>,
    ) -> Self {
        Self {
            vertices,
            faces,
            colors,
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Resolve a face to its three vertex positions.
    ///
    /// Returns `None` if the face index or any vertex index is out of
    /// bounds.
    #[must_use]
    pub fn triangle(&self, face: usize) -> Option<[Point3<f64>; 3]> {
        let [a, b, c] = *self.faces.get(face)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Outward (unnormalized) face normal, per the clockwise-from-outside
    /// winding convention.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Option<Vector3<f64>> {
        let [v0, v1, v2] = self.triangle(face)?;
        Some((v2 - v0).cross(&(v1 - v0)))
    }

    /// Centroid of a face.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn face_centroid(&self, face: usize) -> Option<Point3<f64>> {
        let [v0, v1, v2] = self.triangle(face)?;
        Some(Point3::from((v0.coords + v1.coords + v2.coords) / 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle() -> BoxMesh {
        BoxMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 2, 1]],
            None,
        )
    }

    #[test]
    fn counts() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(!mesh.is_empty());
        assert!(BoxMesh::default().is_empty());
    }

    #[test]
    fn triangle_resolution() {
        let mesh = single_triangle();
        let [v0, v1, v2] = mesh.triangle(0).unwrap();
        assert_relative_eq!(v0.x, 0.0);
        assert_relative_eq!(v1.y, 1.0);
        assert_relative_eq!(v2.x, 1.0);
        assert!(mesh.triangle(1).is_none());
    }

    #[test]
    fn face_normal_follows_cw_convention() {
        // Face (0, 2, 1): v0 at origin, v2 = +x, v1 = +y.
        // Outward normal (v2 - v0) x (v1 - v0) = x cross y = +z.
        let mesh = single_triangle();
        let n = mesh.face_normal(0).unwrap();
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn face_centroid_is_mean() {
        let mesh = single_triangle();
        let c = mesh.face_centroid(0).unwrap();
        assert_relative_eq!(c.x, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_bounds_index_is_none() {
        let mesh = BoxMesh::from_parts(vec![Point3::origin()], vec![[0, 0, 5]], None);
        assert!(mesh.triangle(0).is_none());
        assert!(mesh.face_normal(0).is_none());
    }
}
