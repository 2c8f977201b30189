//! Fixed-topology box triangulation.

use bbox_types::{BoxColor, BoxMesh, CanonicalCorners};

/// The 12 triangles of a box over canonical corner indices.
///
/// Pairs of rows share a face: bottom, top, front, back, left, right in the
/// canonical bit order (bit 0 -> e1, bit 1 -> e2, bit 2 -> e3). Faces wind
/// clockwise when viewed from outside.
pub const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [1, 3, 2],
    [4, 6, 5],
    [5, 6, 7],
    [0, 4, 1],
    [1, 4, 5],
    [2, 3, 6],
    [3, 7, 6],
    [0, 2, 4],
    [2, 6, 4],
    [1, 5, 3],
    [3, 5, 7],
];

/// Triangulate canonical corners into a closed 12-triangle box mesh.
///
/// Applies [`BOX_TRIANGLES`] verbatim; no geometry is computed. A color,
/// when supplied, is replicated to all 8 vertices.
///
/// # Example
///
/// ```
/// use bbox_mesh::{box_mesh, canonicalize};
/// use bbox_types::{BoxColor, Point3};
///
/// let corners = std::array::from_fn(|i| {
///     Point3::new(
///         f64::from(u8::from(i & 1 != 0)),
///         f64::from(u8::from(i & 2 != 0)),
///         f64::from(u8::from(i & 4 != 0)),
///     )
/// });
/// let canonical = canonicalize(&corners).unwrap();
///
/// let mesh = box_mesh(&canonical, Some(BoxColor::RED));
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 12);
/// ```
#[must_use]
pub fn box_mesh(corners: &CanonicalCorners, color: Option<BoxColor>) -> BoxMesh {
    BoxMesh::from_parts(
        corners.as_array().to_vec(),
        BOX_TRIANGLES.to_vec(),
        color.map(|c| vec![c; 8]),
    )
}
