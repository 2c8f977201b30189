//! Error types for box meshing.

use bbox_types::GeometryError;
use thiserror::Error;

/// Result type alias for box meshing operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while canonicalizing corners or building a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The 8 input corners do not form a valid parallelepiped.
    #[error("corner set does not form a valid box: {reason}")]
    DegenerateBox {
        /// What made the corner set unusable.
        reason: String,
    },

    /// Basis construction or inversion failed on the corner geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl MeshError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateBox {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeshError::degenerate("coincident corners");
        assert!(format!("{err}").contains("coincident"));

        let err = MeshError::from(GeometryError::SingularMatrix { determinant: 0.0 });
        assert!(format!("{err}").contains("singular"));
    }
}
