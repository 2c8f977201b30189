//! Error types for basis construction and inversion.

use thiserror::Error;

/// Result type alias for geometric basis operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by basis construction and matrix inversion.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// A vector was too short to normalize.
    #[error("cannot normalize vector with norm {norm:.3e}")]
    DegenerateVector {
        /// Euclidean norm of the offending vector.
        norm: f64,
    },

    /// A matrix was singular within tolerance.
    #[error("matrix is singular (determinant {determinant:.3e})")]
    SingularMatrix {
        /// Determinant of the offending matrix.
        determinant: f64,
    },
}
