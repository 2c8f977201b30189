//! Error types for box fitting.

use thiserror::Error;

/// Result type alias for box-fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors that can occur while fitting a box to a point set.
#[derive(Debug, Error)]
pub enum FitError {
    /// The point set is smaller than the algorithm's minimum.
    #[error("not enough points: got {actual}, need at least {required}")]
    InsufficientPoints {
        /// Minimum number of points the operation requires.
        required: usize,
        /// Number of points actually supplied.
        actual: usize,
    },

    /// The convex hull could not be built from the input.
    ///
    /// Inside the minimal-box search this is recovered by falling back to
    /// the PCA box; it only surfaces from direct hull construction.
    #[error("convex hull construction failed: {reason}")]
    HullConstruction {
        /// What made the input unusable for a 3D hull.
        reason: String,
    },
}

impl FitError {
    pub(crate) fn hull(reason: impl Into<String>) -> Self {
        Self::HullConstruction {
            reason: reason.into(),
        }
    }
}
