//! Basis construction helpers.
//!
//! Vector arithmetic (add, subtract, dot, cross, norm) comes straight from
//! `nalgebra`. This module adds the two operations that can fail, with typed
//! errors instead of `Option`s: unit-vector construction and 3x3 inversion.

use nalgebra::{Matrix3, Vector3};

use crate::error::{GeometryError, GeometryResult};

/// Norm and determinant threshold below which a quantity is degenerate.
pub const DEGENERACY_EPSILON: f64 = 1e-12;

/// Normalize a vector, rejecting near-zero input.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] when the norm is at or below
/// [`DEGENERACY_EPSILON`].
///
/// # Example
///
/// ```
/// use bbox_types::{frame, Vector3};
///
/// let e = frame::unit(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
/// assert!((e.norm() - 1.0).abs() < 1e-12);
///
/// assert!(frame::unit(&Vector3::zeros()).is_err());
/// ```
pub fn unit(v: &Vector3<f64>) -> GeometryResult<Vector3<f64>> {
    v.try_normalize(DEGENERACY_EPSILON)
        .ok_or(GeometryError::DegenerateVector { norm: v.norm() })
}

/// Invert a 3x3 matrix, rejecting near-singular input.
///
/// # Errors
///
/// Returns [`GeometryError::SingularMatrix`] when the determinant magnitude
/// is at or below [`DEGENERACY_EPSILON`].
///
/// # Example
///
/// ```
/// use bbox_types::{frame, Matrix3};
///
/// let inv = frame::invert(&Matrix3::identity()).unwrap();
/// assert!((inv - Matrix3::identity()).norm() < 1e-12);
///
/// assert!(frame::invert(&Matrix3::zeros()).is_err());
/// ```
pub fn invert(m: &Matrix3<f64>) -> GeometryResult<Matrix3<f64>> {
    let determinant = m.determinant();
    if determinant.abs() <= DEGENERACY_EPSILON {
        return Err(GeometryError::SingularMatrix { determinant });
    }
    m.try_inverse()
        .ok_or(GeometryError::SingularMatrix { determinant })
}
