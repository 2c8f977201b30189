//! Bounding-box fitting for 3D point sets.
//!
//! This crate computes three kinds of bounding volumes over a
//! [`PointSet`](bbox_types::PointSet):
//!
//! - **Axis-aligned**: [`axis_aligned_box`] - per-axis extremes in the
//!   world frame, O(n)
//! - **PCA-oriented**: [`pca_box`] - principal axes of the covariance
//!   matrix as the box frame
//! - **Minimal-volume**: [`minimal_box`] - convex-hull face-normal search
//!   for the smallest extent product, with a PCA fallback for degenerate
//!   (flat or linear) input
//!
//! Every fit returns a [`BoundingBox`](bbox_types::BoundingBox) whose
//! corners are in producer-native order; canonicalize them before building
//! a display mesh.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI/engine dependencies**. All
//! computation is single-threaded and purely functional over immutable
//! input; fits on different point sets may run concurrently without
//! synchronization.
//!
//! # Example
//!
//! ```
//! use bbox_fit::{axis_aligned_box, minimal_box, pca_box};
//! use bbox_types::{Point3, PointSet};
//!
//! let points = PointSet::from_positions(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ]);
//!
//! let aabb = axis_aligned_box(&points).unwrap();
//! let pca = pca_box(&points).unwrap();
//! let minimal = minimal_box(&points).unwrap();
//!
//! assert!((aabb.volume - 1.0).abs() < 1e-12);
//! assert!(minimal.volume <= aabb.volume + 1e-9);
//! # let _ = pca;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod aabb;
mod error;
mod hull;
mod minimal;
mod pca;

pub use aabb::axis_aligned_box;
pub use error::{FitError, FitResult};
pub use minimal::minimal_box;
pub use pca::pca_box;
