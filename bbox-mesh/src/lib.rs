//! Canonical ordering and triangulation for box visualization.
//!
//! Fitted boxes arrive with their corners in producer-native order. This
//! crate rewrites any valid 8-corner set into the fixed min/max bit
//! ordering ([`canonicalize`], [`canonicalize_with_frame`]) and applies the
//! fixed 12-triangle table over it ([`box_mesh`]). [`box_artifacts`]
//! bundles both steps with the box volume into the record consumers
//! display.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI/engine dependencies**.
//!
//! # Example
//!
//! ```
//! use bbox_mesh::{box_artifacts, canonicalize};
//! use bbox_types::{BoundingBox, Point3, Rotation3, Vector3};
//!
//! let bbox = BoundingBox::from_frame(
//!     Rotation3::from_euler_angles(0.2, 0.4, 0.6),
//!     Point3::new(1.0, 2.0, 3.0),
//!     Vector3::new(1.0, 0.5, 0.25),
//! );
//!
//! let artifacts = box_artifacts(&bbox, None).unwrap();
//! assert_eq!(artifacts.mesh.face_count(), 12);
//!
//! // The same corners canonicalize identically without the frame
//! let canonical = canonicalize(&bbox.corners).unwrap();
//! # let _ = canonical;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod artifacts;
mod builder;
mod canonical;
mod error;

pub use artifacts::{box_artifacts, BoxArtifacts};
pub use builder::{box_mesh, BOX_TRIANGLES};
pub use canonical::{canonicalize, canonicalize_with_frame};
pub use error::{MeshError, MeshResult};
