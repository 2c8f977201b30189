//! Core types for bounding-box computation.
//!
//! This crate provides the foundational value types shared by the rest of
//! the workspace:
//!
//! - [`PointSet`] - An ordered collection of 3D points
//! - [`Aabb`] - Axis-aligned bounding box (min/max corners)
//! - [`BoundingBox`] - An oriented box with frame, extents and 8 corners
//! - [`CanonicalCorners`] - 8 box corners in the fixed min/max bit order
//! - [`BoxMesh`] - A triangulated box with optional per-vertex color
//! - [`frame`] - Basis construction helpers with typed degeneracy errors
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI/engine dependencies**. It can be
//! used in CLI tools, web applications (WASM), and servers.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Box meshes produced from
//! [`CanonicalCorners`] wind **clockwise when viewed from outside**; outward
//! face normals follow `(v2 - v0) x (v1 - v0)` (see [`BoxMesh`]).
//!
//! # Example
//!
//! ```
//! use bbox_types::{Point3, PointSet};
//!
//! let mut points = PointSet::new();
//! points.push_coords(0.0, 0.0, 0.0);
//! points.push_coords(1.0, 2.0, 3.0);
//!
//! assert_eq!(points.len(), 2);
//! assert!(!points.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod aabb;
mod bounding_box;
mod color;
mod corners;
mod error;
pub mod frame;
mod mesh;
mod pointset;

// Re-export core types
pub use aabb::Aabb;
pub use bounding_box::BoundingBox;
pub use color::BoxColor;
pub use corners::CanonicalCorners;
pub use error::{GeometryError, GeometryResult};
pub use mesh::BoxMesh;
pub use pointset::PointSet;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Rotation3, Vector3};
