//! File I/O for the bounding-box toolkit.
//!
//! Two concerns, both file-based stand-ins for a host application's scene
//! graph:
//!
//! - **Point-set loading**: [`load_points`] reads XYZ-family text files
//!   (`.xyz`, `.txt`, `.pts`) into a
//!   [`PointSet`](bbox_types::PointSet)
//! - **Mesh export**: [`save_mesh`] / [`save_ply`] / [`save_stl`] write a
//!   [`BoxMesh`](bbox_types::BoxMesh) as ASCII PLY (with per-vertex color)
//!   or STL
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero GUI/engine dependencies**.
//!
//! # Example
//!
//! ```no_run
//! use bbox_io::{load_points, save_mesh};
//! use bbox_types::BoxMesh;
//!
//! let points = load_points("scan.xyz").unwrap();
//! # let mesh = BoxMesh::default();
//! save_mesh(&mesh, "box.ply").unwrap();
//! # let _ = points;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod export;
mod points;

pub use error::{IoError, IoResult};
pub use export::{save_mesh, save_ply, save_stl, MeshFormat};
pub use points::{load_points, PointFormat};
