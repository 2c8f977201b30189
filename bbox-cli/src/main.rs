//! Command-line wrapper around the bounding-box toolkit.
//!
//! Loads a point set from a file, computes the requested bounding boxes
//! (axis-aligned, PCA-oriented, minimal-volume), reports their volumes and
//! writes one mesh file per box.
//!
//! # Usage
//!
//! ```text
//! bbox scan.xyz                          # all three boxes, PLY, colored
//! bbox scan.xyz --boxes min --format stl
//! bbox scan.xyz --out-dir boxes --no-color
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bbox_fit::{axis_aligned_box, minimal_box, pca_box};
use bbox_io::{load_points, save_mesh};
use bbox_mesh::box_artifacts;
use bbox_types::{BoundingBox, BoxColor, PointSet};

/// Bounding boxes for 3D point sets
#[derive(Parser)]
#[command(name = "bbox")]
#[command(about = "Compute AABB, PCA and minimal-volume boxes for a point set", long_about = None)]
#[command(version)]
struct Cli {
    /// Input point set (.xyz, .txt or .pts)
    input: PathBuf,

    /// Which box types to compute
    #[arg(long, value_enum, default_value_t = Selection::All)]
    boxes: Selection,

    /// Directory the mesh files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Mesh output format
    #[arg(long, value_enum, default_value_t = Format::Ply)]
    format: Format,

    /// Skip per-vertex colors on the exported meshes
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Selection {
    /// Axis-aligned box only
    Aabb,
    /// PCA-oriented box only
    Pca,
    /// Minimal-volume box only
    Min,
    /// All three
    All,
}

impl Selection {
    fn kinds(self) -> &'static [BoxKind] {
        match self {
            Self::Aabb => &[BoxKind::Aabb],
            Self::Pca => &[BoxKind::Pca],
            Self::Min => &[BoxKind::Min],
            Self::All => &[BoxKind::Aabb, BoxKind::Pca, BoxKind::Min],
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// ASCII PLY with per-vertex color
    Ply,
    /// Binary STL (colors dropped)
    Stl,
}

impl Format {
    const fn extension(self) -> &'static str {
        match self {
            Self::Ply => "ply",
            Self::Stl => "stl",
        }
    }
}

/// One computable box type with its display defaults.
#[derive(Clone, Copy)]
enum BoxKind {
    Aabb,
    Pca,
    Min,
}

impl BoxKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Aabb => "AABB",
            Self::Pca => "OBB (PCA)",
            Self::Min => "OBB (min)",
        }
    }

    const fn file_stem(self) -> &'static str {
        match self {
            Self::Aabb => "aabb_box",
            Self::Pca => "obb_pca_box",
            Self::Min => "obb_min_box",
        }
    }

    const fn color(self) -> BoxColor {
        match self {
            Self::Aabb => BoxColor::RED,
            Self::Pca => BoxColor::GREEN,
            Self::Min => BoxColor::BLUE,
        }
    }

    fn fit(self, points: &PointSet) -> Result<BoundingBox> {
        let bbox = match self {
            Self::Aabb => axis_aligned_box(points),
            Self::Pca => pca_box(points),
            Self::Min => minimal_box(points),
        };
        bbox.with_context(|| format!("fitting {} over {} points", self.name(), points.len()))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let points = load_points(&cli.input)
        .with_context(|| format!("loading point set from {}", cli.input.display()))?;
    info!(count = points.len(), "loaded point set");

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    for &kind in cli.boxes.kinds() {
        let bbox = kind.fit(&points)?;
        let color = if cli.no_color { None } else { Some(kind.color()) };
        let artifacts = box_artifacts(&bbox, color)
            .with_context(|| format!("building mesh for {}", kind.name()))?;

        info!(kind = kind.name(), volume = artifacts.volume, "computed box");

        let path = cli
            .out_dir
            .join(format!("{}.{}", kind.file_stem(), cli.format.extension()));
        save_mesh(&artifacts.mesh, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote mesh");
    }

    Ok(())
}
