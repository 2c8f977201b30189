//! Box-mesh export.
//!
//! Two terminal formats:
//!
//! - **PLY** (ASCII) - carries the optional per-vertex color, the format of
//!   choice for colored display boxes
//! - **STL** (ASCII or binary) - color-less, for consumers that only take
//!   STL
//!
//! Face normals written to STL follow the mesh's clockwise-from-outside
//! winding, so they point out of the box.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bbox_types::{BoxMesh, Point3};

use crate::error::{IoError, IoResult};

/// Supported mesh export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// ASCII PLY with optional per-vertex color.
    Ply,
    /// STL, binary by default.
    Stl,
}

impl MeshFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ply" => Some(Self::Ply),
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// Detect the format from a file path.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The canonical file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ply => "ply",
            Self::Stl => "stl",
        }
    }
}

/// Save a mesh to a file, detecting the format from the extension.
///
/// STL output is binary; use [`save_stl`] directly for ASCII STL.
///
/// # Errors
///
/// Returns an error if the extension is unknown or the file cannot be
/// written.
pub fn save_mesh<P: AsRef<Path>>(mesh: &BoxMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match MeshFormat::from_path(path) {
        Some(MeshFormat::Ply) => save_ply(mesh, path),
        Some(MeshFormat::Stl) => save_stl(mesh, path, true),
        None => Err(IoError::unknown_format(path)),
    }
}

/// Save a mesh as ASCII PLY.
///
/// Vertex colors, when present, are written as `uchar red green blue`
/// properties.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_ply<P: AsRef<Path>>(mesh: &BoxMesh, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let has_colors = mesh.colors.is_some();

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment exported by bbox-io")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    if has_colors {
        writeln!(writer, "property uchar red")?;
        writeln!(writer, "property uchar green")?;
        writeln!(writer, "property uchar blue")?;
    }
    writeln!(writer, "element face {}", mesh.face_count())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for (i, v) in mesh.vertices.iter().enumerate() {
        write!(writer, "{} {} {}", v.x, v.y, v.z)?;
        if let Some(colors) = &mesh.colors {
            let c = colors.get(i).copied().unwrap_or_default();
            write!(writer, " {} {} {}", c.r, c.g, c.b)?;
        }
        writeln!(writer)?;
    }

    for [a, b, c] in &mesh.faces {
        writeln!(writer, "3 {a} {b} {c}")?;
    }

    Ok(())
}

/// Save a mesh as STL, ASCII or binary.
///
/// STL has no notion of vertex color; any colors on the mesh are dropped.
///
/// # Errors
///
/// Returns an error if a face references a missing vertex or the file
/// cannot be written.
pub fn save_stl<P: AsRef<Path>>(mesh: &BoxMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        save_stl_binary(mesh, &mut writer)
    } else {
        save_stl_ascii(mesh, &mut writer)
    }
}

fn face_data(mesh: &BoxMesh, face: usize) -> IoResult<([Point3<f64>; 3], [f64; 3])> {
    let triangle = mesh
        .triangle(face)
        .ok_or_else(|| IoError::invalid_content(format!("face {face} references missing vertex")))?;
    let normal = mesh.face_normal(face).map_or([0.0; 3], |n| {
        let len = n.norm();
        if len > f64::EPSILON {
            [n.x / len, n.y / len, n.z / len]
        } else {
            [0.0; 3]
        }
    });
    Ok((triangle, normal))
}

fn save_stl_ascii<W: Write>(mesh: &BoxMesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "solid box")?;
    for face in 0..mesh.face_count() {
        let (triangle, [nx, ny, nz]) = face_data(mesh, face)?;
        writeln!(writer, "  facet normal {nx} {ny} {nz}")?;
        writeln!(writer, "    outer loop")?;
        for v in &triangle {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid box")?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
// Face counts beyond u32 never occur for box meshes
fn save_stl_binary<W: Write>(mesh: &BoxMesh, writer: &mut W) -> IoResult<()> {
    let mut header = [0_u8; 80];
    let tag = b"bbox-io binary stl";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;
    writer.write_all(&(mesh.face_count() as u32).to_le_bytes())?;

    for face in 0..mesh.face_count() {
        let (triangle, normal) = face_data(mesh, face)?;
        for component in normal {
            writer.write_all(&(component as f32).to_le_bytes())?;
        }
        for v in &triangle {
            writer.write_all(&(v.x as f32).to_le_bytes())?;
            writer.write_all(&(v.y as f32).to_le_bytes())?;
            writer.write_all(&(v.z as f32).to_le_bytes())?;
        }
        writer.write_all(&0_u16.to_le_bytes())?;
    }

    Ok(())
}
