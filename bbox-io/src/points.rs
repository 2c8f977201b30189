//! Point-set file loading.
//!
//! Supports the simple XYZ ASCII family (`.xyz`, `.txt`, `.pts`): one
//! `x y z` triple per line, `#` and `//` comment lines skipped. Extra
//! columns (normals, colors, intensities) are ignored; only positions feed
//! the box computations.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bbox_types::PointSet;

use crate::error::{IoError, IoResult};

/// Supported point-set file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Whitespace-separated `x y z` per line.
    Xyz,
}

impl PointFormat {
    /// Detect the format from a file extension.
    ///
    /// # Example
    ///
    /// ```
    /// use bbox_io::PointFormat;
    ///
    /// assert_eq!(PointFormat::from_extension("xyz"), Some(PointFormat::Xyz));
    /// assert_eq!(PointFormat::from_extension("obj"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "xyz" | "txt" | "pts" => Some(Self::Xyz),
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
}

/// Load a point set from a file, detecting the format from the extension.
///
/// # Errors
///
/// Returns an error if the file is missing, the extension is not a known
/// point format, or a coordinate fails to parse.
///
/// # Example
///
/// ```no_run
/// use bbox_io::load_points;
///
/// let points = load_points("scan.xyz").unwrap();
/// println!("loaded {} points", points.len());
/// ```
pub fn load_points<P: AsRef<Path>>(path: P) -> IoResult<PointSet> {
    let path = path.as_ref();
    if PointFormat::from_path(path).is_none() {
        return Err(IoError::unknown_format(path));
    }

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut points = PointSet::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let coords: Vec<&str> = line.split_whitespace().take(3).collect();
        if coords.len() < 3 {
            continue; // Skip malformed lines
        }

        let mut xyz = [0.0_f64; 3];
        for (value, text) in xyz.iter_mut().zip(&coords) {
            *value = text.parse().map_err(|_| {
                IoError::invalid_content(format!(
                    "line {}: invalid coordinate {text:?}",
                    line_number + 1
                ))
            })?;
        }

        points.push_coords(xyz[0], xyz[1], xyz[2]);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn format_detection() {
        assert_eq!(PointFormat::from_extension("XYZ"), Some(PointFormat::Xyz));
        assert_eq!(PointFormat::from_path("scan.pts"), Some(PointFormat::Xyz));
        assert_eq!(PointFormat::from_path("noextension"), None);
    }

    #[test]
    fn loads_plain_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.xyz");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "# header comment").unwrap();
        writeln!(file, "// another comment").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0 0 0").unwrap();
        writeln!(file, "1.5 -2.25 3e2").unwrap();
        drop(file);

        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points.points[1].x, 1.5);
        assert_relative_eq!(points.points[1].z, 300.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.pts");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "1 2 3 0 0 1 255 0 0").unwrap();
        drop(file);

        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points.points[0].y, 2.0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.txt");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "1 2").unwrap();
        writeln!(file, "4 5 6").unwrap();
        drop(file);

        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.xyz");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "1 2 banana").unwrap();
        drop(file);

        let result = load_points(&path);
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn unknown_extension() {
        let result = load_points("mesh.obj");
        assert!(matches!(result, Err(IoError::UnknownFormat { .. })));
    }

    #[test]
    fn missing_file() {
        let result = load_points("no-such-file.xyz");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
