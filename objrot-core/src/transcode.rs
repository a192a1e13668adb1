/// Line transcoder: rotates `v`/`vn` lines and passes everything else through
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{RotateError, RotateResult};
use crate::obj::{format_geometry_line, parse_geometry_fields, LineKind};
use crate::transform::Rotation;

/// One line of an OBJ document, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshLine<'a> {
    pub kind: LineKind,
    /// Line content without its terminator.
    pub body: &'a str,
    /// `"\n"`, `"\r\n"` or `""` for an unterminated last line.
    pub terminator: &'a str,
}

impl<'a> MeshLine<'a> {
    fn split(raw: &'a str) -> Self {
        let (body, terminator) = if let Some(body) = raw.strip_suffix("\r\n") {
            (body, "\r\n")
        } else if let Some(body) = raw.strip_suffix('\n') {
            (body, "\n")
        } else {
            (raw, "")
        };
        Self {
            kind: LineKind::classify(body),
            body,
            terminator,
        }
    }

    /// The line exactly as it appeared in the input.
    pub fn raw(&self) -> String {
        format!("{}{}", self.body, self.terminator)
    }
}

/// A whole OBJ description held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshDocument {
    text: String,
}

impl MeshDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read an OBJ file in full. The file is closed before this returns.
    pub fn read(path: impl AsRef<Path>) -> RotateResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RotateError::input(path, e))?;
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines in input order.
    pub fn lines(&self) -> impl Iterator<Item = MeshLine<'_>> {
        self.text.split_inclusive('\n').map(MeshLine::split)
    }
}

/// How many geometry lines a transcode rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    pub vertices: usize,
    pub normals: usize,
    /// Geometry lines whose fields past the third coordinate were dropped.
    pub truncated: usize,
}

/// Result of rotating a document: output lines (terminators included) and counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcoded {
    pub lines: Vec<String>,
    pub stats: TranscodeStats,
}

impl Transcoded {
    /// Write all output lines to `path`, creating or truncating it.
    pub fn write(&self, path: impl AsRef<Path>) -> RotateResult<()> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|e| RotateError::output(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| RotateError::output(path, e))
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn into_string(self) -> String {
        self.lines.concat()
    }
}

/// Rotate every vertex and normal line of `document`.
///
/// Fails on the first `v`/`vn` line without three numeric fields; nothing is
/// produced in that case.
pub fn transcode(document: &MeshDocument, rotation: &Rotation) -> RotateResult<Transcoded> {
    let mut out = Transcoded::default();

    for (index, line) in document.lines().enumerate() {
        let Some(marker) = line.kind.marker() else {
            out.lines.push(line.raw());
            continue;
        };

        let fields =
            parse_geometry_fields(line.body).ok_or_else(|| RotateError::MalformedGeometryLine {
                line_number: index + 1,
                marker,
                line: line.body.to_string(),
            })?;
        if fields.extra > 0 {
            debug!(
                line = index + 1,
                dropped = fields.extra,
                "extra fields after '{}' coordinates dropped",
                marker
            );
            out.stats.truncated += 1;
        }

        let rotated = rotation.apply(&fields.point);
        out.lines.push(format_geometry_line(marker, &rotated) + line.terminator);

        match line.kind {
            LineKind::Vertex => out.stats.vertices += 1,
            LineKind::Normal => out.stats.normals += 1,
            LineKind::Other => {}
        }
    }

    if out.stats.truncated > 0 {
        warn!(
            lines = out.stats.truncated,
            "dropped fields beyond x y z on geometry lines"
        );
    }
    debug!(
        lines = out.lines.len(),
        vertices = out.stats.vertices,
        normals = out.stats.normals,
        "transcoded document"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;

    fn run(text: &str, axis: Axis, degrees: f64) -> RotateResult<Transcoded> {
        transcode(&MeshDocument::new(text), &Rotation::new(axis, degrees))
    }

    #[test]
    fn test_vertex_quarter_turn_about_z() {
        let out = run("v 1.000000 0.000000 0.000000\n", Axis::Z, 90.0).unwrap();
        assert_eq!(out.lines, vec!["v 0.000000 1.000000 0.000000\n"]);
        assert_eq!(out.stats, TranscodeStats { vertices: 1, normals: 0, truncated: 0 });
    }

    #[test]
    fn test_normal_half_turn_keeps_faces() {
        let input = "vn 0.000000 0.000000 1.000000\nf 1 2 3\n";
        let out = run(input, Axis::X, 180.0).unwrap();
        assert_eq!(
            out.into_string(),
            "vn 0.000000 0.000000 -1.000000\nf 1 2 3\n"
        );
    }

    #[test]
    fn test_other_lines_pass_through_verbatim() {
        let input = "# exported by hand  \r\n\
                     mtllib cube.mtl\n\
                     vt 0.5 0.25\n\
                     \n\
                     \tvp 0.1\n\
                     g   cube \n\
                     f 1/1/1 2/2/2 3/3/3";
        let out = run(input, Axis::Y, 33.0).unwrap();
        assert_eq!(out.stats, TranscodeStats::default());
        assert_eq!(out.into_string(), input);
    }

    #[test]
    fn test_terminators_are_kept() {
        let out = run("v 1 2 3\r\nvn 0 0 1", Axis::Z, 0.0).unwrap();
        assert_eq!(
            out.lines,
            vec![
                "v 1.000000 2.000000 3.000000\r\n",
                "vn 0.000000 0.000000 1.000000",
            ]
        );
    }

    #[test]
    fn test_counts_match_markers() {
        let input = "v 0 0 0\nv 1 0 0\nvt 0 0\nvn 0 1 0\nv 0 1 0\nvn 1 0 0\nf 1 2 3\n";
        let out = run(input, Axis::X, 45.0).unwrap();
        assert_eq!(out.stats, TranscodeStats { vertices: 3, normals: 2, truncated: 0 });
        assert_eq!(out.lines.len(), 7);
        assert_eq!(out.lines[2], "vt 0 0\n");
        assert_eq!(out.lines[6], "f 1 2 3\n");
    }

    #[test]
    fn test_vertex_weight_is_dropped() {
        let out = run("v 1 2 3 0.5\n", Axis::X, 0.0).unwrap();
        assert_eq!(out.lines, vec!["v 1.000000 2.000000 3.000000\n"]);
        assert_eq!(out.stats.truncated, 1);
    }

    #[test]
    fn test_vertex_colours_are_counted_once_per_line() {
        let input = "v 1 0 0 1.0 0.5 0.0\n\
                     v 0 1 0 0.2 0.2 0.2\n\
                     vn 0 0 1\n\
                     v 0 0 1 0.0 0.0 1.0\n";
        let out = run(input, Axis::Z, 90.0).unwrap();
        assert_eq!(
            out.stats,
            TranscodeStats { vertices: 3, normals: 1, truncated: 3 }
        );
        assert_eq!(out.lines[0], "v 0.000000 1.000000 0.000000\n");
    }

    #[test]
    fn test_malformed_line_aborts() {
        let input = "v 0 0 0\n# fine\nvn 1 oops 0\nv 1 1 1\n";
        let err = run(input, Axis::Z, 90.0).unwrap_err();
        match err {
            RotateError::MalformedGeometryLine {
                line_number,
                marker,
                line,
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(marker, "vn");
                assert_eq!(line, "vn 1 oops 0");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(run("v 1 2\n", Axis::Z, 90.0).is_err());
    }

    #[test]
    fn test_empty_document() {
        let out = run("", Axis::Z, 90.0).unwrap();
        assert!(out.lines.is_empty());
        assert_eq!(out.stats, TranscodeStats::default());
    }

    #[test]
    fn test_write_to() {
        let out = run("v 1 0 0\nf 1 1 1\n", Axis::Y, 180.0).unwrap();
        let mut buf = Vec::new();
        out.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "v -1.000000 0.000000 0.000000\nf 1 1 1\n"
        );
    }
}
