/// Wavefront OBJ line classification and geometry field parsing
use nom::{combinator::all_consuming, number::complete::double, IResult};

use crate::geometry::Point3D;

pub const VERTEX_MARKER: &str = "v";
pub const NORMAL_MARKER: &str = "vn";

/// What a single OBJ line carries, decided by its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Geometric vertex (`v x y z [w]`).
    Vertex,
    /// Vertex normal (`vn x y z`).
    Normal,
    /// Faces, texture coordinates, comments, blank lines and everything else.
    Other,
}

impl LineKind {
    /// Classify a line by exact equality of its first whitespace-delimited
    /// token. `vn`, `vt` and `vp` are never taken for `v`.
    pub fn classify(line: &str) -> Self {
        match line.split_whitespace().next() {
            Some(VERTEX_MARKER) => LineKind::Vertex,
            Some(NORMAL_MARKER) => LineKind::Normal,
            _ => LineKind::Other,
        }
    }

    /// Marker token for geometry kinds.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            LineKind::Vertex => Some(VERTEX_MARKER),
            LineKind::Normal => Some(NORMAL_MARKER),
            LineKind::Other => None,
        }
    }
}

/// Coordinates read from a geometry line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryFields {
    pub point: Point3D,
    /// Fields after the third coordinate (e.g. a vertex `w`), which are dropped.
    pub extra: usize,
}

/// Parse the three coordinates following the marker of a `v`/`vn` line.
///
/// Returns `None` when fewer than three fields follow the marker or any of
/// them is not a complete number (`1.0abc` is rejected, not truncated).
pub fn parse_geometry_fields(line: &str) -> Option<GeometryFields> {
    let mut fields = line.split_whitespace().skip(1);
    let mut coords = [0.0f64; 3];
    for coord in &mut coords {
        *coord = parse_coordinate(fields.next()?)?;
    }
    Some(GeometryFields {
        point: Point3D::new(coords[0], coords[1], coords[2]),
        extra: fields.count(),
    })
}

/// One coordinate field. nom's `double` covers decimal and exponent forms;
/// spellings it does not know (`Infinity`, `-nan`) go through `f64::from_str`.
fn parse_coordinate(field: &str) -> Option<f64> {
    match parse_number(field) {
        Ok((_, value)) => Some(value),
        Err(_) => field.parse().ok(),
    }
}

fn parse_number(field: &str) -> IResult<&str, f64> {
    all_consuming(double)(field)
}

/// Format a geometry line body: marker plus three coordinates at six decimals.
pub fn format_geometry_line(marker: &str, point: &Point3D) -> String {
    format!(
        "{} {} {} {}",
        marker,
        format_coordinate(point.x),
        format_coordinate(point.y),
        format_coordinate(point.z)
    )
}

/// Six-decimal fixed notation, with `-0.000000` written as `0.000000`.
fn format_coordinate(value: f64) -> String {
    let text = format!("{value:.6}");
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}
