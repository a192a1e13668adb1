/// objrot core library - rotate OBJ geometry about a principal axis
///
/// Provides the stateless pieces of the tool: the axis rotation, OBJ line
/// classification and the transcoder that rewrites `v`/`vn` lines while
/// passing every other line through untouched.

pub mod error;
pub mod geometry;
pub mod obj;
pub mod transcode;
pub mod transform;

// Re-export commonly used types
pub use error::{RotateError, RotateResult};
pub use geometry::{parse_angle, Axis, Point3D};
pub use obj::LineKind;
pub use transcode::{transcode, MeshDocument, MeshLine, TranscodeStats, Transcoded};
pub use transform::{rotate, Rotation};
