/// Error types for rotating OBJ geometry
use std::path::PathBuf;
use thiserror::Error;

/// Result type for objrot operations.
pub type RotateResult<T> = Result<T, RotateError>;

/// Everything that can abort a rotation run.
///
/// All variants are terminal: nothing is retried and no partial output is
/// produced on purpose.
#[derive(Debug, Error)]
pub enum RotateError {
    /// The angle argument is not a number.
    #[error("angle must be a number, got '{value}'")]
    InvalidAngle { value: String },

    /// The axis argument is not x, y or z.
    #[error("axis must be x, y, or z, got '{value}'")]
    InvalidAxis { value: String },

    /// The input file does not exist.
    #[error("could not find file '{}'", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("could not read file '{}'", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("could not write file '{}'", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `v`/`vn` line without three numeric fields after its marker.
    #[error("line {line_number}: expected three numeric fields after '{marker}', got '{line}'")]
    MalformedGeometryLine {
        line_number: usize,
        marker: &'static str,
        line: String,
    },
}

impl RotateError {
    /// Map an I/O failure on the input path, keeping "not found" distinct.
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputRead { path, source }
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_not_found_is_distinguished() {
        let err = RotateError::input("missing.obj", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, RotateError::InputNotFound { .. }));
        assert_eq!(err.to_string(), "could not find file 'missing.obj'");

        let err = RotateError::input("locked.obj", Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, RotateError::InputRead { .. }));
    }

    #[test]
    fn test_malformed_line_message() {
        let err = RotateError::MalformedGeometryLine {
            line_number: 7,
            marker: "vn",
            line: "vn 1.0 abc 0.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected three numeric fields after 'vn', got 'vn 1.0 abc 0.0'"
        );
    }
}
