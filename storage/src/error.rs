use std::fmt;
use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

/// Failure while loading an embeddings file. Line and field numbers are 1-based.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened.
    NotFound { path: PathBuf, source: io::Error },
    /// Reading failed part way through the file.
    Io(io::Error),
    /// The line holds no token, or a token with no vector.
    MissingFields { line: usize },
    /// A vector component is not a number.
    Parse {
        line: usize,
        field: usize,
        value: String,
        source: ParseFloatError,
    },
    /// The vector length differs from the configured dimension.
    Dimension {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl LoadError {
    /// Line on which the error occurred, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::MissingFields { line }
            | LoadError::Parse { line, .. }
            | LoadError::Dimension { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound { source, .. } => Some(source),
            LoadError::Io(err) => Some(err),
            LoadError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::NotFound { path, source } => {
                write!(f, "Cannot open {}: {}", path.display(), source)
            }
            LoadError::Io(err) => write!(f, "Read error: {}", err),
            LoadError::MissingFields { line } => {
                write!(f, "Line {}: expected a token followed by a vector", line)
            }
            LoadError::Parse {
                line,
                field,
                value,
                source,
            } => write!(
                f,
                "Line {}, field {}: cannot parse {:?} as a number: {}",
                line, field, value, source
            ),
            LoadError::Dimension {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {}: expected {} components, found {}",
                line, expected, found
            ),
        }
    }
}

impl std::convert::From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(error)
    }
}
