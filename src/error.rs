use std::{fmt, io};

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, LoadError>;

/// Aborts a load. No partial mesh is returned alongside any of these.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("`{path}` is not a `.{expected}` file")]
    InvalidExtension { path: String, expected: &'static str },
    #[error("File not found: `{path}`")]
    FileNotFound { path: String },
    #[error("Failed to open `{path}`: {source}")]
    OpenFailure {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Line {line}: malformed face reference `{token}`: {reason}")]
    MalformedFaceReference {
        line: usize,
        token: String,
        reason: FaceRefError,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound { path: path.into() },
            _ => LoadError::OpenFailure {
                path: path.into(),
                source,
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FaceRefError {
    #[error("no position index")]
    MissingPosition,
    #[error("`{0}` is not an integer index")]
    InvalidIndex(String),
    #[error("indices are 1-based, found 0")]
    ZeroIndex,
    #[error("more than three `/`-separated components")]
    TooManyComponents,
    #[error("{pool} index {index} is out of range ({len} defined so far)")]
    OutOfRange { pool: Pool, index: i64, len: usize },
    #[error("vertex slot {0} does not fit a 32 bit index buffer")]
    IndexOverflow(usize),
}

/// The attribute pool a face reference component indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Position,
    Texcoord,
    Normal,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Position => write!(f, "position"),
            Pool::Texcoord => write!(f, "texture coordinate"),
            Pool::Normal => write!(f, "normal"),
        }
    }
}

/// Line level problems the loader recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    #[error("Line {line}: could not parse `{token}` as a number, using 0")]
    MalformedNumericField { line: usize, token: String },
    #[error("Line {line}: `{keyword}` expects {expected} values but found {found}, ignored")]
    FieldCount {
        line: usize,
        keyword: String,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: face has only {refs} vertex reference(s)")]
    DegenerateFace { line: usize, refs: usize },
    #[error("Line {line}: could not load material library `{path}`: {reason}")]
    MaterialLibrary {
        line: usize,
        path: String,
        reason: String,
    },
    #[error("{path}: {warning}")]
    InMaterialLibrary {
        path: String,
        warning: Box<Warning>,
    },
}

/// A successfully loaded value together with everything that was skipped or defaulted on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Parsed<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}
