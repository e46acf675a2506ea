use thiserror::Error;

/// Result type for deck parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a grid deck
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Required section {0} is missing")]
    MissingSection(&'static str),

    #[error("Section {0} appears more than once")]
    DuplicateSection(&'static str),

    #[error("Malformed number {token:?} in {section} section")]
    MalformedNumber { section: &'static str, token: String },

    #[error("{section} has {actual} values, expected {expected} for a {nx}x{ny}x{nz} grid")]
    DimensionMismatch {
        section: &'static str,
        expected: usize,
        actual: usize,
        nx: usize,
        ny: usize,
        nz: usize,
    },

    #[error("Invalid JSON grid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported JSON grid schema version {0}")]
    UnsupportedVersion(u32),
}

impl Error {
    /// Create a parse error with line context
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
