use thiserror::Error;

/// Errors from [`parse_access_transform`](crate::spec::parse_access_transform).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Shorter than the shortest accepted spec.
    #[error("invalid access transformer: {0:?}")]
    InvalidAccessSpec(String),
    /// Visibility part is not one of `public`, `protected`, `default`,
    /// `private` or empty.
    #[error("invalid access modifier: {0:?}")]
    UnknownVisibility(String),
    /// The character before a trailing `f` is not `+` or `-`.
    #[error("invalid final modifier {sign:?} in {spec:?}")]
    InvalidFinalSign { spec: String, sign: char },
}

/// Errors from reading an FML access transformer file.
///
/// Line numbers are 1-based. `content` is the line after the comment was
/// stripped and surrounding whitespace trimmed.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid FML access transformer line: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: {source} (in {content:?})")]
    InvalidSpec {
        line: usize,
        content: String,
        #[source]
        source: SpecError,
    },
}

impl ReadError {
    /// The line the error was found on, if it came from a line at all.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::MalformedLine { line, .. } | Self::InvalidSpec { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadError>;
