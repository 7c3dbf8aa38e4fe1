use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FilterLogError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FilterLogError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, FilterLogError>;

/// Broad failure class, used by the CLI to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad invocation.
    Usage,
    /// A handle could not be acquired; no byte has been processed.
    Open,
    /// Reading or writing failed after streaming began.
    Stream,
}

impl FilterLogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Infrastructure(err) => err.kind(),
            Self::Presentation(_) => ErrorKind::Usage,
        }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open input '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output '{path}' is the same file as the input")]
    OutputIsInput { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to report progress: {source}")]
    Report {
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputOpen { .. } | Self::OutputCreate { .. } | Self::OutputIsInput { .. } => {
                ErrorKind::Open
            }
            Self::Read { .. } | Self::Write { .. } | Self::Report { .. } => ErrorKind::Stream,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FilterLogError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FilterLogError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FilterLogError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
