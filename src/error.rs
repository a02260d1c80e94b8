use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Kind of scenario a piece of raw input was supposed to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    EdgeList,
    Banker,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::EdgeList => write!(f, "edge list"),
            InputKind::Banker => write!(f, "Banker"),
        }
    }
}

/// Raw input could not be parsed into detector input
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {kind} input in '{source_name}': {reason}")]
#[diagnostic(code(deadlock_detector::input_format))]
pub struct InputFormatError {
    pub source_name: String,
    pub kind: InputKind,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid input here")]
    pub span: Option<SourceSpan>,
    #[help]
    pub help: Option<String>,
}

/// Matrix of a Banker scenario that a shape error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matrix {
    Allocation,
    Request,
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matrix::Allocation => write!(f, "allocation"),
            Matrix::Request => write!(f, "request"),
        }
    }
}

/// Parsed Banker input has inconsistent dimensions
///
/// Returned by the detector core, so it carries no diagnostic metadata;
/// [`DeadlockError::InputShape`] attaches code and help when it reaches the CLI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputShapeError {
    #[error("No resource types declared: 'available' is empty")]
    NoResourceTypes,

    #[error("'allocation' has {allocation} rows but 'request' has {request}")]
    ProcessCountMismatch { allocation: usize, request: usize },

    #[error("Row {process} of '{matrix}' has {found} entries, expected {expected}")]
    RaggedRow {
        matrix: Matrix,
        process: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum DeadlockError {
    #[error("Failed to read '{path}'")]
    #[diagnostic(
        code(deadlock_detector::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path '{path}' does not exist")]
    #[diagnostic(
        code(deadlock_detector::path_not_found),
        help("Pass a scenario file, a directory, a glob pattern or '-' for stdin")
    )]
    PathNotFound { path: PathBuf },

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(code(deadlock_detector::glob_error))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InputFormat(#[from] InputFormatError),

    #[error("Inconsistent input shape in '{source_name}'")]
    #[diagnostic(
        code(deadlock_detector::input_shape),
        help(
            "List one count per resource type in 'available', give 'allocation' and 'request' \
             one row per process, and make every row the same length (at most one entry per \
             resource type)"
        )
    )]
    InputShape {
        source_name: String,
        #[source]
        source: InputShapeError,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(deadlock_detector::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(deadlock_detector::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(deadlock_detector::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(deadlock_detector::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(deadlock_detector::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
