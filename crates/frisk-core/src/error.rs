use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading or querying stop-and-frisk data.
#[derive(Error, Debug)]
pub enum FriskError {
    /// The source file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The source file exists but could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row could not be split or parsed into the required fields.
    ///
    /// `line` is the 1-based physical line number; the header is line 1.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// No records were loaded for the requested year.
    #[error("No records loaded for year {0}")]
    YearNotFound(i32),

    /// A percentage or ratio was requested over zero records.
    #[error("Division undefined: {0}")]
    DivisionUndefined(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be serialised.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the frisk crates.
pub type Result<T> = std::result::Result<T, FriskError>;
