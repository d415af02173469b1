//! Driver error definitions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error that aborts a scan session.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("cannot open input file {}: {source}", .path.display())]
    ReadInput {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The token file could not be created or written.
    #[error("cannot write output file {}: {source}", .path.display())]
    WriteOutput {
        /// Path of the token file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source contained a lexical error; nothing was written.
    #[error("lexical error at line {line}, column {col}: {message}")]
    Lexical {
        /// Line of the offending character (1-based).
        line: u32,
        /// Column of the offending character (0-based).
        col: u32,
        /// The scanner's diagnostic message.
        message: String,
    },

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Driver result type.
pub type Result<T> = std::result::Result<T, DriverError>;

// ==================== TESTS ====================
