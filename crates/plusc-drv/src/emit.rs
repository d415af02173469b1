//! Token file serialization.
//!
//! A finished scan is written one token per line in the token's
//! `Display` form: `Keyword(number)`, `Operator(:=)`,
//! `StringConstant("hi")`. The end-of-input sentinel is never written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use plusc_lex::Token;

use crate::error::{DriverError, Result};

/// Writes `tokens` to the file at `path`, one per line.
pub fn write_tokens(path: &Path, tokens: &[Token]) -> Result<()> {
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut out = BufWriter::new(file);

    for token in tokens {
        writeln!(out, "{}", token).map_err(|e| write_error(path, e))?;
    }

    out.flush().map_err(|e| write_error(path, e))?;
    Ok(())
}

fn write_error(path: &Path, source: io::Error) -> DriverError {
    DriverError::WriteOutput {
        path: path.to_path_buf(),
        source,
    }
}

// ==================== TESTS ====================
