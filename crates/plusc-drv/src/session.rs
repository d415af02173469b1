//! Scan session: path derivation, scanning, and output.
//!
//! A [`Session`] owns one source-to-token-file run. The whole source is
//! scanned before anything is written, so a failed run never leaves a
//! token file behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use plusc_lex::{Lexer, TokenKind};

use crate::emit;
use crate::error::{DriverError, Result};

/// File extension of Plus source files.
const SOURCE_EXT: &str = "plus";

/// File extension of token listing files.
const TOKENS_EXT: &str = "lx";

/// Appends the `.plus` extension to `input` unless it already ends in
/// one. An input with a different extension keeps it and gains `.plus`
/// on top.
fn derive_source_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext == SOURCE_EXT => input.to_path_buf(),
        _ => {
            let mut name = input.as_os_str().to_os_string();
            name.push(".");
            name.push(SOURCE_EXT);
            PathBuf::from(name)
        },
    }
}

/// Replaces the source extension with `.lx`.
fn derive_output_path(source: &Path) -> PathBuf {
    source.with_extension(TOKENS_EXT)
}

/// One source-to-token-file scan.
#[derive(Debug)]
pub struct Session {
    /// Path of the Plus source file.
    source_path: PathBuf,

    /// Path of the token file written on success.
    output_path: PathBuf,

    /// The source text.
    source: String,
}

impl Session {
    /// Opens a session for `input`, deriving the source and token file
    /// paths and reading the source text.
    pub fn new(input: &Path, output: Option<PathBuf>) -> Result<Self> {
        let source_path = derive_source_path(input);
        let output_path = output.unwrap_or_else(|| derive_output_path(&source_path));
        debug!(
            "source file {}, token file {}",
            source_path.display(),
            output_path.display()
        );

        let source = fs::read_to_string(&source_path).map_err(|e| DriverError::ReadInput {
            path: source_path.clone(),
            source: e,
        })?;

        Ok(Self {
            source_path,
            output_path,
            source,
        })
    }

    /// The token file this session writes on success.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Scans the source and writes the token file.
    ///
    /// The first lexical error aborts the run before anything is
    /// written. Returns the number of tokens written.
    pub fn run(&self) -> Result<usize> {
        info!("scanning {}", self.source_path.display());

        let mut lexer = Lexer::new(&self.source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            match token.kind() {
                TokenKind::EndOfInput => break,
                TokenKind::Error => {
                    return Err(DriverError::Lexical {
                        line: token.line(),
                        col: token.col(),
                        message: token.value().to_string(),
                    });
                },
                _ => tokens.push(token),
            }
        }
        debug!("scanned {} tokens", tokens.len());

        emit::write_tokens(&self.output_path, &tokens)?;
        info!("wrote {}", self.output_path.display());

        Ok(tokens.len())
    }
}

// ==================== TESTS ====================
