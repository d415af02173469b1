//! plusc - Lexical Analyzer for the Plus Programming Language
//!
//! Reads a Plus source file, scans it into tokens, and writes the token
//! listing next to the source with the `.lx` extension. The first
//! lexical error aborts the run with a diagnostic instead.

mod emit;
mod error;
mod session;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{DriverError, Result};
use session::Session;

/// Command line interface for the Plus lexical analyzer.
#[derive(Parser, Debug)]
#[command(name = "plusc")]
#[command(author = "Plus Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the Plus language", long_about = None)]
struct Cli {
    /// Plus source file (`.plus` is appended when missing)
    input: PathBuf,

    /// Token file to write (default: source path with `.lx` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "PLUSC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "PLUSC_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Runs one scan session from parsed arguments.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let session = Session::new(&cli.input, cli.output)?;
    let count = session.run()?;
    println!("wrote {} tokens to {}", count, session.output_path().display());
    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

// ==================== TESTS ====================
