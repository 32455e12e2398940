//! Command-line driver for the lexi scanner.
//!
//! Reads one source (a file or stdin), scans it in the chosen mode, and
//! writes one token per line followed by the diagnostics. All I/O lives
//! here; `lexi_lexer` never touches files or streams.

use std::io::{self, Read, Write};

use lexi_lexer::{lex_with_diagnostics, LexOutput, Scanner};
use tracing::debug;

pub mod logging;
mod options;
mod render;

pub use options::{parse_args, usage, DriverOptions, Input, ScanMode};
pub use render::{render_diagnostic, render_tokens};

/// Failures that stop the driver before or while scanning.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] lexi_lexer::ConfigError),
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Scan according to `options`, writing tokens to `out` and diagnostics
/// to `err`.
///
/// Returns `Ok(true)` when the scan produced no diagnostics.
pub fn run(
    options: &DriverOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool, DriverError> {
    let source = read_input(&options.input)?;
    debug!(input = ?options.input, mode = ?options.mode, len = source.len(), "scanning");

    let output = scan(&source, options);
    render_tokens(out, &output.tokens)?;
    for diagnostic in &output.diagnostics {
        writeln!(err, "{}", render_diagnostic(diagnostic))?;
    }
    out.flush()?;

    Ok(!output.has_diagnostics())
}

/// Run the scanner in the requested mode.
pub fn scan(source: &str, options: &DriverOptions) -> LexOutput {
    match options.mode {
        ScanMode::All => lex_with_diagnostics(source, options.config),
        ScanMode::Pull => {
            let mut scanner = Scanner::with_config(source, options.config);
            let mut tokens = Vec::new();
            loop {
                let token = scanner.next_token();
                let done = token.is_eof();
                tokens.push(token);
                if done {
                    break;
                }
            }
            LexOutput {
                tokens,
                diagnostics: scanner.into_diagnostics(),
            }
        }
    }
}

fn read_input(input: &Input) -> Result<String, DriverError> {
    match input {
        Input::Stdin => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Input::File(path) => std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}
