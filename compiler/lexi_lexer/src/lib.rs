//! Hand-written lexical scanner for lexi.
//!
//! Converts an in-memory source buffer into classified [`Token`] values:
//! identifiers, keywords, numeric and string literals, arithmetic and
//! comparison operators, punctuation, newlines, folded indentation, and a
//! final `Eof`.
//!
//! Two consumption modes are offered and always agree:
//! - [`Scanner::scan_all`] tokenizes the whole buffer at once.
//! - [`Scanner::next_token`] pulls one token per call.
//!
//! Problems (illegal characters, unterminated strings or block comments)
//! never abort a scan. They are collected as [`Diagnostic`] values next to
//! the token stream.
//!
//! # Example
//!
//! ```
//! use lexi_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("int abc = 1324");
//! let kinds: Vec<_> = scanner.scan_all().iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(scanner.diagnostics().is_empty());
//! ```
//!
//! # Debugging
//!
//! The scanner logs through `tracing` and never installs a subscriber.
//! With a subscriber honoring `RUST_LOG`:
//! - `RUST_LOG=lexi_lexer=debug` - scanner creation and end of input
//! - `RUST_LOG=lexi_lexer=trace` - every emitted token

mod config;
mod cursor;
mod diagnostic;
pub mod keywords;
mod scanner;
mod token;

pub use config::{ConfigError, ScannerConfig, SpaceMode, DEFAULT_FOLD_WIDTH};
pub use cursor::Position;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use scanner::Scanner;
pub use token::{OperatorClass, Token, TokenKind};

/// Tokens and diagnostics from a complete scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Every token, ending with exactly one `Eof`.
    pub tokens: Vec<Token>,
    /// Problems found along the way, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Tokenize `source` with the default configuration, discarding diagnostics.
pub fn lex(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_all()
}

/// Tokenize `source`, keeping diagnostics.
pub fn lex_with_diagnostics(source: &str, config: ScannerConfig) -> LexOutput {
    let mut scanner = Scanner::with_config(source, config);
    let tokens = scanner.scan_all();
    LexOutput {
        tokens,
        diagnostics: scanner.into_diagnostics(),
    }
}
