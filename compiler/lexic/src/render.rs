//! Text rendering for the token listing and diagnostics.

use std::io::{self, Write};

use lexi_lexer::{Diagnostic, Token};

/// Write one `[KIND]` / `[KIND, value]` line per token.
pub fn render_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// `error: <message> at <row>:<col>`
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    format!("error: {diagnostic}")
}
