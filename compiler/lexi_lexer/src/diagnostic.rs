//! Structured scanner diagnostics.
//!
//! Diagnostics never stop a scan. The scanner records each one with the
//! position where the offending construct starts and keeps going, so a
//! complete token stream ending in `Eof` is always produced. Callers decide
//! how (and whether) to render them.

use crate::cursor::Position;

/// A non-fatal problem found while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct Diagnostic {
    /// WHAT went wrong.
    pub kind: DiagnosticKind,
    /// WHERE the offending construct starts.
    pub pos: Position,
}

/// What kind of problem the scanner found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum DiagnosticKind {
    /// A character matched by no scanning rule. It is skipped.
    #[error("illegal character {ch:?}")]
    IllegalCharacter { ch: char },
    /// End of input reached before the closing quote. The string token is
    /// still emitted with everything after the opening quote.
    #[error("unterminated string literal, expected closing {quote}")]
    UnterminatedString { quote: char },
    /// End of input reached inside a `## ... ##` block comment.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

impl Diagnostic {
    pub fn illegal_character(pos: Position, ch: char) -> Self {
        Self {
            kind: DiagnosticKind::IllegalCharacter { ch },
            pos,
        }
    }

    /// `pos` is the position of the opening quote.
    pub fn unterminated_string(pos: Position, quote: char) -> Self {
        Self {
            kind: DiagnosticKind::UnterminatedString { quote },
            pos,
        }
    }

    /// `pos` is the position of the opening `##`.
    pub fn unterminated_comment(pos: Position) -> Self {
        Self {
            kind: DiagnosticKind::UnterminatedComment,
            pos,
        }
    }

    /// The offending character, for diagnostics that have one.
    pub fn offending_char(&self) -> Option<char> {
        match self.kind {
            DiagnosticKind::IllegalCharacter { ch } => Some(ch),
            DiagnosticKind::UnterminatedString { .. } | DiagnosticKind::UnterminatedComment => None,
        }
    }
}
