//! Hand-written scanner producing owned [`Token`] values.
//!
//! The scanner owns a [`Cursor`] and pulls one token at a time. It never
//! aborts: illegal characters and unterminated constructs are recorded as
//! [`Diagnostic`] values and scanning continues, so every scan ends in
//! exactly one `Eof` token.
//!
//! # Design
//!
//! Main dispatch is a single `match` on the current character. Each arm
//! either emits a one-character token, calls a focused method that
//! advances the cursor and returns a token, or skips input without
//! producing a token (comments, short space runs, illegal characters).
//! [`Scanner::next_token`] loops until an arm produces a token.
//!
//! [`Scanner::scan_all`] is a loop over `next_token`, so the batch and pull
//! modes cannot disagree.

use tracing::{debug, trace, warn};

use crate::config::{ScannerConfig, SpaceMode};
use crate::cursor::{Cursor, Position};
use crate::diagnostic::Diagnostic;
use crate::keywords;
use crate::token::{Token, TokenKind};

/// Single-pass scanner over one source buffer.
///
/// A scanner cannot rewind. Once it returns `Eof` every later call to
/// [`next_token`](Self::next_token) returns `Eof` again without touching
/// the input.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: ScannerConfig,
    diagnostics: Vec<Diagnostic>,
    /// Set once `Eof` has been produced.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Create a scanner with an explicit configuration.
    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        debug!(
            len = source.len(),
            fold_width = config.fold_width(),
            spaces = %config.spaces(),
            block_comments = config.block_comments(),
            "creating scanner"
        );
        Self {
            cursor: Cursor::new(source),
            config,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// Scan the whole buffer.
    ///
    /// Returns every remaining token, ending with exactly one `Eof`.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` when the source is exhausted, and on every call after.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.cursor.current() {
            if let Some(token) = self.dispatch(c) {
                trace!(%token, offset = self.cursor.pos(), "token");
                return token;
            }
        }
        self.eof()
    }

    /// Diagnostics recorded so far, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the scanner, keeping only its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Where the next token will start.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns `true` once `Eof` has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The policies this scanner was created with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Classify the character under the cursor.
    ///
    /// Returns `None` when input was consumed without producing a token.
    fn dispatch(&mut self, c: char) -> Option<Token> {
        match c {
            '+' => Some(self.single(TokenKind::Add)),
            '-' => Some(self.single(TokenKind::Sub)),
            '*' => Some(self.single(TokenKind::Mul)),
            '/' => Some(self.single(TokenKind::Div)),
            '(' => Some(self.single(TokenKind::OpenParen)),
            ')' => Some(self.single(TokenKind::CloseParen)),
            '.' => Some(self.single(TokenKind::Dot)),
            ',' => Some(self.single(TokenKind::Comma)),
            ':' => Some(self.single(TokenKind::Colon)),
            '\n' => Some(self.single(TokenKind::Newline)),
            '\t' => self.indent(),
            ' ' => self.spaces(),
            '\'' | '"' => Some(self.string(c)),
            '=' | '<' | '>' | '!' => Some(self.comparison(c)),
            '#' => {
                self.comment();
                None
            }
            c if c.is_alphabetic() => Some(self.identifier()),
            c if c.is_ascii_digit() => Some(self.number()),
            c => {
                self.illegal(c);
                None
            }
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self) -> Token {
        if !self.finished {
            self.finished = true;
            debug!(
                diagnostics = self.diagnostics.len(),
                "reached end of input"
            );
        }
        Token::eof()
    }

    // ─── Single-character tokens ───────────────────────────────────

    /// Advance one character and emit `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind)
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self) -> Token {
        let start = self.cursor.pos();
        self.cursor.advance(); // first char, already known alphabetic
        self.cursor.eat_while(char::is_alphanumeric);
        let text = self.cursor.slice_from(start);
        let kind = if keywords::is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::with_text(kind, text)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    /// Digits and dots. Any dot makes the literal a `Float`; repeated dots
    /// are kept verbatim (`1.2.3` is one `Float`).
    fn number(&mut self) -> Token {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_digit() || c == '.');
        let text = self.cursor.slice_from(start);
        let kind = if text.contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Number
        };
        Token::with_text(kind, text)
    }

    // ─── String Literals ───────────────────────────────────────────

    /// Text up to the next matching `quote`. No escape processing.
    fn string(&mut self, quote: char) -> Token {
        let open = self.cursor.position();
        self.cursor.advance(); // opening quote
        let start = self.cursor.pos();
        let closed = self.cursor.eat_until(quote);
        let text = self.cursor.slice_from(start);
        if closed {
            self.cursor.advance(); // closing quote
        } else {
            self.report(Diagnostic::unterminated_string(open, quote));
        }
        Token::with_text(TokenKind::String, text)
    }

    // ─── Comparison & Assignment ───────────────────────────────────

    /// `=`, `<`, `>`, `!`, each optionally followed by `=`.
    fn comparison(&mut self, first: char) -> Token {
        self.cursor.advance(); // consume first
        if self.cursor.current() == Some('=') {
            self.cursor.advance();
            let kind = match first {
                '<' => TokenKind::LessEq,
                '>' => TokenKind::GreaterEq,
                '!' => TokenKind::NotEqual,
                _ => TokenKind::Equal,
            };
            let lexeme = kind.lexeme().unwrap_or_default();
            Token::with_text(kind, lexeme)
        } else {
            Token::new(match first {
                '<' => TokenKind::Less,
                '>' => TokenKind::Greater,
                '!' => TokenKind::Not,
                _ => TokenKind::Assign,
            })
        }
    }

    // ─── Indentation ───────────────────────────────────────────────

    fn spaces(&mut self) -> Option<Token> {
        match self.config.spaces() {
            SpaceMode::Fold => self.indent(),
            SpaceMode::Whitespace => Some(self.single(TokenKind::Whitespace)),
            SpaceMode::Skip => {
                self.cursor.eat_while(|c| c == ' ');
                None
            }
        }
    }

    /// Fold a maximal indentation run into one `Indent` token.
    ///
    /// Every tab is one unit. Under [`SpaceMode::Fold`] spaces join the run
    /// and add `spaces / fold_width` units, so two tabs and eight spaces
    /// scan alike. A run worth less than one unit produces nothing.
    fn indent(&mut self) -> Option<Token> {
        let fold_spaces = self.config.spaces() == SpaceMode::Fold;
        let mut tabs = 0usize;
        let mut spaces = 0usize;
        while let Some(c) = self.cursor.current() {
            match c {
                '\t' => tabs += 1,
                ' ' if fold_spaces => spaces += 1,
                _ => break,
            }
            self.cursor.advance();
        }
        let units = tabs + spaces / self.config.fold_width() as usize;
        (units > 0).then(|| Token::with_text(TokenKind::Indent, units.to_string()))
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn comment(&mut self) {
        let open = self.cursor.position();
        if self.config.block_comments() && self.cursor.peek() == Some('#') {
            self.cursor.advance();
            self.cursor.advance();
            if !self.cursor.eat_past("##") {
                self.report(Diagnostic::unterminated_comment(open));
            }
        } else {
            // The newline is left for the next call, which emits `Newline`.
            self.cursor.eat_until_newline_or_eof();
        }
    }

    // ─── Errors ────────────────────────────────────────────────────

    fn illegal(&mut self, c: char) {
        let pos = self.cursor.position();
        self.cursor.advance();
        self.report(Diagnostic::illegal_character(pos, c));
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "scanner diagnostic");
        self.diagnostics.push(diagnostic);
    }
}
