//! Token kinds and the owned token values handed to callers.
//!
//! [`TokenKind`] is a closed set grouped into discriminant ranges so related
//! kinds sit next to each other. [`Token`] pairs a kind with an optional
//! owned payload and answers the classification queries downstream
//! consumers need (operator class, numeric-ness, comparison-ness, EOF).

use std::fmt;

/// Token category.
///
/// Discriminants are grouped by purpose:
/// - Arithmetic operators: 0-3
/// - Brackets & punctuation: 16-20
/// - Structure: 32-34
/// - Literals & names: 48-52
/// - Comparison & assignment: 64-71
/// - Control: 255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Arithmetic Operators ===
    /// `+`
    Add = 0,
    /// `-`
    Sub = 1,
    /// `*`
    Mul = 2,
    /// `/`
    Div = 3,

    // === Brackets & Punctuation ===
    /// `(`
    OpenParen = 16,
    /// `)`
    CloseParen = 17,
    /// `.`
    Dot = 18,
    /// `,`
    Comma = 19,
    /// `:`
    Colon = 20,

    // === Structure ===
    /// `\n`
    Newline = 32,
    /// Folded run of spaces (or a tab); payload is the unit count.
    Indent = 33,
    /// A single space, only produced in [`SpaceMode::Whitespace`](crate::SpaceMode::Whitespace).
    Whitespace = 34,

    // === Literals & Names ===
    /// Digit run without a dot.
    Number = 48,
    /// Digit run containing at least one dot.
    Float = 49,
    /// Quoted text, quotes stripped.
    String = 50,
    Identifier = 51,
    Keyword = 52,

    // === Comparison & Assignment ===
    /// `<`
    Less = 64,
    /// `<=`
    LessEq = 65,
    /// `>`
    Greater = 66,
    /// `>=`
    GreaterEq = 67,
    /// `==`
    Equal = 68,
    /// `!=`
    NotEqual = 69,
    /// `=`
    Assign = 70,
    /// `!`
    Not = 71,

    // === Control ===
    /// End of input. Always the last token of a scan.
    Eof = 255,
}

impl TokenKind {
    /// The upper-case name used when rendering tokens (`OPEN_PAREN`, `LESS_EQ`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::Dot => "DOT",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Newline => "NEWLINE",
            Self::Indent => "INDENT",
            Self::Whitespace => "WHITESPACE",
            Self::Number => "NUMBER",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword => "KEYWORD",
            Self::Less => "LESS",
            Self::LessEq => "LESS_EQ",
            Self::Greater => "GREATER",
            Self::GreaterEq => "GREATER_EQ",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Assign => "ASSIGN",
            Self::Not => "NOT",
            Self::Eof => "EOF",
        }
    }

    /// Fixed source text for kinds that always have the same lexeme.
    ///
    /// Returns `None` for variable-content kinds and for `Indent`/`Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::OpenParen => Some("("),
            Self::CloseParen => Some(")"),
            Self::Dot => Some("."),
            Self::Comma => Some(","),
            Self::Colon => Some(":"),
            Self::Newline => Some("\n"),
            Self::Whitespace => Some(" "),
            Self::Less => Some("<"),
            Self::LessEq => Some("<="),
            Self::Greater => Some(">"),
            Self::GreaterEq => Some(">="),
            Self::Equal => Some("=="),
            Self::NotEqual => Some("!="),
            Self::Assign => Some("="),
            Self::Not => Some("!"),
            Self::Indent
            | Self::Number
            | Self::Float
            | Self::String
            | Self::Identifier
            | Self::Keyword
            | Self::Eof => None,
        }
    }

    /// Whether tokens of this kind carry a text payload.
    pub const fn carries_text(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::Keyword
                | Self::Number
                | Self::Float
                | Self::String
                | Self::Indent
                | Self::LessEq
                | Self::GreaterEq
                | Self::Equal
                | Self::NotEqual
        )
    }

    /// Precedence class for arithmetic operators, `None` for everything else.
    pub const fn operator_class(self) -> Option<OperatorClass> {
        match self {
            Self::Add | Self::Sub => Some(OperatorClass::Additive),
            Self::Mul | Self::Div => Some(OperatorClass::Multiplicative),
            _ => None,
        }
    }

    pub const fn is_operator(self) -> bool {
        self.operator_class().is_some()
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Float)
    }

    /// `<`, `<=`, `>`, `>=`, `==`, `!=`. Assignment and `!` are not comparisons.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::LessEq
                | Self::Greater
                | Self::GreaterEq
                | Self::Equal
                | Self::NotEqual
        )
    }

    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binding strength of an arithmetic operator.
///
/// `Multiplicative` binds tighter than `Additive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorClass {
    /// `+` and `-`.
    Additive,
    /// `*` and `/`.
    Multiplicative,
}

/// A classified unit of scanned text.
///
/// The payload is an owned copy of the source slice, so tokens outlive the
/// scanner and the buffer they came from. Fields are private: a token
/// never changes after the scanner builds it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Option<String>,
}

impl Token {
    /// Create a payload-free token.
    pub fn new(kind: TokenKind) -> Self {
        debug_assert!(
            !kind.carries_text(),
            "{kind} tokens must be built with Token::with_text"
        );
        Self { kind, text: None }
    }

    /// Create a token carrying `text`.
    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        debug_assert!(kind.carries_text(), "{kind} tokens carry no text");
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of fold units for an `Indent` token, `None` for other kinds.
    pub fn indent_units(&self) -> Option<u32> {
        match self.kind {
            TokenKind::Indent => self.text.as_deref().and_then(|t| t.parse().ok()),
            _ => None,
        }
    }

    pub fn operator_class(&self) -> Option<OperatorClass> {
        self.kind.operator_class()
    }

    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Whether both tokens are arithmetic operators of the same class
    /// (`+`/`-` together, or `*`/`/` together).
    pub fn same_operator_class(&self, other: &Token) -> bool {
        match (self.operator_class(), other.operator_class()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    pub fn is_comparison(&self) -> bool {
        self.kind.is_comparison()
    }

    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

/// Renders `[KIND]`, or `[KIND, text]` when the token has a payload.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "[{}, {}]", self.kind, text),
            None => write!(f, "[{}]", self.kind),
        }
    }
}

#[cfg(test)]
mod tests;
