//! Reserved words.
//!
//! A scanned identifier is checked against this table only after the whole
//! identifier has been consumed, so `integer` is an identifier and never a
//! `int` keyword followed by `eger`. Matching is exact and case-sensitive.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords range from 3-9 chars), then compares against the keywords of
//! that length.

/// Every reserved word, in declaration order.
pub const KEYWORDS: [&str; 10] = [
    "int",
    "float",
    "double",
    "public",
    "private",
    "protected",
    "static",
    "class",
    "enum",
    "interface",
];

/// Look up a reserved word by text.
///
/// Returns the keyword's `'static` spelling if `text` is reserved, `None`
/// if it's an ordinary identifier.
#[inline]
pub fn lookup(text: &str) -> Option<&'static str> {
    match text.len() {
        3 => match text {
            "int" => Some("int"),
            _ => None,
        },
        4 => match text {
            "enum" => Some("enum"),
            _ => None,
        },
        5 => match text {
            "float" => Some("float"),
            "class" => Some("class"),
            _ => None,
        },
        6 => match text {
            "double" => Some("double"),
            "public" => Some("public"),
            "static" => Some("static"),
            _ => None,
        },
        7 => match text {
            "private" => Some("private"),
            _ => None,
        },
        9 => match text {
            "protected" => Some("protected"),
            "interface" => Some("interface"),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    lookup(text).is_some()
}
