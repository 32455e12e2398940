use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Arithmetic operators: 0-3
    assert_eq!(TokenKind::Add as u8, 0);
    assert_eq!(TokenKind::Div as u8, 3);

    // Brackets & punctuation: 16-20
    assert_eq!(TokenKind::OpenParen as u8, 16);
    assert_eq!(TokenKind::Colon as u8, 20);

    // Structure: 32-34
    assert_eq!(TokenKind::Newline as u8, 32);
    assert_eq!(TokenKind::Whitespace as u8, 34);

    // Literals & names: 48-52
    assert_eq!(TokenKind::Number as u8, 48);
    assert_eq!(TokenKind::Keyword as u8, 52);

    // Comparison & assignment: 64-71
    assert_eq!(TokenKind::Less as u8, 64);
    assert_eq!(TokenKind::Not as u8, 71);

    // Control: 255
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Names ===

#[test]
fn names_are_screaming_case() {
    assert_eq!(TokenKind::Add.name(), "ADD");
    assert_eq!(TokenKind::OpenParen.name(), "OPEN_PAREN");
    assert_eq!(TokenKind::CloseParen.name(), "CLOSE_PAREN");
    assert_eq!(TokenKind::LessEq.name(), "LESS_EQ");
    assert_eq!(TokenKind::GreaterEq.name(), "GREATER_EQ");
    assert_eq!(TokenKind::NotEqual.name(), "NOT_EQUAL");
    assert_eq!(TokenKind::Eof.name(), "EOF");
    assert_eq!(TokenKind::Indent.to_string(), "INDENT");
}

// === Lexeme ===

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(TokenKind::Add.lexeme(), Some("+"));
    assert_eq!(TokenKind::Sub.lexeme(), Some("-"));
    assert_eq!(TokenKind::Mul.lexeme(), Some("*"));
    assert_eq!(TokenKind::Div.lexeme(), Some("/"));
    assert_eq!(TokenKind::Assign.lexeme(), Some("="));
    assert_eq!(TokenKind::Not.lexeme(), Some("!"));
}

#[test]
fn fixed_lexeme_compound_comparisons() {
    assert_eq!(TokenKind::LessEq.lexeme(), Some("<="));
    assert_eq!(TokenKind::GreaterEq.lexeme(), Some(">="));
    assert_eq!(TokenKind::Equal.lexeme(), Some("=="));
    assert_eq!(TokenKind::NotEqual.lexeme(), Some("!="));
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(TokenKind::Identifier.lexeme(), None);
    assert_eq!(TokenKind::Keyword.lexeme(), None);
    assert_eq!(TokenKind::Number.lexeme(), None);
    assert_eq!(TokenKind::Float.lexeme(), None);
    assert_eq!(TokenKind::String.lexeme(), None);
    assert_eq!(TokenKind::Indent.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

// === Classification ===

#[test]
fn operator_classes() {
    assert_eq!(TokenKind::Add.operator_class(), Some(OperatorClass::Additive));
    assert_eq!(TokenKind::Sub.operator_class(), Some(OperatorClass::Additive));
    assert_eq!(
        TokenKind::Mul.operator_class(),
        Some(OperatorClass::Multiplicative)
    );
    assert_eq!(
        TokenKind::Div.operator_class(),
        Some(OperatorClass::Multiplicative)
    );
    assert_eq!(TokenKind::Assign.operator_class(), None);
    assert_eq!(TokenKind::Less.operator_class(), None);
    assert!(OperatorClass::Multiplicative > OperatorClass::Additive);
}

#[test]
fn same_operator_class() {
    let add = Token::new(TokenKind::Add);
    let sub = Token::new(TokenKind::Sub);
    let mul = Token::new(TokenKind::Mul);
    let div = Token::new(TokenKind::Div);
    let dot = Token::new(TokenKind::Dot);

    assert!(add.same_operator_class(&sub));
    assert!(mul.same_operator_class(&div));
    assert!(!add.same_operator_class(&mul));
    assert!(!dot.same_operator_class(&dot));
}

#[test]
fn comparison_excludes_assign_and_not() {
    for kind in [
        TokenKind::Less,
        TokenKind::LessEq,
        TokenKind::Greater,
        TokenKind::GreaterEq,
        TokenKind::Equal,
        TokenKind::NotEqual,
    ] {
        assert!(kind.is_comparison(), "{kind} should be a comparison");
    }
    assert!(!TokenKind::Assign.is_comparison());
    assert!(!TokenKind::Not.is_comparison());
}

#[test]
fn numeric_kinds() {
    assert!(Token::with_text(TokenKind::Number, "12").is_numeric());
    assert!(Token::with_text(TokenKind::Float, "3.14").is_numeric());
    assert!(!Token::with_text(TokenKind::String, "12").is_numeric());
}

#[test]
fn payload_kinds() {
    assert!(TokenKind::Identifier.carries_text());
    assert!(TokenKind::Indent.carries_text());
    assert!(TokenKind::LessEq.carries_text());
    assert!(!TokenKind::Less.carries_text());
    assert!(!TokenKind::Assign.carries_text());
    assert!(!TokenKind::Eof.carries_text());
}

// === Token ===

#[test]
fn eof_token() {
    let tok = Token::eof();
    assert!(tok.is_eof());
    assert_eq!(tok.text(), None);
}

#[test]
fn indent_units_parsed_from_payload() {
    assert_eq!(Token::with_text(TokenKind::Indent, "3").indent_units(), Some(3));
    assert_eq!(Token::with_text(TokenKind::Number, "3").indent_units(), None);
}

#[test]
fn display_without_payload() {
    assert_eq!(Token::new(TokenKind::OpenParen).to_string(), "[OPEN_PAREN]");
    assert_eq!(Token::eof().to_string(), "[EOF]");
}

#[test]
fn display_with_payload() {
    assert_eq!(
        Token::with_text(TokenKind::Identifier, "abc").to_string(),
        "[IDENTIFIER, abc]"
    );
    assert_eq!(
        Token::with_text(TokenKind::String, "wow a nice string").to_string(),
        "[STRING, wow a nice string]"
    );
}
