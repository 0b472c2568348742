use teeny::lang::{lex, ErrorCode, Scanner, TokenKind};

fn token(s: &str) -> (TokenKind, String) {
    let tokens = lex(s).unwrap();
    assert_eq!(tokens.len(), 2, "{:?}", tokens);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    (tokens[0].kind, tokens[0].text.to_string())
}

fn lex_error(s: &str) -> ErrorCode {
    lex(s).unwrap_err().code()
}

#[test]
fn test_numbers() {
    assert_eq!(token("3.14"), (TokenKind::Number, "3.14".to_string()));
    assert_eq!(token("42"), (TokenKind::Number, "42".to_string()));
    assert_eq!(token("0.5"), (TokenKind::Number, "0.5".to_string()));
}

#[test]
fn test_trailing_decimal_point() {
    assert_eq!(lex_error("3."), ErrorCode::MalformedNumber);
    assert_eq!(lex_error("LET x = 3.\n"), ErrorCode::MalformedNumber);
    assert_eq!(lex_error("3.x"), ErrorCode::MalformedNumber);
}

#[test]
fn test_no_sign_in_literal() {
    let kinds: Vec<TokenKind> = lex("-5").unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_keywords_are_exact() {
    assert_eq!(token("PRINT"), (TokenKind::Print, "PRINT".to_string()));
    assert_eq!(token("ENDWHILE"), (TokenKind::Endwhile, "ENDWHILE".to_string()));
    assert_eq!(token("print"), (TokenKind::Ident, "print".to_string()));
    assert_eq!(token("PRINTX"), (TokenKind::Ident, "PRINTX".to_string()));
    assert_eq!(token("IF2"), (TokenKind::Ident, "IF2".to_string()));
}

#[test]
fn test_mixed_line() {
    let tokens = lex("IF+-123foo*THEN/").unwrap();
    let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::If, "IF"),
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Number, "123"),
            (TokenKind::Ident, "foo"),
            (TokenKind::Asterisk, "*"),
            (TokenKind::Then, "THEN"),
            (TokenKind::Slash, "/"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_strings() {
    assert_eq!(
        token("\"THIS IS A STRING\""),
        (TokenKind::String, "THIS IS A STRING".to_string())
    );
    assert_eq!(token("\"\""), (TokenKind::String, "".to_string()));
    assert_eq!(lex_error("\"100%\""), ErrorCode::IllegalCharacter);
    assert_eq!(lex_error("\"a\\nb\""), ErrorCode::IllegalCharacter);
    assert_eq!(lex_error("\"tab\there\""), ErrorCode::IllegalCharacter);
    assert_eq!(lex_error("\"split\nline\""), ErrorCode::IllegalCharacter);
    assert_eq!(lex_error("\"open"), ErrorCode::IllegalCharacter);
}

#[test]
fn test_unknown() {
    assert_eq!(lex_error("@"), ErrorCode::UnknownToken);
    assert_eq!(lex_error("x ! y"), ErrorCode::UnknownToken);
    assert_eq!(lex_error("!"), ErrorCode::UnknownToken);
    assert_eq!(lex_error("a_b"), ErrorCode::UnknownToken);
}

#[test]
fn test_newlines_and_whitespace() {
    let kinds: Vec<TokenKind> = lex("\r\n\t x \r\n# only a comment\n")
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Newline,
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_error_location() {
    let e = lex("LET a = 1\nLET b = 2.").unwrap_err();
    assert_eq!(e.line_number(), Some(2));
    assert_eq!(e.column(), 8..10);
    assert_eq!(
        e.to_string(),
        "MALFORMED NUMBER IN LINE 2 (8..10); DECIMAL POINT MUST BE FOLLOWED BY A DIGIT"
    );
}

#[test]
fn test_scanner_is_lazy() {
    let mut scanner = Scanner::new("PRINT 1 @");
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Print);
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Number);
    assert!(scanner.next_token().is_err());
}
