use super::Column;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_KEYWORD: HashMap<&'static str, TokenKind> = TokenKind::KEYWORDS
        .iter()
        .map(|kind| (kind.name(), *kind))
        .collect();
);

/// A classified slice of the source text.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub line: usize,
    pub column: Column,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind, line: usize, column: Column) -> Token<'a> {
        Token {
            text,
            kind,
            line,
            column,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self.kind {
            Eof | Newline => write!(f, "{}", self.kind),
            String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    Eof,
    Newline,
    Number,
    Ident,
    String,

    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    Endif,
    While,
    Repeat,
    Endwhile,

    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl TokenKind {
    pub const KEYWORDS: [TokenKind; 11] = [
        TokenKind::Label,
        TokenKind::Goto,
        TokenKind::Print,
        TokenKind::Input,
        TokenKind::Let,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Endif,
        TokenKind::While,
        TokenKind::Repeat,
        TokenKind::Endwhile,
    ];

    pub fn keyword(s: &str) -> Option<TokenKind> {
        STRING_TO_KEYWORD.with(|stk| stk.get(s).copied())
    }

    pub fn is_comparison(self) -> bool {
        use TokenKind::*;
        matches!(self, Eq | NotEq | Less | LessEq | Greater | GreaterEq)
    }

    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Eof => "EOF",
            Newline => "NEWLINE",
            Number => "NUMBER",
            Ident => "IDENT",
            String => "STRING",
            Label => "LABEL",
            Goto => "GOTO",
            Print => "PRINT",
            Input => "INPUT",
            Let => "LET",
            If => "IF",
            Then => "THEN",
            Endif => "ENDIF",
            While => "WHILE",
            Repeat => "REPEAT",
            Endwhile => "ENDWHILE",
            Assign => "ASSIGN",
            Plus => "PLUS",
            Minus => "MINUS",
            Asterisk => "ASTERISK",
            Slash => "SLASH",
            Eq => "EQ",
            NotEq => "NOTEQ",
            Less => "LT",
            LessEq => "LTEQ",
            Greater => "GT",
            GreaterEq => "GTEQ",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
