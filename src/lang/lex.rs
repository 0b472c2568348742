use super::{token::*, Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Scan all of `s`, ending with and including the first `Eof` token.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(s);
    let mut tokens = vec![];
    loop {
        let token = scanner.next_token()?;
        let eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}

fn is_teeny_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_teeny_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_teeny_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_teeny_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

// printf and C string literals treat these as meta-characters.
fn is_illegal_in_string(c: char) -> bool {
    c.is_control() || c == '\\' || c == '%'
}

pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            line_start: 0,
        }
    }

    /// Returns `Eof` forever once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace();
        self.skip_comment();
        let (start, ch) = match self.chars.peek().copied() {
            Some((start, ch)) => (start, ch),
            None => {
                let end = self.source.len();
                return Ok(self.token(end, end, TokenKind::Eof));
            }
        };
        use TokenKind::*;
        match ch {
            '+' => Ok(self.single(start, Plus)),
            '-' => Ok(self.single(start, Minus)),
            '*' => Ok(self.single(start, Asterisk)),
            '/' => Ok(self.single(start, Slash)),
            '=' => Ok(self.pair(start, Assign, Eq)),
            '<' => Ok(self.pair(start, Less, LessEq)),
            '>' => Ok(self.pair(start, Greater, GreaterEq)),
            '!' => self.bang(start),
            '"' => self.string(start),
            '\n' => {
                let token = self.single(start, Newline);
                self.line += 1;
                self.line_start = start + 1;
                Ok(token)
            }
            c if is_teeny_digit(c) => self.number(start),
            c if is_teeny_alphabetic(c) => Ok(self.alphabetic()),
            c => {
                self.chars.next();
                let column = self.column(start, start + c.len_utf8());
                Err(error!(UnknownToken, Some(self.line), ..&column; &format!("{:?}", c)))
            }
        }
    }

    fn end(&mut self) -> usize {
        let len = self.source.len();
        self.chars.peek().map_or(len, |&(i, _)| i)
    }

    fn column(&self, start: usize, end: usize) -> Column {
        let col = self.source[self.line_start..start].chars().count();
        col..col + self.source[start..end].chars().count()
    }

    fn token(&self, start: usize, end: usize, kind: TokenKind) -> Token<'a> {
        Token::new(
            &self.source[start..end],
            kind,
            self.line,
            self.column(start, end),
        )
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_teeny_whitespace(c) {
                break;
            }
            self.chars.next();
        }
    }

    // The newline is left behind, it still terminates the statement.
    fn skip_comment(&mut self) {
        if let Some(&(_, '#')) = self.chars.peek() {
            while let Some(&(_, c)) = self.chars.peek() {
                if c == '\n' {
                    break;
                }
                self.chars.next();
            }
        }
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.chars.next();
        self.token(start, start + 1, kind)
    }

    fn pair(&mut self, start: usize, one: TokenKind, two: TokenKind) -> Token<'a> {
        self.chars.next();
        if let Some(&(_, '=')) = self.chars.peek() {
            self.chars.next();
            return self.token(start, start + 2, two);
        }
        self.token(start, start + 1, one)
    }

    fn bang(&mut self, start: usize) -> Result<Token<'a>> {
        self.chars.next();
        if let Some(&(_, '=')) = self.chars.peek() {
            self.chars.next();
            return Ok(self.token(start, start + 2, TokenKind::NotEq));
        }
        let column = self.column(start, start + 1);
        Err(error!(UnknownToken, Some(self.line), ..&column; "EXPECTED != BUT FOUND !"))
    }

    fn string(&mut self, start: usize) -> Result<Token<'a>> {
        self.chars.next();
        loop {
            match self.chars.next() {
                Some((end, '"')) => {
                    return Ok(Token::new(
                        &self.source[start + 1..end],
                        TokenKind::String,
                        self.line,
                        self.column(start, end + 1),
                    ));
                }
                Some((i, c)) if is_illegal_in_string(c) => {
                    let column = self.column(i, i + c.len_utf8());
                    return Err(error!(IllegalCharacter, Some(self.line), ..&column;
                        &format!("{:?} IN STRING", c)));
                }
                Some(_) => continue,
                None => {
                    let column = self.column(start, self.source.len());
                    return Err(error!(IllegalCharacter, Some(self.line), ..&column;
                        "UNTERMINATED STRING"));
                }
            }
        }
    }

    fn number(&mut self, start: usize) -> Result<Token<'a>> {
        self.digits();
        if let Some(&(dot, '.')) = self.chars.peek() {
            self.chars.next();
            match self.chars.peek() {
                Some(&(_, c)) if is_teeny_digit(c) => self.digits(),
                _ => {
                    let column = self.column(start, dot + 1);
                    return Err(error!(MalformedNumber, Some(self.line), ..&column;
                        "DECIMAL POINT MUST BE FOLLOWED BY A DIGIT"));
                }
            }
        }
        let end = self.end();
        Ok(self.token(start, end, TokenKind::Number))
    }

    fn digits(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_teeny_digit(c) {
                break;
            }
            self.chars.next();
        }
    }

    fn alphabetic(&mut self) -> Token<'a> {
        let start = self.end();
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_teeny_alphanumeric(c) {
                break;
            }
            self.chars.next();
        }
        let end = self.end();
        let kind = TokenKind::keyword(&self.source[start..end]).unwrap_or(TokenKind::Ident);
        self.token(start, end, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        lex(s).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds("+- */!== == >>=<=<"),
            vec![
                Plus, Minus, Asterisk, Slash, NotEq, Assign, Eq, Greater, GreaterEq, LessEq, Less,
                Eof
            ]
        );
    }

    #[test]
    fn test_comment_keeps_newline() {
        use TokenKind::*;
        assert_eq!(
            kinds("+-123 # a comment == \n >"),
            vec![Plus, Minus, Number, Newline, Greater, Eof]
        );
    }

    #[test]
    fn test_eof_forever() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
        for _ in 0..3 {
            assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_columns() {
        let tokens = lex("LET foo = 12\n  PRINT \"hi\"").unwrap();
        assert_eq!(tokens[1].text, "foo");
        assert_eq!(tokens[1].column, 4..7);
        assert_eq!(tokens[1].line, 1);
        assert_eq!(tokens[5].kind, TokenKind::Print);
        assert_eq!(tokens[5].line, 2);
        assert_eq!(tokens[5].column, 2..7);
        assert_eq!(tokens[6].text, "hi");
        assert_eq!(tokens[6].column, 8..12);
    }
}
