use super::{lex::Scanner, link::Link, token::*, Error};
use crate::emit::{c_ident, c_number, Emitter};
use crate::error;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, Error>;

/// Compile a whole program to C source text.
pub fn compile(source: &str) -> Result<String> {
    let mut emitter = Emitter::new();
    parse(source, &mut emitter)?;
    Ok(emitter.output())
}

/// Recognize `source`, driving `emitter` as each construct is accepted.
/// On error the emitter holds a partial program and must be discarded.
pub fn parse(source: &str, emitter: &mut Emitter) -> Result<()> {
    let source = format!("{}\n", source);
    Parser::new(Scanner::new(&source), emitter)?.program()
}

struct Parser<'a, 'e> {
    scanner: Scanner<'a>,
    emitter: &'e mut Emitter,
    symbols: HashSet<String>,
    link: Link,
    token: Token<'a>,
    peeked: Token<'a>,
}

impl<'a, 'e> Parser<'a, 'e> {
    fn new(mut scanner: Scanner<'a>, emitter: &'e mut Emitter) -> Result<Parser<'a, 'e>> {
        let token = scanner.next_token()?;
        let peeked = scanner.next_token()?;
        Ok(Parser {
            scanner,
            emitter,
            symbols: HashSet::new(),
            link: Link::new(),
            token,
            peeked,
        })
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    fn next(&mut self) -> Result<()> {
        let peeked = self.scanner.next_token()?;
        self.token = std::mem::replace(&mut self.peeked, peeked);
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if !self.check(kind) {
            return Err(self.unexpected(kind.name()));
        }
        self.next()
    }

    fn unexpected(&self, expected: &str) -> Error {
        let msg = format!("EXPECTED {}, GOT {}", expected, self.token.kind);
        error!(SyntaxError, Some(self.token.line), ..&self.token.column; &msg)
    }

    fn ident(&mut self) -> Result<Token<'a>> {
        let token = self.token.clone();
        self.expect(TokenKind::Ident)?;
        Ok(token)
    }

    fn declare(&mut self, var: &Token) {
        if self.symbols.insert(var.text.to_string()) {
            self.emitter.declare(&format!("float {} = 0;", c_ident(var.text)));
        }
    }

    fn program(&mut self) -> Result<()> {
        self.emitter.declare("#include <stdio.h>");
        self.emitter.declare("int main(void){");
        while self.check(TokenKind::Newline) {
            self.next()?;
        }
        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }
        self.link.link()?;
        self.emitter.emit_line("return 0;");
        self.emitter.emit_line("}");
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        use TokenKind::*;
        match self.token.kind {
            Print => self.r#print()?,
            If => self.r#if()?,
            While => self.r#while()?,
            Label => self.r#label()?,
            Goto => self.r#goto()?,
            Let => self.r#let()?,
            Input => self.r#input()?,
            Ident if self.peeked.kind == Assign => {
                return Err(self.unexpected("STATEMENT (MISSING LET?)"));
            }
            _ => return Err(self.unexpected("STATEMENT")),
        }
        self.nl()
    }

    fn nl(&mut self) -> Result<()> {
        self.expect(TokenKind::Newline)?;
        while self.check(TokenKind::Newline) {
            self.next()?;
        }
        Ok(())
    }

    fn block(&mut self, end: TokenKind) -> Result<()> {
        while !self.check(end) {
            if self.check(TokenKind::Eof) {
                return Err(self.unexpected(end.name()));
            }
            self.statement()?;
        }
        self.next()
    }

    fn r#print(&mut self) -> Result<()> {
        self.next()?;
        if self.check(TokenKind::String) {
            self.emitter.emit_line(&format!("printf(\"{}\\n\");", self.token.text));
            return self.next();
        }
        self.emitter.emit("printf(\"%.2f\\n\", (float)(");
        self.expression()?;
        self.emitter.emit_line("));");
        Ok(())
    }

    fn r#if(&mut self) -> Result<()> {
        self.next()?;
        self.emitter.emit("if(");
        self.comparison()?;
        self.expect(TokenKind::Then)?;
        self.nl()?;
        self.emitter.emit_line("){");
        self.block(TokenKind::Endif)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    fn r#while(&mut self) -> Result<()> {
        self.next()?;
        self.emitter.emit("while(");
        self.comparison()?;
        self.expect(TokenKind::Repeat)?;
        self.nl()?;
        self.emitter.emit_line("){");
        self.block(TokenKind::Endwhile)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    fn r#label(&mut self) -> Result<()> {
        self.next()?;
        let label = self.ident()?;
        self.link.declare(&label)?;
        // The empty statement keeps a label at the end of a block legal.
        self.emitter.emit_line(&format!("{}:;", c_ident(label.text)));
        Ok(())
    }

    fn r#goto(&mut self) -> Result<()> {
        self.next()?;
        let label = self.ident()?;
        self.link.refer(&label);
        self.emitter.emit_line(&format!("goto {};", c_ident(label.text)));
        Ok(())
    }

    fn r#let(&mut self) -> Result<()> {
        self.next()?;
        let var = self.ident()?;
        self.expect(TokenKind::Assign)?;
        // Declared first, so the expression may read the zeroed variable.
        self.declare(&var);
        self.emitter.emit(&format!("{} = ", c_ident(var.text)));
        self.expression()?;
        self.emitter.emit_line(";");
        Ok(())
    }

    fn r#input(&mut self) -> Result<()> {
        self.next()?;
        let var = self.ident()?;
        self.declare(&var);
        let name = c_ident(var.text);
        self.emitter.emit_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name));
        self.emitter.emit_line(&format!("{} = 0;", name));
        self.emitter.emit_line("scanf(\"%*s\");");
        self.emitter.emit_line("}");
        Ok(())
    }

    fn comparison(&mut self) -> Result<()> {
        self.expression()?;
        if !self.token.kind.is_comparison() {
            return Err(self.unexpected("COMPARISON OPERATOR"));
        }
        while self.token.kind.is_comparison() {
            self.operator()?;
            self.expression()?;
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<()> {
        self.term()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.operator()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.unary()?;
        while self.check(TokenKind::Asterisk) || self.check(TokenKind::Slash) {
            self.operator()?;
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<()> {
        if self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.emitter.emit(self.token.text);
            self.next()?;
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<()> {
        match self.token.kind {
            TokenKind::Number => {
                self.emitter.emit(c_number(self.token.text));
            }
            TokenKind::Ident => {
                if !self.symbols.contains(self.token.text) {
                    let token = &self.token;
                    return Err(error!(UndefinedVariable, Some(token.line), ..&token.column;
                        token.text));
                }
                self.emitter.emit(&c_ident(self.token.text));
            }
            _ => return Err(self.unexpected("EXPRESSION")),
        }
        self.next()
    }

    // Binary operators are spaced so `a - -b` can't turn into C's `--`.
    fn operator(&mut self) -> Result<()> {
        self.emitter.emit(&format!(" {} ", self.token.text));
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::super::ErrorCode;
    use super::*;

    fn body(s: &str) -> String {
        let mut emitter = Emitter::new();
        match parse(s, &mut emitter) {
            Ok(()) => emitter.code().to_string(),
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn code(s: &str) -> ErrorCode {
        compile(s).unwrap_err().code()
    }

    #[test]
    fn test_precedence_is_structural() {
        assert_eq!(
            body("LET a = 1\nLET b = 2 + a * 3 - -4 / a"),
            "a = 1;\nb = 2 + a * 3 - -4 / a;\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_comparison_chain() {
        assert_eq!(
            body("LET a = 1\nWHILE a < 2 == 1 REPEAT\nENDWHILE"),
            "a = 1;\nwhile(a < 2 == 1){\n}\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_let_declares_before_reading() {
        assert_eq!(
            body("LET x = x + 1\nPRINT x"),
            "x = x + 1;\nprintf(\"%.2f\\n\", (float)(x));\nreturn 0;\n}\n"
        );
        assert_eq!(code("LET x = y + 1"), ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_missing_let() {
        let e = compile("LET a = 1\na = 2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN LINE 2 (0..1); EXPECTED STATEMENT (MISSING LET?), GOT IDENT"
        );
    }

    #[test]
    fn test_unterminated_block() {
        let e = compile("LET a = 1\nIF a > 0 THEN\nPRINT a\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert!(e.to_string().ends_with("EXPECTED ENDIF, GOT EOF"));
    }
}
