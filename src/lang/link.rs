use super::{token::Token, Column, Error};
use crate::error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label bookkeeping
///
/// `LABEL` declarations are checked for duplicates immediately.
/// `GOTO` targets may be forward references so they are only
/// resolved by `link` once the whole program has been seen.

#[derive(Debug, Default)]
pub struct Link {
    declared: HashMap<String, usize>,
    unlinked: Vec<(String, usize, Column)>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn declare(&mut self, label: &Token) -> Result<()> {
        if let Some(first) = self.declared.get(label.text) {
            let msg = format!("{} ALREADY DECLARED IN LINE {}", label.text, first);
            return Err(error!(DuplicateLabel, Some(label.line), ..&label.column; &msg));
        }
        self.declared.insert(label.text.to_string(), label.line);
        Ok(())
    }

    pub fn refer(&mut self, label: &Token) {
        self.unlinked
            .push((label.text.to_string(), label.line, label.column.clone()));
    }

    pub fn is_declared(&self, label: &str) -> bool {
        self.declared.contains_key(label)
    }

    /// Fails on the first `GOTO`, in source order, whose label never appeared.
    pub fn link(&self) -> Result<()> {
        for (label, line, col) in &self.unlinked {
            if !self.is_declared(label) {
                return Err(error!(UndefinedLabel, Some(*line), ..col; label));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{lex, ErrorCode, TokenKind};
    use super::*;

    fn idents(s: &str) -> Vec<Token> {
        lex(s)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Ident)
            .collect()
    }

    #[test]
    fn test_forward_reference() {
        let t = idents("later\nlater");
        let mut link = Link::new();
        link.refer(&t[0]);
        assert!(link.link().is_err());
        link.declare(&t[1]).unwrap();
        assert!(link.link().is_ok());
    }

    #[test]
    fn test_duplicate() {
        let t = idents("top\n\ntop");
        let mut link = Link::new();
        link.declare(&t[0]).unwrap();
        let e = link.declare(&t[1]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DuplicateLabel);
        assert_eq!(e.line_number(), Some(3));
    }

    #[test]
    fn test_first_undefined_wins() {
        let t = idents("b a");
        let mut link = Link::new();
        link.refer(&t[0]);
        link.refer(&t[1]);
        let e = link.link().unwrap_err();
        assert_eq!(e.to_string(), "UNDEFINED LABEL IN LINE 1 (0..1); b");
    }
}
