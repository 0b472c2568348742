/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Teeny language.
Parsing drives code generation directly, there is no syntax tree.

*/

pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod link;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use lex::Scanner;
pub use link::Link;
pub use parse::compile;
pub use parse::parse;
pub use token::Token;
pub use token::TokenKind;
