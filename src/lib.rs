//! # Teeny
//!
//! A structured BASIC that compiles to C.
//!
//! Teeny reads one source file and writes `out.c`, a complete C program
//! you can build with any C compiler.
//! ```text
//! $ teeny fib.teeny
//! Teeny Tiny Compiler
//! Compiling completed.
//! $ cc out.c -o fib && ./fib
//! ```
//!
//! There is no syntax tree. The parser checks each statement as it reads it
//! and hands the matching C text straight to the emitter.
//!
//! ```
//! let c = teeny::lang::compile("LET x = 5\nPRINT x").unwrap();
//! assert!(c.contains("float x = 0;"));
//! assert!(c.contains("printf(\"%.2f\\n\", (float)(x));"));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod emit;
pub mod lang;
pub mod term;
