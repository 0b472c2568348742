/*!
## Rust Emit Module

This Rust module collects the generated C program.

*/

mod emitter;
mod target;

pub use emitter::Emitter;
pub use target::c_ident;
pub use target::c_number;
