#![allow(dead_code)]
use teeny::lang::{compile, ErrorCode, ErrorKind};

pub const PROLOGUE: &str = "#include <stdio.h>\nint main(void){\n";
pub const EPILOGUE: &str = "return 0;\n}\n";

/// The generated C with the fixed prologue and epilogue checked and removed.
pub fn body(s: &str) -> String {
    let c = match compile(s) {
        Ok(c) => c,
        Err(e) => panic!("{} : {:?}", e, e),
    };
    assert!(c.starts_with(PROLOGUE), "{}", c);
    assert!(c.ends_with(EPILOGUE), "{}", c);
    c[PROLOGUE.len()..c.len() - EPILOGUE.len()].to_string()
}

pub fn error(s: &str) -> String {
    match compile(s) {
        Ok(c) => panic!("expected an error, compiled to:\n{}", c),
        Err(e) => e.to_string(),
    }
}

pub fn code(s: &str) -> ErrorCode {
    match compile(s) {
        Ok(c) => panic!("expected an error, compiled to:\n{}", c),
        Err(e) => e.code(),
    }
}

pub fn kind(s: &str) -> ErrorKind {
    code(s).kind()
}
