use std::fs::File;
use std::io::Write;
use std::path::Path;

/// ## Output buffers
///
/// Declarations go to the header, which is written ahead of the code.
/// A variable first seen halfway through the program still ends up
/// declared before any statement uses it.

#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    code: String,
}

impl Emitter {
    pub fn new() -> Emitter {
        Emitter::default()
    }

    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    pub fn declare(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn output(&self) -> String {
        let mut s = String::with_capacity(self.header.len() + self.code.len());
        s.push_str(&self.header);
        s.push_str(&self.code);
        s
    }

    pub fn finalize<P: AsRef<Path>>(self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.header.as_bytes())?;
        file.write_all(self.code.as_bytes())?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_before_code() {
        let mut e = Emitter::new();
        e.emit("x = ");
        e.emit("1");
        e.emit_line(";");
        e.declare("float x = 0;");
        assert_eq!(e.header(), "float x = 0;\n");
        assert_eq!(e.code(), "x = 1;\n");
        assert_eq!(e.output(), "float x = 0;\nx = 1;\n");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Emitter::new().output(), "");
    }
}
