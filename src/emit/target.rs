use std::borrow::Cow;

// C keywords through C11, the names the generated program relies on,
// and the object-like macros of <stdio.h>.
const RESERVED: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "main", "printf", "scanf", "EOF", "NULL",
    "BUFSIZ", "FILENAME_MAX", "FOPEN_MAX", "TMP_MAX", "L_tmpnam", "SEEK_SET", "SEEK_CUR",
    "SEEK_END", "stdin", "stdout", "stderr",
];

/// Source identifiers never contain `_`, so the suffixed name can't collide.
pub fn c_ident(name: &str) -> Cow<str> {
    if RESERVED.contains(&name) {
        Cow::Owned(format!("{}_", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Leading zeros would make C read the integer part as octal.
pub fn c_number(number: &str) -> &str {
    let trimmed = number.trim_start_matches('0');
    match trimmed.chars().next() {
        Some(ch) if ch.is_ascii_digit() => trimmed,
        _ => &number[number.len() - trimmed.len() - 1..],
    }
}
