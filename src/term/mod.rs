extern crate ansi_term;
use crate::emit::Emitter;
use crate::{
    error,
    lang::{parse, Column, Error},
};
use ansi_term::Style;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

pub const OUTPUT_FILE: &str = "out.c";

pub fn main() {
    println!("{}", Style::new().bold().paint("Teeny Tiny Compiler"));
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("teeny");
        eprintln!(
            "{}",
            Style::new()
                .bold()
                .paint("Error: Compiler needs source file as argument.")
        );
        eprintln!("Usage: {} <source file>", program_name);
        std::process::exit(1);
    }
    let source = match load(&args[1]) {
        Ok(source) => source,
        Err(error) => {
            report(&error, None);
            std::process::exit(1);
        }
    };
    if let Err(error) = build(&source, OUTPUT_FILE) {
        report(&error, Some(&source));
        std::process::exit(1);
    }
    println!("Compiling completed.");
}

/// Compile `source` and write the C program to `filename`.
/// Nothing is written unless the whole program compiles.
pub fn build<P: AsRef<Path>>(source: &str, filename: P) -> Result<(), Error> {
    let mut emitter = Emitter::new();
    parse(source, &mut emitter)?;
    save(emitter, filename)
}

pub fn load<P: AsRef<Path>>(filename: P) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(DiskIoError; msg.as_str())),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(DiskIoError; error.to_string().as_str()));
    }
    Ok(source)
}

fn save<P: AsRef<Path>>(emitter: Emitter, filename: P) -> Result<(), Error> {
    match emitter.finalize(filename) {
        Ok(_) => Ok(()),
        Err(error) => Err(error!(DiskIoError; error.to_string().as_str())),
    }
}

fn report(error: &Error, source: Option<&str>) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
    if let (Some(source), Some(number)) = (source, error.line_number()) {
        if let Some(line) = source.lines().nth(number - 1) {
            eprintln!("{}", decorate(line, &error.column()));
        }
    }
}

fn decorate(ins: &str, column: &Column) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for ch in ins.chars() {
        let do_under = column.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
        index += 1;
    }
    if column.start == index && column.end > column.start {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
