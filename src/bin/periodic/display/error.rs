use std::io::{self, Write};

use anyhow::Error;
use periodic::ElementField;

use crate::commands::{NotFound, QueryKind};
use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    if let Some(miss) = err.downcast_ref::<NotFound>() {
        return not_found_hints(miss);
    }

    if let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<io::Error>()) {
        return io_hints(io_err);
    }

    if let Some(rl_err) = err.downcast_ref::<rustyline::error::ReadlineError>() {
        return vec![
            format!("The line editor could not use this terminal ({rl_err})"),
            "Pipe queries through stdin instead, one per line".to_string(),
        ];
    }

    Vec::new()
}

fn not_found_hints(miss: &NotFound) -> Vec<String> {
    let mut hints = Vec::new();

    match miss.kind {
        QueryKind::Field(ElementField::Atomic) => {
            hints.push("Atomic numbers run from 1 to 118; there is no entry for 117".to_string());
            if miss.value.trim().parse::<i64>().is_err() {
                hints.push(format!("'{}' is not a whole number", miss.value));
            }
        }
        QueryKind::Field(ElementField::Symbol) => {
            hints.push("Symbols are one to three letters, e.g. Fe, Cl, Uuo".to_string());
            hints.push("Use 'periodic name' to search by element name".to_string());
        }
        QueryKind::Field(ElementField::Name) => {
            hints.push("Both spellings work: Aluminium / Aluminum, Sulphur / Sulfur".to_string());
            hints.push("Elements 110 to 118 use their systematic names, e.g. Ununoctium".to_string());
        }
        QueryKind::Any => {
            hints.push("Queries are tried as an atomic number, then a symbol, then a name".to_string());
        }
    }

    hints.push("Run 'periodic list' to see every element".to_string());
    hints
}

fn io_hints(source: &io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::BrokenPipe => vec![
            "Broken pipe — output consumer terminated".to_string(),
            "This may occur when piping to commands like `head`".to_string(),
        ],
        ErrorKind::InvalidData => vec!["Input is not valid UTF-8 text".to_string()],
        _ => vec!["Reading input or writing output failed".to_string()],
    }
}
