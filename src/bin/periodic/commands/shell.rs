use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use periodic::PeriodicTable;

use crate::cli::OutputFormat;
use crate::config::OutputConfig;
use crate::display::{print_banner, write_element, write_element_list};
use crate::io::{stdin_is_tty, stdout};

const PROMPT: &str = "periodic> ";

const HELP: &str = "\
Enter an atomic number, a symbol, or a name (British or American spelling).
  list        print every element
  help        show this message
  quit, exit  leave the shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Help,
    List,
    Quit,
    Lookup(&'a str),
}

impl<'a> ShellCommand<'a> {
    fn parse(line: &'a str) -> Self {
        match line.to_lowercase().as_str() {
            "help" | "?" => ShellCommand::Help,
            "list" | "ls" => ShellCommand::List,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Lookup(line),
        }
    }
}

pub fn run_shell(table: &PeriodicTable, config: OutputConfig) -> Result<()> {
    if !stdin_is_tty() {
        return run_batch(
            table,
            config.format,
            io::stdin().lock(),
            &mut stdout(),
            &mut io::stderr(),
        );
    }

    if config.chatty {
        print_banner();
    }

    let mut editor = DefaultEditor::new().context("Failed to start the interactive shell")?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                let mut out = stdout();
                let flow = respond(table, line, config.format, &mut out, &mut io::stderr())
                    .context("Failed to write result")?;
                out.flush().context("Failed to write result")?;
                if flow == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("Interrupted; use 'quit' or Ctrl-D to exit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("Failed to read shell input"),
        }
    }

    Ok(())
}

/// Answers one query per input line, for piped input.
///
/// Each answer is flushed before the next line is read.
fn run_batch(
    table: &PeriodicTable,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read query from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let flow = respond(table, line, format, out, err).context("Failed to write result")?;
        out.flush().context("Failed to write result")?;
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn respond(
    table: &PeriodicTable,
    line: &str,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Flow> {
    match ShellCommand::parse(line) {
        ShellCommand::Help => writeln!(err, "{HELP}")?,
        ShellCommand::List => write_element_list(out, table.elements(), format)?,
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Lookup(query) => match table.find(query) {
            Some(element) => write_element(out, element, format)?,
            None => writeln!(err, "No element found for '{query}'")?,
        },
    }
    Ok(Flow::Continue)
}
