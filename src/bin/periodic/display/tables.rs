use std::io::{self, Write};

use periodic::Element;

use crate::cli::OutputFormat;
use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn write_element(out: &mut impl Write, element: &Element, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_element_card(out, element),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, element)?;
            writeln!(out)
        }
    }
}

pub fn write_element_list(
    out: &mut impl Write,
    elements: &[Element],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_element_rows(out, elements),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, elements)?;
            writeln!(out)
        }
    }
}

fn write_element_card(out: &mut impl Write, element: &Element) -> io::Result<()> {
    let mut rows = vec![
        ("Atomic Number", element.atomic().to_string()),
        ("Symbol", element.symbol().to_string()),
        ("Name", element.name().to_string()),
    ];
    if element.has_british_variant() {
        rows.push(("British Name", element.british_name().to_string()));
    }
    rows.push(("Atomic Mass (u)", element.mass().to_string()));

    write_kv_table(out, element.name(), &rows)
}

fn write_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        )?;
    }

    writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )
}

fn write_element_rows(out: &mut impl Write, elements: &[Element]) -> io::Result<()> {
    let z_w = 3usize;
    let sym_w = 6usize;
    let mass_w = 12usize;
    let sep_overhead = 10;
    let name_w = SAFE_TABLE_WIDTH.saturating_sub(z_w + sym_w + mass_w + sep_overhead);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(z_w + 2),
            "─".repeat(sym_w + 2),
            "─".repeat(name_w + 2),
            "─".repeat(mass_w + 2),
        )
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(
        out,
        "{INDENT}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:>mass_w$} │",
        "Z", "Symbol", "Name", "Mass (u)",
    )?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    for element in elements {
        let name = if element.has_british_variant() {
            format!("{} / {}", element.name(), element.british_name())
        } else {
            element.name().to_string()
        };
        writeln!(
            out,
            "{INDENT}│ {:>z_w$} │ {:<sym_w$} │ {:<name_w$} │ {:>mass_w$} │",
            element.atomic(),
            element.symbol(),
            truncate(&name, name_w),
            truncate(&element.mass().to_string(), mass_w),
        )?;
    }

    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    writeln!(out, "{INDENT}{} elements", elements.len())
}
