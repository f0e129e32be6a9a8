use std::io::Write;

use anyhow::{Context, Result};

use periodic::PeriodicTable;

use crate::config::OutputConfig;
use crate::display::write_element_list;
use crate::io::stdout;

pub fn run_list(table: &PeriodicTable, config: OutputConfig) -> Result<()> {
    let mut out = stdout();
    write_element_list(&mut out, table.elements(), config.format)
        .context("Failed to write element list")?;
    out.flush().context("Failed to write element list")?;
    Ok(())
}
