mod list;
mod lookup;
mod shell;

pub use lookup::{NotFound, QueryKind};

use list::run_list;
use lookup::{Query, run_lookup};
use shell::run_shell;

use anyhow::Result;

use periodic::{ElementField, PeriodicTable};

use crate::cli::{Cli, Command};
use crate::config::build_output_config;
use crate::display::Context;

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    let config = build_output_config(&cli.output, ctx);
    let table = PeriodicTable::shared();

    match cli.command {
        None | Some(Command::Shell) => run_shell(table, config),
        Some(Command::List) => run_list(table, config),
        Some(Command::Name { name }) => {
            run_lookup(table, Query::Field(ElementField::Name, name), config)
        }
        Some(Command::Symbol { symbol }) => {
            run_lookup(table, Query::Field(ElementField::Symbol, symbol), config)
        }
        Some(Command::Number { number }) => run_lookup(table, Query::Number(number), config),
        Some(Command::Find { query }) => run_lookup(table, Query::Any(query), config),
        Some(Command::Search { field, value }) => {
            run_lookup(table, Query::Field(field, value), config)
        }
    }
}
