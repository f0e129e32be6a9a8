use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use thiserror::Error;

use periodic::{Element, ElementField, PeriodicTable};

use crate::config::OutputConfig;
use crate::display::write_element;
use crate::io::stdout;

/// A single lookup requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Field(ElementField, String),
    Number(i64),
    Any(String),
}

impl Query {
    pub fn resolve<'t>(&self, table: &'t PeriodicTable) -> Option<&'t Element> {
        match self {
            Query::Field(field, value) => table.search(*field, value),
            Query::Number(n) => table.search_by_atomic_number(*n),
            Query::Any(query) => table.find(query),
        }
    }

    fn not_found(&self) -> NotFound {
        match self {
            Query::Field(field, value) => NotFound {
                kind: QueryKind::Field(*field),
                value: value.clone(),
            },
            Query::Number(n) => NotFound {
                kind: QueryKind::Field(ElementField::Atomic),
                value: n.to_string(),
            },
            Query::Any(query) => NotFound {
                kind: QueryKind::Any,
                value: query.clone(),
            },
        }
    }
}

/// What a missed lookup was keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Field(ElementField),
    Any,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Field(field) => write!(f, "{field}"),
            QueryKind::Any => f.write_str("number, symbol or name"),
        }
    }
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no element found with {kind} '{value}'")]
pub struct NotFound {
    pub kind: QueryKind,
    pub value: String,
}

pub fn run_lookup(table: &PeriodicTable, query: Query, config: OutputConfig) -> Result<()> {
    let element = query.resolve(table).ok_or_else(|| query.not_found())?;

    let mut out = stdout();
    write_element(&mut out, element, config.format).context("Failed to write result")?;
    out.flush().context("Failed to write result")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_resolve_against_the_table() {
        let table = PeriodicTable::new();

        let by_name = Query::Field(ElementField::Name, "Aluminium".into());
        assert_eq!(by_name.resolve(&table).unwrap().symbol(), "Al");

        let by_symbol = Query::Field(ElementField::Symbol, "fe".into());
        assert_eq!(by_symbol.resolve(&table).unwrap().name(), "Iron");

        let by_field = Query::Field(ElementField::Atomic, "16".into());
        assert_eq!(by_field.resolve(&table).unwrap().british_name(), "Sulphur");

        assert_eq!(Query::Number(1).resolve(&table).unwrap().name(), "Hydrogen");
        assert_eq!(Query::Any("Sulphur".into()).resolve(&table).unwrap().atomic(), 16);
    }

    #[test]
    fn field_queries_match_table_search() {
        let table = PeriodicTable::new();
        for (field, value) in [
            (ElementField::Name, "SULPHUR"),
            (ElementField::Symbol, "cS"),
            (ElementField::Atomic, " 55 "),
            (ElementField::Name, "Caesium"),
        ] {
            let query = Query::Field(field, value.into());
            assert_eq!(query.resolve(&table), table.search(field, value), "{field} {value}");
        }
    }

    #[test]
    fn misses_describe_the_query() {
        let table = PeriodicTable::new();

        let query = Query::Number(117);
        assert!(query.resolve(&table).is_none());
        assert_eq!(
            query.not_found().to_string(),
            "no element found with atomic '117'"
        );

        let query = Query::Any("Xx".into());
        assert!(query.resolve(&table).is_none());
        assert_eq!(
            query.not_found().to_string(),
            "no element found with number, symbol or name 'Xx'"
        );
    }

    #[test]
    fn run_lookup_reports_a_miss_as_not_found() {
        let table = PeriodicTable::new();
        let config = OutputConfig {
            format: crate::cli::OutputFormat::Text,
            chatty: false,
        };
        let err = run_lookup(&table, Query::Field(ElementField::Symbol, "Xx".into()), config)
            .unwrap_err();
        let miss = err.downcast_ref::<NotFound>().unwrap();
        assert_eq!(miss.kind, QueryKind::Field(ElementField::Symbol));
        assert_eq!(miss.value, "Xx");
    }
}
