//! Error types for building custom periodic tables.
//!
//! Lookups never fail; these errors are only produced by
//! [`PeriodicTable::from_elements`](super::PeriodicTable::from_elements) when
//! the supplied elements break the table invariants.

use thiserror::Error;

/// Errors that can occur while validating a set of elements as a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The table contains no elements.
    #[error("periodic table is empty: at least one element is required")]
    Empty,

    /// Atomic numbers start at 1.
    #[error("element '{name}' has atomic number 0")]
    ZeroAtomicNumber {
        /// Name of the offending element.
        name: String,
    },

    /// Two elements share an atomic number.
    #[error("atomic number {atomic} is used by both '{first}' and '{second}'")]
    DuplicateAtomicNumber {
        /// The repeated atomic number.
        atomic: u8,
        /// Name of the earlier element.
        first: String,
        /// Name of the later element.
        second: String,
    },

    /// Two elements share a symbol (compared case-insensitively).
    #[error("symbol '{symbol}' is used by both Z={first} and Z={second}")]
    DuplicateSymbol {
        /// The repeated symbol, as spelled by the later element.
        symbol: String,
        /// Atomic number of the earlier element.
        first: u8,
        /// Atomic number of the later element.
        second: u8,
    },

    /// A field of one element is out of range.
    #[error("invalid element Z={atomic}: {detail}")]
    InvalidElement {
        /// Atomic number of the offending element.
        atomic: u8,
        /// Description of the problem.
        detail: String,
    },
}

impl Error {
    /// Creates an [`InvalidElement`](Error::InvalidElement) error.
    pub fn invalid_element(atomic: u8, detail: impl Into<String>) -> Self {
        Self::InvalidElement {
            atomic,
            detail: detail.into(),
        }
    }
}
