//! A periodic table of the chemical elements with case-insensitive lookup by
//! atomic number, symbol, or name, accepting both British and American
//! spellings ("Aluminium" / "Aluminum", "Sulphur" / "Sulfur").
//!
//! # Quick Start
//!
//! ```
//! use periodic::PeriodicTable;
//!
//! let table = PeriodicTable::new();
//!
//! let hydrogen = table.search_by_atomic_number(1).unwrap();
//! assert_eq!(hydrogen.name(), "Hydrogen");
//! assert_eq!(hydrogen.symbol(), "H");
//!
//! // Symbols and names are matched without regard to case
//! let iron = table.search_by_symbol("fe").unwrap();
//! assert_eq!(iron.name(), "Iron");
//!
//! // Either spelling finds the element; the American one is canonical
//! let sulfur = table.search_by_name("SULPHUR").unwrap();
//! assert_eq!(sulfur.name(), "Sulfur");
//! assert!(sulfur.is_named_as("sulfur"));
//!
//! // A miss is simply `None`
//! assert!(table.search_by_atomic_number(117).is_none());
//! assert!(table.search_by_symbol("Xx").is_none());
//! ```
//!
//! # Data Types
//!
//! - [`PeriodicTable`] — Immutable, ordered element collection with lookups
//! - [`Element`] — One element: atomic number, names, symbol, mass
//! - [`ElementField`] — Which attribute a [`PeriodicTable::search`] is keyed on
//! - [`TableError`] — Invariant violations reported by [`PeriodicTable::from_elements`]

mod model;
mod table;

pub use model::element::Element;
pub use model::types::{ElementField, ParseElementFieldError};

pub use table::Error as TableError;
pub use table::PeriodicTable;
