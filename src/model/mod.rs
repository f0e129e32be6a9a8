//! Core data types describing the chemical elements.
//!
//! - [`element`] – The [`Element`](element::Element) record with its precomputed
//!   British / American name variants.
//! - [`types`] – The [`ElementField`](types::ElementField) selector naming which
//!   attribute a lookup is keyed on.

pub mod element;
pub mod types;
