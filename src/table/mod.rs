mod data;
mod error;

pub use error::Error;

use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, trace};

use crate::model::element::Element;
use crate::model::types::ElementField;

static SHARED: OnceLock<PeriodicTable> = OnceLock::new();

/// An immutable, ordered collection of elements with case-insensitive lookup.
///
/// All queries scan the elements in table order and return the first match,
/// so a name shared by two entries resolves to the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTable {
    elements: Vec<Element>,
}

impl PeriodicTable {
    /// Builds the table from the built-in dataset.
    pub fn new() -> Self {
        let elements: Vec<Element> = data::ELEMENTS
            .iter()
            .map(|r| {
                let element = Element::new(r.atomic, r.name, r.symbol, r.mass);
                match r.british {
                    Some(british) => element.with_british_name(british),
                    None => element,
                }
            })
            .collect();

        debug!("built periodic table with {} elements", elements.len());

        Self { elements }
    }

    /// Returns a process-wide instance of the built-in table.
    ///
    /// The table is built on first use and shared read-only afterwards.
    pub fn shared() -> &'static PeriodicTable {
        SHARED.get_or_init(PeriodicTable::new)
    }

    /// Builds a table from caller-supplied elements, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the list is empty, if an atomic number or
    /// symbol (ignoring case) appears twice, or if an element has an atomic
    /// number of 0, an empty name, a symbol that is not 1–3 characters, or a
    /// mass that is not a finite positive number. Repeated names are allowed.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, Error> {
        if elements.is_empty() {
            return Err(Error::Empty);
        }

        validate_table(&elements)?;

        debug!("built custom periodic table with {} elements", elements.len());

        Ok(Self { elements })
    }

    /// Case-insensitive British / American search for an element name.
    ///
    /// # Examples
    ///
    /// ```
    /// use periodic::PeriodicTable;
    ///
    /// let table = PeriodicTable::new();
    /// let al = table.search_by_name("Aluminium").unwrap();
    /// assert_eq!(al.symbol(), "Al");
    /// assert_eq!(al.name(), "Aluminum");
    /// ```
    pub fn search_by_name(&self, name: &str) -> Option<&Element> {
        let found = self.elements.iter().find(|e| e.is_named_as(name));
        if found.is_none() {
            trace!("no element named '{name}'");
        }
        found
    }

    /// Case-insensitive search for an element symbol.
    pub fn search_by_symbol(&self, symbol: &str) -> Option<&Element> {
        let found = self.elements.iter().find(|e| e.has_symbol(symbol));
        if found.is_none() {
            trace!("no element with symbol '{symbol}'");
        }
        found
    }

    /// Search by atomic number. Zero, negative and unknown numbers find nothing.
    pub fn search_by_atomic_number(&self, number: i64) -> Option<&Element> {
        let found = self
            .elements
            .iter()
            .find(|e| i64::from(e.atomic()) == number);
        if found.is_none() {
            trace!("no element with atomic number {number}");
        }
        found
    }

    /// Searches on the given field, parsing `value` as needed.
    ///
    /// An atomic-number value that is not an integer finds nothing.
    pub fn search(&self, field: ElementField, value: &str) -> Option<&Element> {
        match field {
            ElementField::Atomic => value
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|n| self.search_by_atomic_number(n)),
            ElementField::Name => self.search_by_name(value),
            ElementField::Symbol => self.search_by_symbol(value),
        }
    }

    /// Looks up a free-form query: an integer is an atomic number, anything
    /// else is tried as a symbol and then as a name.
    ///
    /// ```
    /// use periodic::PeriodicTable;
    ///
    /// let table = PeriodicTable::new();
    /// assert_eq!(table.find("26").unwrap().symbol(), "Fe");
    /// assert_eq!(table.find("fe").unwrap().atomic(), 26);
    /// assert_eq!(table.find(" iron ").unwrap().atomic(), 26);
    /// assert!(table.find("").is_none());
    /// ```
    pub fn find(&self, query: &str) -> Option<&Element> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Ok(number) = query.parse::<i64>() {
            return self.search_by_atomic_number(number);
        }
        self.search_by_symbol(query)
            .or_else(|| self.search_by_name(query))
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn validate_table(elements: &[Element]) -> Result<(), Error> {
    let mut by_atomic: HashMap<u8, &Element> = HashMap::with_capacity(elements.len());
    let mut by_symbol: HashMap<String, &Element> = HashMap::with_capacity(elements.len());

    for element in elements {
        validate_element(element)?;

        if let Some(first) = by_atomic.insert(element.atomic(), element) {
            return Err(Error::DuplicateAtomicNumber {
                atomic: element.atomic(),
                first: first.name().to_string(),
                second: element.name().to_string(),
            });
        }

        if let Some(first) = by_symbol.insert(element.symbol().to_lowercase(), element) {
            return Err(Error::DuplicateSymbol {
                symbol: element.symbol().to_string(),
                first: first.atomic(),
                second: element.atomic(),
            });
        }
    }

    Ok(())
}

fn validate_element(element: &Element) -> Result<(), Error> {
    if element.atomic() == 0 {
        return Err(Error::ZeroAtomicNumber {
            name: element.name().to_string(),
        });
    }
    if element.name().trim().is_empty() {
        return Err(Error::invalid_element(element.atomic(), "name is empty"));
    }
    let symbol_len = element.symbol().chars().count();
    if !(1..=3).contains(&symbol_len) {
        return Err(Error::invalid_element(
            element.atomic(),
            format!(
                "symbol '{}' must be 1 to 3 characters long",
                element.symbol()
            ),
        ));
    }
    if !element.mass().is_finite() || element.mass() <= 0.0 {
        return Err(Error::invalid_element(
            element.atomic(),
            format!("mass {} is not a positive number", element.mass()),
        ));
    }
    Ok(())
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
