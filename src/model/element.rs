use std::fmt;

use serde::Serialize;

/// A single chemical element: one row of the periodic table.
///
/// The lowercase spellings used for name matching are computed once when the
/// element is built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    atomic: u8,
    name: String,
    symbol: String,
    mass: f64,
    british_name: String,
    #[serde(skip)]
    name_variants: Vec<String>,
}

impl Element {
    /// Creates an element whose British spelling is the same as its name.
    pub fn new(
        atomic: u8,
        name: impl Into<String>,
        symbol: impl Into<String>,
        mass: f64,
    ) -> Self {
        let name = name.into();
        let british_name = name.clone();
        let name_variants = name_variants(&name, &british_name);

        Self {
            atomic,
            name,
            symbol: symbol.into(),
            mass,
            british_name,
            name_variants,
        }
    }

    /// Sets the British spelling of the name (e.g. "Sulphur" for "Sulfur").
    ///
    /// An empty string keeps the American name as the British one.
    pub fn with_british_name(mut self, british_name: impl Into<String>) -> Self {
        let british_name = british_name.into();
        if !british_name.is_empty() {
            self.british_name = british_name;
        }
        self.name_variants = name_variants(&self.name, &self.british_name);
        self
    }

    #[inline]
    pub fn atomic(&self) -> u8 {
        self.atomic
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn british_name(&self) -> &str {
        &self.british_name
    }

    /// Returns `true` if the element has a British spelling distinct from its name.
    pub fn has_british_variant(&self) -> bool {
        self.name_variants.len() > 1
    }

    /// Case-insensitive British / American match against the element name.
    ///
    /// # Examples
    ///
    /// ```
    /// use periodic::Element;
    ///
    /// let sulfur = Element::new(16, "Sulfur", "S", 32.065).with_british_name("Sulphur");
    /// assert!(sulfur.is_named_as("SULFUR"));
    /// assert!(sulfur.is_named_as("sulphur"));
    /// assert!(!sulfur.is_named_as(""));
    /// ```
    pub fn is_named_as(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.name_variants.iter().any(|v| *v == candidate)
    }

    /// Case-insensitive match against the element symbol.
    ///
    /// Case is folded the same way as for names, so symbols outside ASCII
    /// match too.
    pub fn has_symbol(&self, candidate: &str) -> bool {
        self.symbol
            .chars()
            .flat_map(char::to_lowercase)
            .eq(candidate.chars().flat_map(char::to_lowercase))
    }
}

fn name_variants(name: &str, british_name: &str) -> Vec<String> {
    let american = name.to_lowercase();
    let british = british_name.to_lowercase();
    if british == american {
        vec![american]
    } else {
        vec![american, british]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Z={}, {} u",
            self.name, self.symbol, self.atomic, self.mass
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn sulfur() -> Element {
        Element::new(16, "Sulfur", "S", 32.065).with_british_name("Sulphur")
    }

    #[test]
    fn new_defaults_british_name_to_name() {
        let iron = Element::new(26, "Iron", "Fe", 55.845);
        assert_eq!(iron.british_name(), "Iron");
        assert!(!iron.has_british_variant());
        assert_eq!(iron.atomic(), 26);
        assert_eq!(iron.symbol(), "Fe");
        assert!(approx_eq(iron.mass(), 55.845, 1e-12));
    }

    #[test]
    fn empty_british_name_keeps_american_spelling() {
        let iron = Element::new(26, "Iron", "Fe", 55.845).with_british_name("");
        assert_eq!(iron.british_name(), "Iron");
        assert!(!iron.has_british_variant());
    }

    #[test]
    fn british_name_matching_ignores_case() {
        let s = sulfur();
        assert!(s.has_british_variant());
        for candidate in ["sulfur", "Sulfur", "SULFUR", "Sulphur", "sulphur"] {
            assert!(s.is_named_as(candidate), "{candidate} should match");
        }
    }

    #[test]
    fn non_matching_names_are_rejected() {
        let s = sulfur();
        assert!(!s.is_named_as(""));
        assert!(!s.is_named_as("Sulfu"));
        assert!(!s.is_named_as(" sulfur"));
        assert!(!s.is_named_as("S"));
    }

    #[test]
    fn same_spelling_with_different_case_is_not_a_variant() {
        let al = Element::new(13, "Aluminum", "Al", 26.9815386).with_british_name("ALUMINUM");
        assert!(!al.has_british_variant());
        assert!(al.is_named_as("aluminum"));
    }

    #[test]
    fn symbol_matching_ignores_case() {
        let iron = Element::new(26, "Iron", "Fe", 55.845);
        assert!(iron.has_symbol("Fe"));
        assert!(iron.has_symbol("fe"));
        assert!(iron.has_symbol("FE"));
        assert!(!iron.has_symbol("F"));
        assert!(!iron.has_symbol(""));
    }

    #[test]
    fn symbol_matching_folds_non_ascii_case() {
        let omega = Element::new(1, "Omegium", "Ωm", 1.0);
        assert!(omega.has_symbol("ωm"));
        assert!(omega.has_symbol("ΩM"));
        assert!(!omega.has_symbol("om"));
    }

    #[test]
    fn display_format() {
        let h = Element::new(1, "Hydrogen", "H", 1.00794);
        assert_eq!(h.to_string(), "Hydrogen (H), Z=1, 1.00794 u");
    }

    #[test]
    fn serializes_record_shape_without_derived_variants() {
        let value = serde_json::to_value(sulfur()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "atomic": 16,
                "name": "Sulfur",
                "symbol": "S",
                "mass": 32.065,
                "britishName": "Sulphur",
            })
        );
    }
}
