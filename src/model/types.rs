use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid element field: '{0}'")]
pub struct ParseElementFieldError(String);

/// The element attribute a lookup is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementField {
    Atomic,
    Name,
    Symbol,
}

impl ElementField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementField::Atomic => "atomic",
            ElementField::Name => "name",
            ElementField::Symbol => "symbol",
        }
    }
}

impl fmt::Display for ElementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementField {
    type Err = ParseElementFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" | "number" | "z" => Ok(ElementField::Atomic),
            "name" => Ok(ElementField::Name),
            "symbol" | "sym" => Ok(ElementField::Symbol),
            _ => Err(ParseElementFieldError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_field_from_str_variants() {
        assert_eq!(ElementField::from_str("atomic").unwrap(), ElementField::Atomic);
        assert_eq!(ElementField::from_str("Number").unwrap(), ElementField::Atomic);
        assert_eq!(ElementField::from_str("Z").unwrap(), ElementField::Atomic);
        assert_eq!(ElementField::from_str("NAME").unwrap(), ElementField::Name);
        assert_eq!(ElementField::from_str("symbol").unwrap(), ElementField::Symbol);
        assert_eq!(ElementField::from_str("sym").unwrap(), ElementField::Symbol);
    }

    #[test]
    fn element_field_from_str_invalid() {
        let err = ElementField::from_str("mass").unwrap_err();
        let s = format!("{}", err);
        assert_eq!(s, "invalid element field: 'mass'");
    }

    #[test]
    fn element_field_display_round_trips() {
        for field in [ElementField::Atomic, ElementField::Name, ElementField::Symbol] {
            assert_eq!(ElementField::from_str(&field.to_string()).unwrap(), field);
        }
    }
}
