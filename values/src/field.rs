//! Compile-time checked field identifiers.

use std::fmt;

/// Name of a single field within a schema.
///
/// Wraps a `'static` string literal and validates non-emptiness at compile
/// time via `const` assertion, so a [`FieldName`] in hand is always a usable
/// key. Ordering and equality are those of the underlying name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        assert!(!name.is_empty(), "FieldName must not be empty");
        Self(name)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_is_usable_in_const_context() {
        const MAGNITUDE: FieldName = FieldName::new("magnitude");
        assert_eq!(MAGNITUDE.as_str(), "magnitude");
    }

    #[test]
    fn field_name_orders_by_name() {
        let a = FieldName::new("alpha");
        let b = FieldName::new("beta");
        assert!(a < b);
        assert_eq!(a, FieldName::new("alpha"));
    }

    #[test]
    fn field_name_displays_as_bare_name() {
        assert_eq!(FieldName::new("unit").to_string(), "unit");
    }
}
