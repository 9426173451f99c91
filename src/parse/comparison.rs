/// How member names are compared when parsing.
///
/// A `bool` converts into a `Comparison`, with `true` meaning "ignore case".
///
/// There is no locale database: the culture-aware modes compare with full Unicode lowercase
/// folding when ignoring case, and by exact equality otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Exact, case-sensitive comparison.
    Ordinal,
    /// Per-character comparison of simple uppercase mappings.
    OrdinalIgnoreCase,
    CurrentCulture,
    CurrentCultureIgnoreCase,
    InvariantCulture,
    InvariantCultureIgnoreCase,
}

impl Default for Comparison {
    fn default() -> Self {
        Self::Ordinal
    }
}

impl From<bool> for Comparison {
    fn from(ignore_case: bool) -> Self {
        if ignore_case {
            Self::OrdinalIgnoreCase
        } else {
            Self::Ordinal
        }
    }
}

impl Comparison {
    pub fn ignores_case(self) -> bool {
        matches!(
            self,
            Self::OrdinalIgnoreCase
                | Self::CurrentCultureIgnoreCase
                | Self::InvariantCultureIgnoreCase
        )
    }

    /// Whether `a` and `b` are equal under this comparison.
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal | Self::CurrentCulture | Self::InvariantCulture => a == b,
            Self::OrdinalIgnoreCase => a
                .chars()
                .map(simple_uppercase)
                .eq(b.chars().map(simple_uppercase)),
            Self::CurrentCultureIgnoreCase | Self::InvariantCultureIgnoreCase => {
                a.to_lowercase() == b.to_lowercase()
            }
        }
    }
}

// Characters whose uppercase form expands to several characters (e.g. `ß`) map to themselves.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(Comparison::from(true), Comparison::OrdinalIgnoreCase);
        assert_eq!(Comparison::from(false), Comparison::Ordinal);
        assert_eq!(Comparison::default(), Comparison::Ordinal);
    }

    #[test]
    fn case_sensitive_modes() {
        for mode in [
            Comparison::Ordinal,
            Comparison::CurrentCulture,
            Comparison::InvariantCulture,
        ]
        .iter()
        {
            assert!(!mode.ignores_case());
            assert!(mode.matches("Shipped", "Shipped"));
            assert!(!mode.matches("Shipped", "shipped"));
        }
    }

    #[test]
    fn case_insensitive_modes() {
        for mode in [
            Comparison::OrdinalIgnoreCase,
            Comparison::CurrentCultureIgnoreCase,
            Comparison::InvariantCultureIgnoreCase,
        ]
        .iter()
        {
            assert!(mode.ignores_case());
            assert!(mode.matches("Shipped", "SHIPPED"));
            assert!(mode.matches("Ärger", "äRGER"));
            assert!(!mode.matches("Shipped", "Shipping"));
        }
    }

    #[test]
    fn ordinal_ignore_case_uses_simple_mappings() {
        assert!(Comparison::OrdinalIgnoreCase.matches("straße", "STRAßE"));
        assert!(!Comparison::OrdinalIgnoreCase.matches("straße", "STRASSE"));
    }
}
