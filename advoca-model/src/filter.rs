//! Filter dimensions with an "All" sentinel.

/// A label enum that can describe itself for filter chips and badges.
pub trait Labeled {
    /// Human-readable label shown in the UI.
    fn label(&self) -> &'static str;
}

/// One filter dimension over a content sequence.
///
/// `All` is the sentinel meaning "no restriction". Multiple dimensions
/// compose with logical AND, never OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter<T> {
    /// No restriction; every item matches.
    #[default]
    All,
    /// Only items carrying exactly this label match.
    Only(T),
}

impl<T: Copy + PartialEq> Filter<T> {
    /// Whether an item with the given (optional) label passes this dimension.
    ///
    /// An unlabeled item passes only the `All` sentinel.
    pub fn matches(self, label: Option<T>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => label == Some(wanted),
        }
    }

    /// Whether this dimension is the unrestricted sentinel.
    pub fn is_all(self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: Labeled> Filter<T> {
    /// Label for a filter chip: the sentinel renders as "All".
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(value) => value.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Blue,
    }

    #[test]
    fn all_matches_every_label() {
        assert!(Filter::All.matches(Some(Color::Red)));
        assert!(Filter::All.matches(Some(Color::Blue)));
        assert!(Filter::<Color>::All.matches(None));
    }

    #[test]
    fn only_matches_exact_label() {
        let filter = Filter::Only(Color::Red);
        assert!(filter.matches(Some(Color::Red)));
        assert!(!filter.matches(Some(Color::Blue)));
        assert!(!filter.matches(None));
    }
}
