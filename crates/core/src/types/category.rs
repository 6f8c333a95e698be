//! The active category filter for product listings.

/// The currently active category filter.
///
/// `All` is the sentinel meaning "no filter". The selection only affects
/// product-list queries, never cart contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// Build a selection from a category control label.
    ///
    /// The literal label `"all"` (case-insensitive) maps to the sentinel.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// The category to scope product queries to, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(label) => Some(label),
        }
    }

    /// Whether a category control with `label` should be marked active.
    ///
    /// `None` stands for the "All" control. Exactly one control matches any
    /// given selection.
    #[must_use]
    pub fn is_active(&self, label: Option<&str>) -> bool {
        match (self, label) {
            (Self::All, None) => true,
            (Self::Only(selected), Some(label)) => selected == label,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_clears_filter() {
        assert_eq!(CategorySelection::from_label("all"), CategorySelection::All);
        assert_eq!(CategorySelection::from_label("All"), CategorySelection::All);
        assert_eq!(CategorySelection::All.filter(), None);
    }

    #[test]
    fn test_category_label_scopes_filter() {
        let sel = CategorySelection::from_label("electronics");
        assert_eq!(sel.filter(), Some("electronics"));
    }

    #[test]
    fn test_exactly_one_control_active() {
        let labels = ["electronics", "jewelery", "men's clothing"];
        let sel = CategorySelection::from_label("jewelery");

        let active: Vec<_> = std::iter::once(None)
            .chain(labels.iter().map(|l| Some(*l)))
            .filter(|l| sel.is_active(*l))
            .collect();
        assert_eq!(active, vec![Some("jewelery")]);

        let active: Vec<_> = std::iter::once(None)
            .chain(labels.iter().map(|l| Some(*l)))
            .filter(|l| CategorySelection::All.is_active(*l))
            .collect();
        assert_eq!(active, vec![None]);
    }
}
