//! Name resolution: maps human-supplied name fragments to resources.

use crate::api::types::{Project, Section};

/// Anything that can be looked up by display name.
pub trait Named {
    /// The display name used for lookup.
    fn name(&self) -> &str;
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Section {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Returns the first item whose name contains `fragment`, compared
/// case-insensitively.
///
/// Listing order decides ties: when several names match, the earliest
/// entry wins and later matches are never inspected. Ambiguity is not
/// detected, by contract.
pub fn first_match<T: Named>(items: Vec<T>, fragment: &str) -> Option<T> {
    let needle = fragment.to_lowercase();
    items.into_iter().find(|item| item.name().to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str);

    impl Named for Entry {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn returns_first_match_in_listing_order() {
        let items = vec![Entry("Work"), Entry("Personal"), Entry("Work Projects")];
        let found = first_match(items, "work").unwrap();
        assert_eq!(found.0, "Work");
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let items = vec![Entry("Groceries"), Entry("Side Hustle")];
        let found = first_match(items, "HUSTLE").unwrap();
        assert_eq!(found.0, "Side Hustle");
    }

    #[test]
    fn reports_no_match_as_none() {
        let items = vec![Entry("Work"), Entry("Personal")];
        assert!(first_match(items, "errands").is_none());
    }

    #[test]
    fn empty_fragment_matches_the_first_entry() {
        let items = vec![Entry("Alpha"), Entry("Beta")];
        assert_eq!(first_match(items, "").unwrap().0, "Alpha");
    }
}
