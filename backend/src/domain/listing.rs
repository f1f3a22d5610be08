//! Filter fragments and their composition into one query predicate.
//!
//! Each source of filtering (free-text search, exact-match filters,
//! set-membership filters) contributes an independent [`FilterFragment`];
//! [`compose`] merges them into the single predicate handed to persistence.
//! Field names are opaque here; validating them is the repository's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Match rule attached to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCondition {
    /// Field must equal the value exactly.
    Equals(Value),
    /// Field must be one of the listed values.
    AnyOf(Vec<Value>),
    /// Field must contain the term (case-insensitive free-text search).
    Contains(String),
}

/// Partial query predicate: a mapping from field name to match condition.
///
/// Fragments are produced independently and merged with [`compose`]. The map
/// is ordered so composed predicates render deterministically in logs and
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterFragment(BTreeMap<String, FilterCondition>);

impl FilterFragment {
    /// The fragment that matches everything.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Fragment requiring `field` to equal `value`.
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.into(), FilterCondition::Equals(value.into()));
        Self(map)
    }

    /// Fragment requiring `field` to be one of `values`.
    #[must_use]
    pub fn any_of(field: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            field.into(),
            FilterCondition::AnyOf(values.into_iter().collect()),
        );
        Self(map)
    }

    /// Fragment matching `term` as free text across every listed field.
    #[must_use]
    pub fn search<'a>(fields: impl IntoIterator<Item = &'a str>, term: impl Into<String>) -> Self {
        let term = term.into();
        let map = fields
            .into_iter()
            .map(|field| (field.to_owned(), FilterCondition::Contains(term.clone())))
            .collect();
        Self(map)
    }

    /// Whether the fragment constrains any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of constrained fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Condition attached to `field`, when present.
    #[must_use]
    pub fn condition(&self, field: &str) -> Option<&FilterCondition> {
        self.0.get(field)
    }

    /// Iterate over the constrained fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterCondition)> {
        self.0.iter().map(|(field, cond)| (field.as_str(), cond))
    }

    fn merge_from(&mut self, other: Self) {
        for (field, condition) in other.0 {
            self.0.insert(field, condition);
        }
    }
}

/// Merge fragments left-to-right into a single predicate.
///
/// On key collision the later fragment wins, so callers list the weakest
/// source first (free-text search) and explicit filters after it. An empty
/// sequence yields the match-everything fragment.
///
/// # Examples
/// ```
/// use backend::domain::listing::{FilterFragment, compose};
///
/// let merged = compose([
///     FilterFragment::search(["name"], "ada"),
///     FilterFragment::equals("role", "DRIVER"),
/// ]);
/// assert_eq!(merged.len(), 2);
/// ```
#[must_use]
pub fn compose(fragments: impl IntoIterator<Item = FilterFragment>) -> FilterFragment {
    let mut merged = FilterFragment::empty();
    for fragment in fragments {
        merged.merge_from(fragment);
    }
    merged
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn composing_nothing_yields_the_empty_fragment() {
        let merged = compose([]);
        assert!(merged.is_empty());
        assert_eq!(merged, FilterFragment::empty());
    }

    #[rstest]
    fn composing_a_single_fragment_is_identity() {
        let fragment = FilterFragment::equals("role", "VEHICLE_OWNER");
        let merged = compose([fragment.clone()]);
        assert_eq!(merged, fragment);
    }

    #[rstest]
    fn later_fragments_win_on_key_collision() {
        let merged = compose([
            FilterFragment::search(["name", "email"], "ada"),
            FilterFragment::equals("email", "ada@example.com"),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.condition("email"),
            Some(&FilterCondition::Equals(json!("ada@example.com")))
        );
        assert_eq!(
            merged.condition("name"),
            Some(&FilterCondition::Contains("ada".to_owned()))
        );
    }

    #[rstest]
    fn search_spans_every_listed_field() {
        let fragment = FilterFragment::search(["name", "email", "mobileNumber"], "077");
        assert_eq!(fragment.len(), 3);
        for field in ["name", "email", "mobileNumber"] {
            assert_eq!(
                fragment.condition(field),
                Some(&FilterCondition::Contains("077".to_owned()))
            );
        }
    }

    #[rstest]
    fn any_of_keeps_value_order() {
        let fragment = FilterFragment::any_of("isActive", [json!(true), json!(false)]);
        assert_eq!(
            fragment.condition("isActive"),
            Some(&FilterCondition::AnyOf(vec![json!(true), json!(false)]))
        );
    }
}
