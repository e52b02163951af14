//! Derived-view pipeline: sort, then language filter, then starred filter.
//!
//! Every stage is a pure function over shared records. Stages never mutate
//! their input and keep relative order unless sorting is requested.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use icu_collator::{Collator, CollatorOptions};

use crate::{Repository, StarredIds};

/// Name ordering applied by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Fetch order (star count descending, as returned by the search API).
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortMode {
    /// Advances the tri-state control: unsorted, ascending, descending, unsorted.
    pub fn next(self) -> Self {
        match self {
            SortMode::Unsorted => SortMode::Ascending,
            SortMode::Ascending => SortMode::Descending,
            SortMode::Descending => SortMode::Unsorted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    /// Only records that declare no language.
    NoLanguage,
    /// Exact, case-sensitive match on the language name.
    Language(String),
}

impl LanguageFilter {
    pub fn matches(&self, repo: &Repository) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::NoLanguage => repo.has_no_language(),
            LanguageFilter::Language(wanted) => repo.language.as_deref() == Some(wanted.as_str()),
        }
    }
}

thread_local! {
    /// Root-locale collator: tertiary strength, punctuation not ignorable.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware string comparison using Unicode collation.
///
/// Strings the collator considers equal fall back to code points so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.as_ref().map_or(Ordering::Equal, |c| c.compare(a, b)))
        .then_with(|| a.cmp(b))
}

pub fn sort_stage(records: &[Arc<Repository>], mode: SortMode) -> Vec<Arc<Repository>> {
    let mut out = records.to_vec();
    match mode {
        SortMode::Unsorted => {}
        SortMode::Ascending => out.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        SortMode::Descending => out.sort_by(|a, b| locale_compare(&b.name, &a.name)),
    }
    out
}

pub fn language_stage(records: &[Arc<Repository>], filter: &LanguageFilter) -> Vec<Arc<Repository>> {
    records
        .iter()
        .filter(|repo| filter.matches(repo))
        .cloned()
        .collect()
}

pub fn starred_stage(records: &[Arc<Repository>], starred_only: bool) -> Vec<Arc<Repository>> {
    records
        .iter()
        .filter(|repo| !starred_only || repo.starred)
        .cloned()
        .collect()
}

/// Runs the full pipeline over the raw collection.
pub fn derive_view(
    records: &[Arc<Repository>],
    sort: SortMode,
    filter: &LanguageFilter,
    starred_only: bool,
) -> Vec<Arc<Repository>> {
    let sorted = sort_stage(records, sort);
    let filtered = language_stage(&sorted, filter);
    starred_stage(&filtered, starred_only)
}

/// Distinct non-empty languages in order of first appearance.
pub fn language_facets(records: &[Arc<Repository>]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|lang| !lang.is_empty())
        .filter(|lang| seen.insert(*lang))
        .map(ToOwned::to_owned)
        .collect()
}

pub fn starred_ids(records: &[Arc<Repository>]) -> StarredIds {
    records
        .iter()
        .filter(|repo| repo.starred)
        .map(|repo| repo.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "alpha"), Ordering::Greater);
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_tie() {
        assert_eq!(locale_compare("rust", "Rust"), Ordering::Less);
        assert_eq!(locale_compare("Rust", "rust"), Ordering::Greater);
        assert_eq!(locale_compare("rust", "rust"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_orders_punctuation_digits_and_accents() {
        assert_eq!(locale_compare("a_b", "a-b"), Ordering::Less);
        assert_eq!(locale_compare("a.b", "a1"), Ordering::Less);
        assert_eq!(locale_compare("éclair", "rust"), Ordering::Less);
    }

    #[test]
    fn sort_mode_cycles_through_three_states() {
        let mode = SortMode::default();
        assert_eq!(mode.next(), SortMode::Ascending);
        assert_eq!(mode.next().next(), SortMode::Descending);
        assert_eq!(mode.next().next().next(), SortMode::Unsorted);
    }
}
