//! Search Filter - free-text narrowing of grouped occurrences.

use crate::domain::obligation::Obligation;

use super::GroupedOccurrences;

/// Case-insensitive substring filter over obligation name and notes.
pub struct SearchFilter;

impl SearchFilter {
    /// Keeps occurrences whose obligation text contains `query`.
    ///
    /// The matched text is `name + " " + notes`, compared lowercased. Dates
    /// left without occurrences are dropped. An empty query returns the input
    /// unchanged. The input map is never mutated.
    pub fn filter<'a>(grouped: &GroupedOccurrences<'a>, query: &str) -> GroupedOccurrences<'a> {
        if query.is_empty() {
            return grouped.clone();
        }

        let needle = query.to_lowercase();
        grouped
            .iter()
            .filter_map(|(date, occurrences)| {
                let kept: Vec<_> = occurrences
                    .iter()
                    .filter(|o| Self::matches(o.obligation, &needle))
                    .copied()
                    .collect();
                (!kept.is_empty()).then_some((*date, kept))
            })
            .collect()
    }

    /// `needle` must already be lowercased.
    pub fn matches(obligation: &Obligation, needle: &str) -> bool {
        obligation.search_text().to_lowercase().contains(needle)
    }
}
