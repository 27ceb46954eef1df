//! Cross-section deduplication and ordering.

use crate::core::{ExtractedString, ExtractionReport};
use std::collections::HashSet;

/// Deduplicate by `(section, value)` and sort by ascending address.
///
/// The first occurrence in input order wins, so when the same text appears
/// twice in one section the reported address is that of the occurrence
/// discovered first, not necessarily the lowest. The sort is stable: equal
/// addresses keep discovery order.
pub fn finalize(all: Vec<ExtractedString>) -> ExtractionReport {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(all.len());
    let mut strings: Vec<ExtractedString> = all
        .into_iter()
        .filter(|s| seen.insert((s.section.clone(), s.value.clone())))
        .collect();
    strings.sort_by_key(|s| s.address);
    ExtractionReport::new(strings)
}
