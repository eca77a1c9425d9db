//! Merging author identities and filtering noise.
//!
//! git reports the same person under slightly different names over time
//! (`Jane Doe`, `jane doe`, `Jane Doe (work)`). Names are folded to their
//! first two space-separated tokens, lower-cased, and counters sharing a
//! folded name are summed. Two different people with the same first and
//! last name end up merged; that is accepted.

use crate::collector::{ChurnRecord, ContributorRecords};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// History-mode counters keyed by normalized name, in first-seen order.
pub type NormalizedSummary = IndexMap<String, ChurnRecord>;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-+(?:\s*-+)*\s*$").expect("placeholder regex is valid"));

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:png|jpg|jpeg|gif|svg|bmp)$").expect("image regex is valid")
});

/// Folds an author name to its normalized identity.
///
/// ```
/// use gitcontrib_core::aggregate::normalize_name;
///
/// assert_eq!(normalize_name("Jane Doe <jane@example.com>"), "jane doe");
/// assert_eq!(normalize_name("Dependabot"), "dependabot");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut tokens = name.split(' ');
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => format!("{} {}", first, second).to_lowercase(),
        _ => name.to_lowercase(),
    }
}

/// Whether a contributor name is noise that should not appear in the report.
///
/// Matches separator placeholders (`--`, `- -`), image file names, paths and
/// rename syntax (`{old => new}`) that leak into the author field when diff
/// output is misread.
#[must_use]
pub fn is_hidden_contributor(name: &str) -> bool {
    PLACEHOLDER_RE.is_match(name)
        || IMAGE_RE.is_match(name)
        || name.contains('/')
        || name.contains('\\')
        || name.contains('{')
        || name.contains("=>")
}

/// Sums raw per-author records into per-identity buckets.
///
/// Buckets appear in the order their first contributing author was seen.
pub fn summarize(records: &ContributorRecords) -> NormalizedSummary {
    let mut summary = NormalizedSummary::new();
    for (author, record) in records {
        summary
            .entry(normalize_name(author))
            .or_default()
            .absorb(*record);
    }
    tracing::debug!(
        raw = records.len(),
        normalized = summary.len(),
        "Merged author identities"
    );
    summary
}

/// Iterates the entries of a map that are not hidden, preserving order.
pub fn visible<'a, V>(
    map: &'a IndexMap<String, V>,
) -> impl Iterator<Item = (&'a String, &'a V)> + 'a {
    map.iter().filter(|(name, _)| !is_hidden_contributor(name))
}
