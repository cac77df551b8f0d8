//! Fuzzy "did you mean" suggestions for mistyped names.

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a candidate to be suggested.
const MIN_SIMILARITY: f64 = 0.8;

/// Return up to `limit` candidates most similar to `query`, best first.
///
/// Comparison is case-insensitive. Candidates below [`MIN_SIMILARITY`] are
/// dropped, so a completely unrelated query yields no suggestions.
pub(crate) fn similar_names<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|name| (jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
