//! `[Source N]` citation extraction and validation

use regex::Regex;

/// Extract 1-based citation indices from an answer, in order of first
/// appearance, without duplicates.
pub fn extract_citation_indices(answer: &str) -> Vec<usize> {
    let pattern = Regex::new(r"\[Source\s+(\d+)\]").expect("valid citation regex");

    let mut indices = Vec::new();
    for cap in pattern.captures_iter(answer) {
        if let Some(index) = cap.get(1).and_then(|m| m.as_str().parse::<usize>().ok()) {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    indices
}

/// Return the citation indices that do not reference a real source,
/// given `source_count` sources numbered `1..=source_count`.
pub fn out_of_range_citations(answer: &str, source_count: usize) -> Vec<usize> {
    extract_citation_indices(answer)
        .into_iter()
        .filter(|&i| i == 0 || i > source_count)
        .collect()
}
