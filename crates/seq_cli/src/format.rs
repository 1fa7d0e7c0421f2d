//! Plain-text rendering of prefixes and ranked results.

use num_bigint::BigInt;
use seq_ast::Evaluate;
use seq_search::SearchResult;

/// Space-separated values.
pub fn format_prefix(values: &[BigInt]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terms shown for a candidate: at least one beyond the matched prefix.
pub fn display_len(items: usize, matched: usize) -> usize {
    items.max(matched + 1)
}

/// Numbered candidate lines, each followed by its extended prefix.
pub fn format_results(results: &[SearchResult], limit: usize, items: usize) -> Vec<String> {
    if results.is_empty() {
        return vec!["no match within the configured bounds".to_string()];
    }

    let mut lines = Vec::new();
    for (rank, result) in results.iter().take(limit).enumerate() {
        lines.push(format!("{}. {}", rank + 1, result.expression));
        let len = display_len(items, result.matched);
        match result.expression.prefix(len) {
            Ok(values) => lines.push(format!("   {}", format_prefix(&values))),
            Err(e) => lines.push(format!("   ({})", e)),
        }
    }
    if results.len() > limit {
        lines.push(format!("... {} more", results.len() - limit));
    }
    lines
}
