//! Case-insensitive substring matching over entry titles and URLs.

use crate::models::Entry;

/// Return the sorted titles of entries whose title or URL contains `query`.
///
/// Both fields are compared in lowercase. Titles shared by several entries
/// appear once per entry. An empty query matches everything.
pub fn match_substring(entries: &[&Entry], query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();

    let mut titles: Vec<String> = entries
        .iter()
        .filter(|entry| matches(entry, &query_lower))
        .map(|entry| entry.title.clone())
        .collect();

    titles.sort();
    titles
}

fn matches(entry: &Entry, query_lower: &str) -> bool {
    entry.title.to_lowercase().contains(query_lower)
        || entry.url.to_lowercase().contains(query_lower)
}

/// Every title, sorted, duplicates kept.
pub fn all_titles(entries: &[&Entry]) -> Vec<String> {
    let mut titles: Vec<String> = entries.iter().map(|entry| entry.title.clone()).collect();
    titles.sort();
    titles
}
