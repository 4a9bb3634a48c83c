//! Exact-title lookup.

use crate::models::Entry;

/// Find the first entry whose title is exactly `name`.
///
/// Comparison is case-sensitive and untrimmed. When titles repeat, the
/// earliest entry in flatten order wins.
pub fn resolve_exact<'a>(entries: &[&'a Entry], name: &str) -> Option<&'a Entry> {
    entries.iter().copied().find(|entry| entry.title == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let entries = [
            Entry::new("sample2"),
            Entry::new("Sample"),
            Entry::new(" sample"),
            Entry::new("sample").with_username("uuser"),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();

        let found = resolve_exact(&refs, "sample").unwrap();
        assert_eq!(found.username, "uuser");
        assert!(resolve_exact(&refs, "samp").is_none());
        assert!(resolve_exact(&refs, "SAMPLE").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let entries = [
            Entry::new("dup").with_username("first"),
            Entry::new("dup").with_username("second"),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();
        assert_eq!(resolve_exact(&refs, "dup").unwrap().username, "first");
    }

    #[test]
    fn test_empty_sequence() {
        assert!(resolve_exact(&[], "anything").is_none());
    }
}
