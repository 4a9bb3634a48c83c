//! Flattening of the group tree into a single entry sequence.

use crate::models::{Database, Entry, GroupId};

/// Collect every entry reachable from `roots`.
///
/// Each group emits its own entries before descending into its children,
/// and siblings are visited in order. The walk uses an explicit stack so
/// arbitrarily deep trees cannot overflow the call stack.
pub fn flatten<'a>(db: &'a Database, roots: &[GroupId]) -> Vec<&'a Entry> {
    let mut entries = Vec::new();
    let mut stack: Vec<GroupId> = roots.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let Some(group) = db.group(id) else {
            tracing::warn!("Skipping unknown group id {:?}", id);
            continue;
        };
        entries.extend(group.entries.iter());
        // Reversed so the first child is popped next.
        stack.extend(group.children.iter().rev().copied());
    }

    entries
}

/// Flatten the whole database starting from its top-level groups.
pub fn flatten_all(db: &Database) -> Vec<&Entry> {
    flatten(db, db.roots())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_parent_entries_before_children() {
        let mut db = Database::new();
        let root = db.add_root_group("Root");
        db.push_entry(root, Entry::new("root-1"));
        let web = db.add_group(root, "Web").unwrap();
        db.push_entry(web, Entry::new("web-1"));
        let social = db.add_group(web, "Social").unwrap();
        db.push_entry(social, Entry::new("social-1"));
        let mail = db.add_group(root, "Mail").unwrap();
        db.push_entry(mail, Entry::new("mail-1"));
        db.push_entry(root, Entry::new("root-2"));

        assert_eq!(
            titles(&flatten_all(&db)),
            vec!["root-1", "root-2", "web-1", "social-1", "mail-1"]
        );
    }

    #[test]
    fn test_multiple_roots_in_order() {
        let mut db = Database::new();
        let first = db.add_root_group("first");
        let second = db.add_root_group("second");
        db.push_entry(second, Entry::new("b"));
        db.push_entry(first, Entry::new("a"));

        assert_eq!(titles(&flatten_all(&db)), vec!["a", "b"]);
        assert_eq!(titles(&flatten(&db, &[second])), vec!["b"]);
    }

    #[test]
    fn test_empty_inputs() {
        let db = Database::new();
        assert!(flatten_all(&db).is_empty());

        let mut db = Database::new();
        let root = db.add_root_group("Root");
        db.add_group(root, "Empty").unwrap();
        assert!(flatten_all(&db).is_empty());
        assert!(flatten(&db, &[]).is_empty());
    }

    #[test]
    fn test_count_matches_every_group_regardless_of_depth() {
        let mut db = Database::new();
        let mut parent = db.add_root_group("Root");
        let mut expected = 0;
        for depth in 0..10_000 {
            if depth % 3 == 0 {
                db.push_entry(parent, Entry::new(format!("entry-{depth}")));
                expected += 1;
            }
            let sibling = db.add_group(parent, format!("side-{depth}")).unwrap();
            db.push_entry(sibling, Entry::new(format!("side-{depth}")));
            expected += 1;
            parent = db.add_group(parent, format!("level-{depth}")).unwrap();
        }

        assert_eq!(flatten_all(&db).len(), expected);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut db = Database::new();
        let root = db.add_root_group("Root");
        let child = db.add_group(root, "child").unwrap();
        db.push_entry(child, Entry::new("x"));
        db.push_entry(root, Entry::new("y"));

        assert_eq!(titles(&flatten_all(&db)), titles(&flatten_all(&db)));
    }
}
