//! Shared data types for decoded databases.
//!
//! Groups live in a flat arena owned by [`Database`] and refer to their
//! children by [`GroupId`], so walking the tree never needs recursion.

use std::fmt;

/// Index of a group inside its [`Database`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// Represents a password entry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub uuid: String,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
}

impl Entry {
    /// Create an entry with the given title and no credentials.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("uuid", &self.uuid)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

/// Represents a group (folder) in the database tree.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub entries: Vec<Entry>,
    pub children: Vec<GroupId>,
}

/// A decoded, unlocked database.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Database {
    groups: Vec<Group>,
    roots: Vec<GroupId>,
}

impl Database {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level group and return its id.
    pub fn add_root_group(&mut self, name: impl Into<String>) -> GroupId {
        let id = self.alloc(name.into());
        self.roots.push(id);
        id
    }

    /// Add a group nested under `parent` and return its id.
    ///
    /// Returns `None` if `parent` does not belong to this database.
    pub fn add_group(&mut self, parent: GroupId, name: impl Into<String>) -> Option<GroupId> {
        if parent.0 >= self.groups.len() {
            return None;
        }
        let id = self.alloc(name.into());
        self.groups.get_mut(parent.0)?.children.push(id);
        Some(id)
    }

    /// Append an entry to a group.
    ///
    /// Returns false, leaving the database unchanged, if `group` does not
    /// belong to this database.
    pub fn push_entry(&mut self, group: GroupId, entry: Entry) -> bool {
        match self.groups.get_mut(group.0) {
            Some(g) => {
                g.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Top-level groups in insertion order.
    pub fn roots(&self) -> &[GroupId] {
        &self.roots
    }

    /// Look up a group by id.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.0)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn alloc(&mut self, name: String) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(Group {
            name,
            ..Group::default()
        });
        id
    }
}
