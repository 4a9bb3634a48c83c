//! KeePass database loading.
//!
//! Decoding and decryption are done by the `keepass` crate; this module
//! opens the files it needs and copies the decoded tree into a [`Database`].

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{Database, Entry, GroupId};
use keepass::DatabaseKey;
use std::fs::File;

/// Open, decode and unlock the database described by `config`.
pub fn open(config: &StoreConfig) -> Result<Database> {
    let key = database_key(config)?;

    let mut file = File::open(&config.database_path).map_err(|e| {
        StoreError::credential(&config.database_path, format!("failed to open database: {e}"))
    })?;

    let db = keepass::Database::open(&mut file, key).map_err(|e| {
        StoreError::credential(&config.database_path, format!("failed to decode database: {e}"))
    })?;

    let database = convert(&db);
    tracing::info!(
        "Opened database {} with {} groups",
        config.database_path.display(),
        database.group_count()
    );
    Ok(database)
}

fn database_key(config: &StoreConfig) -> Result<DatabaseKey> {
    let mut keyfile = File::open(&config.key_path).map_err(|e| {
        StoreError::credential(&config.key_path, format!("failed to open key file: {e}"))
    })?;

    let mut key = DatabaseKey::new().with_keyfile(&mut keyfile).map_err(|e| {
        StoreError::credential(&config.key_path, format!("failed to read key file: {e}"))
    })?;

    if let Some(password) = &config.password {
        key = key.with_password(password);
    }

    Ok(key)
}

/// Copy a decoded keepass tree into the arena model.
///
/// Protected values are already decrypted by `keepass` at open time, so the
/// copied entries hold plain text.
pub fn convert(db: &keepass::Database) -> Database {
    let mut database = Database::new();
    let root = database.add_root_group(db.root.name.clone());
    let mut pending: Vec<(&keepass::db::Group, GroupId)> = vec![(&db.root, root)];

    while let Some((kg, id)) = pending.pop() {
        for node in &kg.children {
            match node {
                keepass::db::Node::Entry(e) => {
                    if !database.push_entry(id, convert_entry(e)) {
                        tracing::warn!("Dropping entry for unknown group id {:?}", id);
                    }
                }
                keepass::db::Node::Group(g) => match database.add_group(id, g.name.clone()) {
                    Some(child) => pending.push((g, child)),
                    None => tracing::warn!("Dropping group {} under unknown id {:?}", g.name, id),
                },
            }
        }
    }

    database
}

fn convert_entry(ke: &keepass::db::Entry) -> Entry {
    Entry {
        uuid: ke.uuid.to_string(),
        title: ke.get_title().unwrap_or_default().to_string(),
        username: ke.get_username().unwrap_or_default().to_string(),
        password: ke.get_password().unwrap_or_default().to_string(),
        url: ke.get_url().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten_all;
    use keepass::db::{Node, Value};
    use std::path::PathBuf;

    fn keepass_entry(title: &str, password: &str) -> keepass::db::Entry {
        let mut entry = keepass::db::Entry::new();
        entry
            .fields
            .insert("Title".to_string(), Value::Unprotected(title.to_string()));
        entry.fields.insert(
            "Password".to_string(),
            Value::Protected(password.as_bytes().into()),
        );
        entry
    }

    #[test]
    fn test_convert_preserves_structure() {
        let mut db = keepass::Database::new(Default::default());
        db.root.children.push(Node::Entry(keepass_entry("top", "p0")));

        let mut web = keepass::db::Group::new("Web");
        web.children.push(Node::Entry(keepass_entry("web", "p1")));
        let mut nested = keepass::db::Group::new("Nested");
        nested.children.push(Node::Entry(keepass_entry("deep", "p2")));
        web.children.push(Node::Group(nested));
        db.root.children.push(Node::Group(web));

        let converted = convert(&db);
        assert_eq!(converted.group_count(), 3);

        let titles: Vec<&str> = flatten_all(&converted)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["top", "web", "deep"]);

        let deep = flatten_all(&converted)[2].clone();
        assert_eq!(deep.password, "p2");
        assert_eq!(deep.username, "");
    }

    #[test]
    fn test_open_missing_key_file() {
        let config = StoreConfig {
            database_path: PathBuf::from("/nonexistent/keepbridge.kdbx"),
            key_path: PathBuf::from("/nonexistent/keepbridge.key"),
            password: None,
        };

        let err = open(&config).unwrap_err();
        match err {
            StoreError::Credential { path, .. } => assert_eq!(path, config.key_path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
