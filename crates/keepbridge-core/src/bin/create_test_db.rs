//! Writes a small key-file protected database for trying out keepbridge.
//!
//! Usage: `create_test_db [DIR]`. Produces `sample.kdbx`, `sample.key` and a
//! JSON `config` pointing at both inside `DIR` (default: current directory).

use keepass::{config::DatabaseConfig, db::Node, db::Value, Database, DatabaseKey};
use keepbridge_core::StoreConfig;
use std::fs::File;
use std::path::PathBuf;

const KEY_MATERIAL: &[u8] = b"keepbridge sample key file\n";

fn entry(title: &str, username: &str, password: &str, url: &str) -> keepass::db::Entry {
    let mut entry = keepass::db::Entry::new();
    entry
        .fields
        .insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry
        .fields
        .insert("UserName".to_string(), Value::Unprotected(username.to_string()));
    entry.fields.insert(
        "Password".to_string(),
        Value::Protected(password.as_bytes().into()),
    );
    entry
        .fields
        .insert("URL".to_string(), Value::Unprotected(url.to_string()));
    entry
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let dir = dir.canonicalize()?;

    let mut db = Database::new(DatabaseConfig::default());
    db.meta.database_name = Some("Sample DB".to_string());

    db.root.children.push(Node::Entry(entry(
        "sample",
        "uuser",
        "esteban",
        "https://sample.example.com",
    )));

    let mut web = keepass::db::Group::new("Web");
    web.children.push(Node::Entry(entry(
        "GitHub",
        "octo",
        "hub-pass",
        "https://github.com/login",
    )));
    web.children.push(Node::Entry(entry("sample2", "second", "pw2", "")));

    let mut mail = keepass::db::Group::new("Mail");
    mail.children.push(Node::Entry(entry(
        "Sample item",
        "mailer",
        "pw3",
        "https://mail.example.com",
    )));
    web.children.push(Node::Group(mail));
    db.root.children.push(Node::Group(web));

    let key_path = dir.join("sample.key");
    std::fs::write(&key_path, KEY_MATERIAL)?;

    let key = DatabaseKey::new().with_keyfile(&mut File::open(&key_path)?)?;
    let db_path = dir.join("sample.kdbx");
    let mut file = File::create(&db_path)?;
    db.save(&mut file, key)?;

    let config = StoreConfig {
        database_path: db_path.clone(),
        key_path,
        password: None,
    };
    let config_path = dir.join("config");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!(
        "Created {} (config: {})",
        db_path.display(),
        config_path.display()
    );
    Ok(())
}
