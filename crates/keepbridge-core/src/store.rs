//! The credential store contract and its KeePass-backed implementation.

use crate::config::{self, StoreConfig, StoreDefinition};
use crate::database;
use crate::error::{Result, StoreError};
use crate::flatten::flatten_all;
use crate::matcher::{all_titles, match_substring};
use crate::models::{Database, Entry};
use crate::reference::ItemReference;
use crate::resolver::resolve_exact;
use std::io::{Cursor, Read};
use std::path::Path;

/// Label used in messages when a store has no definition name of its own.
pub const DEFAULT_STORE_NAME: &str = "keepass";

/// A password store.
///
/// Lookups that match nothing fail with [`StoreError::NotFound`] instead of
/// returning an empty result.
pub trait Store {
    /// Search for items matching `query`.
    fn search(&self, query: &str) -> Result<Vec<String>>;

    /// Sorted titles of items whose title or URL contains `query`.
    fn glob_search(&self, query: &str) -> Result<Vec<String>>;

    /// Open an item by name, optionally written as `store:name`.
    ///
    /// The returned reader yields `user:<username>\npass:<password>`.
    fn open(&self, item: &str) -> Result<Box<dyn Read + Send>>;
}

/// A store backed by a single decoded KeePass database.
#[derive(Debug)]
pub struct KeepassStore {
    name: String,
    database: Database,
    use_fuzzy: bool,
}

impl KeepassStore {
    /// Build a store from its definitions.
    ///
    /// With exactly one definition its path is the config file; otherwise
    /// `default_config` is used. The config is parsed, the key file and
    /// database are opened, and every protected field is decrypted before
    /// this returns.
    pub fn new(
        stores: &[StoreDefinition],
        use_fuzzy: bool,
        default_config: impl AsRef<Path>,
    ) -> Result<Self> {
        let config_path = config::resolve_config_path(stores, default_config.as_ref());
        let config = StoreConfig::load(&config_path)?;
        let database = database::open(&config)?;

        let name = match stores {
            [only] if !only.name.is_empty() => only.name.clone(),
            _ => DEFAULT_STORE_NAME.to_string(),
        };

        tracing::info!(
            "Store {} ready from {} (fuzzy search requested: {})",
            name,
            config_path.display(),
            use_fuzzy
        );

        Ok(Self {
            name,
            database,
            use_fuzzy,
        })
    }

    /// Wrap an already decoded database.
    pub fn from_database(name: impl Into<String>, database: Database) -> Self {
        Self {
            name: name.into(),
            database,
            use_fuzzy: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether fuzzy search was requested at construction.
    ///
    /// Matching is always substring based; the flag is only recorded.
    pub fn uses_fuzzy(&self) -> bool {
        self.use_fuzzy
    }

    /// Every entry title, sorted, duplicates kept.
    pub fn all_entries(&self) -> Vec<String> {
        all_titles(&flatten_all(&self.database))
    }

    fn find(&self, name: &str) -> Result<&Entry> {
        let entries = flatten_all(&self.database);
        resolve_exact(&entries, name).ok_or_else(|| StoreError::not_found(name, &self.name))
    }
}

impl Store for KeepassStore {
    fn search(&self, query: &str) -> Result<Vec<String>> {
        self.glob_search(query)
    }

    fn glob_search(&self, query: &str) -> Result<Vec<String>> {
        let entries = flatten_all(&self.database);
        let titles = match_substring(&entries, query);
        tracing::debug!(
            "Search for {:?} matched {} of {} entries",
            query,
            titles.len(),
            entries.len()
        );

        if titles.is_empty() {
            return Err(StoreError::not_found(query, &self.name));
        }
        Ok(titles)
    }

    fn open(&self, item: &str) -> Result<Box<dyn Read + Send>> {
        let reference = ItemReference::parse(item);
        if let Some(qualifier) = reference.store {
            tracing::debug!(
                "Ignoring store qualifier {:?} for {:?} in store {}",
                qualifier,
                reference.name,
                self.name
            );
        }

        let entry = self.find(reference.name)?;
        Ok(Box::new(Cursor::new(format_credentials(entry).into_bytes())))
    }
}

/// Render an entry as the two-line credential block.
pub fn format_credentials(entry: &Entry) -> String {
    format!("user:{}\npass:{}", entry.username, entry.password)
}
