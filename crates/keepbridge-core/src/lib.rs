//! Core credential store and entry search for keepbridge.
//!
//! This crate turns a decoded KeePass database into a small queryable
//! [`Store`]: substring search over entry titles and URLs, and exact-title
//! lookup that yields a `user:`/`pass:` credential block.

pub mod config;
pub mod database;
pub mod error;
pub mod flatten;
pub mod matcher;
pub mod models;
pub mod reference;
pub mod resolver;
pub mod store;

pub use config::{StoreConfig, StoreDefinition};
pub use error::{Result, StoreError};
pub use models::{Database, Entry, Group, GroupId};
pub use reference::ItemReference;
pub use store::{KeepassStore, Store};
