//! # lumen-store
//!
//! Durable local storage for the Lumen client, backed by SQLite.
//!
//! The store is a single string-keyed, string-valued table — the moral
//! equivalent of a browser's local storage. Higher-level accessors
//! serialize whole records (current profile, registered accounts, chat
//! transcript) to JSON and round-trip them through that table. The crate
//! exposes a synchronous `Database` handle that wraps a
//! `rusqlite::Connection`.

pub mod accounts;
pub mod database;
pub mod kv;
pub mod migrations;
pub mod models;
pub mod transcript;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
