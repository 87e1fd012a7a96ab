//! # RecordGuard
//!
//! Record-level access control and save-time validation for sled-backed
//! record stores.
//!
//! ## Core Components
//!
//! * `config` - Store configuration and TOML persistence
//! * `db_operations` - Sled-backed record store
//! * `error` - Error types and handling
//! * `model` - Record and Allowed contracts for persisted types
//! * `permissions` - Credentials and the record type registry
//!
//! ## Architecture
//!
//! Two capability contracts meet in this crate. A [`model::Allowed`] record
//! type knows how to narrow a candidate set of its instances to what is live
//! and to what a given user may access, and validates itself before every
//! save. A [`permissions::Credentials`] value knows, for any such record
//! type, which instances the caller may see. Policy lives with the record
//! type; "who is asking" stays separate and pluggable.

pub mod config;
pub mod db_operations;
pub mod error;
pub mod model;
pub mod permissions;
pub mod testing_utils;

// Re-export main types for convenience
pub use config::StoreConfig;
pub use db_operations::RecordStore;
pub use error::{GuardError, GuardResult};
pub use model::{Allowed, Record, UserId};
pub use permissions::{Credentials, HasUserCredentials, RecordTypeRegistry, UserCredentials};
