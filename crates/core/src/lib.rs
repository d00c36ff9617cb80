//! `rootmanage-core`: shared building blocks for the client layer.
//!
//! This crate holds identifiers, the common error model, and the persisted
//! key/value storage the session store writes through to.

pub mod error;
pub mod id;
pub mod storage;

pub use error::DomainError;
pub use id::{ModuleId, RoleId, UserId};
pub use storage::{keys, FileStorage, InMemoryStorage, KeyValueStorage, StorageError};
