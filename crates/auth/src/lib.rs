//! `rootmanage-auth`: the client-side session.
//!
//! The session (token, user profile, granted modules) lives in an explicit
//! `AuthStore` context object mirrored to persisted storage. This crate is
//! decoupled from routing: the router only sees the `SessionView` seam.

pub mod error;
pub mod role;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use role::Role;
pub use session::{LoginResponse, ModuleGrant, ModuleNode, Session, SessionUser};
pub use store::{AuthStore, SessionView};
