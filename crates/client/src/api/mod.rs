//! Resource API wrappers.
//!
//! Each function issues exactly one call with a fixed path template. Payloads
//! and responses are opaque JSON: nothing is validated, transformed, or
//! retried here, and errors come back exactly as the client reported them.

pub mod after_sales;
pub mod auth;
pub mod contracts;
pub mod mall;
pub mod modules;
pub mod receivables;
