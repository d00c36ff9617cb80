//! `rootmanage-client`: HTTP client contract and resource API wrappers.
//!
//! - `http`: the `HttpClient` trait every wrapper forwards to
//! - `transport`: the reqwest-backed implementation used by the shell
//! - `recording`: an in-memory client for tests/dev
//! - `api`: one module per business entity, each function a single forward

pub mod api;
pub mod error;
pub mod http;
pub mod recording;
pub mod request;
pub mod transport;

pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use recording::RecordingClient;
pub use request::{ApiRequest, Method, RequestOptions};
pub use transport::ReqwestClient;
