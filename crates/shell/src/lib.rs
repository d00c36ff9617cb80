//! `rootmanage-shell`: application wiring and the terminal front end.
//!
//! The shell is a **thin client** around the rootmanage API: it owns one
//! session store, one router and one HTTP client, built together in
//! [`AppContext`].

pub mod commands;
pub mod config;
pub mod views;

use std::sync::Arc;

use anyhow::Context;

use rootmanage_auth::AuthStore;
use rootmanage_client::{HttpClient, ReqwestClient};
use rootmanage_core::{FileStorage, KeyValueStorage};
use rootmanage_router::{Router, route_table};

pub use config::ShellConfig;
pub use views::{ShellViewLoader, ViewHandle};

/// Application state shared by every command.
pub struct AppContext {
    pub storage: Arc<dyn KeyValueStorage>,
    pub client: Arc<dyn HttpClient>,
    pub auth: Arc<AuthStore>,
    pub router: Router<ShellViewLoader>,
}

impl AppContext {
    /// Build the production context: file storage, reqwest transport.
    pub fn build(config: &ShellConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(
            FileStorage::open(&config.state_file).with_context(|| {
                format!("failed to open session file at {:?}", config.state_file)
            })?,
        );

        let transport = match config.http_timeout {
            Some(timeout) => ReqwestClient::with_timeout(&config.api_url, timeout)
                .context("failed to build HTTP client")?,
            None => ReqwestClient::new(&config.api_url),
        };
        let client: Arc<dyn HttpClient> = Arc::new(transport.with_token_storage(storage.clone()));

        tracing::info!(api_url = %config.api_url, "initializing app context");

        Ok(Self::from_parts(storage, client))
    }

    /// Wire a context from explicit storage and client (tests/dev).
    pub fn from_parts(storage: Arc<dyn KeyValueStorage>, client: Arc<dyn HttpClient>) -> Self {
        let auth = Arc::new(AuthStore::load(storage.clone(), client.clone()));
        let router = Router::new(route_table(), auth.clone(), ShellViewLoader);

        Self {
            storage,
            client,
            auth,
            router,
        }
    }
}
