//! The session store.

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use rootmanage_client::HttpClient;
use rootmanage_client::api::auth as auth_api;
use rootmanage_core::{KeyValueStorage, StorageError, keys};

use crate::error::AuthError;
use crate::session::{ModuleGrant, Session, SessionUser};

/// Read-only view of the session used by navigation guards.
pub trait SessionView: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Holds the current session and mirrors it to persisted storage.
///
/// Construct one per application run with [`AuthStore::load`] and share it
/// (usually behind an `Arc`). The session is only replaced wholesale:
/// `login` swaps in a complete new session, `logout` swaps in an empty one.
/// Concurrent logins are serialized at the storage write; the last one to
/// get there wins.
pub struct AuthStore {
    storage: Arc<dyn KeyValueStorage>,
    client: Arc<dyn HttpClient>,
    session: RwLock<Session>,
}

impl core::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    /// Restore the session from persisted storage.
    ///
    /// A session with token and user but no granted modules, or with stored
    /// values that no longer decode, is discarded: memory and storage are
    /// both reset to an empty session.
    pub fn load(storage: Arc<dyn KeyValueStorage>, client: Arc<dyn HttpClient>) -> Self {
        let session = match read_persisted(storage.as_ref()) {
            Ok(session) if session.is_incomplete() => {
                tracing::warn!("persisted session has no modules; discarding it");
                clear_persisted(storage.as_ref());
                Session::empty()
            }
            Ok(session) => session,
            Err(reason) => {
                tracing::warn!(%reason, "persisted session is unreadable; discarding it");
                clear_persisted(storage.as_ref());
                Session::empty()
            }
        };

        tracing::debug!(
            authenticated = session.is_authenticated(),
            modules = session.modules.len(),
            "session store loaded"
        );

        Self {
            storage,
            client,
            session: RwLock::new(session),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> String {
        self.session().token
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session().user
    }

    pub fn modules(&self) -> Vec<ModuleGrant> {
        self.session().modules
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Log in and replace the session with the one the backend returns.
    ///
    /// Returns the raw response body. On any failure the current session is
    /// left untouched; API errors are passed through unchanged. The session
    /// lock is held from the storage write until the swap, so overlapping
    /// logins never interleave their writes.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, AuthError> {
        let raw = auth_api::login(self.client.as_ref(), username, password).await?;

        let next = Session::from_login(&raw)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        if next.token.is_empty() {
            return Err(AuthError::MalformedResponse("missing token".to_string()));
        }
        if next.modules.is_empty() {
            tracing::warn!(username, "login granted no modules; session will not survive a restart");
        }

        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = write_persisted(self.storage.as_ref(), &next) {
            restore_persisted(self.storage.as_ref(), &session);
            return Err(err.into());
        }
        *session = next;
        drop(session);

        tracing::info!(username, "logged in");
        Ok(raw)
    }

    /// Clear the session in memory and in storage. Always succeeds.
    pub fn logout(&self) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        *session = Session::empty();
        clear_persisted(self.storage.as_ref());
        drop(session);

        tracing::info!("logged out");
    }
}

impl SessionView for AuthStore {
    fn is_authenticated(&self) -> bool {
        AuthStore::is_authenticated(self)
    }
}

fn read_persisted(storage: &dyn KeyValueStorage) -> Result<Session, String> {
    let read = |key: &str| -> Option<String> {
        storage.get(key).unwrap_or_else(|err| {
            tracing::warn!(key, "failed to read persisted value: {err}");
            None
        })
    };

    let token = read(keys::TOKEN).unwrap_or_default();

    let user = match read(keys::USER) {
        Some(text) => serde_json::from_str::<Option<SessionUser>>(&text)
            .map_err(|e| format!("user: {e}"))?,
        None => None,
    };

    let modules = match read(keys::MODULES) {
        Some(text) => serde_json::from_str::<Vec<ModuleGrant>>(&text)
            .map_err(|e| format!("modules: {e}"))?,
        None => Vec::new(),
    };

    Ok(Session {
        token,
        user,
        modules,
    })
}

fn write_persisted(storage: &dyn KeyValueStorage, session: &Session) -> Result<(), StorageError> {
    storage.set(keys::TOKEN, &session.token)?;
    storage.set(keys::USER, &serde_json::to_string(&session.user)?)?;
    storage.set(keys::MODULES, &serde_json::to_string(&session.modules)?)?;
    Ok(())
}

fn clear_persisted(storage: &dyn KeyValueStorage) {
    for key in [keys::TOKEN, keys::USER, keys::MODULES] {
        if let Err(err) = storage.remove(key) {
            tracing::warn!(key, "failed to remove persisted value: {err}");
        }
    }
}

/// Put back what storage held before a failed write.
fn restore_persisted(storage: &dyn KeyValueStorage, previous: &Session) {
    if previous.is_empty() {
        clear_persisted(storage);
    } else if let Err(err) = write_persisted(storage, previous) {
        tracing::warn!("failed to restore persisted session: {err}");
    }
}
