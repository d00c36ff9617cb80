//! Navigation guard.

use std::sync::Arc;

use rootmanage_auth::SessionView;

use crate::route::RouteMatch;
use crate::table::LOGIN_PATH;

/// Outcome of guarding one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Runs before every navigation.
///
/// Only authentication is checked. Granted modules are not compared against
/// the target route.
#[derive(Clone)]
pub struct NavigationGuard {
    session: Arc<dyn SessionView>,
    login_path: &'static str,
}

impl core::fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl NavigationGuard {
    pub fn new(session: Arc<dyn SessionView>) -> Self {
        Self {
            session,
            login_path: LOGIN_PATH,
        }
    }

    pub fn with_login_path(mut self, login_path: &'static str) -> Self {
        self.login_path = login_path;
        self
    }

    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    pub fn check(&self, target: &RouteMatch<'_>) -> GuardDecision {
        if target.requires_auth() && !self.session.is_authenticated() {
            GuardDecision::RedirectToLogin
        } else {
            GuardDecision::Allow
        }
    }
}
