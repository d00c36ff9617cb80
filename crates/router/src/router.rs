//! The router: resolution, guarding, lazy view loading.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rootmanage_auth::SessionView;

use crate::guard::{GuardDecision, NavigationGuard};
use crate::route::{RouteEntry, RouteMatch, RouteSummary, match_path, normalize, summarize};
use crate::view::{ViewLoadError, ViewLoader};

/// Redirect hops followed before a navigation is abandoned.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("no route matches '{0}'")]
    NotFound(String),
    #[error("too many redirects while resolving '{0}'")]
    RedirectLoop(String),
    #[error(transparent)]
    ViewLoad(#[from] ViewLoadError),
}

/// Where the router currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub name: Option<&'static str>,
}

/// Result of a completed navigation.
#[derive(Debug)]
pub struct Navigation<V> {
    /// The path the caller asked for, normalized.
    pub requested: String,
    pub decision: GuardDecision,
    /// Where the navigation actually landed.
    pub location: Location,
    /// Views of the matched chain, outermost first.
    pub views: Vec<Arc<V>>,
}

impl<V> Navigation<V> {
    pub fn redirected_to_login(&self) -> bool {
        self.decision == GuardDecision::RedirectToLogin
    }
}

pub struct Router<L: ViewLoader> {
    routes: Vec<RouteEntry>,
    guard: NavigationGuard,
    loader: L,
    views: Mutex<HashMap<&'static str, Arc<L::View>>>,
    current: RwLock<Option<Location>>,
}

impl<L: ViewLoader> core::fmt::Debug for Router<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.len())
            .field("guard", &self.guard)
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

impl<L: ViewLoader> Router<L> {
    pub fn new(routes: Vec<RouteEntry>, session: Arc<dyn SessionView>, loader: L) -> Self {
        Self::with_guard(routes, NavigationGuard::new(session), loader)
    }

    pub fn with_guard(routes: Vec<RouteEntry>, guard: NavigationGuard, loader: L) -> Self {
        Self {
            routes,
            guard,
            loader,
            views: Mutex::new(HashMap::new()),
            current: RwLock::new(None),
        }
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Every route with its full path, parents before children.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        summarize(&self.routes)
    }

    /// Last location a navigation landed on.
    pub fn current(&self) -> Option<Location> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve a path to its matched chain, following redirects.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, RouterError> {
        let requested = normalize(path);
        let mut path = requested.clone();

        for _ in 0..=MAX_REDIRECTS {
            let matched =
                match_path(&self.routes, &path).ok_or_else(|| RouterError::NotFound(path.clone()))?;
            let target = RouteMatch { path, matched };

            match target.leaf().and_then(|r| r.redirect) {
                Some(next) => {
                    tracing::debug!(from = %target.path, to = next, "following route redirect");
                    path = normalize(next);
                }
                None => return Ok(target),
            }
        }

        Err(RouterError::RedirectLoop(requested))
    }

    /// Navigate to `to`: resolve, guard, then load the matched views.
    ///
    /// A guarded target the session may not enter lands on the login route
    /// instead. On error the current location is unchanged.
    pub fn navigate(&self, to: &str) -> Result<Navigation<L::View>, RouterError> {
        let requested = normalize(to);
        let target = self.resolve(&requested)?;

        let decision = self.guard.check(&target);
        let target = match decision {
            GuardDecision::Allow => target,
            GuardDecision::RedirectToLogin => {
                tracing::info!(path = %requested, "not authenticated; redirecting to login");
                self.resolve(self.guard.login_path())?
            }
        };

        let views = target
            .matched
            .iter()
            .map(|route| self.load_view(route.component))
            .collect::<Result<Vec<_>, _>>()?;

        let location = Location {
            path: target.path.clone(),
            name: target.name(),
        };
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(location.clone());

        Ok(Navigation {
            requested,
            decision,
            location,
            views,
        })
    }

    fn load_view(&self, component: &'static str) -> Result<Arc<L::View>, ViewLoadError> {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(view) = views.get(component) {
            return Ok(view.clone());
        }

        let view = Arc::new(self.loader.load(component)?);
        tracing::debug!(component, "view loaded");
        views.insert(component, view.clone());
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;
    use crate::table::{LOGIN_PATH, route_table};

    struct Flag(AtomicBool);

    impl SessionView for Flag {
        fn is_authenticated(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[derive(Default)]
    struct CountingLoader {
        loads: AtomicUsize,
        fail_on: Option<&'static str>,
    }

    impl ViewLoader for CountingLoader {
        type View = &'static str;

        fn load(&self, component: &'static str) -> Result<Self::View, ViewLoadError> {
            if self.fail_on == Some(component) {
                return Err(ViewLoadError::new(component, "chunk missing"));
            }
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(component)
        }
    }

    fn router(authenticated: bool) -> (Router<CountingLoader>, Arc<Flag>) {
        let flag = Arc::new(Flag(AtomicBool::new(authenticated)));
        let router = Router::new(route_table(), flag.clone(), CountingLoader::default());
        (router, flag)
    }

    fn components<V: Copy>(nav: &Navigation<V>) -> Vec<V> {
        nav.views.iter().map(|v| **v).collect()
    }

    #[test]
    fn unauthenticated_protected_navigation_lands_on_login() {
        let (router, _) = router(false);

        let nav = router.navigate("/mall/orders").unwrap();

        assert!(nav.redirected_to_login());
        assert_eq!(nav.requested, "/mall/orders");
        assert_eq!(nav.location.path, LOGIN_PATH);
        assert_eq!(nav.location.name, Some("Login"));
        assert_eq!(components(&nav), vec!["views/Login"]);
        assert_eq!(router.current().unwrap().path, LOGIN_PATH);
    }

    #[test]
    fn authenticated_protected_navigation_proceeds() {
        let (router, _) = router(true);

        let nav = router.navigate("/mall/orders").unwrap();

        assert_eq!(nav.decision, GuardDecision::Allow);
        assert_eq!(nav.location.path, "/mall/orders");
        assert_eq!(
            components(&nav),
            vec!["layouts/MainLayout", "views/mall/OrderManagement"]
        );
    }

    #[test]
    fn same_route_follows_session_state() {
        let (router, flag) = router(false);
        assert!(router.navigate("/home").unwrap().redirected_to_login());

        flag.0.store(true, Ordering::SeqCst);
        let nav = router.navigate("/home").unwrap();
        assert!(!nav.redirected_to_login());
        assert_eq!(nav.location.name, Some("Home"));
    }

    #[test]
    fn root_redirects_to_home() {
        let (router, _) = router(true);

        let nav = router.navigate("/").unwrap();

        assert_eq!(nav.requested, "/");
        assert_eq!(nav.location.path, "/home");
    }

    #[test]
    fn public_pages_need_no_session() {
        let (router, _) = router(false);

        for path in ["/login", "/register/"] {
            let nav = router.navigate(path).unwrap();
            assert_eq!(nav.decision, GuardDecision::Allow);
        }
        assert_eq!(router.current().unwrap().name, Some("Register"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let (router, _) = router(true);
        router.navigate("/home").unwrap();

        let err = router.navigate("/contracts/unknown").unwrap_err();

        assert_eq!(err, RouterError::NotFound("/contracts/unknown".to_string()));
        assert_eq!(router.current().unwrap().path, "/home");
    }

    #[test]
    fn views_load_once_and_are_reused() {
        let (router, _) = router(true);

        let first = router.navigate("/home").unwrap();
        router.navigate("/roles").unwrap();
        let again = router.navigate("/home").unwrap();

        // MainLayout, Home, RoleManagement
        assert_eq!(router.loader.loads.load(Ordering::SeqCst), 3);
        assert!(Arc::ptr_eq(&first.views[1], &again.views[1]));
    }

    #[test]
    fn view_load_failure_keeps_location() {
        let flag = Arc::new(Flag(AtomicBool::new(true)));
        let loader = CountingLoader {
            fail_on: Some("views/roles/RoleManagement"),
            ..CountingLoader::default()
        };
        let router = Router::new(route_table(), flag, loader);
        router.navigate("/home").unwrap();

        let err = router.navigate("/roles").unwrap_err();

        assert!(matches!(err, RouterError::ViewLoad(e) if e.component == "views/roles/RoleManagement"));
        assert_eq!(router.current().unwrap().path, "/home");
    }

    #[test]
    fn guard_can_send_to_another_login_route() {
        let routes = vec![
            RouteEntry::new("/sign-in", "views/SignIn").named("SignIn"),
            RouteEntry::new("/vault", "views/Vault").requires_auth(),
        ];
        let guard = NavigationGuard::new(Arc::new(Flag(AtomicBool::new(false))))
            .with_login_path("/sign-in");
        let router = Router::with_guard(routes, guard, CountingLoader::default());

        let nav = router.navigate("/vault").unwrap();

        assert!(nav.redirected_to_login());
        assert_eq!(nav.location.path, "/sign-in");
        assert_eq!(components(&nav), vec!["views/SignIn"]);
    }

    #[test]
    fn redirect_cycles_are_reported() {
        let routes = vec![
            RouteEntry::new("/a", "A").redirect_to("/b"),
            RouteEntry::new("/b", "B").redirect_to("/a"),
        ];
        let router = Router::new(
            routes,
            Arc::new(Flag(AtomicBool::new(true))),
            CountingLoader::default(),
        );

        assert_eq!(
            router.navigate("/a").unwrap_err(),
            RouterError::RedirectLoop("/a".to_string())
        );
    }
}
