//! `rootmanage-router`: client-side route table and navigation guard.
//!
//! Routes are static descriptors built once at startup. Each navigation:
//! 1. resolves the path against the table (following redirects)
//! 2. asks the guard whether the session may enter the target
//! 3. loads the matched views lazily, caching them for later navigations

pub mod guard;
pub mod route;
pub mod router;
pub mod table;
pub mod view;

pub use guard::{GuardDecision, NavigationGuard};
pub use route::{RouteEntry, RouteMatch, RouteMeta, RouteSummary};
pub use router::{Location, Navigation, Router, RouterError};
pub use table::{LOGIN_PATH, route_table};
pub use view::{ViewLoadError, ViewLoader};
