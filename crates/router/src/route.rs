//! Route descriptors and path matching.

use serde::Serialize;

/// Per-route metadata consulted by the navigation guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

/// One entry of the route table.
///
/// Child paths are relative to their parent unless they start with `/`.
/// Entries are immutable once the router is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    /// View component loaded lazily when the route is first entered.
    pub component: &'static str,
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn new(path: &'static str, component: &'static str) -> Self {
        Self {
            path,
            name: None,
            component,
            redirect: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn redirect_to(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn with_children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }
}

/// A resolved target: the normalized path plus the chain of matched
/// entries, outermost (layout) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub path: String,
    pub matched: Vec<&'a RouteEntry>,
}

impl<'a> RouteMatch<'a> {
    /// The innermost matched entry.
    pub fn leaf(&self) -> Option<&'a RouteEntry> {
        self.matched.last().copied()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.leaf().and_then(|r| r.name)
    }

    /// Metadata is inherited: any matched entry requiring auth protects the
    /// whole chain.
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|r| r.meta.requires_auth)
    }
}

/// Flattened, printable view of one table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: Option<&'static str>,
    pub component: &'static str,
    pub redirect: Option<&'static str>,
    pub requires_auth: bool,
}

/// Normalize a navigation target: leading slash, no trailing slash, no
/// query string or fragment.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub(crate) fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return normalize(child);
    }
    if parent == "/" {
        normalize(&format!("/{child}"))
    } else {
        normalize(&format!("{parent}/{child}"))
    }
}

fn is_prefix(prefix: &str, path: &str) -> bool {
    prefix == "/" || path == prefix || path.starts_with(&format!("{prefix}/"))
}

/// Find the chain of entries matching `path` (already normalized).
///
/// Entries are tried in table order; the first match wins.
pub(crate) fn match_path<'a>(routes: &'a [RouteEntry], path: &str) -> Option<Vec<&'a RouteEntry>> {
    match_within(routes, "/", path)
}

fn match_within<'a>(
    routes: &'a [RouteEntry],
    parent: &str,
    path: &str,
) -> Option<Vec<&'a RouteEntry>> {
    for route in routes {
        let full = join(parent, route.path);
        if full == path {
            return Some(vec![route]);
        }
        if !route.children.is_empty() && is_prefix(&full, path) {
            if let Some(mut rest) = match_within(&route.children, &full, path) {
                rest.insert(0, route);
                return Some(rest);
            }
        }
    }
    None
}

/// Flatten the table into full paths, parents before children.
pub(crate) fn summarize(routes: &[RouteEntry]) -> Vec<RouteSummary> {
    fn walk(routes: &[RouteEntry], parent: &str, inherited: bool, out: &mut Vec<RouteSummary>) {
        for route in routes {
            let path = join(parent, route.path);
            let requires_auth = inherited || route.meta.requires_auth;
            out.push(RouteSummary {
                path: path.clone(),
                name: route.name,
                component: route.component,
                redirect: route.redirect,
                requires_auth,
            });
            walk(&route.children, &path, requires_auth, out);
        }
    }

    let mut out = Vec::new();
    walk(routes, "/", false, &mut out);
    out
}
