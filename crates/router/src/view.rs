//! Lazy view loading.

/// Instantiates the view behind a route's component name.
///
/// The router calls this at most once per component; later navigations reuse
/// the cached instance.
pub trait ViewLoader: Send + Sync {
    type View: Send + Sync;

    fn load(&self, component: &'static str) -> Result<Self::View, ViewLoadError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load view '{component}': {reason}")]
pub struct ViewLoadError {
    pub component: &'static str,
    pub reason: String,
}

impl ViewLoadError {
    pub fn new(component: &'static str, reason: impl Into<String>) -> Self {
        Self {
            component,
            reason: reason.into(),
        }
    }
}
