//! Views as the shell renders them.

use serde::Serialize;

use rootmanage_router::{ViewLoadError, ViewLoader};

/// A loaded view. The shell has no widget tree; a view is its component
/// path plus a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewHandle {
    pub component: &'static str,
    pub title: &'static str,
}

/// Loads views for the terminal shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellViewLoader;

impl ViewLoader for ShellViewLoader {
    type View = ViewHandle;

    fn load(&self, component: &'static str) -> Result<Self::View, ViewLoadError> {
        let title = component
            .rsplit('/')
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ViewLoadError::new(component, "empty component path"))?;

        tracing::debug!(component, "loading view");
        Ok(ViewHandle { component, title })
    }
}
