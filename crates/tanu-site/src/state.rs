//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

#[cfg(debug_assertions)]
use tokio::sync::broadcast;

use crate::{catalog::Catalog, error::SiteError, navigation::PageRouter};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    pub catalog: Arc<Catalog>,
    #[cfg(debug_assertions)]
    pub reloader: Option<broadcast::Sender<()>>,
}

impl AppState {
    /// Create a new `AppState` with the built-in catalog and no hot reload.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(InnerState {
                catalog: Arc::new(catalog),
                #[cfg(debug_assertions)]
                reloader: None,
            }),
        }
    }

    /// Create a new `AppState` with hot reload channel (debug only).
    #[cfg(debug_assertions)]
    pub fn with_reloader(self) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(InnerState {
                catalog: Arc::clone(&self.inner.catalog),
                reloader: Some(tx),
            }),
        }
    }

    /// Get the portfolio catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// A fresh router for one request, sharing the catalog.
    pub fn page_router(&self) -> Result<PageRouter, SiteError> {
        PageRouter::new(Arc::clone(&self.inner.catalog))
    }

    /// Get the reloader channel (debug only).
    #[cfg(debug_assertions)]
    pub fn reloader(&self) -> Option<&broadcast::Sender<()>> {
        self.inner.reloader.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
