use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::Catalog;

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
