use std::sync::Arc;

use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence seam. `PgStore` over the process-wide pool in production.
    pub store: Arc<dyn Store>,
}
