//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the typed runtime config, the upstream auth backend behind its
//! trait seam, and the in-memory toast store.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::auth::AuthBackend;
use crate::services::toast::ToastStore;

/// Shared application state. Clone is required by Axum — all inner fields
/// are Arc-wrapped or cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Client for the backend authentication service.
    pub auth: Arc<dyn AuthBackend>,
    /// Transient notifications for UI-facing consumers. Not written to by
    /// the login path; see DESIGN.md.
    pub toasts: ToastStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, auth: Arc<dyn AuthBackend>) -> Self {
        Self { config: Arc::new(config), auth, toasts: ToastStore::new() }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
