//! Shared application state for axum handlers.

use std::sync::Arc;

use guardian_app::ports::CardRenderer;
use guardian_app::registry::CardRegistry;
use guardian_app::services::card_service::CardService;

/// Application state shared across all axum handlers.
///
/// Generic over the renderer to avoid dynamic dispatch.
/// `Clone` is implemented manually so the renderer itself does not need to
/// be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// The status card and its last rendered fragment.
    pub card_service: Arc<CardService<R>>,
    /// Descriptors registered at startup.
    pub registry: Arc<CardRegistry>,
    /// Auto-reload interval of the dashboard page.
    pub refresh_seconds: u32,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            card_service: Arc::clone(&self.card_service),
            registry: Arc::clone(&self.registry),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<R> AppState<R>
where
    R: CardRenderer + Send + Sync + 'static,
{
    /// Create a new application state.
    pub fn new(card_service: CardService<R>, registry: CardRegistry, refresh_seconds: u32) -> Self {
        Self {
            card_service: Arc::new(card_service),
            registry: Arc::new(registry),
            refresh_seconds,
        }
    }
}
