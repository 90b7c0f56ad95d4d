//! Registered card descriptors, as offered by the dashboard editor.

use axum::Json;
use axum::extract::State;

use guardian_app::ports::CardRenderer;
use guardian_app::registry::CardDescriptor;

use crate::state::AppState;

/// `GET /api/cards`
pub async fn list<R>(State(state): State<AppState<R>>) -> Json<Vec<CardDescriptor>>
where
    R: CardRenderer + Send + Sync + 'static,
{
    Json(state.registry.list().to_vec())
}
