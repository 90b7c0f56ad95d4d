//! Snapshot push endpoint: the host sends its full state map here on every change.

use axum::Json;
use axum::extract::State;

use guardian_app::ports::CardRenderer;
use guardian_app::services::card_service::UpdateOutcome;
use guardian_domain::snapshot::Snapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// `PUT /api/states`
pub async fn push<R>(
    State(state): State<AppState<R>>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<UpdateOutcome>, ApiError>
where
    R: CardRenderer + Send + Sync + 'static,
{
    let outcome = state.card_service.push_snapshot(snapshot).await?;
    Ok(Json(outcome))
}
