//! JSON handlers for the card itself.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use guardian_app::ports::CardRenderer;
use guardian_app::services::card_service::{RenderedCard, UpdateOutcome};

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<RenderedCard>),
    /// No snapshot has been rendered yet.
    NotRendered,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotRendered => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "card has not been rendered yet".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Body of the size endpoint.
#[derive(Serialize)]
pub struct SizeBody {
    pub card_size: u32,
}

/// `GET /api/card`
pub async fn get<R>(State(state): State<AppState<R>>) -> GetResponse
where
    R: CardRenderer + Send + Sync + 'static,
{
    match state.card_service.current().await {
        Some(card) => GetResponse::Ok(Json(card)),
        None => GetResponse::NotRendered,
    }
}

/// `POST /api/card/toggle`
pub async fn toggle<R>(State(state): State<AppState<R>>) -> Result<Json<UpdateOutcome>, ApiError>
where
    R: CardRenderer + Send + Sync + 'static,
{
    let outcome = state.card_service.toggle().await?;
    Ok(Json(outcome))
}

/// `GET /api/card/size`
pub async fn size<R>(State(state): State<AppState<R>>) -> Json<SizeBody>
where
    R: CardRenderer + Send + Sync + 'static,
{
    Json(SizeBody {
        card_size: state.card_service.card_size(),
    })
}
