//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use guardian_app::ports::CardRenderer;
use guardian_domain::error::GuardianError;

use crate::state::AppState;

/// Errors surfaced by dashboard pages, rendered as plain text.
#[derive(Debug)]
pub enum DashboardError {
    /// The page template failed.
    Template(askama::Error),
    /// The card service failed.
    Card(GuardianError),
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Template(err)
    }
}

impl From<GuardianError> for DashboardError {
    fn from(err: GuardianError) -> Self {
        Self::Card(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match &self {
            Self::Template(err) => tracing::error!(error = %err, "dashboard template error"),
            Self::Card(err) => tracing::error!(error = %err, "dashboard card error"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CardRenderer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<R>))
        .route("/card", get(home::fragment::<R>))
        .route("/card/toggle", post(home::toggle::<R>))
}
