//! Dashboard home page: the card embedded in a self-refreshing page.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use guardian_app::ports::CardRenderer;

use super::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: u32,
    card_html: Option<String>,
}

/// Possible responses from the fragment endpoint.
pub enum FragmentResponse {
    Ok(Html<String>),
    /// No snapshot has been rendered yet.
    NotRendered,
}

impl IntoResponse for FragmentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(html) => html.into_response(),
            Self::NotRendered => {
                (StatusCode::NOT_FOUND, "card has not been rendered yet").into_response()
            }
        }
    }
}

/// `GET /`: the card inside a full page.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<Html<String>, DashboardError>
where
    R: CardRenderer + Send + Sync + 'static,
{
    let card_html = state.card_service.current().await.map(|card| card.html);
    let page = DashboardTemplate {
        refresh_seconds: state.refresh_seconds,
        card_html,
    }
    .render()?;
    Ok(Html(page))
}

/// `GET /card`: the bare fragment (style + markup).
pub async fn fragment<R>(State(state): State<AppState<R>>) -> FragmentResponse
where
    R: CardRenderer + Send + Sync + 'static,
{
    match state.card_service.current().await {
        Some(card) => FragmentResponse::Ok(Html(card.html)),
        None => FragmentResponse::NotRendered,
    }
}

/// `POST /card/toggle`: toggle the history list, then back to the page (PRG).
pub async fn toggle<R>(State(state): State<AppState<R>>) -> Result<Redirect, DashboardError>
where
    R: CardRenderer + Send + Sync + 'static,
{
    state.card_service.toggle().await?;
    Ok(Redirect::to("/"))
}
