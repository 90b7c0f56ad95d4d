//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod card;
pub mod cards;
pub mod sse;
#[allow(clippy::missing_errors_doc)]
pub mod states;

use axum::Router;
use axum::routing::{get, post, put};

use guardian_app::ports::CardRenderer;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CardRenderer + Send + Sync + 'static,
{
    Router::new()
        // Host pushes
        .route("/states", put(states::push::<R>))
        // Card
        .route("/card", get(card::get::<R>))
        .route("/card/toggle", post(card::toggle::<R>))
        .route("/card/size", get(card::size::<R>))
        .route("/card/stream", get(sse::stream::<R>))
        // Registry
        .route("/cards", get(cards::list::<R>))
}
