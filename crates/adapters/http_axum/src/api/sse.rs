//! Server-Sent Events (SSE) stream of freshly rendered card fragments.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use guardian_app::ports::CardRenderer;

use crate::state::AppState;

/// `GET /api/card/stream`: SSE stream of rendered cards.
///
/// Every render (snapshot change or toggle) is sent as a JSON-encoded
/// `card` event. Suppressed and unchanged pushes send nothing. The stream
/// continues until the client disconnects.
pub async fn stream<R>(
    State(state): State<AppState<R>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: CardRenderer + Send + Sync + 'static,
{
    let rx = state.card_service.subscribe();
    let card_stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(card) => match serde_json::to_string(&card) {
            Ok(json) => Some(Ok(Event::default().event("card").data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize card for SSE stream");
                None
            }
        },
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some renders were dropped");
            None
        }
    });

    Sse::new(card_stream).keep_alive(KeepAlive::default())
}
