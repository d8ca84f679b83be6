use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse/events",
    tag = "sse",
    responses((status = 200, description = "Clock ticks, quiz progress and navigation requests", content_type = "text/event-stream", body = String))
)]
/// Stream realtime events to the connected client.
pub async fn event_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let receiver = sse_service::subscribe(&state);
    info!("New SSE connection");
    sse_service::broadcast_info(state.events(), "event stream connected");
    sse_service::to_sse_stream(receiver)
}

/// Configure the SSE endpoint.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/events", get(event_stream))
}
