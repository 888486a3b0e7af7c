use crate::state::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Streams every `stateChanged` broadcast as a server-sent event.
pub async fn state_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.notifier.subscribe();
    debug!(subscribers = state.notifier.subscriber_count(), "Event stream opened");

    let events = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(message) => {
                    let event = Event::default().event("stateChanged").json_data(&message);
                    return Some((event, receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event stream subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
