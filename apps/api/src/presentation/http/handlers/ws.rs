use crate::presentation::http::state::AppState;
use axum::{
    extract::{
        State,
        ws::{Message, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| async move {
        let (sender, receiver) = socket.split();
        forward_feed(sender, receiver, state.feed.subscribe()).await;
    })
}

/// Pushes feed events to one client until it closes or the feed shuts down.
async fn forward_feed<S, R, E>(mut sender: S, mut receiver: R, mut feed: broadcast::Receiver<String>)
where
    S: Sink<Message> + Unpin,
    R: Stream<Item = Result<Message, E>> + Unpin,
{
    loop {
        tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            event = feed.recv() => match event {
                Ok(msg) => {
                    if sender.send(Message::Text(msg.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "feed subscriber lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
    tracing::debug!("feed subscriber disconnected");
}
