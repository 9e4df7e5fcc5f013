use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Extension, Query};
use axum::response::Response;
use serde::Deserialize;
use std::env;
use tokio::sync::broadcast::error::RecvError;

use crate::error::{unauthorized_error, Error};
use crate::notifications::Notifier;

#[derive(Debug, Deserialize)]
pub struct SubscribeParams {
    token: Option<String>,
}

/// Upgrades to a WebSocket streaming every mutation notification. The socket
/// authenticates with its own shared token, separate from the REST bearer.
pub async fn subscribe(
    ws: WebSocketUpgrade,
    Query(params): Query<SubscribeParams>,
    Extension(notifier): Extension<Notifier>,
) -> Result<Response, Error> {
    let expected = env::var("SOCKET_AUTH_TOKEN")?;

    match params.token {
        Some(token) if token == expected => {}
        _ => return Err(unauthorized_error("invalid token")),
    }

    Ok(ws.on_upgrade(move |socket| stream(socket, notifier)))
}

async fn stream(mut socket: WebSocket, notifier: Notifier) {
    let mut rx = notifier.subscribe();

    loop {
        match rx.recv().await {
            Ok(notification) => {
                let payload = match serde_json::to_string(&notification) {
                    Ok(payload) => payload,
                    Err(_) => continue,
                };

                if socket.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            // dropped messages are tolerable, a closed channel is not
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notification subscriber lagging");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
