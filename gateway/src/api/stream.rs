//! The finality WebSocket endpoint.
//!
//! Clients connect to `/ws/posFinality`, optionally passing a `cursor`
//! query parameter to resume. The subscription is opened before the
//! upgrade so a failing node still yields a proper HTTP error. After
//! the upgrade the backlog is replayed in order, then live updates are
//! forwarded in channel order; there is no reordering across the two
//! phases. Every write runs under a per-message deadline.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{self, CloseFrame, WebSocket, close_code};
use axum::extract::{ConnectInfo, FromRequestParts as _, Query, Request, State, WebSocketUpgrade};
use axum::response::{IntoResponse, Response};
use gateway_types::finality::{FinalityStatus, FinalityUpdate, UPDATE_KIND};
use http::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use crate::metrics::{METRICS_ID_FINALITY_SUBSCRIPTIONS, METRICS_ID_FINALITY_UPDATES};
use crate::services::node::{FinalityEvent, FinalitySubscription, NodeFinality};
use crate::state::GatewayState;

/// Per-message write deadline.
const WRITE_DEADLINE: Duration = Duration::from_secs(10);
/// The stream only sends; anything beyond a close frame is oversized.
const MAX_MESSAGE_SIZE: usize = 4 * 1024;

#[derive(Debug, Deserialize)]
struct StreamQuery {
    cursor: Option<String>,
}

/// Upgrades a finality subscription.
#[instrument(level = "debug", skip_all)]
pub(crate) async fn finality_endpoint(
    State(state): State<Arc<GatewayState>>,
    request: Request,
) -> Response {
    let (mut parts, _body) = request.into_parts();

    let remote = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_default();
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());
    let source = state.sources.resolve(&remote, forwarded);
    if !state.client_allowed(&source) {
        tracing::debug!("rejecting subscriber outside the allow-list: {source}");
        return (StatusCode::FORBIDDEN, "forbidden").into_response();
    }

    let cursor = match Query::<StreamQuery>::try_from_uri(&parts.uri) {
        Ok(Query(query)) => query.cursor,
        Err(rejection) => return rejection.into_response(),
    };

    let upgrade = match WebSocketUpgrade::from_request_parts(&mut parts, &()).await {
        Ok(upgrade) => upgrade,
        Err(rejection) => return rejection.into_response(),
    };

    // subscribe before upgrading so node failures surface as HTTP errors
    let subscription = match state.node.finality.subscribe(cursor).await {
        Ok(subscription) => subscription,
        Err(err) => {
            tracing::warn!("finality subscribe failed: {err}");
            return (StatusCode::SERVICE_UNAVAILABLE, "subscribe failed").into_response();
        }
    };

    upgrade
        .max_message_size(MAX_MESSAGE_SIZE)
        .on_failed_upgrade(|err| {
            tracing::warn!("could not establish websocket connection: {err:?}");
        })
        .on_upgrade(move |socket| stream_finality(socket, subscription))
}

#[instrument(level = "debug", skip_all)]
async fn stream_finality(mut socket: WebSocket, subscription: FinalitySubscription) {
    ::metrics::gauge!(METRICS_ID_FINALITY_SUBSCRIPTIONS).increment(1);
    let close_frame = run_stream(&mut socket, subscription).await;
    if let Some(frame) = close_frame {
        // best effort, like axum's own examples: send the frame and
        // ignore the error, the connection is going away either way
        let _ = socket.send(ws::Message::Close(Some(frame))).await;
    }
    ::metrics::gauge!(METRICS_ID_FINALITY_SUBSCRIPTIONS).decrement(1);
}

async fn run_stream(
    socket: &mut WebSocket,
    subscription: FinalitySubscription,
) -> Option<CloseFrame> {
    let FinalitySubscription {
        backlog,
        mut updates,
        cancel,
    } = subscription;

    // the backlog must be fully flushed before the live channel is
    // drained, otherwise replayed and live updates could interleave
    for event in backlog {
        if let Err(frame) = send_update(socket, event).await {
            return Some(frame);
        }
    }

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("subscription cancelled by the node");
                return Some(CloseFrame {
                    code: close_code::NORMAL,
                    reason: "subscription closed".into(),
                });
            }
            maybe_event = updates.recv() => match maybe_event {
                Some(event) => {
                    if let Err(frame) = send_update(socket, event).await {
                        return Some(frame);
                    }
                }
                None => {
                    return Some(CloseFrame {
                        code: close_code::NORMAL,
                        reason: "stream ended".into(),
                    });
                }
            }
        }
    }
}

async fn send_update(socket: &mut WebSocket, event: FinalityEvent) -> Result<(), CloseFrame> {
    let update = encode_update(event);
    let text = serde_json::to_string(&update).expect("Can serialize update");
    let write = tokio::time::timeout(WRITE_DEADLINE, socket.send(ws::Message::text(text))).await;
    match write {
        Ok(Ok(())) => {
            ::metrics::counter!(METRICS_ID_FINALITY_UPDATES).increment(1);
            Ok(())
        }
        Ok(Err(err)) => {
            tracing::debug!("finality write failed: {err}");
            Err(CloseFrame {
                code: close_code::ERROR,
                reason: "write failed".into(),
            })
        }
        Err(_elapsed) => Err(CloseFrame {
            code: close_code::ERROR,
            reason: "write deadline exceeded".into(),
        }),
    }
}

/// Translates a node event into the wire payload.
fn encode_update(event: FinalityEvent) -> FinalityUpdate {
    let status = match event.status {
        NodeFinality::Pending => FinalityStatus::Pending,
        NodeFinality::Finalized => FinalityStatus::Finalized,
        NodeFinality::Unknown => FinalityStatus::Unspecified,
    };
    FinalityUpdate {
        kind: UPDATE_KIND.to_owned(),
        cursor: event.cursor,
        intent_ref: event.intent_ref.map(|bytes| format!("0x{}", hex::encode(bytes))),
        tx_hash: format!("0x{}", hex::encode(event.tx_hash)),
        status,
        block: event.block.map(|bytes| format!("0x{}", hex::encode(bytes))),
        height: event.height,
        ts: event.ts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_statuses_translate_to_wire_statuses() {
        let event = FinalityEvent {
            cursor: "5".to_owned(),
            intent_ref: None,
            tx_hash: [0xaa; 32],
            status: NodeFinality::Unknown,
            block: Some([0x01; 32]),
            height: 9,
            ts: 1_700_000_100,
        };
        let update = encode_update(event);
        assert_eq!(update.status, FinalityStatus::Unspecified);
        assert_eq!(update.kind, UPDATE_KIND);
        assert!(update.tx_hash.starts_with("0x"));
        assert!(update.block.unwrap().starts_with("0x"));
    }
}
