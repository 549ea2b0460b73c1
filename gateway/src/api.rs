//! HTTP surface of the gateway.
//!
//! - [`auth`] – Bearer-token gate with constant-time comparison.
//! - [`info`] – Health and version endpoints.
//! - [`ingress`] – The JSON-RPC endpoint at `/`.
//! - [`router`] – The frozen method table.
//! - [`stream`] – The finality WebSocket at `/ws/posFinality`.

pub(crate) mod auth;
pub(crate) mod info;
pub(crate) mod ingress;
pub(crate) mod router;
pub(crate) mod stream;
