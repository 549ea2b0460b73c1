//! Per-domain request and result payloads.
//!
//! Request payloads keep addresses, amounts and hashes as raw strings;
//! the gateway's parameter codecs validate and decode them before any
//! node-service call. Result payloads use the typed forms so responses
//! serialize with stable field names.

pub mod accounts;
pub mod claimable;
pub mod creator;
pub mod escrow;
pub mod gov;
pub mod identity;
pub mod lending;
pub mod loyalty;
pub mod net;
pub mod potso;
pub mod reputation;
pub mod stake;
pub mod swap;
pub mod sync;
pub mod trade;
pub mod tx;
