#![deny(missing_docs)]
//! Wire-level type definitions for the NHB JSON-RPC gateway.
//!
//! This crate groups together the strongly-typed values and message
//! structures that cross the gateway's wire boundary. It provides:
//!
//! * The JSON-RPC 2.0 request/response envelope (see [`envelope`] module).
//! * The gateway error taxonomy with its code and HTTP-status mapping
//!   (see [`error`] module).
//! * Thin wrappers around primitive chain values such as bech32 account
//!   addresses and token symbols, with consistent serialization and
//!   display implementations.
//! * Per-domain request/result payloads exchanged with callers (see the
//!   [`dto`] module).
//! * Finality-stream payloads pushed over the WebSocket subscription
//!   (see [`finality`] module).
//!
//! Use these types to pass, store, and (de)serialize identifiers and
//! payloads in a type-safe way throughout your application.

pub mod address;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod finality;
pub mod token;

pub use address::Address;
pub use token::TokenSymbol;
