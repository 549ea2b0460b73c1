//! The bearer-token gate protecting auth-required methods.

use gateway_types::error::RpcError;
use secrecy::{ExposeSecret as _, SecretString};
use subtle::ConstantTimeEq as _;

/// Checks `Authorization` headers against the configured token.
///
/// When no token is configured every auth-required method is disabled:
/// the gate fails closed.
pub(crate) struct AuthGate {
    token: Option<SecretString>,
}

impl AuthGate {
    pub(crate) fn new(token: Option<SecretString>) -> Self {
        if token.is_none() {
            tracing::warn!("no auth token configured, auth-required methods are disabled");
        }
        Self { token }
    }

    /// Validates the raw `Authorization` header value.
    ///
    /// The token comparison is constant time; only the length check can
    /// short-circuit.
    pub(crate) fn check(&self, authorization: Option<&str>) -> Result<(), RpcError> {
        let Some(expected) = &self.token else {
            return Err(RpcError::unauthorized("authentication is not configured"));
        };
        let Some(header) = authorization else {
            return Err(RpcError::unauthorized("missing bearer token"));
        };
        let Some(presented) = header.strip_prefix("Bearer ") else {
            return Err(RpcError::unauthorized("malformed authorization header"));
        };
        let expected = expected.expose_secret().as_bytes();
        let presented = presented.as_bytes();
        if expected.len() == presented.len() && bool::from(expected.ct_eq(presented)) {
            Ok(())
        } else {
            Err(RpcError::unauthorized("invalid bearer token"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_gate_fails_closed() {
        let gate = AuthGate::new(None);
        assert!(gate.check(Some("Bearer anything")).is_err());
        assert!(gate.check(None).is_err());
    }

    #[test]
    fn exact_token_passes() {
        let gate = AuthGate::new(Some("sekrit".to_owned().into()));
        assert!(gate.check(Some("Bearer sekrit")).is_ok());
    }

    #[test]
    fn mismatches_and_malformed_headers_fail() {
        let gate = AuthGate::new(Some("sekrit".to_owned().into()));
        assert!(gate.check(Some("Bearer sekrit2")).is_err());
        assert!(gate.check(Some("Bearer Sekrit")).is_err());
        assert!(gate.check(Some("Basic sekrit")).is_err());
        assert!(gate.check(Some("sekrit")).is_err());
        assert!(gate.check(None).is_err());
    }
}
