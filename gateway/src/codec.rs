//! Parameter codecs shared by every method handler.
//!
//! Each codec validates and decodes one positional parameter shape. The
//! returned [`CodecError`] message is safe to echo to the caller;
//! anything sensitive stays out of it.

use std::time::Duration;

use gateway_types::dto::tx::CallerMeta;
use gateway_types::{Address, TokenSymbol};
use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Tolerated clock skew for deadline checks, seconds.
pub(crate) const DEADLINE_SKEW_SECS: u64 = 5;
/// Upper bound for any fee or slippage expressed in basis points.
pub(crate) const MAX_BPS: u32 = 10_000;
/// Domain separator for the alias digest.
const ALIAS_CONTEXT: &str = "nhb-gateway 2024 identity alias v1";

/// A caller-safe decoding error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
}

impl CodecError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CodecError> for gateway_types::error::RpcError {
    fn from(err: CodecError) -> Self {
        gateway_types::error::RpcError::invalid_params(err.message)
    }
}

/// Decodes a bech32 account address.
pub fn address(raw: &str) -> Result<Address, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("address must not be empty"));
    }
    trimmed
        .parse()
        .map_err(|err| CodecError::new(format!("invalid address: {err}")))
}

fn digits(raw: &str, what: &str) -> Result<BigUint, CodecError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::new(format!(
            "{what} must be a base-10 integer"
        )));
    }
    raw.parse()
        .map_err(|_| CodecError::new(format!("{what} must be a base-10 integer")))
}

/// Decodes a strictly positive base-10 amount. No sign is accepted.
pub fn amount(raw: &str) -> Result<BigUint, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("amount must not be empty"));
    }
    let value = digits(trimmed, "amount")?;
    if value == BigUint::default() {
        return Err(CodecError::new("amount must be positive"));
    }
    Ok(value)
}

/// Decodes a non-negative base-10 amount. A single leading `+` is
/// accepted.
pub fn non_negative_amount(raw: &str) -> Result<BigUint, CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("amount must not be empty"));
    }
    digits(trimmed.strip_prefix('+').unwrap_or(trimmed), "amount")
}

/// Decodes a 32-byte identifier from 64 hex chars with an optional
/// `0x` prefix.
pub fn identifier(raw: &str) -> Result<[u8; 32], CodecError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.len() != 64 {
        return Err(CodecError::new("identifier must be 32 bytes of hex"));
    }
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|_| CodecError::new("identifier must be 32 bytes of hex"))?;
    Ok(out)
}

/// Decodes optional metadata: `0x`-prefixed, even length, at most 32
/// bytes, zero-padded to 32 bytes.
pub fn meta_hex(raw: &str) -> Result<[u8; 32], CodecError> {
    let trimmed = raw.trim();
    let Some(digits) = trimmed.strip_prefix("0x") else {
        return Err(CodecError::new("meta must be 0x-prefixed hex"));
    };
    if digits.len() % 2 != 0 {
        return Err(CodecError::new("meta hex must have even length"));
    }
    let bytes = hex::decode(digits).map_err(|_| CodecError::new("meta must be valid hex"))?;
    if bytes.len() > 32 {
        return Err(CodecError::new("meta must be at most 32 bytes"));
    }
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(&bytes);
    Ok(out)
}

/// Decodes a hex-encoded signature of arbitrary length.
pub fn signature(raw: &str) -> Result<Vec<u8>, CodecError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(CodecError::new("signature must not be empty"));
    }
    hex::decode(digits).map_err(|_| CodecError::new("signature must be valid hex"))
}

/// The canonical alias → identifier derivation.
///
/// Aliases are trimmed and lowercased before hashing so that display
/// variants of the same alias resolve to the same identifier.
pub fn alias_id(alias: &str) -> [u8; 32] {
    let normalised = alias.trim().to_lowercase();
    blake3::derive_key(ALIAS_CONTEXT, normalised.as_bytes())
}

/// Validates an alias: non-empty, at most 32 chars, lowercase
/// alphanumerics plus `.`, `_` and `-` after normalisation.
pub fn alias(raw: &str) -> Result<String, CodecError> {
    let normalised = raw.trim().to_lowercase();
    if normalised.is_empty() {
        return Err(CodecError::new("alias must not be empty"));
    }
    if normalised.len() > 32 {
        return Err(CodecError::new("alias must be at most 32 characters"));
    }
    if !normalised
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(CodecError::new("alias contains unsupported characters"));
    }
    Ok(normalised)
}

/// Decodes a recipient hint: a 64-char hex identifier, or an alias that
/// is normalised and hashed through [`alias_id`].
pub fn recipient_hint(raw: &str) -> Result<[u8; 32], CodecError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodecError::new("recipient must not be empty"));
    }
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.len() == 64 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return identifier(trimmed);
    }
    Ok(alias_id(&alias(trimmed)?))
}

/// Decodes a token symbol from the configured set.
pub fn token(raw: &str) -> Result<TokenSymbol, CodecError> {
    raw.parse()
        .map_err(|err| CodecError::new(format!("{err}")))
}

/// Decodes a closed-set enum value: trimmed, lowercased, member of
/// `allowed`.
pub fn closed_enum(raw: &str, allowed: &[&str]) -> Result<String, CodecError> {
    let normalised = raw.trim().to_lowercase();
    if allowed.contains(&normalised.as_str()) {
        Ok(normalised)
    } else {
        Err(CodecError::new(format!(
            "value must be one of {}",
            allowed.join(", ")
        )))
    }
}

/// Accepts a parameter either as a bare string or as an object with the
/// single field `field`.
pub fn string_or_object(value: Value, field: &str) -> Result<String, CodecError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::String(s)) => Ok(s),
            _ => Err(CodecError::new(format!(
                "expected a string or an object with the {field:?} field"
            ))),
        },
        _ => Err(CodecError::new(format!(
            "expected a string or an object with the {field:?} field"
        ))),
    }
}

/// Attempts the strict typed form first and falls back to wrapping a
/// bare string into the object form under `field`.
pub fn dual_decode<T: DeserializeOwned>(value: Value, field: &str) -> Result<T, CodecError> {
    let wrapped = match value {
        Value::String(s) => {
            let mut map = serde_json::Map::new();
            map.insert(field.to_owned(), Value::String(s));
            Value::Object(map)
        }
        other => other,
    };
    serde_json::from_value(wrapped)
        .map_err(|err| CodecError::new(format!("invalid parameter object: {err}")))
}

/// Ensures a basis-point value does not exceed [`MAX_BPS`].
pub fn ensure_bps(bps: u32, what: &str) -> Result<(), CodecError> {
    if bps > MAX_BPS {
        return Err(CodecError::new(format!(
            "{what} must be at most {MAX_BPS} basis points"
        )));
    }
    Ok(())
}

/// Ensures a deadline lies in the future, tolerating
/// [`DEADLINE_SKEW_SECS`] of clock skew.
pub fn ensure_future_deadline(deadline: u64, now: u64) -> Result<(), CodecError> {
    if deadline + DEADLINE_SKEW_SECS < now {
        return Err(CodecError::new("deadline must be in the future"));
    }
    Ok(())
}

/// Resolves caller metadata into an absolute expiry.
///
/// When a TTL limit is configured, a relative TTL must not exceed it
/// and an absolute expiry must not exceed `now + limit`. Without a
/// configured limit any value, including a zero TTL, is accepted. An
/// explicit expiry wins over a TTL when both are present.
pub fn resolve_expiry(
    meta: Option<&CallerMeta>,
    now: u64,
    limit: Option<Duration>,
) -> Result<Option<u64>, CodecError> {
    let Some(meta) = meta else {
        return Ok(None);
    };
    let limit_secs = limit.map(|l| l.as_secs());
    if let Some(expiry) = meta.expiry {
        if let Some(limit) = limit_secs
            && expiry > now + limit
        {
            return Err(CodecError::new("expiry exceeds maximum ttl"));
        }
        return Ok(Some(expiry));
    }
    if let Some(ttl) = meta.ttl_seconds {
        if let Some(limit) = limit_secs
            && ttl > limit
        {
            return Err(CodecError::new("ttl exceeds limit"));
        }
        return Ok(Some(now + ttl));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_requires_content() {
        assert!(address("   ").is_err());
        let addr = Address::from_bytes([9u8; 20]);
        assert_eq!(address(&format!("  {addr}  ")).unwrap(), addr);
    }

    #[test]
    fn amount_rejects_zero_and_signs() {
        assert!(amount("0").is_err());
        assert!(amount("-5").is_err());
        assert!(amount("+5").is_err());
        assert!(amount("").is_err());
        assert_eq!(amount(" 42 ").unwrap(), BigUint::from(42u32));
        // larger than u128
        assert!(amount("340282366920938463463374607431768211456").is_ok());
    }

    #[test]
    fn non_negative_amount_allows_zero_and_one_plus() {
        assert_eq!(non_negative_amount("0").unwrap(), BigUint::default());
        assert_eq!(non_negative_amount("+7").unwrap(), BigUint::from(7u32));
        assert!(non_negative_amount("++7").is_err());
        assert!(non_negative_amount("-1").is_err());
    }

    #[test]
    fn identifier_accepts_optional_prefix() {
        let hex64 = "ab".repeat(32);
        assert_eq!(identifier(&hex64).unwrap(), [0xab; 32]);
        assert_eq!(identifier(&format!("0x{hex64}")).unwrap(), [0xab; 32]);
        assert!(identifier(&hex64[..62]).is_err());
        assert!(identifier(&format!("zz{}", &hex64[2..])).is_err());
    }

    #[test]
    fn meta_hex_is_zero_padded() {
        let decoded = meta_hex("0xabcd").unwrap();
        assert_eq!(&decoded[..2], &[0xab, 0xcd]);
        assert_eq!(&decoded[2..], &[0u8; 30]);
        assert!(meta_hex("abcd").is_err());
        assert!(meta_hex("0xabc").is_err());
        assert!(meta_hex(&format!("0x{}", "ab".repeat(33))).is_err());
    }

    #[test]
    fn recipient_hint_takes_hex_or_alias() {
        let hex64 = "11".repeat(32);
        assert_eq!(recipient_hint(&hex64).unwrap(), [0x11; 32]);
        let from_alias = recipient_hint("Alice").unwrap();
        assert_eq!(from_alias, alias_id("alice"));
        assert_ne!(from_alias, [0u8; 32]);
        assert!(recipient_hint("").is_err());
    }

    #[test]
    fn alias_normalisation_is_stable() {
        assert_eq!(alias("  Alice ").unwrap(), "alice");
        assert_eq!(alias_id(" ALICE"), alias_id("alice  "));
        assert!(alias("with space").is_err());
        assert!(alias(&"a".repeat(33)).is_err());
    }

    #[test]
    fn closed_enum_membership() {
        assert_eq!(
            closed_enum(" Release ", &["release", "refund"]).unwrap(),
            "release"
        );
        assert!(closed_enum("burn", &["release", "refund"]).is_err());
    }

    #[test]
    fn dual_decode_accepts_both_shapes() {
        #[derive(serde::Deserialize)]
        struct P {
            alias: String,
        }
        let strict: P = dual_decode(serde_json::json!({"alias": "bob"}), "alias").unwrap();
        assert_eq!(strict.alias, "bob");
        let bare: P = dual_decode(Value::String("bob".to_owned()), "alias").unwrap();
        assert_eq!(bare.alias, "bob");
    }

    #[test]
    fn deadline_skew_is_tolerated() {
        assert!(ensure_future_deadline(100, 100).is_ok());
        assert!(ensure_future_deadline(96, 100).is_ok());
        assert!(ensure_future_deadline(94, 100).is_err());
    }

    #[test]
    fn ttl_within_limit_resolves_relative_expiry() {
        let meta = CallerMeta {
            ttl_seconds: Some(30),
            expiry: None,
        };
        let resolved = resolve_expiry(Some(&meta), 1_000, Some(Duration::from_secs(60))).unwrap();
        assert_eq!(resolved, Some(1_030));
    }

    #[test]
    fn ttl_above_limit_is_rejected() {
        let meta = CallerMeta {
            ttl_seconds: Some(120),
            expiry: None,
        };
        let err =
            resolve_expiry(Some(&meta), 1_000, Some(Duration::from_secs(60))).unwrap_err();
        assert!(err.to_string().contains("ttl exceeds"));
    }

    #[test]
    fn absolute_expiry_above_limit_is_rejected() {
        let meta = CallerMeta {
            ttl_seconds: None,
            expiry: Some(2_000),
        };
        let err =
            resolve_expiry(Some(&meta), 1_000, Some(Duration::from_secs(60))).unwrap_err();
        assert!(err.to_string().contains("maximum ttl"));
    }

    #[test]
    fn no_limit_accepts_any_ttl() {
        let meta = CallerMeta {
            ttl_seconds: Some(0),
            expiry: None,
        };
        assert_eq!(
            resolve_expiry(Some(&meta), 1_000, None).unwrap(),
            Some(1_000)
        );
        let meta = CallerMeta {
            ttl_seconds: Some(1_000_000),
            expiry: None,
        };
        assert_eq!(
            resolve_expiry(Some(&meta), 1_000, None).unwrap(),
            Some(1_001_000)
        );
    }

    #[test]
    fn explicit_expiry_wins_over_ttl() {
        let meta = CallerMeta {
            ttl_seconds: Some(10),
            expiry: Some(5_000),
        };
        assert_eq!(resolve_expiry(Some(&meta), 1_000, None).unwrap(), Some(5_000));
    }
}
