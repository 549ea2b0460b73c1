//! Bech32 account addresses.
//!
//! An [`Address`] is the 20-byte account identifier consumed by the node
//! services. On the wire it is the bech32 form with the `nhb`
//! human-readable part, e.g. `nhb1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn3tn9vs`.

use std::fmt;
use std::str::FromStr;

use bech32::{Bech32, Hrp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The human-readable part of every NHB account address.
pub const ADDRESS_HRP: &str = "nhb";

/// A 20-byte account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

/// Errors decoding the textual address form.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AddressError {
    /// The string is not valid bech32.
    #[error("invalid bech32 encoding")]
    Encoding,
    /// The human-readable part is not [`ADDRESS_HRP`].
    #[error("unexpected address prefix {0:?}")]
    Prefix(String),
    /// The payload is not exactly 20 bytes.
    #[error("address payload must be 20 bytes, got {0}")]
    Length(usize),
}

impl Address {
    /// Wraps a raw 20-byte identifier.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 20-byte identifier.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data) = bech32::decode(s.trim()).map_err(|_| AddressError::Encoding)?;
        let prefix = hrp.to_lowercase();
        if prefix != ADDRESS_HRP {
            return Err(AddressError::Prefix(prefix));
        }
        let bytes: [u8; 20] = data
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::Length(data.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hrp = Hrp::parse(ADDRESS_HRP).expect("static hrp is valid");
        let encoded = bech32::encode::<Bech32>(hrp, &self.0).expect("20 bytes always encode");
        f.write_str(&encoded)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bech32() {
        let addr = Address::from_bytes([7u8; 20]);
        let text = addr.to_string();
        assert!(text.starts_with("nhb1"));
        let back: Address = text.parse().unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn rejects_foreign_prefix() {
        let hrp = Hrp::parse("btc").unwrap();
        let foreign = bech32::encode::<Bech32>(hrp, &[7u8; 20]).unwrap();
        assert!(matches!(
            foreign.parse::<Address>(),
            Err(AddressError::Prefix(_))
        ));
    }

    #[test]
    fn rejects_wrong_payload_length() {
        let hrp = Hrp::parse(ADDRESS_HRP).unwrap();
        let short = bech32::encode::<Bech32>(hrp, &[1u8; 19]).unwrap();
        assert!(matches!(
            short.parse::<Address>(),
            Err(AddressError::Length(19))
        ));
    }

    #[test]
    fn serde_uses_the_textual_form() {
        let addr = Address::from_bytes([3u8; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert!(json.starts_with("\"nhb1"));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
