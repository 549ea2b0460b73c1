//! Token symbols accepted by the gateway.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of token symbols most flows accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSymbol {
    /// The native settlement token.
    #[serde(rename = "NHB")]
    Nhb,
    /// The staking and rewards token.
    #[serde(rename = "ZNHB")]
    Znhb,
}

impl TokenSymbol {
    /// The canonical uppercase wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Nhb => "NHB",
            TokenSymbol::Znhb => "ZNHB",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The token is not part of the configured set.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown token {0:?}")]
pub struct UnknownToken(pub String);

impl FromStr for TokenSymbol {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NHB" => Ok(TokenSymbol::Nhb),
            "ZNHB" => Ok(TokenSymbol::Znhb),
            other => Err(UnknownToken(other.to_owned())),
        }
    }
}
