//! Typed PLC memory address.
//!
//! Example: "CIO4012"  =>  AddressToken { kind: AddressType::Cio, number: 4012 }

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Memory region a PLC word lives in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AddressType {
    #[default]
    #[serde(rename = "CIO", alias = "cio")]
    Cio,
    #[serde(rename = "W", alias = "w")]
    W,
    #[serde(rename = "D", alias = "d")]
    D,
    #[serde(rename = "H", alias = "h")]
    H,
}

impl AddressType {
    pub const ALL: [AddressType; 4] = [Self::Cio, Self::W, Self::D, Self::H];

    /// Canonical upper-case prefix as written in PLC address strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cio => "CIO",
            Self::W => "W",
            Self::D => "D",
            Self::H => "H",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address type {0:?} (expected one of CIO, W, D, H)")]
pub struct UnknownAddressType(pub String);

impl FromStr for AddressType {
    type Err = UnknownAddressType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAddressType(s.to_string()))
    }
}

/// One PLC memory word. Ordering is by type, then number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AddressToken {
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub number: u64,
}

impl AddressToken {
    pub fn new(kind: AddressType, number: u64) -> Self {
        Self { kind, number }
    }
}

impl fmt::Display for AddressToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.number)
    }
}
