//! Address layer: typed PLC addresses and the comma-list range notation.
//!
//! This module owns:
//! - AddressType / AddressToken (one PLC memory word)
//! - expand (address spec string -> ordered tokens + rejected entries)

pub mod expand;
pub mod token;

pub use expand::{Expansion, expand};
pub use token::{AddressToken, AddressType, UnknownAddressType};
