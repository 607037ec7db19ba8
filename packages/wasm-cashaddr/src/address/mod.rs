//! Address encoding and decoding for eCash and Bitcoin Cash.
//!
//! Both networks share the legacy Base58Check format with Bitcoin and each has
//! its own cashaddr prefix:
//!
//! - **Base58Check**: `1...` (P2PKH, version `0x00`) and `3...` (P2SH, version `0x05`)
//! - **Cashaddr**: `ecash:q...` / `bitcoincash:q...` (P2PKH) and `:p...` (P2SH)
//!
//! Every codec decodes into an [`AddressPayload`] holding the version byte in
//! the legacy convention and the 20-byte hash, and encodes from one. Converting
//! between formats is a decode with one codec followed by an encode with another.
//!
//! # Examples
//!
//! ```rust
//! use wasm_cashaddr::address::{AddressCodec, ECASH_CASHADDR, LEGACY};
//!
//! let payload = LEGACY.decode("3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC").unwrap();
//! let address = ECASH_CASHADDR.encode(&payload).unwrap();
//! assert_eq!(address, "ecash:ppm2qsznhks23z7629mms6s4cwef74vcwv2zrv3l8h");
//! ```

mod base58check;
pub mod bits;
mod cashaddr;
pub mod checksum;

pub use base58check::{decode, decode_checked, double_digest, encode_checked, Base58CheckCodec};
pub use cashaddr::{CashAddrCodec, CASHADDR_CHARSET};

use crate::error::Result;
use std::fmt;

/// Length of the public key hash or script hash carried by an address
pub const HASH_LEN: usize = 20;

/// Trait for address encoding and decoding
pub trait AddressCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String>;
    fn decode(&self, address: &str) -> Result<AddressPayload>;
}

/// The two address types both formats can express.
///
/// The version byte tables differ between formats:
///
/// | Type  | Legacy version | Cashaddr version |
/// |-------|----------------|------------------|
/// | P2PKH | `0x00`         | `0x00`           |
/// | P2SH  | `0x05`         | `0x08`           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    P2PKH,
    P2SH,
}

impl AddressType {
    pub const fn legacy_version(self) -> u8 {
        match self {
            AddressType::P2PKH => 0x00,
            AddressType::P2SH => 0x05,
        }
    }

    /// Cashaddr version byte: type in bit 3, size bits 0-2 (0 = 20 bytes)
    pub const fn cashaddr_version(self) -> u8 {
        match self {
            AddressType::P2PKH => 0x00,
            AddressType::P2SH => 0x08,
        }
    }

    /// Any version byte other than the P2SH one maps to P2PKH.
    pub fn from_legacy_version(version: u8) -> Self {
        if version == AddressType::P2SH.legacy_version() {
            return AddressType::P2SH;
        }
        if version != AddressType::P2PKH.legacy_version() {
            tracing::warn!(version, "unsupported legacy version byte, treating as P2PKH");
        }
        AddressType::P2PKH
    }

    /// Any version byte other than the P2SH one maps to P2PKH.
    pub fn from_cashaddr_version(version: u8) -> Self {
        if version == AddressType::P2SH.cashaddr_version() {
            return AddressType::P2SH;
        }
        if version != AddressType::P2PKH.cashaddr_version() {
            tracing::warn!(version, "unsupported cashaddr version byte, treating as P2PKH");
        }
        AddressType::P2PKH
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "p2pkh",
            AddressType::P2SH => "p2sh",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded address contents, independent of the text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressPayload {
    /// Version byte in the legacy (Base58Check) convention
    pub version: u8,
    pub hash: [u8; HASH_LEN],
}

impl AddressPayload {
    pub fn new(address_type: AddressType, hash: [u8; HASH_LEN]) -> Self {
        Self {
            version: address_type.legacy_version(),
            hash,
        }
    }

    pub fn address_type(&self) -> AddressType {
        AddressType::from_legacy_version(self.version)
    }
}

// Network-specific codec parameters:
//
// Base58CheckCodec
//   - eCash and Bitcoin Cash both kept Bitcoin's version bytes (0x00 / 0x05)
//
// CashAddrCodec::new(prefix)
//   - prefix: Network prefix (e.g., "bitcoincash", "ecash")

// https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/chainparams.cpp
// https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
pub const LEGACY: Base58CheckCodec = Base58CheckCodec;

// https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
pub const BITCOIN_CASH_CASHADDR: CashAddrCodec = CashAddrCodec::new("bitcoincash");

pub const ECASH_CASHADDR: CashAddrCodec = CashAddrCodec::new("ecash");

/// Decode with `from` and re-encode with `to`
pub fn transcode(address: &str, from: &dyn AddressCodec, to: &dyn AddressCodec) -> Result<String> {
    let payload = from.decode(address)?;
    to.encode(&payload)
}
