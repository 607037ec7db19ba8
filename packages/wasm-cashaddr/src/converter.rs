//! Conversions between legacy, eCash and Bitcoin Cash address formats.
//!
//! Every conversion decodes to an [`AddressPayload`] and re-encodes it, so
//! cashaddr-to-cashaddr conversions pass through the legacy version byte
//! convention.

use std::fmt;
use std::str::FromStr;

use crate::address::{AddressCodec, AddressPayload, LEGACY};
use crate::error::{AddressError, Result};
use crate::networks::Network;

/// Address text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFormat {
    /// Base58Check, shared by both networks
    Legacy,
    /// Cashaddr with the network's prefix
    CashAddr(Network),
}

impl AddressFormat {
    pub const ALL: &'static [AddressFormat] = &[
        AddressFormat::Legacy,
        AddressFormat::CashAddr(Network::Ecash),
        AddressFormat::CashAddr(Network::BitcoinCash),
    ];

    fn codec(&self) -> &'static dyn AddressCodec {
        match self {
            AddressFormat::Legacy => &LEGACY,
            AddressFormat::CashAddr(network) => network.cashaddr_codec(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFormat::Legacy => "legacy",
            AddressFormat::CashAddr(network) => network.prefix(),
        }
    }

    /// Guess the format of `address`.
    ///
    /// An explicit prefix selects the network. Otherwise the address is tried
    /// as legacy first, then as a prefix-less cashaddr on each network; the
    /// cashaddr checksum covers the prefix, so at most one network matches.
    pub fn detect(address: &str) -> Result<AddressFormat> {
        if let Some((prefix, _)) = address.split_once(':') {
            return Network::from_prefix(&prefix.to_lowercase())
                .map(AddressFormat::CashAddr)
                .ok_or_else(|| AddressError::UnknownFormat(format!("{}:", prefix)));
        }

        AddressFormat::ALL
            .iter()
            .copied()
            .find(|format| format.codec().decode(address).is_ok())
            .ok_or_else(|| {
                AddressError::UnknownFormat(format!("Could not decode address: {}", address))
            })
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AddressFormat {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "legacy" | "base58" | "base58check" => Ok(AddressFormat::Legacy),
            _ => s.parse::<Network>().map(AddressFormat::CashAddr),
        }
    }
}

/// Decode `address` in the given format
pub fn decode_address(address: &str, format: AddressFormat) -> Result<AddressPayload> {
    format.codec().decode(address)
}

/// Convert `address` from one format to another.
///
/// Converting to the same format re-encodes the address, which normalizes
/// an upper-case or prefix-less cashaddr.
pub fn convert(address: &str, from: AddressFormat, to: AddressFormat) -> Result<String> {
    let payload = decode_address(address, from)?;
    let converted = to.codec().encode(&payload)?;
    tracing::debug!(%from, %to, address, %converted, "converted address");
    Ok(converted)
}

pub fn legacy_to_network(legacy_address: &str, network: Network) -> Result<String> {
    convert(legacy_address, AddressFormat::Legacy, AddressFormat::CashAddr(network))
}

pub fn network_to_legacy(address: &str, network: Network) -> Result<String> {
    convert(address, AddressFormat::CashAddr(network), AddressFormat::Legacy)
}

/// Convert between cashaddr networks through the legacy representation
pub fn network_to_network(address: &str, from: Network, to: Network) -> Result<String> {
    let legacy = network_to_legacy(address, from)?;
    legacy_to_network(&legacy, to)
}

pub fn legacy_to_ecash(legacy_address: &str) -> Result<String> {
    legacy_to_network(legacy_address, Network::Ecash)
}

pub fn legacy_to_bitcoin_cash(legacy_address: &str) -> Result<String> {
    legacy_to_network(legacy_address, Network::BitcoinCash)
}

pub fn ecash_to_legacy(ecash_address: &str) -> Result<String> {
    network_to_legacy(ecash_address, Network::Ecash)
}

pub fn bitcoin_cash_to_legacy(bch_address: &str) -> Result<String> {
    network_to_legacy(bch_address, Network::BitcoinCash)
}

pub fn ecash_to_bitcoin_cash(ecash_address: &str) -> Result<String> {
    network_to_network(ecash_address, Network::Ecash, Network::BitcoinCash)
}

pub fn bitcoin_cash_to_ecash(bch_address: &str) -> Result<String> {
    network_to_network(bch_address, Network::BitcoinCash, Network::Ecash)
}
