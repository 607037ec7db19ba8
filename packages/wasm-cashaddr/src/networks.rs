//! Networks that share the cashaddr address format
use std::fmt;
use std::str::FromStr;

use crate::address::{CashAddrCodec, BITCOIN_CASH_CASHADDR, ECASH_CASHADDR};
use crate::error::AddressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    // https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/chainparams.cpp
    Ecash,

    // https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
    BitcoinCash,
}

impl Network {
    /// Array containing all network variants
    pub const ALL: &'static [Network] = &[Network::Ecash, Network::BitcoinCash];

    /// Returns the canonical string name of this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ecash => "Ecash",
            Network::BitcoinCash => "BitcoinCash",
        }
    }

    pub fn from_name_exact(name: &str) -> Option<Network> {
        match name {
            "Ecash" => Some(Network::Ecash),
            "BitcoinCash" => Some(Network::BitcoinCash),
            _ => None,
        }
    }

    /// Convert from a coin ticker (`xec`, `bch`) to a Network enum value.
    pub fn from_coin_name(name: &str) -> Option<Network> {
        match name {
            "xec" | "bcha" => Some(Network::Ecash),
            "bch" => Some(Network::BitcoinCash),
            _ => None,
        }
    }

    pub fn to_coin_name(&self) -> &'static str {
        match self {
            Network::Ecash => "xec",
            Network::BitcoinCash => "bch",
        }
    }

    /// Look a network up by its cashaddr prefix (`ecash`, `bitcoincash`).
    pub fn from_prefix(prefix: &str) -> Option<Network> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.prefix() == prefix)
    }

    /// Human-readable cashaddr prefix, without the `:` separator
    pub fn prefix(&self) -> &'static str {
        self.cashaddr_codec().prefix
    }

    pub fn cashaddr_codec(&self) -> &'static CashAddrCodec {
        match self {
            Network::Ecash => &ECASH_CASHADDR,
            Network::BitcoinCash => &BITCOIN_CASH_CASHADDR,
        }
    }

    /// Lenient lookup used by the parsing surfaces: canonical name, coin
    /// ticker or cashaddr prefix, case-insensitive for the latter two.
    pub fn from_any_name(name: &str) -> Option<Network> {
        if let Some(network) = Network::from_name_exact(name) {
            return Some(network);
        }
        let normalized = name.to_lowercase();
        Network::from_coin_name(&normalized).or_else(|| Network::from_prefix(&normalized))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_any_name(s).ok_or_else(|| AddressError::UnknownFormat(s.to_string()))
    }
}
