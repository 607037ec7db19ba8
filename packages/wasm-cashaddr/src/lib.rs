pub mod address;
mod converter;
mod error;
mod networks;
pub mod wasm;

// re-export bitcoin from the miniscript crate
pub use ::miniscript::bitcoin;

pub use address::{AddressCodec, AddressPayload, AddressType};
pub use converter::{
    bitcoin_cash_to_ecash, bitcoin_cash_to_legacy, convert, decode_address,
    ecash_to_bitcoin_cash, ecash_to_legacy, legacy_to_bitcoin_cash, legacy_to_ecash,
    legacy_to_network, network_to_legacy, network_to_network, AddressFormat,
};
pub use error::{AddressError, Result};
pub use networks::Network;
pub use wasm::AddressConverterNamespace;
