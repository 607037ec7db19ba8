//! Base58Check encoding/decoding for legacy P2PKH and P2SH addresses.
//!
//! The Base58 alphabet conversion comes from the bitcoin crate; the checksum
//! layer (version byte, 4-byte double-SHA256 suffix) is applied here so the
//! version check and the digest are explicit.

use super::{AddressCodec, AddressPayload, HASH_LEN};
use crate::bitcoin::base58;
use crate::bitcoin::hashes::{sha256d, Hash};
use crate::error::{AddressError, Result};

const CHECKSUM_LEN: usize = 4;

/// Base58Check codec for legacy addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Base58CheckCodec;

/// SHA-256 applied twice, `sha256(sha256(data))`.
///
/// The hash engine lives on the stack for the duration of the call.
pub fn double_digest(data: &[u8]) -> [u8; 32] {
    sha256d::Hash::hash(data).to_byte_array()
}

/// Decode Base58 text to raw bytes. Leading `1`s become leading zero bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    base58::decode(text).map_err(|e| AddressError::base58(e.to_string()))
}

/// Split raw `version ++ payload ++ checksum` bytes after verifying the checksum.
fn split_checked(raw: &[u8]) -> Result<(u8, &[u8])> {
    if raw.len() < 1 + CHECKSUM_LEN {
        return Err(AddressError::base58(format!(
            "Too short: {} bytes",
            raw.len()
        )));
    }

    let (data, checksum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    let expected = double_digest(data);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(AddressError::base58("Checksum does not validate"));
    }

    Ok((data[0], &data[1..]))
}

/// Decode Base58Check text, requiring the version byte to be `expected_version`.
///
/// Returns the payload with the version byte and checksum stripped.
pub fn decode_checked(text: &str, expected_version: u8) -> Result<Vec<u8>> {
    let raw = decode(text)?;
    let (version, payload) = split_checked(&raw)?;
    if version != expected_version {
        return Err(AddressError::base58(format!(
            "Version mismatch: expected {}, got {}",
            expected_version, version
        )));
    }
    Ok(payload.to_vec())
}

/// Encode `version ++ payload ++ checksum` as Base58.
pub fn encode_checked(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = double_digest(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    base58::encode(&data)
}

impl AddressCodec for Base58CheckCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String> {
        Ok(encode_checked(payload.version, &payload.hash))
    }

    fn decode(&self, address: &str) -> Result<AddressPayload> {
        let raw = decode(address)?;
        let (version, hash) = split_checked(&raw)?;

        let hash: [u8; HASH_LEN] = hash.try_into().map_err(|_| {
            AddressError::base58(format!("Invalid hash length: {}", hash.len()))
        })?;

        Ok(AddressPayload { version, hash })
    }
}
