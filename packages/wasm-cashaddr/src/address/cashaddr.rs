//! Cashaddr encoding/decoding for Bitcoin Cash and eCash.
//!
//! Spec: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//!
//! Layout of an encoded address:
//!
//! ```text
//! prefix ":" base32(convert_bits(version_byte ++ hash, 8, 5) ++ checksum)
//! ```
//!
//! Only `Fe32` is taken from the bech32 crate, for the character table. Bit
//! packing, prefix expansion and the polymod are cashaddr-specific and live in
//! [`super::bits`] and [`super::checksum`].
//!
//! Decoding regroups the data part, checksum included, back to bytes. With a
//! 20-byte hash that gives 27 bytes: the version byte, the hash, then 6 bytes
//! of checksum and padding which are dropped.

use super::bits::convert_bits;
use super::checksum::{checksum, expand_prefix, verify_checksum, CHECKSUM_LEN};
use super::{AddressCodec, AddressPayload, AddressType, HASH_LEN};
use crate::error::{AddressError, Result};
use bech32::Fe32;

/// Base32 alphabet shared with Bech32
pub const CASHADDR_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const SEPARATOR: char = ':';

/// Bytes after the hash once the data part is regrouped to 8 bits
const CHECKSUM_TAIL_LEN: usize = 6;

/// CashAddr codec for one network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashAddrCodec {
    /// Cashaddr prefix (e.g., "bitcoincash", "ecash")
    pub prefix: &'static str,
}

impl CashAddrCodec {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Strip and check the prefix. An address without a separator is assumed
    /// to have had its prefix omitted.
    fn strip_prefix<'a>(&self, address: &'a str) -> Result<&'a str> {
        match address.split_once(SEPARATOR) {
            Some((prefix, rest)) if prefix.eq_ignore_ascii_case(self.prefix) => Ok(rest),
            Some((prefix, _)) => Err(AddressError::PrefixMismatch {
                found: prefix.to_string(),
                expected: self.prefix.to_string(),
            }),
            None => Ok(address),
        }
    }
}

fn to_base32(values: &[u8]) -> Result<String> {
    values
        .iter()
        .map(|&value| {
            Fe32::try_from(value)
                .map(Fe32::to_char)
                .map_err(|_| AddressError::cashaddr("Invalid 5-bit value"))
        })
        .collect()
}

fn from_base32(data: &str) -> Result<Vec<u8>> {
    data.chars()
        .map(|ch| {
            Fe32::from_char(ch)
                .map(Fe32::to_u8)
                .map_err(|_| AddressError::cashaddr(format!("Invalid character: {}", ch)))
        })
        .collect()
}

/// Encode a payload under `prefix`
fn encode_cashaddr(payload: &AddressPayload, prefix: &str) -> Result<String> {
    let version_byte = payload.address_type().cashaddr_version();

    let mut bytes = Vec::with_capacity(1 + HASH_LEN);
    bytes.push(version_byte);
    bytes.extend_from_slice(&payload.hash);

    let mut data = convert_bits(&bytes, 8, 5);
    let checksum = checksum(&expand_prefix(prefix), &data);
    data.extend_from_slice(&checksum);

    Ok(format!("{}{}{}", prefix, SEPARATOR, to_base32(&data)?))
}

/// Decode the data part of an address whose prefix has already been checked
fn decode_cashaddr(data: &str, prefix: &str) -> Result<AddressPayload> {
    let values = from_base32(&data.to_lowercase())?;
    if values.len() <= CHECKSUM_LEN {
        return Err(AddressError::cashaddr(format!(
            "Truncated payload: {} characters",
            values.len()
        )));
    }

    // Not checked by the reference decoder, which trusts the data part
    if !verify_checksum(&expand_prefix(prefix), &values) {
        return Err(AddressError::cashaddr("Invalid checksum"));
    }

    let bytes = convert_bits(&values, 5, 8);
    if bytes.len() < 1 + CHECKSUM_TAIL_LEN {
        return Err(AddressError::cashaddr("Truncated payload"));
    }

    let version_byte = bytes[0];
    let hash = &bytes[1..bytes.len() - CHECKSUM_TAIL_LEN];
    let hash: [u8; HASH_LEN] = hash.try_into().map_err(|_| {
        AddressError::cashaddr(format!("Invalid hash length: {}", hash.len()))
    })?;

    let address_type = AddressType::from_cashaddr_version(version_byte);
    Ok(AddressPayload::new(address_type, hash))
}

impl AddressCodec for CashAddrCodec {
    fn encode(&self, payload: &AddressPayload) -> Result<String> {
        encode_cashaddr(payload, self.prefix)
    }

    fn decode(&self, address: &str) -> Result<AddressPayload> {
        let data = self.strip_prefix(address)?;

        // Upper case is accepted, mixed case within the data part is not
        let has_lower = data.chars().any(|c| c.is_lowercase());
        let has_upper = data.chars().any(|c| c.is_uppercase());
        if has_lower && has_upper {
            return Err(AddressError::cashaddr("Mixed case address"));
        }

        decode_cashaddr(data, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vector: 20-byte P2PKH payload
    const TEST_HASH_20: &str = "F5BF48B397DAE70BE82B3CCA4793F8EB2B6CDAC9";

    const BITCOIN_CASH: CashAddrCodec = CashAddrCodec::new("bitcoincash");
    const ECASH: CashAddrCodec = CashAddrCodec::new("ecash");

    fn payload(hash_hex: &str, address_type: AddressType) -> AddressPayload {
        AddressPayload::new(address_type, hex::decode(hash_hex).unwrap().try_into().unwrap())
    }

    #[test]
    fn test_charset_matches_fe32() {
        for (i, ch) in CASHADDR_CHARSET.chars().enumerate() {
            assert_eq!(Fe32::try_from(i as u8).unwrap().to_char(), ch);
        }
    }

    #[test]
    fn test_spec_vector_bitcoincash_p2pkh_20() {
        let payload = payload(TEST_HASH_20, AddressType::P2PKH);

        let address = encode_cashaddr(&payload, "bitcoincash").unwrap();
        assert_eq!(
            address,
            "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
        );

        let decoded = BITCOIN_CASH.decode(&address).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_spec_vector_pref_p2sh_20() {
        let payload = payload(TEST_HASH_20, AddressType::P2SH);
        let address = encode_cashaddr(&payload, "pref").unwrap();
        assert_eq!(address, "pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5");

        let decoded = CashAddrCodec::new("pref").decode(&address).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_legacy_hash_translation() {
        let test_cases = vec![
            // (hash_hex, address_type, expected_cashaddr)
            // 1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu
            (
                "76a04053bda0a88bda5177b86a15c3b29f559873",
                AddressType::P2PKH,
                "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a",
            ),
            // 1KXrWXciRDZUpQwQmuM1DbwsKDLYAYsVLR
            (
                "cb481232299cd5743151ac4b2d63ae198e7bb0a9",
                AddressType::P2PKH,
                "bitcoincash:qr95sy3j9xwd2ap32xkykttr4cvcu7as4y0qverfuy",
            ),
            // 16w1D5WRVKJuZUsSRzdLp9w3YGcgoxDXb
            (
                "011f28e473c95f4013d7d53ec5fbc3b42df8ed10",
                AddressType::P2PKH,
                "bitcoincash:qqq3728yw0y47sqn6l2na30mcw6zm78dzqre909m2r",
            ),
            // 3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC
            (
                "76a04053bda0a88bda5177b86a15c3b29f559873",
                AddressType::P2SH,
                "bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq",
            ),
            // 3LDsS579y7sruadqu11beEJoTjdFiFCdX4
            (
                "cb481232299cd5743151ac4b2d63ae198e7bb0a9",
                AddressType::P2SH,
                "bitcoincash:pr95sy3j9xwd2ap32xkykttr4cvcu7as4yc93ky28e",
            ),
            // 31nwvkZwyPdgzjBJZXfDmSWsC4ZLKpYyUw
            (
                "011f28e473c95f4013d7d53ec5fbc3b42df8ed10",
                AddressType::P2SH,
                "bitcoincash:pqq3728yw0y47sqn6l2na30mcw6zm78dzq5ucqzc37",
            ),
        ];

        for (hash_hex, address_type, expected) in test_cases {
            let payload = payload(hash_hex, address_type);
            let address = BITCOIN_CASH.encode(&payload).unwrap();
            assert_eq!(address, expected, "Failed for hash {}", hash_hex);

            let decoded = BITCOIN_CASH.decode(&address).unwrap();
            assert_eq!(hex::encode(decoded.hash), hash_hex);
            assert_eq!(decoded.address_type(), address_type);
        }
    }

    #[test]
    fn test_ecash_vectors() {
        let p2sh = payload("76a04053bda0a88bda5177b86a15c3b29f559873", AddressType::P2SH);
        assert_eq!(
            ECASH.encode(&p2sh).unwrap(),
            "ecash:ppm2qsznhks23z7629mms6s4cwef74vcwv2zrv3l8h"
        );
    }

    #[test]
    fn test_address_without_prefix() {
        let full_address = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
        let no_prefix = "qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";

        assert_eq!(
            BITCOIN_CASH.decode(full_address).unwrap(),
            BITCOIN_CASH.decode(no_prefix).unwrap()
        );
    }

    #[test]
    fn test_uppercase_address() {
        let uppercase = "BITCOINCASH:QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2";
        let decoded = BITCOIN_CASH.decode(uppercase).unwrap();

        assert_eq!(hex::encode_upper(decoded.hash), TEST_HASH_20);
        assert_eq!(decoded.address_type(), AddressType::P2PKH);
    }

    #[test]
    fn test_mixed_case_rejected() {
        let mixed_case = "bitcoincash:Qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
        assert!(matches!(
            BITCOIN_CASH.decode(mixed_case),
            Err(AddressError::MalformedCashAddr(_))
        ));
    }

    #[test]
    fn test_wrong_prefix() {
        let err = BITCOIN_CASH
            .decode("foo:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq")
            .unwrap_err();
        assert_eq!(
            err,
            AddressError::PrefixMismatch {
                found: "foo".to_string(),
                expected: "bitcoincash".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("foo:"));
        assert!(message.contains("bitcoincash:"));
    }

    #[test]
    fn test_prefix_case_differs_from_data() {
        let err = BITCOIN_CASH
            .decode("Foo:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq")
            .unwrap_err();
        assert_eq!(
            err,
            AddressError::PrefixMismatch {
                found: "Foo".to_string(),
                expected: "bitcoincash".to_string(),
            }
        );

        let err = ECASH
            .decode("BITCOINCASH:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq")
            .unwrap_err();
        assert_eq!(
            err,
            AddressError::PrefixMismatch {
                found: "BITCOINCASH".to_string(),
                expected: "ecash".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("BITCOINCASH:"));
        assert!(message.contains("ecash:"));

        // the expected prefix in upper case still matches
        let decoded = ECASH
            .decode("ECASH:ppm2qsznhks23z7629mms6s4cwef74vcwv2zrv3l8h")
            .unwrap();
        assert_eq!(
            hex::encode(decoded.hash),
            "76a04053bda0a88bda5177b86a15c3b29f559873"
        );
        assert_eq!(decoded.address_type(), AddressType::P2SH);
    }

    #[test]
    fn test_other_network_prefix() {
        let address = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
        assert!(matches!(
            ECASH.decode(address),
            Err(AddressError::PrefixMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_checksum() {
        let bad_address = "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg3";
        assert!(matches!(
            BITCOIN_CASH.decode(bad_address),
            Err(AddressError::MalformedCashAddr(_))
        ));
    }

    #[test]
    fn test_checksum_of_other_network_rejected_without_prefix() {
        // an ecash data part is not valid under the bitcoincash prefix
        let ecash_data = "ppm2qsznhks23z7629mms6s4cwef74vcwv2zrv3l8h";
        assert!(matches!(
            BITCOIN_CASH.decode(ecash_data),
            Err(AddressError::MalformedCashAddr(_))
        ));
        assert!(ECASH.decode(ecash_data).is_ok());
    }

    #[test]
    fn test_invalid_character() {
        // 'b' is not in the base32 charset used by cashaddr
        let bad_address = "bitcoincash:br6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2";
        assert!(matches!(
            BITCOIN_CASH.decode(bad_address),
            Err(AddressError::MalformedCashAddr(_))
        ));
    }

    #[test]
    fn test_truncated_payload() {
        assert!(matches!(
            BITCOIN_CASH.decode("bitcoincash:qr6m7j9n"),
            Err(AddressError::MalformedCashAddr(_))
        ));
        assert!(matches!(
            BITCOIN_CASH.decode("bitcoincash:"),
            Err(AddressError::MalformedCashAddr(_))
        ));
    }

    #[test]
    fn test_valid_checksum_wrong_length() {
        // a correctly checksummed data part carrying a 16-byte hash
        let mut data = convert_bits(&[0u8; 17], 8, 5);
        let checksum = checksum(&expand_prefix("ecash"), &data);
        data.extend_from_slice(&checksum);
        let address = format!("ecash:{}", to_base32(&data).unwrap());

        assert!(matches!(
            ECASH.decode(&address),
            Err(AddressError::MalformedCashAddr(_))
        ));
    }
}
