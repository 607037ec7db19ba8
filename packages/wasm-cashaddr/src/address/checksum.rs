//! The cashaddr BCH checksum.
//!
//! A 40-bit linear code over 5-bit groups, defined in
//! https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//!
//! Unlike Bech32, the prefix is expanded using only the lower 5 bits of each
//! character followed by a single zero separator, and the checksum is 8 groups
//! long instead of 6.

/// Number of 5-bit groups in a cashaddr checksum (40 bits)
pub const CHECKSUM_LEN: usize = 8;

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Expand a cashaddr prefix for checksum calculation.
///
/// ```text
/// prefix = "bitcoincash"
/// expanded = [b & 31 for b in prefix] + [0]
///          = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] + [0]
/// ```
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut result: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    result.push(0);
    result
}

/// Compute the cashaddr polymod over a sequence of 5-bit values.
///
/// The state starts at 1 and the result is XORed with 1, so a valid
/// `prefix ++ payload ++ checksum` sequence evaluates to exactly 0.
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ (d as u64);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

/// Compute the 8 checksum groups for `payload` under `prefix_expansion`,
/// most significant group first.
pub fn checksum(prefix_expansion: &[u8], payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut data = Vec::with_capacity(prefix_expansion.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix_expansion);
    data.extend_from_slice(payload);
    data.extend_from_slice(&[0; CHECKSUM_LEN]);

    let poly = polymod(&data);

    let mut groups = [0u8; CHECKSUM_LEN];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = ((poly >> (5 * (7 - i))) & 0x1f) as u8;
    }
    groups
}

/// Check `payload_with_checksum` (data groups followed by the 8 checksum
/// groups) against `prefix_expansion`.
pub fn verify_checksum(prefix_expansion: &[u8], payload_with_checksum: &[u8]) -> bool {
    let mut data = Vec::with_capacity(prefix_expansion.len() + payload_with_checksum.len());
    data.extend_from_slice(prefix_expansion);
    data.extend_from_slice(payload_with_checksum);
    polymod(&data) == 0
}
