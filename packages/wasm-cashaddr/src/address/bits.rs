//! Regrouping of fixed-width integers (8-bit bytes to 5-bit groups and back).

/// Repack `data`, a sequence of `from`-bit values, into `to`-bit values.
///
/// The accumulator is masked to `from + to - 1` bits, which leaves room for
/// one full extra group while groups are shifted out.
///
/// Leftover bits are never dropped: if any remain after the input is consumed,
/// they are left-aligned into one final zero-padded group. Padding is not
/// validated, so the 5-to-8 direction yields trailing bytes the caller has to
/// discard.
///
/// # Example
/// Input `[0xff, 0x01]` (16 bits), 8 to 5:
/// - `11111` = 31
/// - `11100` = 28
/// - `00000` = 0
/// - remaining bit `1` padded to `10000` = 16
pub fn convert_bits(data: &[u8], from: u8, to: u8) -> Vec<u8> {
    debug_assert!((1..=8).contains(&from) && (1..=8).contains(&to));

    let mask: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u8 = 0;
    let mut result = Vec::with_capacity((data.len() * from as usize).div_ceil(to as usize));

    for &value in data {
        acc = ((acc << from) | value as u32) & max_acc;
        bits += from;

        while bits >= to {
            bits -= to;
            result.push(((acc >> bits) & mask) as u8);
        }
    }

    if bits > 0 {
        result.push(((acc << (to - bits)) & mask) as u8);
    }

    result
}
