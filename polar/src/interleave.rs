//! Merge frozen and information bits into frame order.

/// Returns the number of frozen positions (nonzero bytes) in `frozen_bit_mask`.
pub fn frozen_count(frozen_bit_mask: &[u8]) -> usize {
    frozen_bit_mask.iter().filter(|&&m| m != 0).count()
}

/// Returns the number of information positions (zero bytes) in `frozen_bit_mask`.
pub fn info_count(frozen_bit_mask: &[u8]) -> usize {
    frozen_bit_mask.len() - frozen_count(frozen_bit_mask)
}

/// Fill `target` by walking `frozen_bit_mask` left to right.
///
/// A nonzero mask byte takes the next unread value of `frozen_bits`, a zero byte
/// the next unread value of `info_bits`. Exactly `target.len()` positions are
/// written.
///
/// # Panics
///
/// Panics if `frozen_bit_mask` is shorter than `target`, or if either value source
/// runs out before the mask does.
pub fn interleave(target: &mut [u8], frozen_bit_mask: &[u8], frozen_bits: &[u8], info_bits: &[u8]) {
    let len = target.len();
    debug_assert!(frozen_bit_mask.len() >= len);
    let mut frozen = 0;
    let mut info = 0;
    for (slot, &mask) in target.iter_mut().zip(&frozen_bit_mask[..len]) {
        *slot = if mask != 0 {
            frozen += 1;
            frozen_bits[frozen - 1]
        } else {
            info += 1;
            info_bits[info - 1]
        };
    }
}
