//! Scalar reference encoder.

use crate::{interleave::interleave, stage::butterfly_stage, Stage};

/// Encode a frame one butterfly stage at a time.
///
/// `temp` receives the interleaved frame and is refreshed from `frame` after every
/// stage. Only the first `frame_size` symbols of either buffer are touched.
///
/// `frame_size` must be a power of two and every buffer must hold at least
/// `frame_size` entries (`frozen_bits` and `info_bits` at least as many as the mask
/// has frozen and information positions).
///
/// # Panics
///
/// Panics if `frame` or `temp` is shorter than `frame_size`, or if the value sources
/// run out.
pub fn encode(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    debug_assert!(frame_size.is_power_of_two());
    let n = frame_size as usize;
    let (frame, temp) = (&mut frame[..n], &mut temp[..n]);

    interleave(temp, frozen_bit_mask, frozen_bits, info_bits);
    if n == 1 {
        // No stages: the interleaved symbol is the codeword.
        frame.copy_from_slice(temp);
        return;
    }
    for stage in Stage::all(frame_size) {
        butterfly_stage(frame, temp, stage.num_branches, stage.frame_half);
        temp.copy_from_slice(frame);
    }
}
