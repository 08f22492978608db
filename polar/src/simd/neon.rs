//! NEON kernels (`tbl` for the fixed shuffles).
//!
//! NEON is baseline on AArch64 and its loads have no alignment requirement, so a
//! single unaligned entry point covers both access strategies.

use super::{prepare, transform, Unaligned, Vector, LANES};
use core::arch::aarch64::*;

/// One `uint8x16_t` register.
#[derive(Clone, Copy)]
pub struct Neon(uint8x16_t);

impl Vector for Neon {
    #[inline(always)]
    unsafe fn from_array(lanes: [u8; LANES]) -> Self {
        Self(vld1q_u8(lanes.as_ptr()))
    }

    #[inline(always)]
    unsafe fn load_unaligned(src: *const u8) -> Self {
        Self(vld1q_u8(src))
    }

    #[inline(always)]
    unsafe fn load_aligned(src: *const u8) -> Self {
        Self(vld1q_u8(src))
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, dst: *mut u8) {
        vst1q_u8(dst, self.0)
    }

    #[inline(always)]
    unsafe fn store_aligned(self, dst: *mut u8) {
        vst1q_u8(dst, self.0)
    }

    #[inline(always)]
    unsafe fn shift_right_lanes<const N: i32>(self) -> Self {
        Self(vextq_u8::<N>(self.0, vdupq_n_u8(0)))
    }

    #[inline(always)]
    unsafe fn and(self, other: Self) -> Self {
        Self(vandq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn xor(self, other: Self) -> Self {
        Self(veorq_u8(self.0, other.0))
    }

    #[inline(always)]
    unsafe fn shuffle(self, indices: Self) -> Self {
        Self(vqtbl1q_u8(self.0, indices.0))
    }

    #[inline(always)]
    unsafe fn concat_low_halves(self, other: Self) -> Self {
        Self(vcombine_u8(vget_low_u8(self.0), vget_low_u8(other.0)))
    }

    #[inline(always)]
    unsafe fn concat_high_halves(self, other: Self) -> Self {
        Self(vcombine_u8(vget_high_u8(self.0), vget_high_u8(other.0)))
    }
}

/// Encode with NEON registers.
///
/// # Panics
///
/// Panics if `frame_size` is not a power of two of at least [LANES], if `frame` or
/// `temp` is shorter than `frame_size`, or if the value sources run out.
pub fn encode_neon(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    prepare(frame, temp, frozen_bit_mask, frozen_bits, info_bits, frame_size);
    // SAFETY: NEON is baseline on AArch64, prepare checked the buffer lengths
    unsafe { transform::<Neon, Unaligned>(frame, temp, frame_size) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::tests::check_matches_generic;

    #[test]
    fn test_neon_matches_generic() {
        check_matches_generic(encode_neon, false);
    }

    #[test]
    fn test_neon_aligned_buffers_match_generic() {
        check_matches_generic(encode_neon, true);
    }
}
