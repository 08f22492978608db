//! SSSE3 kernels (`pshufb` for the fixed shuffles).

use super::{prepare, transform, Aligned, Unaligned, Vector, LANES};

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// One `__m128i` register.
#[derive(Clone, Copy)]
pub struct Ssse3(__m128i);

impl Vector for Ssse3 {
    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn from_array(lanes: [u8; LANES]) -> Self {
        Self(_mm_loadu_si128(lanes.as_ptr().cast()))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn load_unaligned(src: *const u8) -> Self {
        Self(_mm_loadu_si128(src.cast()))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn load_aligned(src: *const u8) -> Self {
        Self(_mm_load_si128(src.cast()))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn store_unaligned(self, dst: *mut u8) {
        _mm_storeu_si128(dst.cast(), self.0)
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn store_aligned(self, dst: *mut u8) {
        _mm_store_si128(dst.cast(), self.0)
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn shift_right_lanes<const N: i32>(self) -> Self {
        Self(_mm_bsrli_si128::<N>(self.0))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn and(self, other: Self) -> Self {
        Self(_mm_and_si128(self.0, other.0))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn xor(self, other: Self) -> Self {
        Self(_mm_xor_si128(self.0, other.0))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn shuffle(self, indices: Self) -> Self {
        Self(_mm_shuffle_epi8(self.0, indices.0))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn concat_low_halves(self, other: Self) -> Self {
        Self(_mm_unpacklo_epi64(self.0, other.0))
    }

    #[inline]
    #[target_feature(enable = "ssse3")]
    unsafe fn concat_high_halves(self, other: Self) -> Self {
        Self(_mm_unpackhi_epi64(self.0, other.0))
    }
}

/// Encode with SSSE3 registers and unaligned loads and stores.
///
/// # Safety
///
/// Caller must ensure SSSE3 is available.
///
/// # Panics
///
/// Panics if `frame_size` is not a power of two of at least [LANES], if `frame` or
/// `temp` is shorter than `frame_size`, or if the value sources run out.
#[target_feature(enable = "ssse3")]
pub unsafe fn encode_ssse3(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    prepare(frame, temp, frozen_bit_mask, frozen_bits, info_bits, frame_size);
    transform::<Ssse3, Unaligned>(frame, temp, frame_size);
}

/// Encode with SSSE3 registers and aligned loads and stores.
///
/// # Safety
///
/// Caller must ensure SSSE3 is available and that `frame` and `temp` both start
/// at a [LANES]-aligned address.
///
/// # Panics
///
/// As [encode_ssse3].
#[target_feature(enable = "ssse3")]
pub unsafe fn encode_ssse3_aligned(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    prepare(frame, temp, frozen_bit_mask, frozen_bits, info_bits, frame_size);
    transform::<Ssse3, Aligned>(frame, temp, frame_size);
}
