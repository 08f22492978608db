//! Vector emulation over plain byte arrays.
//!
//! Every operation is a fixed-length loop the compiler is free to vectorize.

use super::{Vector, LANES};

/// [LANES] bytes held in an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portable([u8; LANES]);

impl Portable {
    #[inline(always)]
    fn map2(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl Vector for Portable {
    #[inline(always)]
    unsafe fn from_array(lanes: [u8; LANES]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    unsafe fn load_unaligned(src: *const u8) -> Self {
        Self(src.cast::<[u8; LANES]>().read_unaligned())
    }

    #[inline(always)]
    unsafe fn load_aligned(src: *const u8) -> Self {
        Self::load_unaligned(src)
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, dst: *mut u8) {
        dst.cast::<[u8; LANES]>().write_unaligned(self.0)
    }

    #[inline(always)]
    unsafe fn store_aligned(self, dst: *mut u8) {
        self.store_unaligned(dst)
    }

    #[inline(always)]
    unsafe fn shift_right_lanes<const N: i32>(self) -> Self {
        let n = N as usize;
        let mut out = [0u8; LANES];
        out[..LANES - n].copy_from_slice(&self.0[n..]);
        Self(out)
    }

    #[inline(always)]
    unsafe fn and(self, other: Self) -> Self {
        self.map2(other, |a, b| a & b)
    }

    #[inline(always)]
    unsafe fn xor(self, other: Self) -> Self {
        self.map2(other, |a, b| a ^ b)
    }

    #[inline(always)]
    unsafe fn shuffle(self, indices: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[indices.0[i] as usize % LANES]))
    }

    #[inline(always)]
    unsafe fn concat_low_halves(self, other: Self) -> Self {
        let mut out = self.0;
        out[LANES / 2..].copy_from_slice(&other.0[..LANES / 2]);
        Self(out)
    }

    #[inline(always)]
    unsafe fn concat_high_halves(self, other: Self) -> Self {
        let mut out = other.0;
        out[..LANES / 2].copy_from_slice(&self.0[LANES / 2..]);
        Self(out)
    }
}
