//! Vectorized polar encoding.
//!
//! The scalar encoder runs one butterfly stage per pass over the frame. The
//! kernels here produce the same codeword with 16-lane byte vectors in two
//! phases:
//!
//! 1. **Macro stages** (`frame_half >= 16`): every pair of input registers is
//!    reduced in place (`v ^= (v >> 1) & EVEN_LANES`) and split by
//!    [SEPARATE_EVEN_ODD] so that the XOR results and the kept odd symbols can
//!    be stored as two full registers, `frame_half` apart.
//! 2. **Micro stages** (the last four, `frame_half == 8`): each 16-symbol
//!    branch fits in one register. After a [BIT_REVERSE] shuffle, the four
//!    remaining stages collapse into masked shift-XORs at distances 8, 4, 2 and 1.
//!
//! The algorithm is written once against the [Vector] trait and the [Access]
//! strategy, and instantiated for:
//!
//! - [Portable]: plain `[u8; 16]` arrays, available everywhere
//! - `Ssse3` (x86/x86_64): `__m128i` with `pshufb`
//! - `Neon` (AArch64): `uint8x16_t` with `tbl`

use crate::{interleave::interleave, Stage};

mod portable;
pub use portable::Portable;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod ssse3;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use ssse3::{encode_ssse3, encode_ssse3_aligned, Ssse3};

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
pub use neon::{encode_neon, Neon};

/// Number of symbols (bytes) held by one vector.
pub const LANES: usize = 16;

// ======================================================================
// Shuffle tables and masks
// ======================================================================

/// Mask selecting the lanes that absorb their neighbor `distance` lanes above.
///
/// A lane absorbs when its index has the `distance` bit clear, which is exactly
/// the lower half of every butterfly of span `2 * distance`.
pub const fn absorb_mask(distance: usize) -> [u8; LANES] {
    let mut mask = [0u8; LANES];
    let mut lane = 0;
    while lane < LANES {
        if lane & distance == 0 {
            mask[lane] = 0xFF;
        }
        lane += 1;
    }
    mask
}

/// Even lanes set, odd lanes clear.
pub const EVEN_LANES: [u8; LANES] = absorb_mask(1);

/// Moves even lanes to the low half and odd lanes to the high half.
pub const SEPARATE_EVEN_ODD: [u8; LANES] = separate_even_odd();

/// Maps every lane to the lane with its four index bits reversed.
pub const BIT_REVERSE: [u8; LANES] = bit_reverse();

/// Shift distances of the fused micro stages, coarsest first.
pub const MICRO_DISTANCES: [usize; 4] = [8, 4, 2, 1];

const fn separate_even_odd() -> [u8; LANES] {
    let mut table = [0u8; LANES];
    let half = LANES / 2;
    let mut lane = 0;
    while lane < half {
        table[lane] = (2 * lane) as u8;
        table[lane + half] = (2 * lane + 1) as u8;
        lane += 1;
    }
    table
}

const fn bit_reverse() -> [u8; LANES] {
    let bits = LANES.trailing_zeros();
    let mut table = [0u8; LANES];
    let mut lane = 0;
    while lane < LANES {
        let mut reversed = 0;
        let mut bit = 0;
        while bit < bits {
            if lane & (1 << bit) != 0 {
                reversed |= 1 << (bits - 1 - bit);
            }
            bit += 1;
        }
        table[lane] = reversed as u8;
        lane += 1;
    }
    table
}

// ======================================================================
// Vector and access abstractions
// ======================================================================

/// A register of [LANES] byte lanes.
///
/// # Safety
///
/// Every method may require CPU features specific to the implementation.
pub trait Vector: Copy {
    /// Build a vector from lane values.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn from_array(lanes: [u8; LANES]) -> Self;

    /// Load from any address.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of [LANES] bytes.
    unsafe fn load_unaligned(src: *const u8) -> Self;

    /// Load from a [LANES]-aligned address.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of [LANES] bytes and [LANES]-aligned.
    unsafe fn load_aligned(src: *const u8) -> Self;

    /// Store to any address.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of [LANES] bytes.
    unsafe fn store_unaligned(self, dst: *mut u8);

    /// Store to a [LANES]-aligned address.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of [LANES] bytes and [LANES]-aligned.
    unsafe fn store_aligned(self, dst: *mut u8);

    /// Move every lane `N` lanes down (toward lane 0), filling with zeros.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation. `N` must be below [LANES].
    unsafe fn shift_right_lanes<const N: i32>(self) -> Self;

    /// Lane-wise AND.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn and(self, other: Self) -> Self;

    /// Lane-wise XOR.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn xor(self, other: Self) -> Self;

    /// Lane `i` of the result is lane `indices[i]` of `self` (`indices < LANES`).
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn shuffle(self, indices: Self) -> Self;

    /// Low half of `self` followed by the low half of `other`.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn concat_low_halves(self, other: Self) -> Self;

    /// High half of `self` followed by the high half of `other`.
    ///
    /// # Safety
    ///
    /// The CPU must support the implementation.
    unsafe fn concat_high_halves(self, other: Self) -> Self;
}

/// How a kernel loads and stores vectors.
pub trait Access {
    /// Required alignment of buffer addresses, in bytes.
    const ALIGNMENT: usize;

    /// # Safety
    ///
    /// `src` must be valid for [LANES] bytes and aligned to [Access::ALIGNMENT].
    unsafe fn load<V: Vector>(src: *const u8) -> V;

    /// # Safety
    ///
    /// `dst` must be valid for [LANES] bytes and aligned to [Access::ALIGNMENT].
    unsafe fn store<V: Vector>(dst: *mut u8, value: V);
}

/// Access for buffers whose base addresses are [LANES]-aligned.
#[derive(Debug, Clone, Copy)]
pub struct Aligned;

/// Access for buffers with no alignment guarantee.
#[derive(Debug, Clone, Copy)]
pub struct Unaligned;

impl Access for Aligned {
    const ALIGNMENT: usize = LANES;

    #[inline(always)]
    unsafe fn load<V: Vector>(src: *const u8) -> V {
        debug_assert_eq!(src as usize % Self::ALIGNMENT, 0);
        V::load_aligned(src)
    }

    #[inline(always)]
    unsafe fn store<V: Vector>(dst: *mut u8, value: V) {
        debug_assert_eq!(dst as usize % Self::ALIGNMENT, 0);
        value.store_aligned(dst)
    }
}

impl Access for Unaligned {
    const ALIGNMENT: usize = 1;

    #[inline(always)]
    unsafe fn load<V: Vector>(src: *const u8) -> V {
        V::load_unaligned(src)
    }

    #[inline(always)]
    unsafe fn store<V: Vector>(dst: *mut u8, value: V) {
        value.store_unaligned(dst)
    }
}

// ======================================================================
// Kernel
// ======================================================================

/// `v ^= (v >> N lanes) & mask`.
#[inline(always)]
unsafe fn absorb<V: Vector, const N: i32>(v: V, mask: V) -> V {
    v.shift_right_lanes::<N>().and(mask).xor(v)
}

/// One butterfly over adjacent lane pairs, then split: the XOR results land in
/// the low half and the kept odd lanes in the high half.
#[inline(always)]
unsafe fn butterfly_pairs<V: Vector>(v: V, even: V, separate: V) -> V {
    absorb::<V, 1>(v, even).shuffle(separate)
}

/// Run one stage with `frame_half >= LANES`, reading `temp` and writing `frame`.
#[inline(always)]
unsafe fn macro_stage<V: Vector, A: Access>(
    frame: &mut [u8],
    temp: &[u8],
    stage: Stage,
    even: V,
    separate: V,
) {
    let half = stage.frame_half;
    debug_assert!(half >= LANES && half.is_multiple_of(LANES));
    debug_assert!(frame.len() >= stage.frame_size() && temp.len() >= stage.frame_size());

    let src = temp.as_ptr();
    let dst = frame.as_mut_ptr();
    let mut read = 0;
    for branch in 0..stage.num_branches {
        let base = branch * 2 * half;
        for write in (base..base + half).step_by(LANES) {
            debug_assert!(read + 2 * LANES <= temp.len());
            debug_assert!(write + half + LANES <= frame.len());

            let first = butterfly_pairs(A::load::<V>(src.add(read)), even, separate);
            let second = butterfly_pairs(A::load::<V>(src.add(read + LANES)), even, separate);
            read += 2 * LANES;

            A::store(dst.add(write), first.concat_low_halves(second));
            A::store(dst.add(write + half), first.concat_high_halves(second));
        }
    }
}

/// Run the last four stages (`frame_half == LANES / 2`) at once, one register per
/// branch, reading `temp` and writing `frame`.
#[inline(always)]
unsafe fn micro_stages<V: Vector, A: Access>(frame: &mut [u8], temp: &[u8], num_branches: usize) {
    debug_assert!(num_branches > 0);
    debug_assert!(frame.len() >= num_branches * LANES && temp.len() >= num_branches * LANES);

    let bit_reverse = V::from_array(BIT_REVERSE);
    let [mask8, mask4, mask2, mask1] = MICRO_DISTANCES.map(|distance| V::from_array(absorb_mask(distance)));

    let src = temp.as_ptr();
    let dst = frame.as_mut_ptr();
    let mut next = A::load::<V>(src);
    for branch in 0..num_branches {
        let offset = branch * LANES;
        let mut v = absorb::<V, 8>(next.shuffle(bit_reverse), mask8);

        // Issue the next load before finishing this branch.
        if branch + 1 < num_branches {
            next = A::load::<V>(src.add(offset + LANES));
        }

        v = absorb::<V, 4>(v, mask4);
        v = absorb::<V, 2>(v, mask2);
        v = absorb::<V, 1>(v, mask1);
        A::store(dst.add(offset), v);
    }
}

/// Transform the interleaved frame in `temp`, leaving the codeword in `frame`.
///
/// # Safety
///
/// `frame_size` must be a power of two no smaller than [LANES], both buffers must
/// hold at least `frame_size` bytes, `A`'s alignment requirement must hold for
/// both base addresses, and the CPU must support `V`.
#[inline(always)]
pub(crate) unsafe fn transform<V: Vector, A: Access>(frame: &mut [u8], temp: &mut [u8], frame_size: u32) {
    let n = frame_size as usize;
    debug_assert!(frame_size.is_power_of_two() && n >= LANES);
    debug_assert!(frame.len() >= n && temp.len() >= n);
    debug_assert_eq!(frame.as_ptr() as usize % A::ALIGNMENT, 0);
    debug_assert_eq!(temp.as_ptr() as usize % A::ALIGNMENT, 0);

    let even = V::from_array(EVEN_LANES);
    let separate = V::from_array(SEPARATE_EVEN_ODD);
    for stage in Stage::all(frame_size) {
        if stage.frame_half < LANES {
            debug_assert_eq!(stage.frame_half, LANES / 2);
            micro_stages::<V, A>(frame, temp, stage.num_branches);
            return;
        }
        macro_stage::<V, A>(frame, temp, stage, even, separate);
        temp[..n].copy_from_slice(&frame[..n]);
    }
}

/// Check the buffer contract of the vector entry points and interleave into `temp`.
///
/// These checks run once per call and keep the raw-pointer kernels in bounds.
#[inline]
pub(crate) fn prepare(
    frame: &[u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    let n = frame_size as usize;
    assert!(
        frame_size.is_power_of_two() && n >= LANES,
        "frame size {frame_size} is not a power of two of at least {LANES}"
    );
    assert!(
        frame.len() >= n && temp.len() >= n,
        "buffers shorter than frame size {frame_size}"
    );
    interleave(&mut temp[..n], frozen_bit_mask, frozen_bits, info_bits);
}

/// Encode with any vector type and access strategy.
///
/// # Safety
///
/// The CPU must support `V`, and if `A` is [Aligned] both `frame` and `temp` must
/// start at a [LANES]-aligned address.
///
/// # Panics
///
/// Panics if `frame_size` is not a power of two of at least [LANES], if `frame` or
/// `temp` is shorter than `frame_size`, or if the value sources run out.
pub unsafe fn encode_with<V: Vector, A: Access>(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    prepare(frame, temp, frozen_bit_mask, frozen_bits, info_bits, frame_size);
    transform::<V, A>(frame, temp, frame_size);
}

/// Encode with [Portable] vectors and no alignment requirement.
///
/// # Panics
///
/// Panics if `frame_size` is not a power of two of at least [LANES], if `frame` or
/// `temp` is shorter than `frame_size`, or if the value sources run out.
pub fn encode_portable(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    // SAFETY: portable vectors need no CPU features, unaligned access needs no alignment
    unsafe {
        encode_with::<Portable, Unaligned>(
            frame,
            temp,
            frozen_bit_mask,
            frozen_bits,
            info_bits,
            frame_size,
        )
    }
}

/// Encode with [Portable] vectors through the aligned access path.
///
/// Portable loads never fault on misalignment, so alignment of `frame` and `temp`
/// is only asserted in debug builds.
///
/// # Panics
///
/// As [encode_portable].
pub fn encode_portable_aligned(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    // SAFETY: portable aligned loads and stores are plain byte copies
    unsafe {
        encode_with::<Portable, Aligned>(
            frame,
            temp,
            frozen_bit_mask,
            frozen_bits,
            info_bits,
            frame_size,
        )
    }
}

/// A zeroed buffer whose slice starts at a [LANES]-aligned address.
///
/// Used by tests, benchmarks, and fuzzers to reach the aligned kernels.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct AlignedBuffer {
    storage: Vec<u8>,
    offset: usize,
    len: usize,
}

impl AlignedBuffer {
    pub fn new(len: usize) -> Self {
        let storage = vec![0u8; len + LANES];
        let offset = storage.as_ptr().align_offset(LANES);
        Self {
            storage,
            offset,
            len,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage[self.offset..self.offset + self.len]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generic;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    pub(crate) type EncodeFn = fn(&mut [u8], &mut [u8], &[u8], &[u8], &[u8], u32);

    /// A random encoding problem: mask, frozen values, info values.
    pub(crate) struct Case {
        pub mask: Vec<u8>,
        pub frozen: Vec<u8>,
        pub info: Vec<u8>,
    }

    impl Case {
        pub fn random(rng: &mut impl Rng, frame_size: usize) -> Self {
            let mask: Vec<u8> = (0..frame_size)
                .map(|_| if rng.gen_bool(0.5) { 0xFF } else { 0x00 })
                .collect();
            let frozen = (0..crate::frozen_count(&mask))
                .map(|_| rng.gen_range(0..=1))
                .collect();
            let info = (0..crate::info_count(&mask))
                .map(|_| rng.gen_range(0..=1))
                .collect();
            Self { mask, frozen, info }
        }

        pub fn encode_with(&self, encode: EncodeFn, frame: &mut [u8], temp: &mut [u8]) {
            encode(
                frame,
                temp,
                &self.mask,
                &self.frozen,
                &self.info,
                self.mask.len() as u32,
            );
        }

        pub fn expected(&self) -> Vec<u8> {
            let n = self.mask.len();
            let mut frame = vec![0u8; n];
            let mut temp = vec![0u8; n];
            self.encode_with(generic::encode, &mut frame, &mut temp);
            frame
        }
    }

    /// Compare `encode` against the scalar reference for every frame size from
    /// [LANES] to 2^14, on [LANES]-aligned buffers if `aligned` is set and on
    /// deliberately misaligned ones otherwise.
    pub(crate) fn check_matches_generic(encode: EncodeFn, aligned: bool) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for k in 4..=14 {
            let n = 1usize << k;
            for _ in 0..4 {
                let case = Case::random(&mut rng, n);
                let expected = case.expected();
                if aligned {
                    let mut frame = AlignedBuffer::new(n);
                    let mut temp = AlignedBuffer::new(n);
                    case.encode_with(encode, frame.as_mut_slice(), temp.as_mut_slice());
                    assert_eq!(frame.as_mut_slice(), &expected[..], "mismatch at n={n}");
                } else {
                    let shift = rng.gen_range(1..LANES);
                    let mut frame = vec![0u8; n + shift];
                    let mut temp = vec![0u8; n + shift + 3];
                    case.encode_with(encode, &mut frame[shift..], &mut temp[3..]);
                    assert_eq!(&frame[shift..], &expected[..], "mismatch at n={n}");
                }
            }
        }
    }

    #[test]
    fn test_tables_match_literals() {
        assert_eq!(
            SEPARATE_EVEN_ODD,
            [0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15]
        );
        assert_eq!(
            BIT_REVERSE,
            [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15]
        );
        assert_eq!(EVEN_LANES, [0xFFu8, 0x00].repeat(8)[..]);
        assert_eq!(absorb_mask(2), [0xFFu8, 0xFF, 0x00, 0x00].repeat(4)[..]);
        assert_eq!(absorb_mask(4), [[0xFFu8; 4], [0x00; 4]].concat().repeat(2)[..]);
        assert_eq!(absorb_mask(8), [[0xFFu8; 8], [0x00; 8]].concat()[..]);
    }

    #[test]
    fn test_aligned_buffer() {
        for len in [0usize, 1, 16, 100, 4096] {
            let mut buffer = AlignedBuffer::new(len);
            let slice = buffer.as_mut_slice();
            assert_eq!(slice.len(), len);
            assert_eq!(slice.as_ptr() as usize % LANES, 0);
            assert!(slice.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_bit_reverse_is_involution() {
        for lane in 0..LANES {
            assert_eq!(BIT_REVERSE[BIT_REVERSE[lane] as usize] as usize, lane);
        }
    }

    #[test]
    fn test_micro_stages_match_scalar_stages() {
        // All 2^16 inputs of a single 16-symbol branch.
        for word in 0..=u16::MAX {
            let temp: [u8; LANES] = core::array::from_fn(|i| ((word >> i) & 1) as u8);

            let mut expected = [0u8; LANES];
            let mut staged = temp;
            for stage in Stage::all(LANES as u32) {
                crate::butterfly_stage(&mut expected, &staged, stage.num_branches, stage.frame_half);
                staged = expected;
            }

            let mut frame = [0u8; LANES];
            // SAFETY: portable vectors, buffers hold exactly one branch
            unsafe { micro_stages::<Portable, Unaligned>(&mut frame, &temp, 1) };
            assert_eq!(frame, expected, "input {word:#06x}");
        }
    }

    #[test]
    fn test_macro_stage_matches_scalar_stage() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for k in 5..=10 {
            let n = 1usize << k;
            for stage in Stage::all(n as u32).take_while(|s| s.frame_half >= LANES) {
                let temp: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
                let mut expected = vec![0u8; n];
                crate::butterfly_stage(&mut expected, &temp, stage.num_branches, stage.frame_half);

                let mut frame = vec![0u8; n];
                // SAFETY: portable vectors, buffers hold the whole frame
                unsafe {
                    macro_stage::<Portable, Unaligned>(
                        &mut frame,
                        &temp,
                        stage,
                        Portable::from_array(EVEN_LANES),
                        Portable::from_array(SEPARATE_EVEN_ODD),
                    )
                };
                assert_eq!(frame, expected, "n={n} stage={stage:?}");
            }
        }
    }

    #[test]
    fn test_portable_matches_generic() {
        check_matches_generic(encode_portable, false);
    }

    #[test]
    fn test_portable_aligned_matches_generic() {
        check_matches_generic(encode_portable_aligned, true);
    }

    #[test]
    fn test_frame_size_equal_to_lanes() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..64 {
            let case = Case::random(&mut rng, LANES);
            let mut frame = [0u8; LANES];
            let mut temp = [0u8; LANES];
            case.encode_with(encode_portable, &mut frame, &mut temp);
            assert_eq!(frame.to_vec(), case.expected());
        }
    }

    #[test]
    fn test_ignores_initial_contents_and_tail() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for n in [16usize, 32, 256] {
            let case = Case::random(&mut rng, n);
            let mut frame = vec![0xA5u8; n + LANES];
            let mut temp = vec![0x5Au8; n + LANES];
            case.encode_with(encode_portable, &mut frame, &mut temp);
            assert_eq!(&frame[..n], &case.expected()[..]);
            assert!(frame[n..].iter().all(|&b| b == 0xA5), "frame tail written");
            assert!(temp[n..].iter().all(|&b| b == 0x5A), "temp tail written");
        }
    }

    #[test]
    fn test_linearity() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let n = 512;
        let mask = vec![0u8; n];
        let a: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
        let b: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
        let sum: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();

        let mut temp = vec![0u8; n];
        let mut encode = |info: &[u8]| {
            let mut frame = vec![0u8; n];
            encode_portable(&mut frame, &mut temp, &mask, &[], info, n as u32);
            frame
        };
        let (ea, eb, esum) = (encode(&a), encode(&b), encode(&sum));
        let combined: Vec<u8> = ea.iter().zip(&eb).map(|(x, y)| x ^ y).collect();
        assert_eq!(esum, combined);
    }

    #[test]
    fn test_involution() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let n = 1024;
        let mask = vec![0u8; n];
        let input: Vec<u8> = (0..n).map(|_| rng.gen_range(0..=1)).collect();
        let mut codeword = vec![0u8; n];
        let mut again = vec![0u8; n];
        let mut temp = vec![0u8; n];
        encode_portable(&mut codeword, &mut temp, &mask, &[], &input, n as u32);
        encode_portable(&mut again, &mut temp, &mask, &[], &codeword, n as u32);
        assert_eq!(again, input);
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn test_rejects_small_frame() {
        let mut frame = [0u8; 8];
        let mut temp = [0u8; 8];
        encode_portable(&mut frame, &mut temp, &[0; 8], &[], &[0; 8], 8);
    }

    #[test]
    #[should_panic(expected = "buffers shorter")]
    fn test_rejects_short_buffer() {
        let mut frame = [0u8; 16];
        let mut temp = [0u8; 8];
        encode_portable(&mut frame, &mut temp, &[0; 32], &[], &[0; 32], 32);
    }
}
