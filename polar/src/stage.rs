//! Stage bookkeeping and the scalar butterfly.
//!
//! A frame of `2^n` symbols is encoded in `n` stages. Stage parameters start at
//! one branch spanning the whole frame and, each stage, the number of branches
//! doubles while the half-span of each branch halves.

/// Bit masks used by [log2_of_power_of_two], lowest result bit first.
const LOG2_MASKS: [u32; 5] = [0xAAAA_AAAA, 0xCCCC_CCCC, 0xF0F0_F0F0, 0xFF00_FF00, 0xFFFF_0000];

/// Returns `log2(value)` for a power of two.
///
/// Each mask selects the positions whose index has one particular bit set, so
/// testing the single set bit of `value` against every mask reads off its index
/// one bit at a time.
///
/// The result is unspecified if `value` is zero or not a power of two.
#[inline]
pub const fn log2_of_power_of_two(value: u32) -> u32 {
    debug_assert!(value.is_power_of_two());
    let mut result = 0;
    let mut bit = 0;
    while bit < LOG2_MASKS.len() {
        result |= (((value & LOG2_MASKS[bit]) != 0) as u32) << bit;
        bit += 1;
    }
    result
}

/// Parameters of one butterfly stage.
///
/// Invariant: `num_branches * frame_half * 2` equals the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Stages left to apply, including this one.
    pub remaining: u32,
    /// Half the span of one branch.
    pub frame_half: usize,
    /// Number of independent branches.
    pub num_branches: usize,
}

impl Stage {
    /// The first (coarsest) stage of a frame of `frame_size` symbols.
    pub const fn first(frame_size: u32) -> Self {
        Self {
            remaining: log2_of_power_of_two(frame_size),
            frame_half: (frame_size >> 1) as usize,
            num_branches: 1,
        }
    }

    /// The stage after this one, or `None` if this is the last.
    pub const fn next(self) -> Option<Self> {
        if self.remaining <= 1 {
            return None;
        }
        Some(Self {
            remaining: self.remaining - 1,
            frame_half: self.frame_half >> 1,
            num_branches: self.num_branches << 1,
        })
    }

    /// Number of symbols in the frame this stage belongs to.
    pub const fn frame_size(&self) -> usize {
        self.num_branches * self.frame_half * 2
    }

    /// Iterate over every stage of a frame, coarsest first.
    ///
    /// Yields nothing for a single-symbol frame.
    pub fn all(frame_size: u32) -> Stages {
        let first = Self::first(frame_size);
        Stages {
            next: (first.remaining > 0).then_some(first),
        }
    }
}

/// Iterator over the stages of a frame (see [Stage::all]).
#[derive(Debug, Clone)]
pub struct Stages {
    next: Option<Stage>,
}

impl Iterator for Stages {
    type Item = Stage;

    fn next(&mut self) -> Option<Stage> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.map_or(0, |stage| stage.remaining as usize);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Stages {}

/// Apply one butterfly stage, reading `temp` and writing `frame`.
///
/// Within each branch of `2 * frame_half` symbols, pair `i` of the input lands in
/// the first half as `temp[2i] ^ temp[2i + 1]` and in the second half as
/// `temp[2i + 1]`.
pub fn butterfly_stage(frame: &mut [u8], temp: &[u8], num_branches: usize, frame_half: usize) {
    let span = 2 * frame_half;
    debug_assert!(frame_half > 0);
    debug_assert!(frame.len() >= num_branches * span);
    debug_assert!(temp.len() >= num_branches * span);

    for (out, input) in frame
        .chunks_exact_mut(span)
        .zip(temp.chunks_exact(span))
        .take(num_branches)
    {
        let (upper, lower) = out.split_at_mut(frame_half);
        for ((u, l), pair) in upper
            .iter_mut()
            .zip(lower.iter_mut())
            .zip(input.chunks_exact(2))
        {
            *u = pair[0] ^ pair[1];
            *l = pair[1];
        }
    }
}
