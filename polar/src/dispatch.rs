//! Runtime selection of the encoding kernel.
//!
//! The instruction set is detected once per process. Each call then picks a
//! kernel from the frame size and the alignment of its buffers:
//!
//! 1. **Generic**: frames shorter than one vector ([LANES])
//! 2. **SSSE3 aligned**: both buffers start on a [LANES] boundary
//! 3. **SSSE3**: any other buffers
//! 4. **NEON** (AArch64)
//! 5. **Portable**: everything else

use crate::{
    generic,
    simd::{self, LANES},
};
use std::{fmt, sync::OnceLock};
use tracing::debug;

/// The best vector instruction set available on this CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isa {
    /// x86 or x86_64 with SSSE3 (`pshufb`).
    Ssse3,
    /// AArch64, where NEON is always present.
    Neon,
    /// No usable vector extension: array-backed vectors.
    Portable,
}

impl Isa {
    /// Detect (once) and return the instruction set to use.
    pub fn detect() -> Self {
        static ISA: OnceLock<Isa> = OnceLock::new();
        *ISA.get_or_init(|| {
            let isa = Self::probe();
            debug!(?isa, "selected polar encoding instruction set");
            isa
        })
    }

    fn probe() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if std::is_x86_feature_detected!("ssse3") {
                return Self::Ssse3;
            }
        }
        if cfg!(target_arch = "aarch64") {
            return Self::Neon;
        }
        Self::Portable
    }
}

/// An encoding kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Scalar reference, one stage per pass.
    Generic,
    /// Portable vectors, no alignment requirement.
    Portable,
    /// Portable vectors through the aligned access path.
    PortableAligned,
    /// SSSE3, no alignment requirement.
    Ssse3,
    /// SSSE3 with aligned loads and stores.
    Ssse3Aligned,
    /// NEON.
    Neon,
}

impl Kernel {
    /// Every kernel variant.
    pub const ALL: [Kernel; 6] = [
        Kernel::Generic,
        Kernel::Portable,
        Kernel::PortableAligned,
        Kernel::Ssse3,
        Kernel::Ssse3Aligned,
        Kernel::Neon,
    ];

    /// Pick the kernel [encode] would use for these buffers.
    pub fn select(frame: &[u8], temp: &[u8], frame_size: u32) -> Self {
        if (frame_size as usize) < LANES {
            return Self::Generic;
        }
        match Isa::detect() {
            Isa::Ssse3 if is_aligned(frame) && is_aligned(temp) => Self::Ssse3Aligned,
            Isa::Ssse3 => Self::Ssse3,
            Isa::Neon => Self::Neon,
            Isa::Portable => Self::Portable,
        }
    }

    /// Returns whether this kernel can run on the current CPU for the given buffers.
    ///
    /// Vector kernels also require `frame_size >= LANES`.
    pub fn supports(&self, frame: &[u8], temp: &[u8], frame_size: u32) -> bool {
        let vector = frame_size as usize >= LANES;
        let aligned = is_aligned(frame) && is_aligned(temp);
        match self {
            Self::Generic => true,
            Self::Portable => vector,
            Self::PortableAligned => vector && aligned,
            Self::Ssse3 => vector && Isa::detect() == Isa::Ssse3,
            Self::Ssse3Aligned => vector && aligned && Isa::detect() == Isa::Ssse3,
            Self::Neon => vector && Isa::detect() == Isa::Neon,
        }
    }

    /// Short name of the kernel.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Portable => "portable",
            Self::PortableAligned => "portable_aligned",
            Self::Ssse3 => "ssse3",
            Self::Ssse3Aligned => "ssse3_aligned",
            Self::Neon => "neon",
        }
    }

    /// Encode with this kernel.
    ///
    /// # Panics
    ///
    /// Panics if the kernel is not [supported](Kernel::supports) for these buffers,
    /// or if the inputs are shorter than `frame_size`.
    pub fn encode(
        &self,
        frame: &mut [u8],
        temp: &mut [u8],
        frozen_bit_mask: &[u8],
        frozen_bits: &[u8],
        info_bits: &[u8],
        frame_size: u32,
    ) {
        assert!(
            self.supports(frame, temp, frame_size),
            "{self} kernel not supported for frame size {frame_size} on this CPU"
        );
        match self {
            Self::Generic => generic::encode(
                frame,
                temp,
                frozen_bit_mask,
                frozen_bits,
                info_bits,
                frame_size,
            ),
            Self::Portable => simd::encode_portable(
                frame,
                temp,
                frozen_bit_mask,
                frozen_bits,
                info_bits,
                frame_size,
            ),
            Self::PortableAligned => simd::encode_portable_aligned(
                frame,
                temp,
                frozen_bit_mask,
                frozen_bits,
                info_bits,
                frame_size,
            ),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::Ssse3 => {
                // SAFETY: supports() checked for ssse3
                unsafe {
                    simd::encode_ssse3(
                        frame,
                        temp,
                        frozen_bit_mask,
                        frozen_bits,
                        info_bits,
                        frame_size,
                    )
                }
            }
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::Ssse3Aligned => {
                // SAFETY: supports() checked for ssse3 and buffer alignment
                unsafe {
                    simd::encode_ssse3_aligned(
                        frame,
                        temp,
                        frozen_bit_mask,
                        frozen_bits,
                        info_bits,
                        frame_size,
                    )
                }
            }
            #[cfg(target_arch = "aarch64")]
            Self::Neon => simd::encode_neon(
                frame,
                temp,
                frozen_bit_mask,
                frozen_bits,
                info_bits,
                frame_size,
            ),
            #[allow(unreachable_patterns)]
            _ => unreachable!("{self} kernel unavailable on this architecture"),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_aligned(buf: &[u8]) -> bool {
    buf.as_ptr() as usize % LANES == 0
}

/// Encode a frame with the fastest kernel available for these buffers.
///
/// `frame` receives the codeword and `temp` is used as scratch. Only the first
/// `frame_size` symbols of each are touched.
///
/// # Panics
///
/// Panics if `frame` or `temp` is shorter than `frame_size`, if the value sources
/// run out, or (for frames of at least [LANES] symbols) if `frame_size` is not a
/// power of two.
pub fn encode(
    frame: &mut [u8],
    temp: &mut [u8],
    frozen_bit_mask: &[u8],
    frozen_bits: &[u8],
    info_bits: &[u8],
    frame_size: u32,
) {
    Kernel::select(frame, temp, frame_size).encode(
        frame,
        temp,
        frozen_bit_mask,
        frozen_bits,
        info_bits,
        frame_size,
    )
}
