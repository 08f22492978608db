//! Encode frames with the polar transform.
//!
//! A frame of `2^n` symbols is split into frozen positions (fixed, known values)
//! and information positions (payload). After interleaving both sources into frame
//! order, `n` butterfly stages turn the frame into a polar codeword. Symbols are
//! stored one bit per byte so that vector lanes can address them directly.
//!
//! Every kernel produces byte-identical codewords:
//!
//! - [generic::encode]: the scalar reference, one stage per pass
//! - [simd]: vector kernels (portable, SSSE3, NEON) that fuse stages, each with an
//!   aligned and an unaligned access path
//! - [encode]: picks the fastest kernel for the CPU and buffers at hand
//!
//! [Encoder] wraps the raw kernels with input validation and an owned scratch
//! buffer.
//!
//! # Example
//!
//! ```
//! use commonware_polar::encode;
//!
//! let mask = [0xFF, 0xFF, 0x00, 0x00];
//! let mut frame = [0u8; 4];
//! let mut temp = [0u8; 4];
//! encode(&mut frame, &mut temp, &mask, &[0, 0], &[1, 1], 4);
//! assert_eq!(frame, [0, 0, 1, 1]);
//! ```
//!
//! # Status
//!
//! `commonware-polar` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

#![doc(
    html_logo_url = "https://commonware.xyz/imgs/rustdoc_logo.svg",
    html_favicon_url = "https://commonware.xyz/favicon.ico"
)]

mod dispatch;
pub use dispatch::{encode, Isa, Kernel};
mod encoder;
pub use encoder::{Encoder, Error};
pub mod generic;
mod interleave;
pub use interleave::{frozen_count, info_count, interleave};
pub mod simd;
mod stage;
pub use stage::{butterfly_stage, log2_of_power_of_two, Stage, Stages};

/// Shape of the frames produced by an [Encoder].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Config {
    /// Number of symbols in a frame (a power of two).
    pub frame_size: u32,
    /// Number of information positions in a frame.
    ///
    /// The remaining `frame_size - info_bits` positions are frozen.
    pub info_bits: u32,
}

impl Config {
    /// Checks that `frame_size` is a power of two and `info_bits` fits in it.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.frame_size.is_power_of_two() {
            return Err(Error::FrameSizeNotPowerOfTwo(self.frame_size));
        }
        if self.info_bits > self.frame_size {
            return Err(Error::InfoBitsExceedFrame {
                info_bits: self.info_bits,
                frame_size: self.frame_size,
            });
        }
        Ok(())
    }

    /// Returns the number of frozen positions in a frame.
    pub fn frozen_bits(&self) -> u32 {
        self.frame_size.saturating_sub(self.info_bits)
    }

    /// Returns the number of butterfly stages needed to encode a frame.
    ///
    /// Only meaningful for a valid configuration.
    pub fn stages(&self) -> u32 {
        log2_of_power_of_two(self.frame_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validate() {
        assert!(Config {
            frame_size: 1024,
            info_bits: 512
        }
        .validate()
        .is_ok());
        assert!(Config {
            frame_size: 1,
            info_bits: 1
        }
        .validate()
        .is_ok());
        assert_eq!(
            Config {
                frame_size: 0,
                info_bits: 0
            }
            .validate(),
            Err(Error::FrameSizeNotPowerOfTwo(0))
        );
        assert_eq!(
            Config {
                frame_size: 48,
                info_bits: 0
            }
            .validate(),
            Err(Error::FrameSizeNotPowerOfTwo(48))
        );
    }

    #[test]
    fn test_config_derived_values() {
        let config = Config {
            frame_size: 256,
            info_bits: 100,
        };
        assert_eq!(config.frozen_bits(), 156);
        assert_eq!(config.stages(), 8);
    }

    #[test]
    fn test_crate_level_examples() {
        let mut frame = [0u8; 2];
        let mut temp = [0u8; 2];
        encode(&mut frame, &mut temp, &[0xFF, 0x00], &[1], &[0], 2);
        assert_eq!(temp, [1, 0]);
        assert_eq!(frame, [1, 0]);
    }
}
