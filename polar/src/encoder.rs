//! A validating encoder that owns its frozen bits and scratch buffer.

use crate::{dispatch::Kernel, info_count, Config};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors returned by [Encoder] and [Config::validate].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("frame size {0} is not a power of two")]
    FrameSizeNotPowerOfTwo(u32),
    #[error("{info_bits} info bits do not fit in a frame of {frame_size}")]
    InfoBitsExceedFrame { info_bits: u32, frame_size: u32 },
    #[error("{what} has length {actual}, expected {expected}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("frozen bit mask byte {value:#04x} at {index} is neither 0x00 nor 0xFF")]
    InvalidMaskByte { index: usize, value: u8 },
    #[error("frozen bit mask has {actual} information positions, expected {expected}")]
    InfoCountMismatch { expected: usize, actual: usize },
    #[error("{what} value {value} at {index} is not a bit")]
    InvalidBit {
        what: &'static str,
        index: usize,
        value: u8,
    },
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::InvalidLength {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_bits(what: &'static str, bits: &[u8]) -> Result<(), Error> {
    match bits.iter().position(|&b| b > 1) {
        Some(index) => Err(Error::InvalidBit {
            what,
            index,
            value: bits[index],
        }),
        None => Ok(()),
    }
}

/// Encodes frames for a fixed frozen-bit layout.
///
/// All inputs are validated, so encoding never hits a kernel precondition. The
/// scratch buffer is allocated once and reused by every call.
///
/// # Example
///
/// ```
/// use commonware_polar::{Config, Encoder};
///
/// let config = Config { frame_size: 4, info_bits: 2 };
/// let mut encoder = Encoder::new(config, vec![0xFF, 0xFF, 0x00, 0x00], vec![0, 0]).unwrap();
/// assert_eq!(encoder.encode(&[1, 1]).unwrap(), vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    config: Config,
    frozen_bit_mask: Vec<u8>,
    frozen_bits: Vec<u8>,
    temp: Vec<u8>,
}

impl Encoder {
    /// Create an encoder.
    ///
    /// `frozen_bit_mask` must hold `config.frame_size` bytes, each 0xFF (frozen) or
    /// 0x00 (information), with exactly `config.info_bits` information positions.
    /// `frozen_bits` holds one bit (0 or 1) per frozen position, in frame order.
    pub fn new(config: Config, frozen_bit_mask: Vec<u8>, frozen_bits: Vec<u8>) -> Result<Self, Error> {
        config.validate()?;
        let frame_size = config.frame_size as usize;

        check_len("frozen bit mask", frame_size, frozen_bit_mask.len())?;
        if let Some(index) = frozen_bit_mask.iter().position(|&m| m != 0x00 && m != 0xFF) {
            return Err(Error::InvalidMaskByte {
                index,
                value: frozen_bit_mask[index],
            });
        }
        let info = info_count(&frozen_bit_mask);
        if info != config.info_bits as usize {
            return Err(Error::InfoCountMismatch {
                expected: config.info_bits as usize,
                actual: info,
            });
        }
        check_len("frozen bits", frame_size - info, frozen_bits.len())?;
        check_bits("frozen bits", &frozen_bits)?;

        debug!(
            frame_size = config.frame_size,
            info_bits = config.info_bits,
            stages = config.stages(),
            "created polar encoder"
        );
        Ok(Self {
            config,
            frozen_bit_mask,
            frozen_bits,
            temp: vec![0; frame_size],
        })
    }

    /// Returns the frame shape this encoder was built for.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the frozen-bit mask (0xFF frozen, 0x00 information), in frame order.
    pub fn frozen_bit_mask(&self) -> &[u8] {
        &self.frozen_bit_mask
    }

    /// Returns the values placed at frozen positions, in frame order.
    pub fn frozen_bits(&self) -> &[u8] {
        &self.frozen_bits
    }

    /// Encode `info_bits` into a new frame.
    pub fn encode(&mut self, info_bits: &[u8]) -> Result<Vec<u8>, Error> {
        let mut frame = vec![0; self.config.frame_size as usize];
        self.encode_into(info_bits, &mut frame)?;
        Ok(frame)
    }

    /// Encode `info_bits` into `frame`, which must hold exactly one frame.
    pub fn encode_into(&mut self, info_bits: &[u8], frame: &mut [u8]) -> Result<(), Error> {
        let frame_size = self.config.frame_size;
        check_len("info bits", self.config.info_bits as usize, info_bits.len())?;
        check_bits("info bits", info_bits)?;
        check_len("frame", frame_size as usize, frame.len())?;

        let kernel = Kernel::select(frame, &self.temp, frame_size);
        trace!(%kernel, frame_size, "encoding frame");
        kernel.encode(
            frame,
            &mut self.temp,
            &self.frozen_bit_mask,
            &self.frozen_bits,
            info_bits,
            frame_size,
        );
        Ok(())
    }
}
