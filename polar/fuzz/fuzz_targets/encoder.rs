#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use commonware_polar::{Config, Encoder};
use libfuzzer_sys::fuzz_target;

const MAX_LOG_SIZE: u32 = 12;

/// A single defect planted in an otherwise valid layout.
#[derive(Debug, Clone, Copy)]
enum Corruption {
    FrameSize,
    InfoBitsConfig,
    MaskByte { index: usize, value: u8 },
    FrozenBit { index: usize },
    InfoBit { index: usize },
    InfoLength,
}

#[derive(Debug)]
struct FuzzInput {
    config: Config,
    mask: Vec<u8>,
    frozen_bits: Vec<u8>,
    info: Vec<u8>,
    corruption: Option<Corruption>,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let frame_size = 1usize << u.int_in_range(0..=MAX_LOG_SIZE)?;
        let mut mask = Vec::with_capacity(frame_size);
        let mut frozen_bits = Vec::new();
        let mut info = Vec::new();
        for _ in 0..frame_size {
            if u.arbitrary::<bool>()? {
                mask.push(0xFF);
                frozen_bits.push(u.int_in_range(0..=1)?);
            } else {
                mask.push(0x00);
                info.push(u.int_in_range(0..=1)?);
            }
        }
        let config = Config {
            frame_size: frame_size as u32,
            info_bits: info.len() as u32,
        };

        // Most inputs stay valid so the encoding checks are reached.
        let corruption = if u.ratio(1u8, 8u8)? {
            Some(match u.int_in_range(0..=5)? {
                0 => Corruption::FrameSize,
                1 => Corruption::InfoBitsConfig,
                2 => Corruption::MaskByte {
                    index: u.choose_index(frame_size)?,
                    value: u.int_in_range(0x01..=0xFE)?,
                },
                3 => Corruption::FrozenBit {
                    index: u.arbitrary()?,
                },
                4 => Corruption::InfoBit {
                    index: u.arbitrary()?,
                },
                _ => Corruption::InfoLength,
            })
        } else {
            None
        };

        Ok(FuzzInput {
            config,
            mask,
            frozen_bits,
            info,
            corruption,
        })
    }
}

fn corrupt(input: &mut FuzzInput, corruption: Corruption) {
    match corruption {
        // 3 * 2^k is never a power of two.
        Corruption::FrameSize => input.config.frame_size *= 3,
        Corruption::InfoBitsConfig => input.config.info_bits += 1,
        Corruption::MaskByte { index, value } => input.mask[index] = value,
        Corruption::FrozenBit { index } => match input.frozen_bits.len() {
            0 => input.frozen_bits.push(0),
            len => input.frozen_bits[index % len] = 2,
        },
        Corruption::InfoBit { index } => match input.info.len() {
            0 => input.info.push(0),
            len => input.info[index % len] = 0xFF,
        },
        Corruption::InfoLength => input.info.push(1),
    }
}

fn fuzz(mut input: FuzzInput) {
    if let Some(corruption) = input.corruption {
        corrupt(&mut input, corruption);
        let result = Encoder::new(input.config, input.mask, input.frozen_bits)
            .and_then(|mut encoder| encoder.encode(&input.info));
        assert!(result.is_err(), "{corruption:?} accepted");
        return;
    }

    let mut encoder = Encoder::new(input.config, input.mask, input.frozen_bits).unwrap();
    let codeword = encoder.encode(&input.info).unwrap();
    assert_eq!(codeword.len(), input.config.frame_size as usize);
    assert!(codeword.iter().all(|&b| b <= 1), "codeword symbol is not a bit");

    // The transform is an involution: encoding the codeword again with every
    // position carrying information returns the interleaved input.
    let full = Config {
        frame_size: input.config.frame_size,
        info_bits: input.config.frame_size,
    };
    let mut inverse = Encoder::new(full, vec![0; codeword.len()], Vec::new()).unwrap();
    let interleaved = inverse.encode(&codeword).unwrap();
    let mut frozen = encoder.frozen_bits().iter();
    let mut info = input.info.iter();
    for (position, &mask) in encoder.frozen_bit_mask().iter().enumerate() {
        let source = if mask != 0 { frozen.next() } else { info.next() };
        assert_eq!(Some(&interleaved[position]), source, "position {position}");
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
