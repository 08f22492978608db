#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use commonware_polar::{
    frozen_count, generic, info_count,
    simd::{AlignedBuffer, LANES},
    Kernel,
};
use libfuzzer_sys::fuzz_target;

const MAX_LOG_SIZE: u32 = 12;

#[derive(Debug)]
struct FuzzInput {
    frame_size: u32,
    mask: Vec<u8>,
    frozen_bits: Vec<u8>,
    info_bits: Vec<u8>,
    shift: usize,
}

impl<'a> Arbitrary<'a> for FuzzInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let frame_size = 1u32 << u.int_in_range(0..=MAX_LOG_SIZE)?;
        let mut mask = Vec::with_capacity(frame_size as usize);
        for _ in 0..frame_size {
            mask.push(if u.arbitrary::<bool>()? { 0xFF } else { 0x00 });
        }
        let mut frozen_bits = Vec::with_capacity(frozen_count(&mask));
        for _ in 0..frozen_count(&mask) {
            frozen_bits.push(u.int_in_range(0..=1)?);
        }
        let mut info_bits = Vec::with_capacity(info_count(&mask));
        for _ in 0..info_count(&mask) {
            info_bits.push(u.int_in_range(0..=1)?);
        }
        let shift = u.int_in_range(0..=LANES - 1)?;

        Ok(FuzzInput {
            frame_size,
            mask,
            frozen_bits,
            info_bits,
            shift,
        })
    }
}

fn fuzz(input: FuzzInput) {
    let n = input.frame_size as usize;

    let mut expected = vec![0u8; n];
    let mut temp = vec![0u8; n];
    generic::encode(
        &mut expected,
        &mut temp,
        &input.mask,
        &input.frozen_bits,
        &input.info_bits,
        input.frame_size,
    );

    // Start both buffers `shift` bytes past a LANES boundary.
    let mut frame_storage = AlignedBuffer::new(n + LANES);
    let mut temp_storage = AlignedBuffer::new(n + LANES);
    let frame = &mut frame_storage.as_mut_slice()[input.shift..input.shift + n];
    let temp = &mut temp_storage.as_mut_slice()[input.shift..input.shift + n];

    for kernel in Kernel::ALL {
        if !kernel.supports(frame, temp, input.frame_size) {
            continue;
        }
        frame.fill(0);
        kernel.encode(
            frame,
            temp,
            &input.mask,
            &input.frozen_bits,
            &input.info_bits,
            input.frame_size,
        );
        assert_eq!(frame, &expected[..], "{kernel} disagrees with generic");
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
