use crate::{seeded, Layout};
use commonware_polar::{Config, Encoder};
use criterion::{criterion_group, BatchSize, Criterion};

fn bench_encoder(c: &mut Criterion) {
    let mut rng = seeded();
    for frame_size in [8, 12, 16].map(|i| 1usize << i) {
        let layout = Layout::random(&mut rng, frame_size);
        let config = Config {
            frame_size: frame_size as u32,
            info_bits: layout.info_bits(),
        };
        let mut encoder = Encoder::new(config, layout.mask.clone(), layout.frozen.clone())
            .expect("random layout is valid");
        c.bench_function(&format!("polar::encoder/frame_size={frame_size}"), |b| {
            b.iter_batched(
                || vec![0u8; frame_size],
                |mut frame| {
                    encoder
                        .encode_into(&layout.info, &mut frame)
                        .expect("inputs match the layout");
                    frame
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_encoder
}
