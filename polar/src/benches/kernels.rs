use crate::{seeded, Layout};
use commonware_polar::{simd::AlignedBuffer, Kernel};
use criterion::{criterion_group, Criterion, Throughput};

fn bench_kernels(c: &mut Criterion) {
    let mut rng = seeded();
    for frame_size in [8, 10, 12, 14, 16].map(|i| 1usize << i) {
        let layout = Layout::random(&mut rng, frame_size);
        let mut frame = AlignedBuffer::new(frame_size);
        let mut temp = AlignedBuffer::new(frame_size);
        let (frame, temp) = (frame.as_mut_slice(), temp.as_mut_slice());

        let mut group = c.benchmark_group("polar::encode");
        group.throughput(Throughput::Bytes(frame_size as u64));
        for kernel in Kernel::ALL {
            if !kernel.supports(frame, temp, frame_size as u32) {
                continue;
            }
            group.bench_function(format!("kernel={kernel} frame_size={frame_size}"), |b| {
                b.iter(|| {
                    kernel.encode(
                        frame,
                        temp,
                        &layout.mask,
                        &layout.frozen,
                        &layout.info,
                        frame_size as u32,
                    )
                });
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_kernels
}
