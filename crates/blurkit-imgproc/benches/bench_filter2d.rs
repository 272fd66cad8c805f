use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use blurkit_image::{Image, ImageSize};
use blurkit_imgproc::filter::{filter2d_with_workers, kernels};

fn bench_filter2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter2d");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        for kernel_size in [3, 5, 9].iter() {
            for workers in [1, 2, 4, 8].iter() {
                group.throughput(criterion::Throughput::Elements(
                    (*width * *height * *kernel_size * *kernel_size) as u64,
                ));

                let parameter_string = format!("{}x{}x{}x{}", width, height, kernel_size, workers);

                let image_size = ImageSize {
                    width: *width,
                    height: *height,
                };
                let image_data = (0..width * height * 3)
                    .map(|i| (i % 256) as u8)
                    .collect::<Vec<_>>();

                let image = Image::<u8, 3>::new(image_size, image_data).unwrap();
                let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();
                let kernel = kernels::gaussian_kernel(*kernel_size, 1.5).unwrap();

                group.bench_with_input(
                    BenchmarkId::new("filter2d_u8", &parameter_string),
                    &(&image, &output, &kernel, *workers),
                    |b, i| {
                        let (src, kernel, workers) = (i.0, i.2, i.3);
                        let mut dst = (*i.1).clone();
                        b.iter(|| {
                            black_box(filter2d_with_workers(src, &mut dst, kernel, workers))
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filter2d);
criterion_main!(benches);
