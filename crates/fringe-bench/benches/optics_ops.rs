//! Criterion micro-benchmarks for the FFT and the two synthesis pipelines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fringe_bench::random_cloud;
use fringe_optics::fft::{fft2, fftshift};
use fringe_optics::{FourierHolography, FresnelSynthesis, Sideband};
use fringe_test_utils::letter_h;
use num_complex::Complex64;

/// Benchmark: forward 2D FFT plus centering shift on a 256x256 field.
fn bench_fft2_256(c: &mut Criterion) {
    let n = 256;
    let input: Vec<Complex64> = (0..n * n)
        .map(|i| Complex64::new((i % 251) as f64, 0.0))
        .collect();

    c.bench_function("fft2_shift_256", |b| {
        b.iter(|| fftshift(n, &fft2(n, black_box(&input))))
    });
}

/// Benchmark: full Fourier synthesis of the 128x128 block-letter target.
fn bench_fourier_synthesize_128(c: &mut Criterion) {
    let object = letter_h(128);
    let optics = FourierHolography::builder().build().unwrap();

    c.bench_function("fourier_synthesize_128", |b| {
        b.iter(|| optics.synthesize(black_box(&object)))
    });
}

/// Benchmark: center-window reconstruction of a 128x128 hologram.
fn bench_fourier_reconstruct_128(c: &mut Criterion) {
    let object = letter_h(128);
    let optics = FourierHolography::builder().build().unwrap();
    let (hologram, _) = optics.synthesize(&object);

    c.bench_function("fourier_reconstruct_128", |b| {
        b.iter(|| optics.reconstruct(black_box(&hologram), Sideband::Center))
    });
}

/// Benchmark: Fresnel accumulation of 100 points onto a 64x64 grid.
fn bench_fresnel_accumulate_64(c: &mut Criterion) {
    let cloud = random_cloud(100, 5e-4, 42);
    let synth = FresnelSynthesis::builder().size(64).build().unwrap();

    c.bench_function("fresnel_accumulate_64x100", |b| {
        b.iter(|| synth.accumulate_field(black_box(&cloud)))
    });
}

criterion_group!(
    benches,
    bench_fft2_256,
    bench_fourier_synthesize_128,
    bench_fourier_reconstruct_128,
    bench_fresnel_accumulate_64,
);
criterion_main!(benches);
