//! 2D FFT helpers built on rustfft.
//!
//! Conventions match numpy: the forward transform is unnormalized and the
//! inverse applies `1/N²`. Buffers are row-major `Vec<Complex64>` on a
//! square N×N lattice; callers guarantee `data.len() == size * size`.

use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward 2D FFT of a square row-major buffer (unnormalized).
pub fn fft2(size: usize, data: &[Complex64]) -> Vec<Complex64> {
    transform(size, data, true)
}

/// Inverse 2D FFT of a square row-major buffer, normalized by `1/N²`.
pub fn ifft2(size: usize, data: &[Complex64]) -> Vec<Complex64> {
    let mut out = transform(size, data, false);
    let norm = 1.0 / (size * size) as f64;
    for v in &mut out {
        *v *= norm;
    }
    out
}

fn transform(size: usize, data: &[Complex64], forward: bool) -> Vec<Complex64> {
    debug_assert_eq!(data.len(), size * size, "buffer must be {size}x{size}");
    let mut planner = FftPlanner::new();
    let fft = if forward {
        planner.plan_fft_forward(size)
    } else {
        planner.plan_fft_inverse(size)
    };

    // Rows are contiguous; columns go through a transpose pass.
    let mut out = data.to_vec();
    for row in out.chunks_mut(size) {
        fft.process(row);
    }
    let mut transposed = transpose(size, &out);
    for row in transposed.chunks_mut(size) {
        fft.process(row);
    }
    transpose(size, &transposed)
}

fn transpose(size: usize, data: &[Complex64]) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); data.len()];
    for r in 0..size {
        for c in 0..size {
            out[c * size + r] = data[r * size + c];
        }
    }
    out
}

/// Move the zero-frequency sample to the array center (roll both axes
/// by `n/2`).
pub fn fftshift(size: usize, data: &[Complex64]) -> Vec<Complex64> {
    roll(size, data, size / 2)
}

/// Inverse of [`fftshift`]: roll both axes by `n - n/2`. The two differ
/// for odd sizes.
pub fn ifftshift(size: usize, data: &[Complex64]) -> Vec<Complex64> {
    roll(size, data, size - size / 2)
}

fn roll(size: usize, data: &[Complex64], shift: usize) -> Vec<Complex64> {
    debug_assert_eq!(data.len(), size * size);
    let mut out = vec![Complex64::new(0.0, 0.0); data.len()];
    for r in 0..size {
        let dst_r = (r + shift) % size;
        for c in 0..size {
            let dst_c = (c + shift) % size;
            out[dst_r * size + dst_c] = data[r * size + c];
        }
    }
    out
}
