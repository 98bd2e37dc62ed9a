//! Phase-only (kinoform) hologram encoding.

use crate::fft::{fft2, fftshift};
use fringe_core::{Hologram, ObjectImage};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Encode only the phase of the object's centered spectrum.
///
/// The argument of each spectrum sample is mapped linearly from
/// `[-π, π]` to `[0, 1]`; the amplitude information is discarded
/// entirely. Useful for phase-only spatial light modulators.
pub fn kinoform(object: &ObjectImage) -> Hologram {
    let n = object.size();
    let spatial: Vec<Complex64> = object
        .values()
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    let spectrum = fftshift(n, &fft2(n, &spatial));
    Hologram::from_fn(n, |row, col| {
        (spectrum[row * n + col].arg() + PI) / (2.0 * PI)
    })
}
