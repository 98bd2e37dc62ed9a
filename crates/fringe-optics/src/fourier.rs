//! Off-axis Fourier hologram synthesis and sideband reconstruction.
//!
//! Synthesis records `|F(object) + F(reference)|²` in the centered
//! frequency domain, where the reference is a tilted plane wave sampled
//! on the same grid. Reconstruction illuminates the square root of the
//! recorded intensity with the same reference spectrum (the phase encoded
//! by the carrier was discarded at capture, as in physical holography),
//! isolates one sideband with a binary mask, and inverse-transforms.
//!
//! Reconstruction must use the angle the hologram was recorded with; a
//! mismatched angle silently degrades the output and is a caller error,
//! not a runtime check.

use crate::fft::{fft2, fftshift, ifft2, ifftshift};
use fringe_core::{ComplexField, Grid, HoloError, Hologram, ObjectImage};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Which region of the centered spectrum a reconstruction keeps.
///
/// The three masks are pairwise disjoint, and their union deliberately
/// excludes the zero-frequency column outside the center window, so no
/// selection is contaminated by its neighbours. See [`sideband_mask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sideband {
    /// Columns left of center, excluding the center window.
    Left,
    /// Columns right of center, excluding the center window.
    Right,
    /// The centered square window of half-width `N/4`.
    Center,
}

/// Off-axis Fourier holography with a fixed reference tilt.
///
/// Constructed via [`FourierHolography::builder`]; the same instance
/// (and therefore the same angle) serves both synthesis and
/// reconstruction of a hologram.
#[derive(Clone, Copy, Debug)]
pub struct FourierHolography {
    reference_angle: f64,
}

/// Builder for [`FourierHolography`].
pub struct FourierHolographyBuilder {
    reference_angle: f64,
}

impl FourierHolography {
    /// Default reference tilt.
    pub const DEFAULT_REFERENCE_ANGLE: f64 = 0.15;

    /// Create a new builder.
    pub fn builder() -> FourierHolographyBuilder {
        FourierHolographyBuilder {
            reference_angle: Self::DEFAULT_REFERENCE_ANGLE,
        }
    }

    /// The off-axis reference tilt (dimensionless spatial-frequency
    /// factor).
    pub fn reference_angle(&self) -> f64 {
        self.reference_angle
    }

    /// Record the interference of the object spectrum with the tilted
    /// reference wave.
    ///
    /// Returns the intensity hologram together with the underlying
    /// complex field. The output is real, non-negative, and the same
    /// shape as the input; an all-zero object is valid and reduces to
    /// the reference-only pattern.
    pub fn synthesize(&self, object: &ObjectImage) -> (Hologram, ComplexField) {
        let n = object.size();
        let object_spectrum = centered_spectrum(
            n,
            object
                .values()
                .iter()
                .map(|&v| Complex64::new(v, 0.0))
                .collect(),
        );
        let reference = reference_spectrum(n, self.reference_angle);

        let field = ComplexField::from_fn(n, |row, col| {
            let i = row * n + col;
            object_spectrum[i] + reference[i]
        });
        (field.intensity(), field)
    }

    /// Recover an approximate object image from a recorded hologram.
    ///
    /// `sqrt(hologram)` stands in for the unrecorded amplitude; the
    /// result's fidelity depends on the reference angle separating the
    /// sidebands from the zero-order term.
    pub fn reconstruct(&self, hologram: &Hologram, sideband: Sideband) -> ObjectImage {
        let n = hologram.size();
        let reference = reference_spectrum(n, self.reference_angle);
        let mask = sideband_mask(n, sideband);

        let illuminated: Vec<Complex64> = hologram
            .values()
            .iter()
            .zip(&reference)
            .zip(&mask)
            .map(|((&h, r), &keep)| {
                if keep {
                    *r * h.sqrt()
                } else {
                    Complex64::new(0.0, 0.0)
                }
            })
            .collect();

        let spatial = ifft2(n, &ifftshift(n, &illuminated));
        ObjectImage::from_fn(n, |row, col| spatial[row * n + col].norm())
    }
}

impl FourierHolographyBuilder {
    /// Set the off-axis reference tilt (default 0.15).
    pub fn reference_angle(mut self, angle: f64) -> Self {
        self.reference_angle = angle;
        self
    }

    /// Build, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::InvalidParameter`] if the angle is not finite.
    pub fn build(self) -> Result<FourierHolography, HoloError> {
        if !self.reference_angle.is_finite() {
            return Err(HoloError::InvalidParameter {
                name: "reference_angle",
                value: self.reference_angle,
            });
        }
        Ok(FourierHolography {
            reference_angle: self.reference_angle,
        })
    }
}

/// Binary mask over the centered N×N spectrum for one sideband.
///
/// `Center` is the square window `[c-N/4, c+N/4)` on both axes; `Left`
/// and `Right` are the half-planes strictly left and right of the center
/// column, minus the center window. The three selections are pairwise
/// disjoint and their union leaves out the center column outside the
/// window, a strict subset of the plane.
pub fn sideband_mask(size: usize, sideband: Sideband) -> Vec<bool> {
    let c = (size / 2) as isize;
    let q = (size / 4) as isize;
    let mut mask = Vec::with_capacity(size * size);
    for row in 0..size as isize {
        for col in 0..size as isize {
            let in_window =
                row >= c - q && row < c + q && col >= c - q && col < c + q;
            mask.push(match sideband {
                Sideband::Center => in_window,
                Sideband::Left => col < c && !in_window,
                Sideband::Right => col > c && !in_window,
            });
        }
    }
    mask
}

/// Tilted plane wave `exp(i·2π·angle·x/N)` sampled on the symmetric grid
/// axis, forward-transformed and centered.
fn reference_spectrum(size: usize, angle: f64) -> Vec<Complex64> {
    let axis = Grid::sample_axis(size);
    let n = size as f64;
    let mut wave = Vec::with_capacity(size * size);
    for _row in 0..size {
        for &x in &axis {
            wave.push(Complex64::from_polar(1.0, 2.0 * PI * angle * x / n));
        }
    }
    centered_spectrum(size, wave)
}

fn centered_spectrum(size: usize, spatial: Vec<Complex64>) -> Vec<Complex64> {
    fftshift(size, &fft2(size, &spatial))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_default_angle() {
        let holo = FourierHolography::builder().build().unwrap();
        assert_eq!(
            holo.reference_angle(),
            FourierHolography::DEFAULT_REFERENCE_ANGLE
        );
    }

    #[test]
    fn builder_rejects_non_finite_angle() {
        assert!(FourierHolography::builder()
            .reference_angle(f64::NAN)
            .build()
            .is_err());
        assert!(FourierHolography::builder()
            .reference_angle(f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn synthesis_preserves_shape_and_sign() {
        let object = ObjectImage::from_fn(16, |r, c| ((r + c) % 2) as f64);
        let optics = FourierHolography::builder().build().unwrap();
        let (hologram, field) = optics.synthesize(&object);
        assert_eq!(hologram.size(), 16);
        assert_eq!(field.size(), 16);
        assert!(hologram.values().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn zero_object_yields_reference_autocorrelation() {
        let optics = FourierHolography::builder().build().unwrap();
        let (hologram, _) = optics.synthesize(&ObjectImage::zeros(16));
        // Not an error: the pattern reduces to the reference-only
        // intensity, which carries energy.
        assert!(hologram.max() > 0.0);
    }

    #[test]
    fn masks_are_pairwise_disjoint() {
        let n = 32;
        let left = sideband_mask(n, Sideband::Left);
        let right = sideband_mask(n, Sideband::Right);
        let center = sideband_mask(n, Sideband::Center);
        for i in 0..n * n {
            assert!(!(left[i] && right[i]));
            assert!(!(left[i] && center[i]));
            assert!(!(right[i] && center[i]));
        }
    }

    #[test]
    fn mask_union_is_strict_subset() {
        let n = 32;
        let left = sideband_mask(n, Sideband::Left);
        let right = sideband_mask(n, Sideband::Right);
        let center = sideband_mask(n, Sideband::Center);
        let covered = (0..n * n).filter(|&i| left[i] || right[i] || center[i]).count();
        assert!(covered < n * n, "union must not cover the full spectrum");
        // The uncovered samples are exactly the center column outside
        // the center window.
        let c = n / 2;
        let q = n / 4;
        for i in 0..n * n {
            let (row, col) = (i / n, i % n);
            let uncovered = !(left[i] || right[i] || center[i]);
            let expected = col == c && !(row >= c - q && row < c + q);
            assert_eq!(uncovered, expected, "sample ({row}, {col})");
        }
    }

    #[test]
    fn reconstruction_shape_matches_hologram() {
        let object = ObjectImage::from_fn(16, |r, _| r as f64);
        let optics = FourierHolography::builder().build().unwrap();
        let (hologram, _) = optics.synthesize(&object);
        let recon = optics.reconstruct(&hologram, Sideband::Center);
        assert_eq!(recon.size(), 16);
        assert!(recon.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn reference_spectrum_is_deterministic() {
        let a = reference_spectrum(16, 0.15);
        let b = reference_spectrum(16, 0.15);
        assert_eq!(a, b);
    }

    proptest::proptest! {
        #[test]
        fn masks_disjoint_and_incomplete_for_any_size(size in 4usize..96) {
            let left = sideband_mask(size, Sideband::Left);
            let right = sideband_mask(size, Sideband::Right);
            let center = sideband_mask(size, Sideband::Center);
            let mut covered = 0;
            for i in 0..size * size {
                proptest::prop_assert!(
                    u8::from(left[i]) + u8::from(right[i]) + u8::from(center[i]) <= 1
                );
                if left[i] || right[i] || center[i] {
                    covered += 1;
                }
            }
            proptest::prop_assert!(covered < size * size);
        }
    }
}
