//! Wave-optics computations for the fringe holography toolkit.
//!
//! Two independent pipelines share the sample types from `fringe-core`
//! but no runtime state:
//!
//! - **Fourier**: object image → centered spectrum → add off-axis
//!   reference → intensity, with sideband-filtered reconstruction
//!   ([`FourierHolography`]).
//! - **Fresnel**: 3D point cloud → spherical-wave accumulation → add
//!   reference plane wave → normalized intensity ([`FresnelSynthesis`]).
//!
//! Both are pure functions of their numeric inputs: single-threaded,
//! synchronous, no I/O. The free functions at the crate root are
//! convenience wrappers over the builder types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fft;
mod fourier;
mod fresnel;
mod kinoform;

pub use fourier::{sideband_mask, FourierHolography, FourierHolographyBuilder, Sideband};
pub use fresnel::{FresnelSynthesis, FresnelSynthesisBuilder};
pub use kinoform::kinoform;

use fringe_core::{ComplexField, HoloError, Hologram, ObjectImage, PointCloud};

/// Synthesize an off-axis Fourier hologram of `object`.
///
/// Returns the intensity hologram and the underlying complex field.
///
/// # Errors
///
/// [`HoloError::InvalidParameter`] if `reference_angle` is not finite.
pub fn synthesize_fourier_hologram(
    object: &ObjectImage,
    reference_angle: f64,
) -> Result<(Hologram, ComplexField), HoloError> {
    let optics = FourierHolography::builder()
        .reference_angle(reference_angle)
        .build()?;
    Ok(optics.synthesize(object))
}

/// Reconstruct an object image from a recorded Fourier hologram.
///
/// `reference_angle` must match the angle used at synthesis; a mismatch
/// degrades the output silently (documented precondition).
///
/// # Errors
///
/// [`HoloError::InvalidParameter`] if `reference_angle` is not finite.
pub fn reconstruct_fourier_hologram(
    hologram: &Hologram,
    reference_angle: f64,
    sideband: Sideband,
) -> Result<ObjectImage, HoloError> {
    let optics = FourierHolography::builder()
        .reference_angle(reference_angle)
        .build()?;
    Ok(optics.reconstruct(hologram, sideband))
}

/// Synthesize a Fresnel hologram of `points` by coherent superposition,
/// using the default off-axis reference tilt.
///
/// # Errors
///
/// [`HoloError::InvalidParameter`] if `wavelength`, `z_distance`, or
/// `pixel_pitch` is not finite and positive, or `size` is zero.
pub fn synthesize_fresnel_hologram(
    points: &PointCloud,
    wavelength: f64,
    z_distance: f64,
    pixel_pitch: f64,
    size: usize,
) -> Result<Hologram, HoloError> {
    let synth = FresnelSynthesis::builder()
        .wavelength(wavelength)
        .z_distance(z_distance)
        .pixel_pitch(pixel_pitch)
        .size(size)
        .build()?;
    Ok(synth.synthesize(points))
}
