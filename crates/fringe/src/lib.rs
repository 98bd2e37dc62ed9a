//! Fringe: computer-generated holography in pure Rust.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fringe sub-crates. For most users, adding `fringe` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fringe::prelude::*;
//!
//! // A bright vertical bar on a dark 64×64 canvas.
//! let object = ObjectImage::from_fn(64, |row, col| {
//!     if (16..48).contains(&row) && (28..36).contains(&col) {
//!         1.0
//!     } else {
//!         0.0
//!     }
//! });
//!
//! // Record an off-axis Fourier hologram, then play it back.
//! let (hologram, _field) = synthesize_fourier_hologram(&object, 0.15).unwrap();
//! let recon = reconstruct_fourier_hologram(&hologram, 0.15, Sideband::Center).unwrap();
//! assert_eq!(recon.size(), object.size());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `fringe-core` | Sample containers, grids, point clouds, errors |
//! | [`optics`] | `fringe-optics` | Fourier/Fresnel pipelines, FFT helpers, kinoform |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Sample containers and geometry (`fringe-core`).
///
/// Contains [`core::ObjectImage`], [`core::Hologram`],
/// [`core::ComplexField`], [`core::Grid`], [`core::PointCloud`], and the
/// [`core::HoloError`] taxonomy.
pub use fringe_core as core;

/// Wave-optics pipelines (`fringe-optics`).
///
/// The [`optics::FourierHolography`] and [`optics::FresnelSynthesis`]
/// builder types, the free-function entry points, and the
/// [`optics::fft`] helpers they are built on.
pub use fringe_optics as optics;

/// Common imports for typical fringe usage.
///
/// ```rust
/// use fringe::prelude::*;
/// ```
///
/// This imports the sample containers, the error type, and the synthesis
/// and reconstruction entry points.
pub mod prelude {
    // Containers and geometry
    pub use fringe_core::{
        ComplexField, Grid, HoloError, Hologram, ObjectImage, Point3, PointCloud,
    };

    // Pipelines
    pub use fringe_optics::{
        kinoform, reconstruct_fourier_hologram, synthesize_fourier_hologram,
        synthesize_fresnel_hologram, FourierHolography, FresnelSynthesis, Sideband,
    };
}
