//! Core types for the fringe holography toolkit.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! sampling grid, the real and complex sample arrays the optics pipelines
//! operate on, object point clouds, and the shared error type.
//!
//! Every computation in the workspace owns its own [`Grid`], fields, and
//! [`Hologram`] values for the duration of one call; nothing here is shared
//! mutable state, and every operation returns a new value rather than
//! mutating its input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod field;
mod grid;
mod points;
mod raster;

pub use error::HoloError;
pub use field::ComplexField;
pub use grid::Grid;
pub use points::{Point3, PointCloud};
pub use raster::{Hologram, ObjectImage};
