//! The sampling lattice and its coordinate axes.

use crate::error::HoloError;

/// An N×N sampling lattice scaled by a physical pixel pitch.
///
/// The grid owns no sample data; it produces the coordinate axes that
/// waves are evaluated on. The axis is symmetric about zero:
/// `x_i = -N/2 + i·N/(N-1)` in sample units (endpoint-inclusive, so
/// `x_0 = -x_{N-1}`). A grid is created per computation and never shared
/// across calls.
///
/// # Examples
///
/// ```
/// use fringe_core::Grid;
///
/// let grid = Grid::new(4, 10e-6).unwrap();
/// let axis = grid.sample_coords();
/// assert_eq!(axis.len(), 4);
/// assert_eq!(axis[0], -axis[3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    pixel_pitch: f64,
}

impl Grid {
    /// Create a grid with `size * size` samples spaced `pixel_pitch`
    /// meters apart.
    ///
    /// Returns [`HoloError::InvalidParameter`] if `size` is zero or
    /// `pixel_pitch` is not finite and positive.
    pub fn new(size: usize, pixel_pitch: f64) -> Result<Self, HoloError> {
        if size == 0 {
            return Err(HoloError::InvalidParameter {
                name: "size",
                value: 0.0,
            });
        }
        if !pixel_pitch.is_finite() || pixel_pitch <= 0.0 {
            return Err(HoloError::InvalidParameter {
                name: "pixel_pitch",
                value: pixel_pitch,
            });
        }
        Ok(Self { size, pixel_pitch })
    }

    /// Number of samples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Physical distance between adjacent samples, in meters.
    pub fn pixel_pitch(&self) -> f64 {
        self.pixel_pitch
    }

    /// Total number of samples (`size * size`).
    pub fn sample_count(&self) -> usize {
        self.size * self.size
    }

    /// The symmetric sample-unit coordinate axis for an N-sample grid,
    /// without constructing a grid.
    ///
    /// Spans `[-N/2, N/2]` with N endpoint-inclusive steps; a single
    /// sample sits at 0. Returns an empty axis for `size == 0`.
    pub fn sample_axis(size: usize) -> Vec<f64> {
        if size <= 1 {
            return vec![0.0; size];
        }
        let half = size as f64 / 2.0;
        let step = size as f64 / (size - 1) as f64;
        (0..size).map(|i| -half + i as f64 * step).collect()
    }

    /// Coordinate axis in sample units, symmetric about zero.
    pub fn sample_coords(&self) -> Vec<f64> {
        Self::sample_axis(self.size)
    }

    /// Coordinate axis in meters (sample units scaled by the pixel pitch).
    pub fn physical_coords(&self) -> Vec<f64> {
        Self::sample_axis(self.size)
            .into_iter()
            .map(|x| x * self.pixel_pitch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(
            Grid::new(0, 1.0),
            Err(HoloError::InvalidParameter {
                name: "size",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_non_positive_pitch() {
        assert!(Grid::new(8, 0.0).is_err());
        assert!(Grid::new(8, -1e-6).is_err());
        assert!(Grid::new(8, f64::NAN).is_err());
        assert!(Grid::new(8, f64::INFINITY).is_err());
    }

    #[test]
    fn single_sample_is_centered() {
        let grid = Grid::new(1, 1.0).unwrap();
        assert_eq!(grid.sample_coords(), vec![0.0]);
    }

    #[test]
    fn endpoints_span_half_size() {
        let grid = Grid::new(8, 1.0).unwrap();
        let axis = grid.sample_coords();
        assert_eq!(axis[0], -4.0);
        assert_eq!(axis[7], 4.0);
    }

    #[test]
    fn physical_coords_scale_by_pitch() {
        let grid = Grid::new(4, 10e-6).unwrap();
        let samples = grid.sample_coords();
        let physical = grid.physical_coords();
        for (s, p) in samples.iter().zip(&physical) {
            assert!((p - s * 10e-6).abs() < 1e-18);
        }
    }

    proptest! {
        #[test]
        fn axis_is_symmetric(size in 1usize..256) {
            let axis = Grid::sample_axis(size);
            prop_assert_eq!(axis.len(), size);
            for i in 0..size {
                let mirrored = axis[size - 1 - i];
                prop_assert!(
                    (axis[i] + mirrored).abs() < 1e-9,
                    "axis[{}] = {} not mirrored by {}", i, axis[i], mirrored
                );
            }
        }

        #[test]
        fn valid_grids_construct(size in 1usize..512, pitch in 1e-9f64..1e-2) {
            let grid = Grid::new(size, pitch).unwrap();
            prop_assert_eq!(grid.sample_count(), size * size);
        }
    }
}
