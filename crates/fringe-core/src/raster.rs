//! Real-valued sample arrays: object images and recorded holograms.

use crate::error::HoloError;

/// A real-valued N×N intensity image used as synthesis input.
///
/// Values are row-major and unconstrained in range (callers normalize).
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectImage {
    size: usize,
    values: Vec<f64>,
}

impl ObjectImage {
    /// Create an image from row-major samples.
    ///
    /// Returns [`HoloError::ShapeMismatch`] if `values.len() != size²`,
    /// or [`HoloError::InvalidParameter`] for a zero size.
    pub fn from_values(size: usize, values: Vec<f64>) -> Result<Self, HoloError> {
        check_shape(size, values.len())?;
        Ok(Self { size, values })
    }

    /// Build an image by evaluating `f(row, col)` at every sample.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        assert!(size > 0, "image size must be non-zero");
        let mut values = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                values.push(f(row, col));
            }
        }
        Self { size, values }
    }

    /// All-zero image. Valid synthesis input: the result reduces to the
    /// reference-only interference pattern.
    pub fn zeros(size: usize) -> Self {
        Self::from_fn(size, |_, _| 0.0)
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major samples.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the image, returning its samples.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Sample at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }
}

/// A recorded interference intensity pattern: real, non-negative, N×N.
///
/// Created once per synthesis call and never mutated afterward; any
/// further processing produces a new array.
#[derive(Clone, Debug, PartialEq)]
pub struct Hologram {
    size: usize,
    values: Vec<f64>,
}

impl Hologram {
    /// Create a hologram from row-major intensity samples.
    ///
    /// Returns [`HoloError::ShapeMismatch`] on a length/size disagreement
    /// and [`HoloError::InvalidParameter`] if any sample is negative or
    /// non-finite (recorded intensity cannot be either).
    pub fn from_values(size: usize, values: Vec<f64>) -> Result<Self, HoloError> {
        check_shape(size, values.len())?;
        for &v in &values {
            if !v.is_finite() || v < 0.0 {
                return Err(HoloError::InvalidParameter {
                    name: "hologram sample",
                    value: v,
                });
            }
        }
        Ok(Self { size, values })
    }

    /// Build a hologram by evaluating `f(row, col)` at every sample.
    /// The caller guarantees non-negative values.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        assert!(size > 0, "hologram size must be non-zero");
        let mut values = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let v = f(row, col);
                debug_assert!(v >= 0.0, "hologram sample must be non-negative");
                values.push(v);
            }
        }
        Self { size, values }
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major intensity samples.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the hologram, returning its samples.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Global minimum intensity.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Global maximum intensity.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// A rescaled copy with values in `[0, 1]`, divided by the global
    /// maximum. Identity for an all-zero pattern.
    pub fn normalized(&self) -> Hologram {
        let max = self.max();
        if max <= 0.0 {
            return self.clone();
        }
        Hologram {
            size: self.size,
            values: self.values.iter().map(|v| v / max).collect(),
        }
    }
}

fn check_shape(size: usize, len: usize) -> Result<(), HoloError> {
    if size == 0 {
        return Err(HoloError::InvalidParameter {
            name: "size",
            value: 0.0,
        });
    }
    let expected = size * size;
    if len != expected {
        return Err(HoloError::ShapeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn object_image_shape_checked() {
        assert!(ObjectImage::from_values(4, vec![0.0; 16]).is_ok());
        assert_eq!(
            ObjectImage::from_values(4, vec![0.0; 15]),
            Err(HoloError::ShapeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn object_image_rejects_zero_size() {
        assert!(ObjectImage::from_values(0, vec![]).is_err());
    }

    #[test]
    fn from_fn_row_major() {
        let img = ObjectImage::from_fn(3, |r, c| (r * 10 + c) as f64);
        assert_eq!(img.get(0, 2), 2.0);
        assert_eq!(img.get(2, 1), 21.0);
    }

    #[test]
    fn hologram_rejects_negative_samples() {
        let err = Hologram::from_values(2, vec![0.0, 1.0, -0.5, 2.0]);
        assert_eq!(
            err,
            Err(HoloError::InvalidParameter {
                name: "hologram sample",
                value: -0.5
            })
        );
    }

    #[test]
    fn hologram_rejects_non_finite_samples() {
        assert!(Hologram::from_values(1, vec![f64::NAN]).is_err());
        assert!(Hologram::from_values(1, vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn normalize_all_zero_is_identity() {
        let holo = Hologram::from_values(2, vec![0.0; 4]).unwrap();
        assert_eq!(holo.normalized(), holo);
    }

    proptest! {
        #[test]
        fn normalized_values_in_unit_range(
            values in prop::collection::vec(0.0f64..1e12, 9..=9)
        ) {
            let holo = Hologram::from_values(3, values).unwrap();
            let norm = holo.normalized();
            for &v in norm.values() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }

        #[test]
        fn normalized_peak_is_one(
            values in prop::collection::vec(1e-6f64..1e12, 9..=9)
        ) {
            let holo = Hologram::from_values(3, values).unwrap();
            let norm = holo.normalized();
            prop_assert!((norm.max() - 1.0).abs() < 1e-12);
        }
    }
}
