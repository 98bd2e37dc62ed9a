//! Complex wave-amplitude fields.

use crate::error::HoloError;
use crate::raster::Hologram;
use num_complex::Complex64;

/// An N×N row-major array of complex wave amplitude.
///
/// Magnitude is amplitude, argument is phase. Produced by transforms or
/// point-source accumulation, consumed by intensity extraction. Every
/// operation returns a new field; nothing mutates in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexField {
    size: usize,
    values: Vec<Complex64>,
}

impl ComplexField {
    /// All-zero field.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn zeros(size: usize) -> Self {
        Self::from_fn(size, |_, _| Complex64::new(0.0, 0.0))
    }

    /// Create a field from row-major samples.
    ///
    /// Returns [`HoloError::ShapeMismatch`] if `values.len() != size²`,
    /// or [`HoloError::InvalidParameter`] for a zero size.
    pub fn from_values(size: usize, values: Vec<Complex64>) -> Result<Self, HoloError> {
        if size == 0 {
            return Err(HoloError::InvalidParameter {
                name: "size",
                value: 0.0,
            });
        }
        let expected = size * size;
        if values.len() != expected {
            return Err(HoloError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { size, values })
    }

    /// Build a field by evaluating `f(row, col)` at every sample.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Complex64) -> Self {
        assert!(size > 0, "field size must be non-zero");
        let mut values = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                values.push(f(row, col));
            }
        }
        Self { size, values }
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major samples.
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Consume the field, returning its samples.
    pub fn into_values(self) -> Vec<Complex64> {
        self.values
    }

    /// Element-wise coherent sum with another field.
    ///
    /// Returns [`HoloError::ShapeMismatch`] if the shapes disagree.
    pub fn add(&self, other: &ComplexField) -> Result<ComplexField, HoloError> {
        if self.size != other.size {
            return Err(HoloError::ShapeMismatch {
                expected: self.size * self.size,
                actual: other.size * other.size,
            });
        }
        Ok(ComplexField {
            size: self.size,
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Per-sample magnitude `|z|`.
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.norm()).collect()
    }

    /// Squared-magnitude intensity `|z|²` as a hologram.
    ///
    /// The result is real and non-negative by construction.
    pub fn intensity(&self) -> Hologram {
        let size = self.size;
        Hologram::from_fn(size, |row, col| self.values[row * size + col].norm_sqr())
    }
}
