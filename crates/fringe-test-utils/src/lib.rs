//! Test fixtures and metrics for fringe development.
//!
//! Provides the standard object patterns used across the workspace's
//! tests and benchmarks (a block-letter target and a cube-surface point
//! cloud) plus the normalized cross-correlation metric the
//! reconstruction-quality tests assert against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use fringe_core::{Grid, ObjectImage, Point3, PointCloud};

/// Block-letter "H" on a black canvas: two vertical bars spanning the
/// middle half of the image, joined by a horizontal crossbar.
pub fn letter_h(size: usize) -> ObjectImage {
    let thickness = (size / 20).max(1);
    let start_y = size / 4;
    let end_y = start_y + size / 2;
    let bar_y = size / 2 - thickness / 2;
    ObjectImage::from_fn(size, |row, col| {
        let in_left = col >= size / 4 && col < size / 4 + thickness;
        let in_right = col >= 3 * size / 4 - thickness && col < 3 * size / 4;
        let in_vertical = row >= start_y && row < end_y && (in_left || in_right);
        let in_crossbar = row >= bar_y
            && row < bar_y + thickness
            && col >= size / 4
            && col < 3 * size / 4;
        if in_vertical || in_crossbar {
            1.0
        } else {
            0.0
        }
    })
}

/// Points on the six faces of a cube centered at the origin with
/// half-extent `half` meters, sampled `per_edge` times along each axis.
pub fn cube_surface(half: f64, per_edge: usize) -> PointCloud {
    let axis: Vec<f64> = if per_edge <= 1 {
        vec![0.0]
    } else {
        let step = 2.0 * half / (per_edge - 1) as f64;
        (0..per_edge).map(|i| -half + i as f64 * step).collect()
    };

    let mut cloud = PointCloud::new();
    for &a in &axis {
        for &b in &axis {
            cloud.push(Point3::new(a, b, -half)); // front
            cloud.push(Point3::new(a, b, half)); // back
            cloud.push(Point3::new(a, -half, b)); // bottom
            cloud.push(Point3::new(a, half, b)); // top
            cloud.push(Point3::new(-half, a, b)); // left
            cloud.push(Point3::new(half, a, b)); // right
        }
    }
    cloud
}

/// A grid-aligned cloud of points in the object plane (z = 0), one for
/// each sample of `image` brighter than `threshold`.
pub fn threshold_to_points(image: &ObjectImage, pixel_pitch: f64, threshold: f64) -> PointCloud {
    let n = image.size();
    let coords = Grid::sample_axis(n);
    let mut cloud = PointCloud::new();
    for row in 0..n {
        for col in 0..n {
            if image.get(row, col) > threshold {
                cloud.push(Point3::new(
                    coords[col] * pixel_pitch,
                    coords[row] * pixel_pitch,
                    0.0,
                ));
            }
        }
    }
    cloud
}

/// Normalized cross-correlation of two equal-length sample slices.
///
/// Mean-centered; returns a value in `[-1, 1]`, or 0 when either input
/// has zero variance.
pub fn normalized_cross_correlation(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "inputs must have equal length");
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        let da = x - mean_a;
        let db = y - mean_b;
        num += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return 0.0;
    }
    num / (var_a.sqrt() * var_b.sqrt())
}
