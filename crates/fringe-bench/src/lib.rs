//! Benchmark profiles for the fringe holography workspace.
//!
//! Provides deterministic, seeded inputs for the Criterion benches so
//! that runs are comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fringe_core::{Point3, PointCloud};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A seeded random point cloud: `count` points uniformly distributed in
/// a cube of half-extent `half` meters, centered on the optical axis.
pub fn random_cloud(count: usize, half: f64, seed: u64) -> PointCloud {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_cloud_is_deterministic() {
        let a = random_cloud(50, 1e-3, 42);
        let b = random_cloud(50, 1e-3, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn random_cloud_respects_bounds() {
        let cloud = random_cloud(200, 1e-3, 7);
        assert_eq!(cloud.len(), 200);
        for p in cloud.iter() {
            assert!(p.x.abs() <= 1e-3 && p.y.abs() <= 1e-3 && p.z.abs() <= 1e-3);
        }
    }
}
