//! Monte-Carlo estimate of a circle's area.
//!
//! Shares nothing with the sorting benchmark beyond the random-number stack.

use rand::Rng;
use rand::RngCore;

use crate::error::{BenchError, BenchResult};

/// Estimate the area of a circle of the given radius by sampling uniform
/// points in its bounding square and scaling by the hit ratio.
///
/// Deterministic under a seeded `rng`; the relative error shrinks as
/// `samples` grows.
pub fn estimate_circle_area<R: RngCore>(
    radius: f64,
    samples: usize,
    rng: &mut R,
) -> BenchResult<f64> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(BenchError::invalid_argument(
            "radius must be positive and finite",
            Some("radius"),
        ));
    }
    if samples == 0 {
        return Err(BenchError::invalid_argument(
            "sample count must be positive",
            Some("samples"),
        ));
    }

    let mut inside = 0usize;
    for _ in 0..samples {
        let x = rng.gen_range(-radius..=radius);
        let y = rng.gen_range(-radius..=radius);
        if x * x + y * y <= radius * radius {
            inside += 1;
        }
    }

    let square_area = (2.0 * radius) * (2.0 * radius);
    Ok(inside as f64 / samples as f64 * square_area)
}
