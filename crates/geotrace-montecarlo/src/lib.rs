#![warn(missing_docs)]

//! Monte Carlo estimation of the overlap area of two 2D shapes.
//!
//! Darts are sampled uniformly from the first shape's bounding
//! rectangle; the fraction landing inside both shapes, scaled by the
//! rectangle area, estimates the intersection area. Sampling runs in
//! parallel with a per-thread random generator.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use geotrace_geom::Shape2;
use geotrace_math::Point2;

/// Errors from the overlap estimator.
#[derive(Error, Debug)]
pub enum MonteCarloError {
    /// Settings that cannot produce an estimate.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Convenience alias for estimator results.
pub type Result<T> = std::result::Result<T, MonteCarloError>;

/// Sampling parameters for the overlap estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapSettings {
    /// Number of darts to throw. More darts tighten the estimate; the
    /// standard error shrinks with the square root of the count.
    pub samples: u64,
}

impl Default for OverlapSettings {
    fn default() -> Self {
        Self { samples: 100_000 }
    }
}

impl OverlapSettings {
    /// Check the settings can produce an estimate.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(MonteCarloError::InvalidSettings(
                "samples must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Estimate the area shared by `shape1` and `shape2`.
///
/// The sampling rectangle is `shape1`'s bounding box, so the estimate
/// covers exactly the overlap region (any overlap lies inside both
/// shapes' boxes). Disjoint shapes estimate to 0.
pub fn overlap_area<S1, S2>(shape1: &S1, shape2: &S2, settings: &OverlapSettings) -> Result<f64>
where
    S1: Shape2 + Sync,
    S2: Shape2 + Sync,
{
    settings.validate()?;

    let min_x = shape1.min_x();
    let min_y = shape1.min_y();
    let width = shape1.max_x() - min_x;
    let height = shape1.max_y() - min_y;
    if !(width > 0.0) || !(height > 0.0) {
        return Err(MonteCarloError::InvalidSettings(
            "shape1 has an empty bounding rectangle".into(),
        ));
    }

    let hits: u64 = (0..settings.samples)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| {
            let p = Point2::new(
                min_x + rng.gen::<f64>() * width,
                min_y + rng.gen::<f64>() * height,
            );
            u64::from(shape1.contains_point(&p) && shape2.contains_point(&p))
        })
        .sum();

    Ok(hits as f64 / settings.samples as f64 * width * height)
}
