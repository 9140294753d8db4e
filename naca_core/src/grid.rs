//! # Chordwise Sampling Grid
//!
//! Builds the `N` chord stations in `[0, 1]` at which the thickness and
//! camber polynomials are evaluated.
//!
//! - [`Spacing::HalfCosine`]: `x_i = (1 - cos(π·i/(N-1))) / 2`. Stations
//!   cluster at both edges; near the leading edge this resolves the nose
//!   curvature.
//! - [`Spacing::Linear`]: `x_i = i/(N-1)`.
//!
//! The first station is exactly 0.0 and the last exactly 1.0.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{NacaError, NacaResult};

/// Chordwise station distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Cosine reparameterization, dense at both edges
    #[default]
    HalfCosine,
    /// Evenly spaced stations
    Linear,
}

impl Spacing {
    /// Display name for the spacing scheme
    pub fn display_name(&self) -> &'static str {
        match self {
            Spacing::HalfCosine => "half-cosine",
            Spacing::Linear => "linear",
        }
    }
}

/// Ordered chord stations, length exactly `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    spacing: Spacing,
    stations: Vec<f64>,
}

impl SampleGrid {
    /// Build a grid of `point_count` stations.
    ///
    /// A single-point grid is `[0.0]`.
    ///
    /// # Errors
    ///
    /// * `Err(NacaError::InvalidInput)` when `point_count` is zero
    pub fn new(point_count: usize, spacing: Spacing) -> NacaResult<Self> {
        if point_count == 0 {
            return Err(NacaError::invalid_input(
                "point_count",
                "0",
                "Point count must be positive",
            ));
        }

        let last = point_count - 1;
        let stations = (0..point_count)
            .map(|i| {
                if last == 0 {
                    return 0.0;
                }
                // i == last gives t == 1.0 exactly, so the final station is exactly 1.0
                let t = i as f64 / last as f64;
                match spacing {
                    Spacing::HalfCosine => (1.0 - (PI * t).cos()) / 2.0,
                    Spacing::Linear => t,
                }
            })
            .collect();

        Ok(SampleGrid { spacing, stations })
    }

    /// The spacing scheme used to build this grid
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Chord stations in increasing order
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed grid; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
