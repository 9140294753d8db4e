//! # Airfoil Profile Generation
//!
//! Computes the surface coordinates of a NACA 4-digit airfoil using the
//! Abbott & von Doenhoff equations (Theory of Wing Sections, eq. 6.2–6.4).
//!
//! ## Pipeline
//!
//! 1. Decode the designator into `m`, `p`, `t`
//! 2. Build `N` chord stations ([`SampleGrid`])
//! 3. Evaluate half-thickness and mean line at every station
//! 4. `y_upper = camber + thickness`, `y_lower = camber - thickness`
//! 5. Assemble one clockwise loop: upper surface from trailing edge to
//!    leading edge, then lower surface from the station after the leading
//!    edge back to the trailing edge (`2N - 1` points)
//! 6. Optionally write `NACA <code>.dat` to the working directory
//!
//! No vertical offset is applied to the thickness (it is added straight to y,
//! not along the camber-line normal), matching the tabulated reference
//! coordinates.
//!
//! ## Example
//!
//! ```rust
//! use naca_core::profile::{generate, ProfileOptions};
//!
//! let coords = generate("2412", 50, &ProfileOptions::default()).unwrap();
//! assert_eq!(coords.len(), 99);
//! assert_eq!(coords.trailing_edge().y, 0.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::designator::AirfoilDesignator;
use crate::errors::{NacaError, NacaResult};
use crate::file_io::{dat_file_name, write_dat};
use crate::grid::{SampleGrid, Spacing};

/// `x^4` coefficient giving zero thickness at `x = 1`
pub const CLOSED_TE_COEFFICIENT: f64 = 0.10360;

/// `x^4` coefficient of the original equation (finite trailing-edge gap)
pub const OPEN_TE_COEFFICIENT: f64 = 0.10150;

/// Generation options.
///
/// Defaults: half-cosine spacing, closed trailing edge, no file output.
///
/// ## JSON Example
///
/// ```json
/// {
///   "spacing": "half_cosine",
///   "closed_trailing_edge": true,
///   "write_to_file": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Chordwise station distribution
    pub spacing: Spacing,

    /// Use the closed-trailing-edge thickness coefficient and zero the
    /// endpoint y values
    pub closed_trailing_edge: bool,

    /// Write `NACA <code>.dat` into the current working directory
    pub write_to_file: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        ProfileOptions {
            spacing: Spacing::HalfCosine,
            closed_trailing_edge: true,
            write_to_file: false,
        }
    }
}

impl ProfileOptions {
    /// Build options from the three independent toggles.
    pub fn new(half_cosine_spacing: bool, closed_trailing_edge: bool, write_to_file: bool) -> Self {
        ProfileOptions {
            spacing: if half_cosine_spacing { Spacing::HalfCosine } else { Spacing::Linear },
            closed_trailing_edge,
            write_to_file,
        }
    }

    /// Use the given station distribution
    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Keep the finite trailing-edge gap of the unmodified equation
    #[must_use]
    pub fn open_trailing_edge(mut self) -> Self {
        self.closed_trailing_edge = false;
        self
    }

    /// Also write the coordinates to `NACA <code>.dat`
    #[must_use]
    pub fn with_file_output(mut self) -> Self {
        self.write_to_file = true;
        self
    }

    /// The `x^4` thickness coefficient implied by the trailing-edge setting
    pub fn thickness_coefficient(&self) -> f64 {
        trailing_edge_coefficient(self.closed_trailing_edge)
    }
}

/// Input parameters for a profile calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "designator": "2412",
///   "point_count": 50,
///   "options": { "spacing": "linear" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Four-digit NACA code, e.g. "2412"
    pub designator: String,

    /// Stations per surface; the result has `2 * point_count - 1` points
    pub point_count: usize,

    /// Spacing, trailing edge and file output toggles
    #[serde(default)]
    pub options: ProfileOptions,
}

impl ProfileInput {
    /// Create an input with default options
    pub fn new(designator: impl Into<String>, point_count: usize) -> Self {
        ProfileInput {
            designator: designator.into(),
            point_count,
            options: ProfileOptions::default(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> NacaResult<()> {
        AirfoilDesignator::parse(&self.designator)?;
        if self.point_count == 0 {
            return Err(NacaError::invalid_input(
                "point_count",
                self.point_count.to_string(),
                "Point count must be positive",
            ));
        }
        Ok(())
    }
}

/// A single surface coordinate in chord units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        SurfacePoint { x, y }
    }
}

/// Ordered airfoil boundary: `2N - 1` points, clockwise, starting and ending
/// at the trailing edge, with the leading edge (x = 0) exactly once at index
/// `N - 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceCoordinates {
    designator: AirfoilDesignator,
    options: ProfileOptions,
    points: Vec<SurfacePoint>,
}

impl SurfaceCoordinates {
    /// The airfoil these coordinates describe
    pub fn designator(&self) -> &AirfoilDesignator {
        &self.designator
    }

    /// Options the coordinates were generated with
    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// All points in loop order
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the leading-edge point (`N - 1`)
    pub fn leading_edge_index(&self) -> usize {
        self.points.len() / 2
    }

    /// The leading-edge point, x = 0
    pub fn leading_edge(&self) -> SurfacePoint {
        self.points[self.leading_edge_index()]
    }

    /// The first point (upper-surface trailing edge)
    pub fn trailing_edge(&self) -> SurfacePoint {
        self.points[0]
    }

    /// Upper surface from trailing edge to leading edge, inclusive
    pub fn upper_surface(&self) -> &[SurfacePoint] {
        &self.points[..=self.leading_edge_index()]
    }

    /// Lower surface from leading edge to trailing edge, inclusive
    pub fn lower_surface(&self) -> &[SurfacePoint] {
        &self.points[self.leading_edge_index()..]
    }

    /// Vertical distance between the first and last point
    pub fn trailing_edge_gap(&self) -> f64 {
        let last = self.points[self.points.len() - 1];
        (self.points[0].y - last.y).abs()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Coordinates as plain `(x, y)` tuples
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Pretty-printed JSON of designator, options and points
    pub fn to_json_pretty(&self) -> NacaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NacaError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Half-thickness at chord station `x` (eq. 6.2), scaled from the 20 %
/// reference section to `max_thickness`.
///
/// `x` must lie in `[0, 1]`.
pub fn thickness_at(max_thickness: f64, x: f64, closed_trailing_edge: bool) -> f64 {
    let c4 = trailing_edge_coefficient(closed_trailing_edge);
    max_thickness / 0.20
        * (0.29690 * x.sqrt() - 0.12600 * x - 0.35160 * x.powi(2) + 0.28430 * x.powi(3)
            - c4 * x.powi(4))
}

fn trailing_edge_coefficient(closed: bool) -> f64 {
    if closed {
        CLOSED_TE_COEFFICIENT
    } else {
        OPEN_TE_COEFFICIENT
    }
}

/// Mean-line ordinate at chord station `x` (eq. 6.4).
///
/// Flat (0.0) unless `0 < p < 1` and `0 < m < 1`. A station exactly at `p`
/// is evaluated on the aft branch.
pub fn camber_at(max_camber: f64, camber_position: f64, x: f64) -> f64 {
    let (m, p) = (max_camber, camber_position);
    if !(0.0 < p && p < 1.0 && 0.0 < m && m < 1.0) {
        return 0.0;
    }
    if x < p {
        m / p.powi(2) * (2.0 * p * x - x.powi(2))
    } else {
        m / (1.0 - p).powi(2) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2))
    }
}

/// Calculate airfoil surface coordinates.
///
/// # Returns
///
/// * `Ok(SurfaceCoordinates)` - `2 * point_count - 1` points
/// * `Err(NacaError::InvalidInput)` - bad designator or zero point count
/// * `Err(NacaError::FileError)` - `write_to_file` was set and the write failed
pub fn calculate(input: &ProfileInput) -> NacaResult<SurfaceCoordinates> {
    let designator = AirfoilDesignator::parse(&input.designator)?;
    let options = input.options;

    let m = designator.max_camber();
    let p = designator.camber_position();
    let t = designator.max_thickness();
    debug!(designator = designator.code(), m, p, t, "Decoded designator");

    let grid = SampleGrid::new(input.point_count, options.spacing)?;
    debug!(
        stations = grid.len(),
        spacing = grid.spacing().display_name(),
        "Built chordwise grid"
    );

    let x = grid.stations();
    let n = x.len();
    let mut y_upper = Vec::with_capacity(n);
    let mut y_lower = Vec::with_capacity(n);
    for &xi in x {
        let thickness = thickness_at(t, xi, options.closed_trailing_edge);
        let camber = camber_at(m, p, xi);
        y_upper.push(camber + thickness);
        y_lower.push(camber - thickness);
    }

    let mut points = Vec::with_capacity(2 * n - 1);
    for i in (0..n).rev() {
        points.push(SurfacePoint::new(x[i], y_upper[i]));
    }
    for i in 1..n {
        points.push(SurfacePoint::new(x[i], y_lower[i]));
    }

    // Thickness and camber at x = 1 leave residue of order 1e-17
    if options.closed_trailing_edge {
        let last = points.len() - 1;
        points[0].y = 0.0;
        points[last].y = 0.0;
    }

    let coords = SurfaceCoordinates {
        designator,
        options,
        points,
    };

    info!(
        designator = coords.designator.code(),
        points = coords.len(),
        spacing = options.spacing.display_name(),
        closed_trailing_edge = options.closed_trailing_edge,
        "Generated airfoil profile"
    );

    if options.write_to_file {
        let file_name = dat_file_name(&coords.designator);
        write_dat(&coords, Path::new(&file_name))?;
    }

    Ok(coords)
}

/// Generate NACA 4-digit coordinates.
///
/// Equivalent to [`calculate`] on a [`ProfileInput`] built from the
/// arguments.
///
/// # Example
///
/// ```rust
/// use naca_core::profile::{generate, ProfileOptions};
/// use naca_core::grid::Spacing;
///
/// let options = ProfileOptions::default().with_spacing(Spacing::Linear).open_trailing_edge();
/// let coords = generate("0012", 21, &options).unwrap();
/// assert_eq!(coords.len(), 41);
/// assert!(coords.trailing_edge_gap() > 0.0);
/// ```
pub fn generate(designator: &str, point_count: usize, options: &ProfileOptions) -> NacaResult<SurfaceCoordinates> {
    calculate(&ProfileInput {
        designator: designator.to_string(),
        point_count,
        options: *options,
    })
}
