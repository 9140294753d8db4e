//! # naca_core - NACA 4-Digit Airfoil Generator
//!
//! `naca_core` computes the surface coordinates of NACA 4-digit airfoils from
//! their designator (`"2412"`, `"0012"`, ...) and a station count. The output
//! is one ordered polyline suitable for plotting, meshing or CAD export.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure calculation per call, no caching
//! - **JSON-First**: inputs and results implement Serialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use naca_core::{generate, ProfileOptions};
//!
//! let coords = generate("2412", 50, &ProfileOptions::default()).unwrap();
//!
//! // Clockwise loop from the trailing edge, 2N - 1 points
//! assert_eq!(coords.len(), 99);
//! assert_eq!(coords.points()[0].y, 0.0);
//!
//! let json = coords.to_json_pretty().unwrap();
//! assert!(json.contains("\"designator\": \"2412\""));
//! ```
//!
//! ## Modules
//!
//! - [`designator`] - Four-digit code parsing and shape parameters
//! - [`grid`] - Half-cosine and linear chord station distributions
//! - [`profile`] - Thickness, camber and surface assembly
//! - [`file_io`] - `.dat` coordinate file reading and writing
//! - [`errors`] - Structured error types

pub mod designator;
pub mod errors;
pub mod file_io;
pub mod grid;
pub mod profile;

// Re-export commonly used types at crate root for convenience
pub use designator::AirfoilDesignator;
pub use errors::{NacaError, NacaResult};
pub use file_io::{load_dat, save_dat, write_dat, DatFile};
pub use grid::{SampleGrid, Spacing};
pub use profile::{calculate, generate, ProfileInput, ProfileOptions, SurfaceCoordinates, SurfacePoint};
