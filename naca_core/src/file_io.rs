//! # File I/O Module
//!
//! Reads and writes airfoil coordinate files in the plain `.dat` layout
//! accepted by most plotting and CAD tools.
//!
//! ## File Format
//!
//! ```text
//! # NACA 2412
//! 1.000000	0.000000
//! 0.998973	0.000218
//! ...
//! ```
//!
//! - One header line, `# NACA <code>`
//! - One `x<TAB>y` line per point, fixed point with six decimals
//! - File name `NACA <code>.dat`
//!
//! Writes use plain create/truncate semantics. A failed write leaves whatever
//! was written so far in place.
//!
//! ## Example
//!
//! ```rust,no_run
//! use naca_core::file_io::{load_dat, save_dat};
//! use naca_core::profile::{generate, ProfileOptions};
//! use std::path::Path;
//!
//! let coords = generate("2412", 50, &ProfileOptions::default())?;
//! let path = save_dat(&coords, Path::new("airfoils"))?;
//! let loaded = load_dat(&path)?;
//! assert_eq!(loaded.points.len(), coords.len());
//! # Ok::<(), naca_core::errors::NacaError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::designator::AirfoilDesignator;
use crate::errors::{NacaError, NacaResult};
use crate::profile::{SurfaceCoordinates, SurfacePoint};

/// Decimal places written for each coordinate
pub const DAT_PRECISION: usize = 6;

/// Contents of a coordinate file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatFile {
    /// Header name with any leading `#` removed, e.g. "NACA 2412"
    pub name: String,

    /// Points in file order
    pub points: Vec<SurfacePoint>,
}

impl DatFile {
    /// Designator recovered from a `NACA <code>` header, if the header has
    /// that form.
    pub fn designator(&self) -> Option<AirfoilDesignator> {
        self.name
            .strip_prefix("NACA ")
            .and_then(|code| AirfoilDesignator::parse(code.trim()).ok())
    }
}

/// File name for an airfoil: `NACA <code>.dat`
pub fn dat_file_name(designator: &AirfoilDesignator) -> String {
    format!("NACA {}.dat", designator.code())
}

/// Write coordinates into `dir` under [`dat_file_name`].
///
/// Returns the path written.
pub fn save_dat(coords: &SurfaceCoordinates, dir: &Path) -> NacaResult<PathBuf> {
    let path = dir.join(dat_file_name(coords.designator()));
    write_dat(coords, &path)?;
    Ok(path)
}

/// Write coordinates to exactly `path`, creating or truncating it.
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(NacaError::FileError)` - Create, write or flush failed
pub fn write_dat(coords: &SurfaceCoordinates, path: &Path) -> NacaResult<()> {
    let file = File::create(path).map_err(|e| {
        NacaError::file_error("create", path.display().to_string(), e.to_string())
    })?;
    let mut writer = BufWriter::new(file);

    let write_err =
        |e: std::io::Error| NacaError::file_error("write", path.display().to_string(), e.to_string());

    writeln!(writer, "# {}", coords.designator()).map_err(write_err)?;
    for point in coords.points() {
        writeln!(
            writer,
            "{:.prec$}\t{:.prec$}",
            point.x,
            point.y,
            prec = DAT_PRECISION
        )
        .map_err(write_err)?;
    }

    writer.flush().map_err(|e| {
        NacaError::file_error("flush", path.display().to_string(), e.to_string())
    })?;

    info!(
        path = %path.display(),
        points = coords.len(),
        "Wrote airfoil coordinates"
    );
    Ok(())
}

/// Load a coordinate file.
///
/// Lines starting with `#` are comments; the first one names the airfoil. A
/// first line that is not a number pair is also taken as the name (the
/// Selig-style header without `#`). Blank lines are skipped. Data lines hold
/// two whitespace-separated numbers.
///
/// # Returns
///
/// * `Ok(DatFile)` - Parsed name and points
/// * `Err(NacaError::FileError)` - File could not be opened or read
/// * `Err(NacaError::ParseError)` - A data line is malformed
pub fn load_dat(path: &Path) -> NacaResult<DatFile> {
    let file = File::open(path).map_err(|e| {
        NacaError::file_error("open", path.display().to_string(), e.to_string())
    })?;
    let reader = BufReader::new(file);

    let mut name: Option<String> = None;
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| {
            NacaError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            if name.is_none() {
                name = Some(comment.trim().to_string());
            }
            continue;
        }

        match parse_pair(trimmed) {
            Ok(point) => points.push(point),
            Err(_) if name.is_none() && points.is_empty() => {
                name = Some(trimmed.to_string());
            }
            Err(reason) => {
                return Err(NacaError::parse_error(path.display().to_string(), line_no, reason));
            }
        }
    }

    info!(
        path = %path.display(),
        points = points.len(),
        "Read airfoil coordinates"
    );

    Ok(DatFile {
        name: name.unwrap_or_default(),
        points,
    })
}

fn parse_pair(line: &str) -> Result<SurfacePoint, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(format!("expected 2 columns, found {}", fields.len()));
    }
    let x = fields[0]
        .parse::<f64>()
        .map_err(|e| format!("invalid x value '{}': {}", fields[0], e))?;
    let y = fields[1]
        .parse::<f64>()
        .map_err(|e| format!("invalid y value '{}': {}", fields[1], e))?;
    Ok(SurfacePoint::new(x, y))
}
