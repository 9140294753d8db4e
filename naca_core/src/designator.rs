//! # NACA 4-Digit Designator
//!
//! Decodes the four-character airfoil code into its three shape parameters:
//!
//! | Digits | Parameter         | Scaling          | Range        |
//! |--------|-------------------|------------------|--------------|
//! | 1      | Maximum camber    | percent of chord | 0.00 – 0.09  |
//! | 2      | Camber position   | tenths of chord  | 0.0 – 0.9    |
//! | 3–4    | Maximum thickness | percent of chord | 0.00 – 0.99  |
//!
//! ## Example
//!
//! ```rust
//! use naca_core::designator::AirfoilDesignator;
//!
//! let naca = AirfoilDesignator::parse("2412").unwrap();
//! assert_eq!(naca.max_camber(), 0.02);
//! assert_eq!(naca.camber_position(), 0.4);
//! assert_eq!(naca.max_thickness(), 0.12);
//! assert_eq!(naca.to_string(), "NACA 2412");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{NacaError, NacaResult};

/// A validated NACA 4-digit designator such as `2412` or `0012`.
///
/// Serializes as the bare four-character code (`"2412"`), and deserializing
/// runs the same validation as [`AirfoilDesignator::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirfoilDesignator {
    code: String,
    camber_digit: u8,
    position_digit: u8,
    thickness_digits: u8,
}

impl AirfoilDesignator {
    /// Parse and validate a designator.
    ///
    /// The code must be exactly four ASCII digits and, read as an integer,
    /// lie strictly between 0 and 10000. No sign and no surrounding
    /// whitespace is accepted.
    ///
    /// # Errors
    ///
    /// * `Err(NacaError::InvalidInput)` with `field = "designator"`
    pub fn parse(code: &str) -> NacaResult<Self> {
        if code.len() != 4 {
            return Err(NacaError::invalid_input(
                "designator",
                code,
                format!("Designator must have exactly 4 digits, got {} characters", code.chars().count()),
            ));
        }

        let bytes = code.as_bytes();
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(NacaError::invalid_input(
                "designator",
                code,
                "Designator must contain only the digits 0-9",
            ));
        }

        let digit = |i: usize| bytes[i] - b'0';
        let value = bytes
            .iter()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
        if value == 0 {
            return Err(NacaError::invalid_input(
                "designator",
                code,
                "Designator must be greater than 0000",
            ));
        }

        Ok(AirfoilDesignator {
            code: code.to_string(),
            camber_digit: digit(0),
            position_digit: digit(1),
            thickness_digits: digit(2) * 10 + digit(3),
        })
    }

    /// The four-character code, e.g. `"2412"`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Maximum camber `m` as a fraction of chord (first digit / 100)
    pub fn max_camber(&self) -> f64 {
        scaled(self.camber_digit, 100.0)
    }

    /// Chordwise position `p` of maximum camber (second digit / 10)
    pub fn camber_position(&self) -> f64 {
        scaled(self.position_digit, 10.0)
    }

    /// Maximum thickness `t` as a fraction of chord (last two digits / 100)
    pub fn max_thickness(&self) -> f64 {
        scaled(self.thickness_digits, 100.0)
    }

    /// True when the mean line is flat (zero camber or camber position at
    /// the leading edge).
    pub fn is_symmetric(&self) -> bool {
        self.camber_digit == 0 || self.position_digit == 0
    }
}

/// Zero digits map to an exact 0.0 without going through a division.
fn scaled(digits: u8, divisor: f64) -> f64 {
    if digits == 0 {
        0.0
    } else {
        f64::from(digits) / divisor
    }
}

impl FromStr for AirfoilDesignator {
    type Err = NacaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AirfoilDesignator::parse(s)
    }
}

impl TryFrom<String> for AirfoilDesignator {
    type Error = NacaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AirfoilDesignator::parse(&value)
    }
}

impl From<AirfoilDesignator> for String {
    fn from(designator: AirfoilDesignator) -> Self {
        designator.code
    }
}

impl fmt::Display for AirfoilDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NACA {}", self.code)
    }
}
