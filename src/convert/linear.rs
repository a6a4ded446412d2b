// SPDX-License-Identifier: MPL-2.0
//! Linear transform `a0 + x * a1`.

use std::fmt;
use std::str::FromStr;

/// Error parsing a `"a0,a1"` coefficient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLinearTransformError {
    /// Fewer than two coefficients were given.
    TooFewCoefficients(usize),
    /// A coefficient is not a number.
    InvalidNumber(String),
}

impl fmt::Display for ParseLinearTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewCoefficients(count) => {
                write!(f, "Expected two coefficients, found {count}")
            }
            Self::InvalidNumber(text) => write!(f, "Invalid coefficient: {text}"),
        }
    }
}

impl std::error::Error for ParseLinearTransformError {}

/// Transform `offset + x * scale` and its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    pub offset: f64,
    pub scale: f64,
}

impl LinearTransform {
    #[must_use]
    pub fn new(offset: f64, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Uses the coefficients in `parameter` if given, the identity otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `parameter` is not a valid coefficient list.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, ParseLinearTransformError> {
        parameter.map_or(Ok(Self::default()), |p| p.parse())
    }

    #[must_use]
    pub fn convert(&self, x: f64) -> f64 {
        self.offset + x * self.scale
    }

    /// Inverse of [`convert`](Self::convert). A zero scale yields an infinite
    /// or NaN result.
    #[must_use]
    pub fn convert_back(&self, y: f64) -> f64 {
        (y - self.offset) / self.scale
    }
}

impl Default for LinearTransform {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl FromStr for LinearTransform {
    type Err = ParseLinearTransformError;

    /// Parses `"a0,a1"` with `.` as decimal separator. Extra coefficients
    /// are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coefficients = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| ParseLinearTransformError::InvalidNumber(part.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match coefficients.as_slice() {
            [offset, scale, ..] => Ok(Self::new(*offset, *scale)),
            other => Err(ParseLinearTransformError::TooFewCoefficients(other.len())),
        }
    }
}
