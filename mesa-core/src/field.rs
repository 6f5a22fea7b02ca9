//! Per-field parsing for raw listing cells.
//!
//! Every parser returns a `Result` so a bad cell drops its record instead of
//! leaking `NaN` into the score arithmetic.

use std::fmt;

use thiserror::Error;

/// Highest rating a listing can carry.
pub const RATING_MAX: f64 = 5.0;

/// Input column a parse failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Listing name.
    Name,
    /// Average rating.
    Rating,
    /// Number of reviews.
    ReviewCount,
    /// WGS84 latitude.
    Latitude,
    /// WGS84 longitude.
    Longitude,
}

impl Field {
    /// Column name used in error messages and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::ReviewCount => "review_count",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a single cell could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The cell was absent or blank.
    #[error("{field} is missing")]
    Missing {
        /// Column that was empty.
        field: Field,
    },
    /// The cell did not hold a finite number.
    #[error("{field} value {raw:?} is not a finite number")]
    NotNumeric {
        /// Column being parsed.
        field: Field,
        /// Cell text as read.
        raw: String,
    },
    /// The number fell outside the column's valid range.
    #[error("{field} value {value} is outside {min}..={max}")]
    OutOfRange {
        /// Column being parsed.
        field: Field,
        /// Parsed value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

impl FieldError {
    /// Column the failure belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Missing { field }
            | Self::NotNumeric { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Parse a listing name; surrounding whitespace is trimmed.
///
/// # Errors
/// Returns [`FieldError::Missing`] for absent or blank names.
pub fn parse_name(cell: Option<&str>) -> Result<String, FieldError> {
    require(Field::Name, cell).map(str::to_owned)
}

/// Parse an optional category; blank cells become `None`.
#[must_use]
pub fn parse_category(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Parse a rating in `0.0..=5.0`.
///
/// # Errors
/// Returns a [`FieldError`] when the cell is missing, not numeric or out of
/// range.
pub fn parse_rating(cell: Option<&str>) -> Result<f64, FieldError> {
    let value = parse_number(Field::Rating, require(Field::Rating, cell)?)?;
    within(Field::Rating, value, 0.0, RATING_MAX)
}

/// Parse a review count such as `"1,234"` or `"500+"`.
///
/// Thousands separators are removed anywhere in the cell and a single
/// trailing `+` is dropped before parsing. Negative counts are rejected.
///
/// # Examples
/// ```
/// use mesa_core::field::parse_review_count;
///
/// assert_eq!(parse_review_count(Some("1,500+")), Ok(1500.0));
/// assert!(parse_review_count(Some("many")).is_err());
/// ```
///
/// # Errors
/// Returns a [`FieldError`] when the cell is missing or does not describe a
/// non-negative finite count.
pub fn parse_review_count(cell: Option<&str>) -> Result<f64, FieldError> {
    let raw = require(Field::ReviewCount, cell)?;
    let without_plus = raw.strip_suffix('+').unwrap_or(raw).trim_end();
    let digits: String = without_plus.chars().filter(|c| *c != ',').collect();
    let value = parse_number(Field::ReviewCount, &digits).map_err(|_| FieldError::NotNumeric {
        field: Field::ReviewCount,
        raw: raw.to_owned(),
    })?;
    within(Field::ReviewCount, value, 0.0, f64::MAX)
}

/// Parse a latitude in `-90.0..=90.0`.
///
/// # Errors
/// Returns a [`FieldError`] when the cell is missing, not numeric or out of
/// range.
pub fn parse_latitude(cell: Option<&str>) -> Result<f64, FieldError> {
    let value = parse_number(Field::Latitude, require(Field::Latitude, cell)?)?;
    within(Field::Latitude, value, -90.0, 90.0)
}

/// Parse a longitude in `-180.0..=180.0`.
///
/// # Errors
/// Returns a [`FieldError`] when the cell is missing, not numeric or out of
/// range.
pub fn parse_longitude(cell: Option<&str>) -> Result<f64, FieldError> {
    let value = parse_number(Field::Longitude, require(Field::Longitude, cell)?)?;
    within(Field::Longitude, value, -180.0, 180.0)
}

fn require(field: Field, cell: Option<&str>) -> Result<&str, FieldError> {
    match cell.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FieldError::Missing { field }),
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, FieldError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NotNumeric {
            field,
            raw: raw.to_owned(),
        }),
    }
}

fn within(field: Field, value: f64, min: f64, max: f64) -> Result<f64, FieldError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
