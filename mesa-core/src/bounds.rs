//! Rectangular latitude/longitude areas used to keep listings inside a city.

use geo::{Coord, Intersects, Rect};
use thiserror::Error;

/// Errors returned by [`BoundingBox::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundingBoxError {
    /// An edge was `NaN` or infinite.
    #[error("bounding box {edge} must be a finite number")]
    NonFinite {
        /// Name of the offending edge.
        edge: &'static str,
    },
    /// A latitude edge fell outside `-90.0..=90.0`.
    #[error("bounding box latitude {value} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Offending latitude.
        value: f64,
    },
    /// A longitude edge fell outside `-180.0..=180.0`.
    #[error("bounding box longitude {value} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Offending longitude.
        value: f64,
    },
    /// The minimum latitude was not below the maximum.
    #[error("bounding box min latitude {min} must be below max latitude {max}")]
    EmptyLatitudeSpan {
        /// Requested minimum latitude.
        min: f64,
        /// Requested maximum latitude.
        max: f64,
    },
    /// The minimum longitude was not below the maximum.
    #[error("bounding box min longitude {min} must be below max longitude {max}")]
    EmptyLongitudeSpan {
        /// Requested minimum longitude.
        min: f64,
        /// Requested maximum longitude.
        max: f64,
    },
}

/// An inclusive latitude/longitude rectangle.
///
/// Boxes crossing the antimeridian are not supported; `min_longitude` must be
/// below `max_longitude`.
///
/// # Examples
/// ```
/// use mesa_core::BoundingBox;
///
/// # fn main() -> Result<(), mesa_core::BoundingBoxError> {
/// let tijuana = BoundingBox::new(32.40, 32.60, -117.15, -116.85)?;
/// assert!(tijuana.contains(32.5149, -117.0382));
/// assert!(!tijuana.contains(32.7157, -117.1611));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    rect: Rect<f64>,
}

impl BoundingBox {
    /// Validate and construct a bounding box.
    ///
    /// # Errors
    /// Returns [`BoundingBoxError`] when an edge is not finite, lies outside
    /// the WGS84 range, or when a minimum is not strictly below its maximum.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, BoundingBoxError> {
        for (edge, value) in [
            ("min latitude", min_latitude),
            ("max latitude", max_latitude),
            ("min longitude", min_longitude),
            ("max longitude", max_longitude),
        ] {
            if !value.is_finite() {
                return Err(BoundingBoxError::NonFinite { edge });
            }
        }
        for value in [min_latitude, max_latitude] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(BoundingBoxError::LatitudeOutOfRange { value });
            }
        }
        for value in [min_longitude, max_longitude] {
            if !(-180.0..=180.0).contains(&value) {
                return Err(BoundingBoxError::LongitudeOutOfRange { value });
            }
        }
        if min_latitude >= max_latitude {
            return Err(BoundingBoxError::EmptyLatitudeSpan {
                min: min_latitude,
                max: max_latitude,
            });
        }
        if min_longitude >= max_longitude {
            return Err(BoundingBoxError::EmptyLongitudeSpan {
                min: min_longitude,
                max: max_longitude,
            });
        }
        let rect = Rect::new(
            Coord {
                x: min_longitude,
                y: min_latitude,
            },
            Coord {
                x: max_longitude,
                y: max_latitude,
            },
        );
        Ok(Self { rect })
    }

    /// Report whether a point lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        // `Intersects` treats boundary points as inside the rectangle.
        self.rect.intersects(&Coord {
            x: longitude,
            y: latitude,
        })
    }

    /// Southern edge.
    #[must_use]
    pub fn min_latitude(&self) -> f64 {
        self.rect.min().y
    }

    /// Northern edge.
    #[must_use]
    pub fn max_latitude(&self) -> f64 {
        self.rect.max().y
    }

    /// Western edge.
    #[must_use]
    pub fn min_longitude(&self) -> f64 {
        self.rect.min().x
    }

    /// Eastern edge.
    #[must_use]
    pub fn max_longitude(&self) -> f64 {
        self.rect.max().x
    }

    /// The underlying `geo` rectangle (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn as_rect(&self) -> Rect<f64> {
        self.rect
    }
}
