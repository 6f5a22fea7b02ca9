//! Restaurant listings before and after field normalization.

use geo::Coord;

use crate::field::{
    FieldError, parse_category, parse_latitude, parse_longitude, parse_name, parse_rating,
    parse_review_count,
};

/// One row of listing input, kept as the text read from the source.
///
/// Absent cells are `None`. Nothing is validated until [`RawRestaurant::parse`]
/// runs, so loaders never fail on a bad cell.
///
/// # Examples
/// ```
/// use mesa_core::RawRestaurant;
///
/// let raw = RawRestaurant::new(1)
///     .with_name("Tacos El Gordo")
///     .with_rating("4.8")
///     .with_review_count("15,000+")
///     .with_coordinates("32.5270", "-117.0210");
/// let restaurant = raw.parse(0).expect("valid row");
/// assert_eq!(restaurant.review_count, 15_000.0);
/// assert_eq!(restaurant.review_count_label, "15,000+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRestaurant {
    /// One-based data row, excluding any header.
    pub row: usize,
    /// Listing name.
    pub name: Option<String>,
    /// Cuisine or venue category.
    pub category: Option<String>,
    /// Average rating text.
    pub rating: Option<String>,
    /// Review count text, possibly formatted (`"1,200+"`).
    pub review_count: Option<String>,
    /// Latitude text.
    pub latitude: Option<String>,
    /// Longitude text.
    pub longitude: Option<String>,
}

impl RawRestaurant {
    /// Start an empty record for the given one-based data row.
    #[must_use]
    pub fn new(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    /// Set the name cell.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the category cell.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the rating cell.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Set the review count cell.
    #[must_use]
    pub fn with_review_count(mut self, review_count: impl Into<String>) -> Self {
        self.review_count = Some(review_count.into());
        self
    }

    /// Set both coordinate cells.
    #[must_use]
    pub fn with_coordinates(
        mut self,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.latitude = Some(latitude.into());
        self.longitude = Some(longitude.into());
        self
    }

    /// Normalize every field, producing a clean [`Restaurant`].
    ///
    /// `position` is the record's zero-based index in the input sequence and
    /// becomes the final ranking tie-break.
    ///
    /// # Errors
    /// Returns the first [`FieldError`] encountered, checking name, rating,
    /// review count, latitude and longitude in that order.
    pub fn parse(&self, position: usize) -> Result<Restaurant, FieldError> {
        let name = parse_name(self.name.as_deref())?;
        let rating = parse_rating(self.rating.as_deref())?;
        let review_count = parse_review_count(self.review_count.as_deref())?;
        let latitude = parse_latitude(self.latitude.as_deref())?;
        let longitude = parse_longitude(self.longitude.as_deref())?;
        let review_count_label = self
            .review_count
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();
        Ok(Restaurant {
            name,
            category: parse_category(self.category.as_deref()),
            rating,
            review_count,
            review_count_label,
            latitude,
            longitude,
            row: self.row,
            position,
        })
    }
}

/// A listing whose numeric fields have all parsed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Trimmed, non-empty name. Not guaranteed unique.
    pub name: String,
    /// Optional category.
    pub category: Option<String>,
    /// Rating in `0.0..=5.0`.
    pub rating: f64,
    /// Non-negative review count.
    pub review_count: f64,
    /// Review count as written in the source, for display.
    pub review_count_label: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// One-based data row in the source.
    pub row: usize,
    /// Zero-based index in the input sequence.
    pub position: usize,
}

impl Restaurant {
    /// Location as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// A record excluded during field normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    /// One-based data row in the source.
    pub row: usize,
    /// Zero-based index in the input sequence.
    pub position: usize,
    /// Why the record was dropped.
    pub error: FieldError,
}

/// Parsed listings plus the drop-list of rows that failed to parse.
///
/// A `Dataset` is built once per run and borrowed by every ranking pass, so
/// the same load can be ranked repeatedly under different configurations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    restaurants: Vec<Restaurant>,
    dropped: Vec<DroppedRecord>,
}

impl Dataset {
    /// Normalize raw records, splitting them into clean listings and drops.
    ///
    /// Input order is preserved in both collections.
    ///
    /// # Examples
    /// ```
    /// use mesa_core::{Dataset, RawRestaurant};
    ///
    /// let rows = [
    ///     RawRestaurant::new(1)
    ///         .with_name("Caesar's")
    ///         .with_rating("4.6")
    ///         .with_review_count("900")
    ///         .with_coordinates("32.53", "-117.03"),
    ///     RawRestaurant::new(2).with_name("No rating"),
    /// ];
    /// let dataset = Dataset::from_raw(&rows);
    /// assert_eq!(dataset.len(), 1);
    /// assert_eq!(dataset.dropped().len(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &[RawRestaurant]) -> Self {
        let mut restaurants = Vec::with_capacity(raw.len());
        let mut dropped = Vec::new();
        for (position, record) in raw.iter().enumerate() {
            match record.parse(position) {
                Ok(restaurant) => restaurants.push(restaurant),
                Err(error) => dropped.push(DroppedRecord {
                    row: record.row,
                    position,
                    error,
                }),
            }
        }
        Self {
            restaurants,
            dropped,
        }
    }

    /// Clean listings in input order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Records dropped during normalization, in input order.
    #[must_use]
    pub fn dropped(&self) -> &[DroppedRecord] {
        &self.dropped
    }

    /// Total number of input records, clean or dropped.
    #[must_use]
    pub const fn rows_read(&self) -> usize {
        self.restaurants.len() + self.dropped.len()
    }

    /// Number of clean listings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether no listing survived normalization.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
