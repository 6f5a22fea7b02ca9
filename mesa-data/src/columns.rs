//! Header resolution for listing exports.

use csv::ByteRecord;
use mesa_core::RawRestaurant;

use crate::LoadError;

/// Logical columns recognised in a listings export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Listing name.
    Name,
    /// Optional category.
    Category,
    /// Average rating.
    Rating,
    /// Number of reviews.
    ReviewCount,
    /// Latitude.
    Latitude,
    /// Longitude.
    Longitude,
}

impl Column {
    /// Canonical English name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Rating => "rating",
            Self::ReviewCount => "review_count",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    /// Accepted header spellings, English first then the scraper's Spanish.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name", "Nombre"],
            Self::Category => &["category", "Categoría"],
            Self::Rating => &["rating", "Calificación"],
            Self::ReviewCount => &["review_count", "Número de Opiniones"],
            Self::Latitude => &["latitude", "Latitud"],
            Self::Longitude => &["longitude", "Longitud"],
        }
    }

    fn matches(self, header: &str) -> bool {
        self.aliases().contains(&header)
    }
}

/// Positions of each logical column within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    name: usize,
    category: Option<usize>,
    rating: usize,
    review_count: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnMap {
    /// Locate every column in `headers`; the first matching header wins.
    pub(crate) fn resolve(headers: &ByteRecord) -> Result<Self, LoadError> {
        let names: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(index, raw)| normalise_header(index, raw))
            .collect();
        let find = |column: Column| names.iter().position(|name| column.matches(name));
        let require = |column: Column| {
            find(column).ok_or(LoadError::MissingColumn {
                column: column.as_str(),
                aliases: column.aliases(),
            })
        };
        Ok(Self {
            name: require(Column::Name)?,
            category: find(Column::Category),
            rating: require(Column::Rating)?,
            review_count: require(Column::ReviewCount)?,
            latitude: require(Column::Latitude)?,
            longitude: require(Column::Longitude)?,
        })
    }

    /// Copy the mapped cells of `record` into a raw listing.
    pub(crate) fn extract(&self, row: usize, record: &ByteRecord) -> RawRestaurant {
        RawRestaurant {
            row,
            name: cell(record, Some(self.name)),
            category: cell(record, self.category),
            rating: cell(record, Some(self.rating)),
            review_count: cell(record, Some(self.review_count)),
            latitude: cell(record, Some(self.latitude)),
            longitude: cell(record, Some(self.longitude)),
        }
    }
}

/// Decode a header cell; the first one may carry a UTF-8 byte-order mark.
fn normalise_header(index: usize, raw: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(raw);
    let unmarked = if index == 0 {
        decoded.trim_start_matches('\u{feff}')
    } else {
        decoded.as_ref()
    };
    unmarked.trim().to_owned()
}

fn cell(record: &ByteRecord, index: Option<usize>) -> Option<String> {
    record
        .get(index?)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}
