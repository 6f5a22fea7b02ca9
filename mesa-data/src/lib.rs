//! CSV ingestion for Mesa restaurant listings.
//!
//! Responsibilities:
//! - Locate the listing columns by header, in English or in the Spanish used
//!   by the scraped Tijuana exports.
//! - Turn every data row into a [`RawRestaurant`] without judging its cells.
//!
//! Boundaries:
//! - Do not parse numbers or apply ranking rules (live in `mesa-core` and
//!   `mesa-scorer`).
//!
//! Invariants:
//! - Rows are numbered from 1, excluding the header.
//! - Only I/O and header failures abort a load.

#![forbid(unsafe_code)]

mod columns;
mod error;

use std::io::Read;

use camino::Utf8Path;
use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info};
use mesa_core::RawRestaurant;

pub use columns::Column;
pub use error::LoadError;

use columns::ColumnMap;

/// Read raw listings from CSV text with a header row.
///
/// Rows may be shorter or longer than the header; missing cells become
/// absent fields and extra cells are ignored. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Examples
/// ```
/// use mesa_data::read_restaurants;
///
/// # fn main() -> Result<(), mesa_data::LoadError> {
/// let csv = "Nombre,Categoría,Calificación,Número de Opiniones,Latitud,Longitud\n\
///            Tacos El Franc,Taquería,4.7,\"2,500+\",32.52,-117.02\n";
/// let rows = read_restaurants(csv.as_bytes())?;
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].review_count.as_deref(), Some("2,500+"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns [`LoadError::MissingColumn`] when a required header is absent,
/// and [`LoadError::ReadHeader`] or [`LoadError::ReadRow`] when the stream
/// fails.
pub fn read_restaurants<R: Read>(reader: R) -> Result<Vec<RawRestaurant>, LoadError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv
        .byte_headers()
        .map_err(|source| LoadError::ReadHeader { source })?;
    let columns = ColumnMap::resolve(headers)?;

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        let row = rows.len() + 1;
        match csv.read_byte_record(&mut record) {
            Ok(true) => rows.push(columns.extract(row, &record)),
            Ok(false) => break,
            Err(source) => return Err(LoadError::ReadRow { row, source }),
        }
    }
    debug!("read {} listing rows", rows.len());
    Ok(rows)
}

/// Open `path` and read its raw listings.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened, plus any
/// error from [`read_restaurants`].
pub fn load_restaurants(path: &Utf8Path) -> Result<Vec<RawRestaurant>, LoadError> {
    let file = mesa_fs::open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_restaurants(file)?;
    info!("loaded {} listing rows from {path}", rows.len());
    Ok(rows)
}
