//! Facade crate for the Mesa restaurant ranking engine.
//!
//! This crate re-exports the core domain types and the ranking pass, and
//! exposes CSV loading behind the `csv` feature.

#![forbid(unsafe_code)]

pub use mesa_core::{
    BoundingBox, BoundingBoxError, ConfigError, Dataset, Denylist, DenylistError, DroppedRecord,
    Field, FieldError, RankingConfig, RankingConfigBuilder, RawRestaurant, Restaurant,
};
pub use mesa_scorer::{
    ExclusionSummary, RankedRestaurant, Ranker, Ranking, Report, ScoreBounds, ScoredRestaurant,
};

#[cfg(feature = "csv")]
pub use mesa_data::{LoadError, load_restaurants, read_restaurants};
