//! Core domain types for the Mesa restaurant ranking engine.
//!
//! Listings arrive as [`RawRestaurant`] rows of untrusted text. Field
//! normalization turns them into [`Restaurant`] values or entries on a
//! drop-list, collected in a [`Dataset`]. A [`RankingConfig`] carries every
//! tunable of a ranking pass and is validated before any record is scored.
//!
//! # Examples
//!
//! ```
//! use mesa_core::{Dataset, RankingConfig, RawRestaurant};
//!
//! # fn main() -> Result<(), mesa_core::ConfigError> {
//! let rows = vec![
//!     RawRestaurant::new(1)
//!         .with_name("Tacos Fitos")
//!         .with_rating("4.9")
//!         .with_review_count("3,400+")
//!         .with_coordinates("32.5160", "-117.0300"),
//! ];
//! let dataset = Dataset::from_raw(&rows);
//! let config = RankingConfig::builder().top_n(10).denylist(["oxxo"]).build()?;
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(config.top_n(), 10);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bounds;
pub mod config;
pub mod denylist;
pub mod field;
pub mod restaurant;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bounds::{BoundingBox, BoundingBoxError};
pub use config::{
    ConfigError, DEFAULT_SCATTER_SIZE, DEFAULT_TOP_N, RankingConfig, RankingConfigBuilder,
};
pub use denylist::{Denylist, DenylistError};
pub use field::{Field, FieldError, RATING_MAX};
pub use restaurant::{Dataset, DroppedRecord, RawRestaurant, Restaurant};
