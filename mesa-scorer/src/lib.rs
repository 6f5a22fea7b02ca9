//! Popularity scoring and ranking for Mesa restaurant listings.
//!
//! The crate implements the ranking transform end to end:
//! - **Filtering** drops listings outside an optional bounding box and
//!   listings whose names match an optional denylist.
//! - **Scoring** computes `rating * ln(1 + review_count)` for each surviving
//!   listing and rescales it onto `0.0..=5.0` using the working set's own
//!   minimum and maximum.
//! - **Ranking** orders the working set deterministically and assigns ranks
//!   `1..=N` to the top `N`.
//!
//! The [`report`] module derives the data behind each dashboard view from a
//! finished [`Ranking`].
//!
//! # Examples
//!
//! ```
//! use mesa_core::{RankingConfig, RawRestaurant};
//! use mesa_scorer::Ranker;
//!
//! # fn main() -> Result<(), mesa_core::ConfigError> {
//! let rows = vec![
//!     RawRestaurant::new(1)
//!         .with_name("OXXO Restaurante")
//!         .with_rating("4.0")
//!         .with_review_count("50")
//!         .with_coordinates("32.52", "-117.02"),
//!     RawRestaurant::new(2)
//!         .with_name("Mariscos El Mazateño")
//!         .with_rating("4.7")
//!         .with_review_count("1,200+")
//!         .with_coordinates("32.53", "-117.04"),
//! ];
//! let config = RankingConfig::builder().denylist(["oxxo"]).build()?;
//! let ranking = Ranker::new(config).rank_raw(&rows);
//! assert_eq!(ranking.leaderboard().len(), 1);
//! assert_eq!(ranking.exclusions().denylisted, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod filter;
mod rank;
pub mod report;
mod score;
mod types;

pub use filter::{Admitted, Exclusion, admit, exclusion_for};
pub use rank::{Ranker, Ranking};
pub use report::{DEFAULT_HISTOGRAM_BINS, Report};
pub use score::{Normalised, composite_score, normalise_scores};
pub use types::{
    ExclusionSummary, NORMALIZED_MAX, RankedRestaurant, ScoreBounds, ScoredRestaurant,
};
