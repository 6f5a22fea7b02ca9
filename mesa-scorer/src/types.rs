//! Scored and ranked listings produced by a ranking pass.
#![forbid(unsafe_code)]

use mesa_core::Restaurant;
use serde::Serialize;

/// Upper edge of the normalized score band.
pub const NORMALIZED_MAX: f64 = 5.0;

/// A listing with its composite and normalized scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRestaurant {
    /// The cleaned listing.
    pub restaurant: Restaurant,
    /// Composite score, `rating * ln(1 + review_count)`.
    pub score: f64,
    /// Composite score rescaled to `0.0..=5.0` over the working set.
    pub normalized_score: f64,
}

impl ScoredRestaurant {
    /// Normalized score rounded to two decimal places for display.
    #[must_use]
    pub fn display_score(&self) -> f64 {
        round_to_hundredths(self.normalized_score)
    }
}

/// A leaderboard entry carrying its one-based rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRestaurant {
    /// Position on the leaderboard, starting at 1.
    pub rank: usize,
    /// The scored listing at this rank.
    pub scored: ScoredRestaurant,
}

impl RankedRestaurant {
    /// Listing name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.scored.restaurant.name
    }

    /// Normalized score before display rounding.
    #[must_use]
    pub const fn normalized_score(&self) -> f64 {
        self.scored.normalized_score
    }
}

/// Counts of listings removed before scoring, by reason.
///
/// A listing outside the bounding box that also matches the denylist is
/// counted once, as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExclusionSummary {
    /// Rows dropped because a required field failed to parse.
    pub malformed: usize,
    /// Listings outside the configured bounding box.
    pub out_of_bounds: usize,
    /// Listings whose names matched the denylist.
    pub denylisted: usize,
}

impl ExclusionSummary {
    /// Total listings removed for any reason.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.malformed + self.out_of_bounds + self.denylisted
    }
}

/// Minimum and maximum composite score of a working set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBounds {
    /// Lowest composite score.
    pub min: f64,
    /// Highest composite score.
    pub max: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "display rounding scales by 100 and back"
)]
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
