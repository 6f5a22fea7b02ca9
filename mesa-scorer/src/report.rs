//! Data behind the dashboard views: leaderboard table, rating/review
//! scatter, rating distribution and density map.
//!
//! Rendering lives elsewhere; these types only carry serializable values.
#![forbid(unsafe_code)]

use std::num::NonZeroUsize;

use mesa_core::RATING_MAX;
use serde::Serialize;

use crate::Ranking;
use crate::types::{RankedRestaurant, ScoredRestaurant};

/// Number of rating histogram bins used when none is configured.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// One leaderboard table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    /// One-based rank.
    pub rank: usize,
    /// Listing name.
    pub name: String,
    /// Optional category.
    pub category: Option<String>,
    /// Review count as written in the source.
    pub review_count: String,
    /// Average rating.
    pub rating: f64,
    /// Normalized score rounded to two decimals.
    pub normalized_score: f64,
}

impl From<&RankedRestaurant> for LeaderboardRow {
    fn from(entry: &RankedRestaurant) -> Self {
        let restaurant = &entry.scored.restaurant;
        Self {
            rank: entry.rank,
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            review_count: restaurant.review_count_label.clone(),
            rating: restaurant.rating,
            normalized_score: entry.scored.display_score(),
        }
    }
}

/// One point of the rating-versus-reviews scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Listing name.
    pub name: String,
    /// Optional category.
    pub category: Option<String>,
    /// Review count as written in the source.
    pub review_count: String,
    /// Parsed review count, used as the vertical axis.
    pub review_count_value: f64,
    /// Average rating, used as the horizontal axis.
    pub rating: f64,
    /// Normalized score rounded to two decimals, used for colour.
    pub normalized_score: f64,
}

impl From<&ScoredRestaurant> for ScatterPoint {
    fn from(scored: &ScoredRestaurant) -> Self {
        let restaurant = &scored.restaurant;
        Self {
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            review_count: restaurant.review_count_label.clone(),
            review_count_value: restaurant.review_count,
            rating: restaurant.rating,
            normalized_score: scored.display_score(),
        }
    }
}

/// One equal-width rating interval and how many listings fall in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge; exclusive except for the last bin.
    pub upper: f64,
    /// Listings whose rating falls in the bin.
    pub count: usize,
}

/// Distribution of ratings over the fixed `0.0..=5.0` band.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use mesa_scorer::report::RatingHistogram;
///
/// let bins = NonZeroUsize::new(5).expect("non-zero");
/// let histogram = RatingHistogram::from_ratings([0.5, 4.2, 4.8, 5.0], bins);
/// let counts: Vec<usize> = histogram.bins().iter().map(|bin| bin.count).collect();
/// assert_eq!(counts, vec![1, 0, 0, 0, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RatingHistogram {
    bins: Vec<HistogramBin>,
}

impl RatingHistogram {
    /// Count ratings into `bins` equal-width intervals.
    ///
    /// A rating of exactly `5.0` lands in the last bin. Ratings outside the
    /// band cannot occur for parsed listings and are clamped.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "bin edges and indices derive from the bounded rating band"
    )]
    pub fn from_ratings(ratings: impl IntoIterator<Item = f64>, bins: NonZeroUsize) -> Self {
        let bin_count = bins.get();
        let width = RATING_MAX / bin_count as f64;
        let mut histogram: Vec<HistogramBin> = (0..bin_count)
            .map(|index| HistogramBin {
                lower: index as f64 * width,
                upper: if index + 1 == bin_count {
                    RATING_MAX
                } else {
                    (index + 1) as f64 * width
                },
                count: 0,
            })
            .collect();
        for rating in ratings {
            let clamped = rating.clamp(0.0, RATING_MAX);
            let index = ((clamped / width).floor() as usize).min(bin_count - 1);
            if let Some(bin) = histogram.get_mut(index) {
                bin.count += 1;
            }
        }
        Self { bins: histogram }
    }

    /// Bins from lowest to highest rating.
    #[must_use]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total listings counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// A location feeding the density map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Counts and aggregates describing a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Input rows, including malformed ones.
    pub rows_read: usize,
    /// Rows dropped because a field failed to parse.
    pub malformed: usize,
    /// Listings outside the bounding box.
    pub out_of_bounds: usize,
    /// Listings matched by the denylist.
    pub denylisted: usize,
    /// Listings that were scored.
    pub working_set: usize,
    /// Mean rating of the working set, absent when it is empty.
    pub mean_rating: Option<f64>,
    /// Whether the zero-spread normalization fallback applied.
    pub degenerate: bool,
}

/// Every dashboard view's data for one ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Counts and aggregates.
    pub summary: ReportSummary,
    /// Ranked top-N table.
    pub leaderboard: Vec<LeaderboardRow>,
    /// Unranked scatter subset.
    pub scatter: Vec<ScatterPoint>,
    /// Rating distribution of the working set.
    pub rating_histogram: RatingHistogram,
    /// Locations of the working set.
    pub heat_points: Vec<HeatPoint>,
}

impl Report {
    /// Assemble every view from a finished ranking.
    #[must_use]
    pub fn build(ranking: &Ranking, histogram_bins: NonZeroUsize) -> Self {
        let working_set = ranking.working_set();
        let exclusions = ranking.exclusions();
        let summary = ReportSummary {
            rows_read: ranking.rows_read(),
            malformed: exclusions.malformed,
            out_of_bounds: exclusions.out_of_bounds,
            denylisted: exclusions.denylisted,
            working_set: working_set.len(),
            mean_rating: mean_rating(working_set),
            degenerate: ranking.is_degenerate(),
        };
        Self {
            summary,
            leaderboard: ranking.leaderboard().iter().map(LeaderboardRow::from).collect(),
            scatter: ranking.scatter().iter().map(ScatterPoint::from).collect(),
            rating_histogram: RatingHistogram::from_ratings(
                working_set.iter().map(|scored| scored.restaurant.rating),
                histogram_bins,
            ),
            heat_points: working_set
                .iter()
                .map(|scored| HeatPoint {
                    latitude: scored.restaurant.latitude,
                    longitude: scored.restaurant.longitude,
                })
                .collect(),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the mean divides a rating sum by the listing count"
)]
fn mean_rating(working_set: &[ScoredRestaurant]) -> Option<f64> {
    if working_set.is_empty() {
        return None;
    }
    let total: f64 = working_set
        .iter()
        .map(|scored| scored.restaurant.rating)
        .sum();
    Some(total / working_set.len() as f64)
}
