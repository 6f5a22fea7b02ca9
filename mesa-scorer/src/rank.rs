//! The ranking pass: filter, score, normalize, order and assign ranks.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::{debug, warn};
use mesa_core::{Dataset, RankingConfig, RawRestaurant};

use crate::filter::admit;
use crate::score::{composite_score, normalise_scores};
use crate::types::{ExclusionSummary, RankedRestaurant, ScoreBounds, ScoredRestaurant};

/// Runs ranking passes under a fixed, validated configuration.
///
/// The ranker holds no state besides its configuration; every call to
/// [`Ranker::rank`] borrows its input and returns a fresh [`Ranking`].
///
/// # Examples
/// ```
/// use mesa_core::{Dataset, RankingConfig, RawRestaurant};
/// use mesa_scorer::Ranker;
///
/// # fn main() -> Result<(), mesa_core::ConfigError> {
/// let rows = [("A", "4.0", "100"), ("B", "5.0", "1"), ("C", "3.0", "1000")]
///     .into_iter()
///     .enumerate()
///     .map(|(index, (name, rating, reviews))| {
///         RawRestaurant::new(index + 1)
///             .with_name(name)
///             .with_rating(rating)
///             .with_review_count(reviews)
///             .with_coordinates("32.51", "-117.03")
///     })
///     .collect::<Vec<_>>();
/// let ranker = Ranker::new(RankingConfig::builder().top_n(2).build()?);
/// let ranking = ranker.rank(&Dataset::from_raw(&rows));
/// let names: Vec<&str> = ranking.leaderboard().iter().map(|entry| entry.name()).collect();
/// assert_eq!(names, ["C", "A"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    /// Create a ranker for `config`.
    #[must_use]
    pub const fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Configuration applied by this ranker.
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Normalize raw rows and rank them in one call.
    #[must_use]
    pub fn rank_raw(&self, raw: &[RawRestaurant]) -> Ranking {
        self.rank(&Dataset::from_raw(raw))
    }

    /// Rank a parsed dataset.
    ///
    /// Normalization bounds come from the filtered working set, so they
    /// change whenever the filters do. Ordering is by normalized score, then
    /// composite score, both descending, then by input position ascending.
    #[must_use]
    pub fn rank(&self, dataset: &Dataset) -> Ranking {
        let admitted = admit(dataset.restaurants(), &self.config);
        let raw_scores: Vec<f64> = admitted
            .kept
            .iter()
            .map(|restaurant| composite_score(restaurant.rating, restaurant.review_count))
            .collect();
        let normalised = normalise_scores(&raw_scores);
        if normalised.degenerate {
            warn!(
                "all {} listings share one composite score; normalized scores fall back to 0",
                raw_scores.len()
            );
        }

        let mut working_set: Vec<ScoredRestaurant> = admitted
            .kept
            .iter()
            .zip(raw_scores.iter().zip(&normalised.values))
            .map(|(restaurant, (&score, &normalized_score))| ScoredRestaurant {
                restaurant: (*restaurant).clone(),
                score,
                normalized_score,
            })
            .collect();
        working_set.sort_by(leaderboard_order);

        let leaderboard = working_set
            .iter()
            .take(self.config.top_n())
            .cloned()
            .zip(1..)
            .map(|(scored, rank)| RankedRestaurant { rank, scored })
            .collect();
        let exclusions = ExclusionSummary {
            malformed: dataset.dropped().len(),
            ..admitted.exclusions
        };
        debug!(
            "ranked {} of {} listings ({} malformed, {} out of bounds, {} denylisted)",
            working_set.len(),
            dataset.rows_read(),
            exclusions.malformed,
            exclusions.out_of_bounds,
            exclusions.denylisted
        );

        Ranking {
            leaderboard,
            scatter_len: self.config.scatter_size().min(working_set.len()),
            working_set,
            exclusions,
            score_bounds: normalised.bounds,
            degenerate: normalised.degenerate,
            rows_read: dataset.rows_read(),
        }
    }
}

fn leaderboard_order(a: &ScoredRestaurant, b: &ScoredRestaurant) -> Ordering {
    b.normalized_score
        .total_cmp(&a.normalized_score)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.restaurant.position.cmp(&b.restaurant.position))
}

/// Output of one ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    leaderboard: Vec<RankedRestaurant>,
    working_set: Vec<ScoredRestaurant>,
    scatter_len: usize,
    exclusions: ExclusionSummary,
    score_bounds: Option<ScoreBounds>,
    degenerate: bool,
    rows_read: usize,
}

impl Ranking {
    /// Top-N listings with ranks `1..=N`, best first.
    #[must_use]
    pub fn leaderboard(&self) -> &[RankedRestaurant] {
        &self.leaderboard
    }

    /// The larger unranked subset used for scatter views, best first.
    #[must_use]
    pub fn scatter(&self) -> &[ScoredRestaurant] {
        self.working_set
            .get(..self.scatter_len)
            .unwrap_or_default()
    }

    /// Every listing that survived filtering, best first.
    #[must_use]
    pub fn working_set(&self) -> &[ScoredRestaurant] {
        &self.working_set
    }

    /// Counts of listings removed before scoring.
    #[must_use]
    pub const fn exclusions(&self) -> ExclusionSummary {
        self.exclusions
    }

    /// Composite score range of the working set, absent when it is empty.
    #[must_use]
    pub const fn score_bounds(&self) -> Option<ScoreBounds> {
        self.score_bounds
    }

    /// Report whether the zero-spread fallback applied.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Number of input rows, including malformed ones.
    #[must_use]
    pub const fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Report whether the leaderboard is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaderboard.is_empty()
    }
}
