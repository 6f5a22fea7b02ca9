//! Composite scoring and min-max normalization.
#![forbid(unsafe_code)]

use crate::types::{NORMALIZED_MAX, ScoreBounds};

/// Composite popularity score: `rating * ln(1 + review_count)`.
///
/// The logarithm rewards review volume while compressing the long tail, so a
/// 4.5-star listing with thousands of reviews outranks a 5-star listing with
/// a handful.
///
/// # Examples
/// ```
/// use mesa_scorer::composite_score;
///
/// let score = composite_score(4.0, 100.0);
/// assert!((score - 18.4605).abs() < 1e-4);
/// assert_eq!(composite_score(5.0, 0.0), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the composite score is a floating-point product"
)]
pub fn composite_score(rating: f64, review_count: f64) -> f64 {
    rating * review_count.ln_1p()
}

/// Normalized scores for a working set, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalised {
    /// One value in `0.0..=5.0` per input score.
    pub values: Vec<f64>,
    /// Observed minimum and maximum, absent for an empty input.
    pub bounds: Option<ScoreBounds>,
    /// Set when every score was equal and the fallback applied.
    pub degenerate: bool,
}

/// Rescale composite scores linearly onto `0.0..=5.0`.
///
/// The minimum maps to `0.0` and the maximum to `5.0`. When the spread is
/// zero (every score equal, including a single score) the rescaling is
/// undefined; every value becomes `0.0` and [`Normalised::degenerate`] is
/// set.
///
/// # Examples
/// ```
/// use mesa_scorer::normalise_scores;
///
/// let normalised = normalise_scores(&[2.0, 4.0, 6.0]);
/// assert_eq!(normalised.values, vec![0.0, 2.5, 5.0]);
///
/// let flat = normalise_scores(&[3.0, 3.0]);
/// assert!(flat.degenerate);
/// assert_eq!(flat.values, vec![0.0, 0.0]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max normalization subtracts and divides scores"
)]
pub fn normalise_scores(raw: &[f64]) -> Normalised {
    let Some(bounds) = score_bounds(raw) else {
        return Normalised {
            values: Vec::new(),
            bounds: None,
            degenerate: false,
        };
    };
    let spread = bounds.max - bounds.min;
    if !(spread.is_finite() && spread > 0.0) {
        return Normalised {
            values: vec![0.0; raw.len()],
            bounds: Some(bounds),
            degenerate: true,
        };
    }
    let values = raw
        .iter()
        // Dividing first keeps the maximum at exactly 1.0 before scaling.
        .map(|score| (NORMALIZED_MAX * ((score - bounds.min) / spread)).clamp(0.0, NORMALIZED_MAX))
        .collect();
    Normalised {
        values,
        bounds: Some(bounds),
        degenerate: false,
    }
}

fn score_bounds(raw: &[f64]) -> Option<ScoreBounds> {
    let (first, rest) = raw.split_first()?;
    let bounds = rest.iter().fold(
        ScoreBounds {
            min: *first,
            max: *first,
        },
        |acc, &score| ScoreBounds {
            min: acc.min.min(score),
            max: acc.max.max(score),
        },
    );
    Some(bounds)
}
