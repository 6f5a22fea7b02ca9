//! Bounding-box and denylist filters applied before scoring.
#![forbid(unsafe_code)]

use mesa_core::{RankingConfig, Restaurant};

use crate::types::ExclusionSummary;

/// Why a parsed listing was kept out of the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The listing lies outside the configured bounding box.
    OutOfBounds,
    /// The listing's name matched the denylist.
    Denylisted,
}

/// Decide whether `restaurant` is excluded under `config`.
///
/// Both filters are pure predicates over a single listing, so the surviving
/// set does not depend on the order they run in. The bounding box is
/// checked first only to attribute a listing failing both to one reason.
#[must_use]
pub fn exclusion_for(restaurant: &Restaurant, config: &RankingConfig) -> Option<Exclusion> {
    if let Some(bounds) = config.bounds()
        && !bounds.contains(restaurant.latitude, restaurant.longitude)
    {
        return Some(Exclusion::OutOfBounds);
    }
    if let Some(denylist) = config.denylist()
        && denylist.matches(&restaurant.name)
    {
        return Some(Exclusion::Denylisted);
    }
    None
}

/// Listings that passed every filter, with exclusion counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Admitted<'a> {
    /// Surviving listings in input order.
    pub kept: Vec<&'a Restaurant>,
    /// Per-reason exclusion counts; `malformed` is always zero here.
    pub exclusions: ExclusionSummary,
}

/// Apply the configured filters, preserving input order.
#[must_use]
pub fn admit<'a>(restaurants: &'a [Restaurant], config: &RankingConfig) -> Admitted<'a> {
    let mut kept = Vec::with_capacity(restaurants.len());
    let mut exclusions = ExclusionSummary::default();
    for restaurant in restaurants {
        match exclusion_for(restaurant, config) {
            None => kept.push(restaurant),
            Some(Exclusion::OutOfBounds) => exclusions.out_of_bounds += 1,
            Some(Exclusion::Denylisted) => exclusions.denylisted += 1,
        }
    }
    Admitted { kept, exclusions }
}
