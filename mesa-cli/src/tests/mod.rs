//! Shared test harness modules for the Mesa CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::rank::{RankConfig, config_from_layers_for_test, run_rank_with};

mod helpers;
mod unit;
