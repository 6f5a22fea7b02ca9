//! Rank command implementation for the Mesa CLI.

use std::io::Write;
use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info, warn};
use mesa_core::{DEFAULT_SCATTER_SIZE, DEFAULT_TOP_N, Dataset, RankingConfig};
use mesa_data::load_restaurants;
use mesa_scorer::Ranker;
use mesa_scorer::report::{DEFAULT_HISTOGRAM_BINS, LeaderboardRow, Report};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RANK_DENY, ARG_RANK_HISTOGRAM_BINS, ARG_RANK_INPUT, ARG_RANK_MAX_LAT, ARG_RANK_MAX_LON,
    ARG_RANK_MIN_LAT, ARG_RANK_MIN_LON, ARG_RANK_OUTPUT, ARG_RANK_REPORT, ARG_RANK_SCATTER,
    ARG_RANK_TOP, CliError, ENV_RANK_INPUT,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank restaurant listings from a CSV export by a composite of \
                 rating and review volume. Settings can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank restaurant listings"
)]
#[ortho_config(prefix = "MESA")]
pub(crate) struct RankArgs {
    /// Path to the listings CSV export.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Number of ranked leaderboard entries.
    #[arg(long = ARG_RANK_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Number of listings in the unranked scatter subset.
    #[arg(long = ARG_RANK_SCATTER, value_name = "n")]
    #[serde(default)]
    pub(crate) scatter: Option<usize>,
    /// Southern edge of the bounding box.
    #[arg(long = ARG_RANK_MIN_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) min_lat: Option<f64>,
    /// Northern edge of the bounding box.
    #[arg(long = ARG_RANK_MAX_LAT, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) max_lat: Option<f64>,
    /// Western edge of the bounding box.
    #[arg(long = ARG_RANK_MIN_LON, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) min_lon: Option<f64>,
    /// Eastern edge of the bounding box.
    #[arg(long = ARG_RANK_MAX_LON, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) max_lon: Option<f64>,
    /// Exclude listings whose name contains this text (repeatable).
    #[arg(long = ARG_RANK_DENY, value_name = "substring")]
    #[serde(default)]
    pub(crate) deny: Option<Vec<String>>,
    /// Number of bins in the rating histogram of the full report.
    #[arg(long = ARG_RANK_HISTOGRAM_BINS, value_name = "n")]
    #[serde(default)]
    pub(crate) histogram_bins: Option<usize>,
    /// Emit the full dashboard report instead of the leaderboard alone.
    #[arg(long = ARG_RANK_REPORT)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) report: bool,
    /// Write JSON to this file instead of standard output.
    #[arg(long = ARG_RANK_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the listings CSV export.
    pub(crate) input: Utf8PathBuf,
    /// Validated ranking settings.
    pub(crate) ranking: RankingConfig,
    /// Rating histogram resolution.
    pub(crate) histogram_bins: NonZeroUsize,
    /// Whether to emit the full report.
    pub(crate) report: bool,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_RANK_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match mesa_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_RANK_INPUT,
            env: ENV_RANK_INPUT,
        })?;

        let mut builder = RankingConfig::builder()
            .top_n(args.top.unwrap_or(DEFAULT_TOP_N))
            .scatter_size(args.scatter.unwrap_or(DEFAULT_SCATTER_SIZE));
        if let Some([min_lat, max_lat, min_lon, max_lon]) =
            bounding_edges(args.min_lat, args.max_lat, args.min_lon, args.max_lon)?
        {
            builder = builder.bounds(min_lat, max_lat, min_lon, max_lon);
        }
        if let Some(deny) = args.deny {
            builder = builder.denylist(deny);
        }
        let ranking = builder.build()?;

        let histogram_bins =
            NonZeroUsize::new(args.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS))
                .ok_or(CliError::ZeroHistogramBins)?;

        Ok(Self {
            input,
            ranking,
            histogram_bins,
            report: args.report,
            output: args.output,
        })
    }
}

/// Require the four bounding box edges together or not at all.
fn bounding_edges(
    min_lat: Option<f64>,
    max_lat: Option<f64>,
    min_lon: Option<f64>,
    max_lon: Option<f64>,
) -> Result<Option<[f64; 4]>, CliError> {
    let edges = [
        (ARG_RANK_MIN_LAT, min_lat),
        (ARG_RANK_MAX_LAT, max_lat),
        (ARG_RANK_MIN_LON, min_lon),
        (ARG_RANK_MAX_LON, max_lon),
    ];
    if edges.iter().all(|(_, value)| value.is_none()) {
        return Ok(None);
    }
    if let Some(&(missing, _)) = edges.iter().find(|(_, value)| value.is_none()) {
        return Err(CliError::IncompleteBounds { missing });
    }
    Ok(min_lat
        .zip(max_lat)
        .zip(min_lon.zip(max_lon))
        .map(|((south, north), (west, east))| [south, north, west, east]))
}

/// JSON payload written by the `rank` command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RankOutput {
    Leaderboard(Vec<LeaderboardRow>),
    Report(Box<Report>),
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let output = execute_rank(&config)?;
    match &config.output {
        Some(path) => {
            let mut file =
                mesa_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_rank_output(&mut file, &output)?;
            info!("wrote ranking to {path}");
            Ok(())
        }
        None => write_rank_output(writer, &output),
    }
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_rank(config: &RankConfig) -> Result<RankOutput, CliError> {
    let rows = load_restaurants(&config.input)?;
    let dataset = Dataset::from_raw(&rows);
    for dropped in dataset.dropped() {
        debug!("dropped row {}: {}", dropped.row, dropped.error);
    }

    let ranking = Ranker::new(config.ranking.clone()).rank(&dataset);
    let exclusions = ranking.exclusions();
    info!(
        "ranked {} listings from {}; dropped {} malformed, excluded {} out of bounds and {} denylisted",
        ranking.working_set().len(),
        config.input,
        exclusions.malformed,
        exclusions.out_of_bounds,
        exclusions.denylisted
    );
    if ranking.is_empty() {
        warn!("no listings survived filtering; the leaderboard is empty");
    }

    Ok(if config.report {
        RankOutput::Report(Box::new(Report::build(&ranking, config.histogram_bins)))
    } else {
        RankOutput::Leaderboard(ranking.leaderboard().iter().map(LeaderboardRow::from).collect())
    })
}

fn write_rank_output(writer: &mut dyn Write, output: &RankOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
