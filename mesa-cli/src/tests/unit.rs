//! Focused unit tests covering rank CLI configuration and output.

use super::helpers::{ListingExport, leaderboard_names, run_rank_args, write_utf8};
use super::*;
use crate::rank::RankArgs;
use camino::Utf8PathBuf;
use mesa_core::{BoundingBoxError, ConfigError};
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn export() -> ListingExport {
    ListingExport::new()
}

fn args_for(path: &Utf8PathBuf) -> RankArgs {
    RankArgs {
        input: Some(path.clone()),
        ..RankArgs::default()
    }
}

#[rstest]
fn converting_without_input_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing input should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_INPUT);
            assert_eq!(env, ENV_RANK_INPUT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_defaults() {
    let path = Utf8PathBuf::from("listings.csv");
    let config = RankConfig::try_from(args_for(&path)).expect("config should build");
    assert_eq!(config.input, path);
    assert_eq!(config.ranking, mesa_core::RankingConfig::default());
    assert_eq!(config.histogram_bins.get(), mesa_scorer::DEFAULT_HISTOGRAM_BINS);
    assert!(!config.report);
    assert_eq!(config.output, None);
}

#[rstest]
#[case::no_max_lon(Some(32.4), Some(32.6), Some(-117.15), None, ARG_RANK_MAX_LON)]
#[case::only_min_lat(Some(32.4), None, None, None, ARG_RANK_MAX_LAT)]
#[case::no_min_lat(None, Some(32.6), Some(-117.15), Some(-116.85), ARG_RANK_MIN_LAT)]
fn partial_bounds_are_rejected(
    #[case] min_lat: Option<f64>,
    #[case] max_lat: Option<f64>,
    #[case] min_lon: Option<f64>,
    #[case] max_lon: Option<f64>,
    #[case] expected: &'static str,
) {
    let args = RankArgs {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
        ..args_for(&Utf8PathBuf::from("listings.csv"))
    };
    match RankConfig::try_from(args) {
        Err(CliError::IncompleteBounds { missing }) => assert_eq!(missing, expected),
        other => panic!("expected IncompleteBounds, found {other:?}"),
    }
}

#[rstest]
fn complete_bounds_reach_the_ranking_config() {
    let args = RankArgs {
        min_lat: Some(32.40),
        max_lat: Some(32.60),
        min_lon: Some(-117.15),
        max_lon: Some(-116.85),
        deny: Some(vec!["oxxo".to_owned()]),
        top: Some(5),
        ..args_for(&Utf8PathBuf::from("listings.csv"))
    };
    let config = RankConfig::try_from(args).expect("config should build");
    let bounds = config.ranking.bounds().expect("bounds configured");
    assert_eq!(bounds.min_longitude(), -117.15);
    assert_eq!(config.ranking.top_n(), 5);
    assert!(config.ranking.denylist().is_some());
}

#[rstest]
fn invalid_ranking_settings_are_reported() {
    let args = RankArgs {
        min_lat: Some(32.60),
        max_lat: Some(32.40),
        min_lon: Some(-117.15),
        max_lon: Some(-116.85),
        ..args_for(&Utf8PathBuf::from("listings.csv"))
    };
    match RankConfig::try_from(args) {
        Err(CliError::InvalidRanking(ConfigError::InvalidBounds(
            BoundingBoxError::EmptyLatitudeSpan { .. },
        ))) => {}
        other => panic!("expected InvalidRanking, found {other:?}"),
    }

    let zero_top = RankArgs {
        top: Some(0),
        ..args_for(&Utf8PathBuf::from("listings.csv"))
    };
    assert!(matches!(
        RankConfig::try_from(zero_top),
        Err(CliError::InvalidRanking(ConfigError::ZeroTopN))
    ));
}

#[rstest]
fn zero_histogram_bins_are_rejected() {
    let args = RankArgs {
        histogram_bins: Some(0),
        ..args_for(&Utf8PathBuf::from("listings.csv"))
    };
    assert!(matches!(
        RankConfig::try_from(args),
        Err(CliError::ZeroHistogramBins)
    ));
}

#[rstest]
fn validate_sources_reports_missing_input(export: ListingExport) {
    let missing = export.root().join("absent.csv");
    let config = RankConfig::try_from(args_for(&missing)).expect("config should build");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_RANK_INPUT);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(export: ListingExport) {
    let config =
        RankConfig::try_from(args_for(&export.root().to_path_buf())).expect("config should build");
    assert!(matches!(
        config.validate_sources(),
        Err(CliError::MissingSourceFile { .. })
    ));
}

#[rstest]
fn rank_writes_leaderboard_json(export: ListingExport) {
    let output = run_rank_args(&[export.csv().to_string(), "--top".to_owned(), "2".to_owned()])
        .expect("rank should succeed");
    let payload: Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(leaderboard_names(&payload), ["Tacos El Franc", "OXXO Centro"]);
    assert_eq!(payload[0]["rank"], 1);
    assert_eq!(payload[0]["review_count"], "2,500+");
    assert_eq!(payload[0]["normalized_score"], 5.0);
}

#[rstest]
fn rank_applies_denylist_and_bounds(export: ListingExport) {
    let output = run_rank_args(&[
        export.csv().to_string(),
        "--deny".to_owned(),
        "oxxo".to_owned(),
        "--min-lat".to_owned(),
        "32.40".to_owned(),
        "--max-lat".to_owned(),
        "32.60".to_owned(),
        "--min-lon".to_owned(),
        "-117.15".to_owned(),
        "--max-lon".to_owned(),
        "-116.85".to_owned(),
    ])
    .expect("rank should succeed");
    let payload: Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(
        leaderboard_names(&payload),
        ["Tacos El Franc", "Caesar's", "Mariscos Ruben"]
    );
    assert_eq!(payload[2]["normalized_score"], 0.0);
}

#[rstest]
fn rank_report_includes_summary(export: ListingExport) {
    let output = run_rank_args(&[
        export.csv().to_string(),
        "--report".to_owned(),
        "--histogram-bins".to_owned(),
        "5".to_owned(),
    ])
    .expect("rank should succeed");
    let payload: Value = serde_json::from_slice(&output).expect("valid JSON");
    let summary = &payload["summary"];
    assert_eq!(summary["rows_read"], 5);
    assert_eq!(summary["malformed"], 1);
    assert_eq!(summary["working_set"], 4);
    assert_eq!(payload["rating_histogram"].as_array().map(Vec::len), Some(5));
    assert_eq!(payload["heat_points"].as_array().map(Vec::len), Some(4));
}

#[rstest]
fn rank_writes_to_output_file(export: ListingExport) {
    let target = export.root().join("out/nested/leaderboard.json");
    let stdout = run_rank_args(&[
        export.csv().to_string(),
        "--output".to_owned(),
        target.to_string(),
    ])
    .expect("rank should succeed");
    assert!(stdout.is_empty());
    let written = std::fs::read(&target).expect("output written");
    let payload: Value = serde_json::from_slice(&written).expect("valid JSON");
    assert_eq!(leaderboard_names(&payload).len(), 4);
}

#[rstest]
fn rank_reports_missing_columns(export: ListingExport) {
    let path = export.root().join("broken.csv");
    write_utf8(&path, b"name,rating\nCaesar's,4.6\n");
    match run_rank_args(&[path.to_string()]) {
        Err(CliError::Load(mesa_data::LoadError::MissingColumn { column, .. })) => {
            assert_eq!(column, "review_count");
        }
        other => panic!("expected Load error, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "top": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "input": "from-file.csv",
            "top": 5,
            "histogram_bins": 8,
        }),
        None,
    );
    composer.push_environment(json!({
        "input": "from-env.csv",
        "top": 7,
    }));
    composer.push_cli(json!({
        "deny": ["oxxo"],
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.input, Utf8PathBuf::from("from-env.csv"));
    assert_eq!(config.ranking.top_n(), 7);
    assert_eq!(config.histogram_bins.get(), 8);
    let denylist = config.ranking.denylist().expect("denylist configured");
    assert_eq!(denylist.entries(), ["oxxo"]);
}
