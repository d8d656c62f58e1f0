//! Focused unit tests covering score CLI configuration and signal loading.

use super::helpers::{GAMER_SIGNALS, SMALL_CATALOG, Workspace};
use super::*;
use camino::Utf8PathBuf;
use crate::score::{ScoreArgs, ScoreConfig, config_from_layers_for_test, load_signals, write_score};
use distrofit_core::{ExperienceLevel, FitCategory, ScoreResult};
use distrofit_scorer::{DEFAULT_REFERENCE_POPULARITY, MatchWeights};
use rstest::rstest;

fn config_for(signals_path: Utf8PathBuf) -> ScoreConfig {
    ScoreConfig {
        signals_path,
        catalog: None,
        weights: MatchWeights::default(),
        diagnostics: false,
    }
}

#[rstest]
fn converting_without_signals_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing signals");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SIGNALS);
            assert_eq!(env, ENV_SIGNALS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn overrides_replace_default_weights() {
    let args = ScoreArgs {
        signals_path: Some(Utf8PathBuf::from("signals.json")),
        senior_popularity_floor: Some(250),
        diagnostics: true,
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.weights.senior_popularity_floor, 250);
    assert_eq!(
        config.weights.reference_popularity,
        DEFAULT_REFERENCE_POPULARITY
    );
    assert!(config.diagnostics);
}

#[rstest]
fn validate_sources_reports_missing_signals() {
    let workspace = Workspace::new();
    let config = config_for(workspace.path("absent.json"));
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_SIGNALS),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories() {
    let workspace = Workspace::new();
    let signals = workspace.write("signals.json", "{}");
    let catalog_dir = workspace.path("catalog.d");
    std::fs::create_dir(catalog_dir.as_std_path()).expect("catalog directory");
    let config = ScoreConfig {
        catalog: Some(catalog_dir),
        ..config_for(signals)
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_signals_accepts_partial_documents() {
    let workspace = Workspace::new();
    let path = workspace.write("signals.json", r#"{"experience_level": "senior"}"#);
    let signals = load_signals(&path).expect("signals should load");
    assert_eq!(signals.experience_level, ExperienceLevel::Senior);
    assert!(signals.keywords.is_empty());
}

#[rstest]
fn load_signals_reports_invalid_json() {
    let workspace = Workspace::new();
    let path = workspace.write("signals.json", "{ not json");
    let err = load_signals(&path).expect_err("invalid JSON should fail");
    match err {
        CliError::ParseSignals { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseSignals, found {other:?}"),
    }
}

#[rstest]
fn write_score_prints_a_score_result() {
    let workspace = Workspace::new();
    let signals = workspace.write("signals.json", GAMER_SIGNALS);
    let catalog = workspace.write("catalog.json", SMALL_CATALOG);
    let config = ScoreConfig {
        catalog: Some(catalog),
        ..config_for(signals)
    };
    let mut buffer = Vec::new();
    write_score(&config, &mut buffer).expect("score should succeed");
    let output = String::from_utf8(buffer).expect("stdout utf-8");
    let result: ScoreResult = serde_json::from_str(&output).expect("output should be a result");
    assert_eq!(result.recommendation.id, "speedy");
    assert!(result.score <= 100);
    assert_ne!(result.category, FitCategory::None);
}

#[rstest]
fn write_score_prints_diagnostics() {
    let workspace = Workspace::new();
    let signals = workspace.write("signals.json", GAMER_SIGNALS);
    let config = ScoreConfig {
        diagnostics: true,
        ..config_for(signals)
    };
    let mut buffer = Vec::new();
    write_score(&config, &mut buffer).expect("score should succeed");
    let output: serde_json::Value =
        serde_json::from_slice(&buffer).expect("output should be JSON");
    assert!(output.get("vector").is_some());
    assert!(output.get("contributions").is_some());
    assert!(output.get("match").is_some());
    assert!(output.get("result").is_some());
}

#[rstest]
fn write_score_rejects_zero_reference_popularity() {
    let workspace = Workspace::new();
    let signals = workspace.write("signals.json", "{}");
    let config = ScoreConfig {
        weights: MatchWeights {
            reference_popularity: 0,
            ..MatchWeights::default()
        },
        ..config_for(signals)
    };
    let err = write_score(&config, &mut Vec::new()).expect_err("weights should be rejected");
    assert!(matches!(err, CliError::InvalidWeights(_)));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "signals_path": 42 }));

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
            "signals_path": "from-file.json",
            "senior_popularity_floor": 100,
            "reference_popularity": 4000,
        }),
        None,
    );
    composer.push_environment(json!({
        "signals_path": "from-env.json",
        "senior_popularity_floor": 200,
    }));
    composer.push_cli(json!({
        "senior_popularity_floor": 300,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.signals_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.weights.senior_popularity_floor, 300);
    assert_eq!(config.weights.reference_popularity, 4000);
    assert!(!config.diagnostics);
}
