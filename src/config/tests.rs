//! Unit tests for configuration loading, precedence, and validation.

use std::time::Duration;

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::{OPENAI_API_KEY_ENV, OperationMode, ReviewPulseConfig};
use crate::error::AppError;
use crate::tui::state::SentimentFilter;

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

fn build_config_from_layers(layers: Vec<(&str, Value)>) -> ReviewPulseConfig {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }
    ReviewPulseConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"ai_model": "default-model"})), ("file", json!({"ai_model": "file-model"}))],
    "file-model",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"ai_model": "file-model"})), ("environment", json!({"ai_model": "env-model"}))],
    "env-model",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"ai_model": "env-model"})), ("cli", json!({"ai_model": "cli-model"}))],
    "cli-model",
    "CLI should override environment"
)]
fn layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(layers);

    assert_eq!(config.ai_model, expected, "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = build_config_from_layers(vec![
        (
            "file",
            json!({"ai_model": "file-model", "ai_timeout_seconds": 45, "log_file": "pulse.log"}),
        ),
        ("cli", json!({"ai_model": "cli-model"})),
    ]);

    assert_eq!(config.ai_model, "cli-model");
    assert_eq!(config.ai_timeout_seconds, Some(45));
    assert_eq!(config.log_file.as_deref(), Some("pulse.log"));
}

#[rstest]
fn defaults_apply_when_no_sources_provided() {
    let config = ReviewPulseConfig::default();

    assert_eq!(config.ai_base_url, "https://api.openai.com/v1");
    assert_eq!(config.ai_model, "gpt-4o-mini");
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.ai_timeout_seconds, None);
    assert_eq!(config.operation_mode(), OperationMode::Interactive);
    assert!(config.validate().is_ok());
}

#[rstest]
fn report_flag_selects_report_mode() {
    let config = build_config_from_layers(vec![("cli", json!({"report": true}))]);

    assert_eq!(config.operation_mode(), OperationMode::Report);
}

#[rstest]
#[case::input_file_and_sample(
    ReviewPulseConfig { input_file: Some("reviews.txt".to_owned()), sample: true, ..Default::default() },
    "--input-file and --sample cannot be used together"
)]
#[case::json_without_report(
    ReviewPulseConfig { json: true, ..Default::default() },
    "--json requires --report"
)]
#[case::filter_without_report(
    ReviewPulseConfig { filter: Some("negative".to_owned()), ..Default::default() },
    "--filter requires --report"
)]
fn validate_rejects_conflicting_options(
    #[case] config: ReviewPulseConfig,
    #[case] expected_message: &str,
) {
    let error = config.validate().expect_err("validation should fail");

    assert_eq!(
        error,
        AppError::Configuration {
            message: expected_message.to_owned()
        }
    );
}

#[rstest]
fn validate_rejects_unknown_filter() {
    let config = ReviewPulseConfig {
        report: true,
        filter: Some("mixed".to_owned()),
        ..Default::default()
    };

    let error = config.validate().expect_err("unknown filter should fail");

    assert!(
        matches!(&error, AppError::Configuration { message } if message.contains("mixed")),
        "unexpected error: {error:?}"
    );
}

#[rstest]
#[case(None, SentimentFilter::All)]
#[case(Some("negative"), SentimentFilter::Negative)]
#[case(Some("Neutral"), SentimentFilter::Neutral)]
fn report_filter_parses_configured_value(
    #[case] filter: Option<&str>,
    #[case] expected: SentimentFilter,
) {
    let config = ReviewPulseConfig {
        report: true,
        filter: filter.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.report_filter(), Ok(expected));
}

#[rstest]
fn configured_api_key_wins_over_environment() {
    let _guard = env_lock::lock_env([(OPENAI_API_KEY_ENV, Some("env-key"))]);
    let config = ReviewPulseConfig {
        ai_api_key: Some("config-key".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_ai_api_key().as_deref(), Some("config-key"));
}

#[rstest]
#[case(None)]
#[case(Some("  ".to_owned()))]
fn api_key_falls_back_to_openai_environment_variable(#[case] configured: Option<String>) {
    let _guard = env_lock::lock_env([(OPENAI_API_KEY_ENV, Some("env-key"))]);
    let config = ReviewPulseConfig {
        ai_api_key: configured,
        ..Default::default()
    };

    assert_eq!(config.resolve_ai_api_key().as_deref(), Some("env-key"));
}

#[rstest]
fn missing_api_key_is_not_a_startup_error() {
    let _guard = env_lock::lock_env([(OPENAI_API_KEY_ENV, None::<&str>)]);
    let config = ReviewPulseConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.resolve_ai_api_key(), None);
    assert_eq!(config.analysis_config().api_key, None);
}

#[rstest]
fn analysis_config_carries_provider_settings() {
    let _guard = env_lock::lock_env([(OPENAI_API_KEY_ENV, None::<&str>)]);
    let config = ReviewPulseConfig {
        ai_base_url: "http://localhost:8080/v1".to_owned(),
        ai_model: "local-model".to_owned(),
        ai_api_key: Some("sk-local".to_owned()),
        ai_timeout_seconds: Some(12),
        ..Default::default()
    };

    let analysis = config.analysis_config();

    assert_eq!(analysis.base_url, "http://localhost:8080/v1");
    assert_eq!(analysis.model, "local-model");
    assert_eq!(analysis.api_key.as_deref(), Some("sk-local"));
    assert_eq!(analysis.timeout, Some(Duration::from_secs(12)));
}
