//! Unit tests for the OpenAI-compatible analysis adapter.

use std::time::Duration;

use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{
    ChatContent, OpenAiAnalysisConfig, OpenAiReviewAnalysisService, parse_content_value,
    truncate_for_message,
};
use crate::analysis::error::ProviderError;
use crate::analysis::prompt::AnalysisRequest;
use crate::analysis::service::ReviewAnalysisService;

struct ProviderFixture {
    runtime: Runtime,
    server: MockServer,
}

impl ProviderFixture {
    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn service(&self) -> OpenAiReviewAnalysisService {
        OpenAiReviewAnalysisService::new(OpenAiAnalysisConfig::new(
            format!("{}/v1/", self.server.uri()),
            "gpt-4o-mini",
            Some("sk-test".to_owned()),
            Some(Duration::from_secs(5)),
        ))
    }
}

#[fixture]
fn provider() -> ProviderFixture {
    let runtime = Runtime::new().expect("runtime should start");
    let server = runtime.block_on(MockServer::start());
    ProviderFixture { runtime, server }
}

#[fixture]
fn request() -> AnalysisRequest {
    AnalysisRequest::new("Great product.\nTerrible shipping.")
}

fn completion_with_content(content: &serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    }))
}

#[test]
fn parse_content_value_supports_string_and_array() {
    let as_string: ChatContent =
        serde_json::from_value(json!("hello")).expect("string content should decode");
    let as_array: ChatContent =
        serde_json::from_value(json!([{"type": "output_text"}, {"text": "first"}, {"text": "second"}]))
            .expect("array content should decode");

    assert_eq!(parse_content_value(&as_string), Some("hello"));
    assert_eq!(parse_content_value(&as_array), Some("first"));
}

#[rstest]
#[case("short", 160, "short")]
#[case("abcdef", 3, "abc...")]
#[case("ééé", 3, "ééé")]
fn truncate_for_message_appends_ellipsis_only_when_cut(
    #[case] message: &str,
    #[case] max_chars: usize,
    #[case] expected: &str,
) {
    assert_eq!(truncate_for_message(message, max_chars), expected);
}

#[rstest]
#[case(None)]
#[case(Some("   ".to_owned()))]
fn request_analysis_requires_api_key(request: AnalysisRequest, #[case] api_key: Option<String>) {
    let service = OpenAiReviewAnalysisService::new(OpenAiAnalysisConfig::new(
        "http://127.0.0.1:9/v1",
        "gpt-4o-mini",
        api_key,
        None,
    ));

    let error = service
        .request_analysis(&request)
        .expect_err("missing key should be rejected");

    assert_eq!(error, ProviderError::MissingApiKey);
}

#[rstest]
fn request_analysis_sends_structured_output_request(
    provider: ProviderFixture,
    request: AnalysisRequest,
) {
    provider.mount(
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.2,
                "response_format": {
                    "type": "json_schema",
                    "json_schema": { "name": "review_analysis", "strict": true }
                }
            })))
            .respond_with(completion_with_content(&json!("{\"reviews\": []}")))
            .expect(1),
    );

    let reply = provider
        .service()
        .request_analysis(&request)
        .expect("request should succeed");

    assert_eq!(reply, "{\"reviews\": []}");
}

#[rstest]
fn request_analysis_forwards_additional_headers(
    provider: ProviderFixture,
    request: AnalysisRequest,
) {
    provider.mount(
        Mock::given(method("POST"))
            .and(header("x-test-scenario", "headers"))
            .respond_with(completion_with_content(&json!("{}"))),
    );
    let config = OpenAiAnalysisConfig::new(
        format!("{}/v1", provider.server.uri()),
        "gpt-4o-mini",
        Some("sk-test".to_owned()),
        None,
    )
    .with_additional_header("x-test-scenario", "headers");

    let reply = OpenAiReviewAnalysisService::new(config).request_analysis(&request);

    assert_eq!(reply, Ok("{}".to_owned()));
}

#[rstest]
fn request_analysis_reads_content_parts(provider: ProviderFixture, request: AnalysisRequest) {
    provider.mount(
        Mock::given(method("POST"))
            .respond_with(completion_with_content(&json!([{ "text": " {\"reviews\": []} " }]))),
    );

    let reply = provider.service().request_analysis(&request);

    assert_eq!(reply, Ok("{\"reviews\": []}".to_owned()));
}

#[rstest]
fn request_analysis_maps_error_status(provider: ProviderFixture, request: AnalysisRequest) {
    let long_body = "x".repeat(400);
    provider.mount(
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(long_body)),
    );

    let error = provider
        .service()
        .request_analysis(&request)
        .expect_err("server error should fail");

    let ProviderError::Status { status, body } = error else {
        panic!("expected status error, got {error:?}");
    };
    assert_eq!(status, 500);
    assert_eq!(body.chars().count(), 163);
    assert!(body.ends_with("..."));
}

#[rstest]
#[case(json!(""))]
#[case(json!("   "))]
#[case(json!(null))]
#[case(json!([]))]
fn request_analysis_rejects_empty_content(
    provider: ProviderFixture,
    request: AnalysisRequest,
    #[case] content: serde_json::Value,
) {
    provider.mount(Mock::given(method("POST")).respond_with(completion_with_content(&content)));

    let reply = provider.service().request_analysis(&request);

    assert_eq!(reply, Err(ProviderError::EmptyReply));
}

#[rstest]
fn request_analysis_rejects_empty_choices(provider: ProviderFixture, request: AnalysisRequest) {
    provider.mount(
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] }))),
    );

    let reply = provider.service().request_analysis(&request);

    assert_eq!(reply, Err(ProviderError::EmptyReply));
}

#[rstest]
fn request_analysis_maps_malformed_envelope(provider: ProviderFixture, request: AnalysisRequest) {
    provider.mount(
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all")),
    );

    let error = provider
        .service()
        .request_analysis(&request)
        .expect_err("malformed envelope should fail");

    assert!(
        matches!(error, ProviderError::Envelope { .. }),
        "expected envelope error, got {error:?}"
    );
}

#[rstest]
fn request_analysis_maps_transport_failure(request: AnalysisRequest) {
    let service = OpenAiReviewAnalysisService::new(OpenAiAnalysisConfig::new(
        "http://127.0.0.1:1/v1",
        "gpt-4o-mini",
        Some("sk-test".to_owned()),
        Some(Duration::from_secs(2)),
    ));

    let error = service
        .request_analysis(&request)
        .expect_err("unreachable host should fail");

    assert!(
        matches!(error, ProviderError::Transport { .. }),
        "expected transport error, got {error:?}"
    );
}

#[rstest]
fn analyze_accepts_reply_without_keywords(provider: ProviderFixture) {
    let reply = json!({
        "reviews": [
            { "originalText": "Works fine", "sentiment": "NEUTRAL", "summary": "Adequate" }
        ],
        "frequentComplaints": [],
        "frequentPraises": []
    })
    .to_string();
    provider.mount(
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(completion_with_content(&json!(reply))),
    );

    let result = crate::analysis::analyze(&provider.service(), "Works fine")
        .expect("analysis should succeed");

    assert_eq!(result.sentiment_counts().neutral, 1);
    assert!(
        result
            .reviews()
            .first()
            .is_some_and(|review| review.keywords().is_empty())
    );
}

#[rstest]
fn analyze_maps_non_json_reply_to_generic_error(provider: ProviderFixture) {
    provider.mount(
        Mock::given(method("POST"))
            .respond_with(completion_with_content(&json!("Sorry, I cannot help with that."))),
    );

    let error = crate::analysis::analyze(&provider.service(), "Works fine")
        .expect_err("non-JSON reply should fail");

    assert_eq!(
        error.to_string(),
        crate::analysis::ANALYSIS_FAILED_MESSAGE
    );
}
