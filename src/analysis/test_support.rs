//! Test-support utilities for review analysis flows.

use serde_json::json;

use super::{AnalysisRequest, ProviderError, ReviewAnalysisService};

/// Deterministic analysis-service stub used by unit and behavioural tests.
#[derive(Debug, Clone)]
pub struct StubReviewAnalysisService {
    response: Result<String, ProviderError>,
}

impl StubReviewAnalysisService {
    /// Creates a stub that always returns the provided raw reply.
    #[must_use]
    pub fn success(reply: impl Into<String>) -> Self {
        Self {
            response: Ok(reply.into()),
        }
    }

    /// Creates a stub that always returns the provided error.
    #[must_use]
    pub const fn failure(error: ProviderError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ReviewAnalysisService for StubReviewAnalysisService {
    fn request_analysis(&self, _request: &AnalysisRequest) -> Result<String, ProviderError> {
        self.response.clone()
    }
}

/// Builds a schema-conforming reply from `(text, sentiment)` pairs.
///
/// Each review gets a summary derived from its text and a single keyword.
#[must_use]
pub fn reply_for_reviews(reviews: &[(&str, &str)], complaints: &[&str], praises: &[&str]) -> String {
    let review_values: Vec<_> = reviews
        .iter()
        .map(|(text, sentiment)| {
            json!({
                "originalText": text,
                "sentiment": sentiment,
                "summary": format!("Summary of: {text}"),
                "keywords": [sentiment.to_ascii_lowercase()]
            })
        })
        .collect();

    json!({
        "reviews": review_values,
        "frequentComplaints": complaints,
        "frequentPraises": praises
    })
    .to_string()
}

/// Reply classifying three positive, one negative, and one neutral review.
#[must_use]
pub fn mixed_reply() -> String {
    reply_for_reviews(
        &[
            ("The service was fantastic!", "POSITIVE"),
            ("Delivery took forever.", "NEGATIVE"),
            ("Great quality, will buy again.", "POSITIVE"),
            ("It was okay.", "NEUTRAL"),
            ("Friendly staff and fast checkout.", "POSITIVE"),
        ],
        &["Slow delivery"],
        &["Friendly staff", "Product quality"],
    )
}
