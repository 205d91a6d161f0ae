//! Sentiment analysis of free-form customer reviews via an external model.
//!
//! [`analyze`] turns raw review text into an [`AnalysisResult`] by calling a
//! [`ReviewAnalysisService`] and validating its JSON reply.

mod decode;
mod error;
mod model;
mod openai;
mod prompt;
mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use decode::decode_analysis;
pub use error::{
    ANALYSIS_FAILED_MESSAGE, AnalysisError, AnalysisFailure, DecodeError, ProviderError,
};
pub use model::{
    AnalysisResult, ReviewRecord, Sentiment, SentimentCounts, SentimentParseError, percentage_of,
};
pub use openai::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiAnalysisConfig, OpenAiReviewAnalysisService,
};
pub use prompt::{AnalysisRequest, MAX_INPUT_CHARS};
pub use service::{ReviewAnalysisService, analyze};
