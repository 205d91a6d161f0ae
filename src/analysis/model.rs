//! Domain models for classified reviews and aggregate analysis results.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Emotional polarity assigned to a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    /// The review is favourable.
    Positive,
    /// The review is unfavourable.
    Negative,
    /// The review is neither clearly favourable nor unfavourable.
    Neutral,
}

impl Sentiment {
    /// Every sentiment in display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Wire representation used by the model's output schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Human-readable label used in UI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Parse error for [`Sentiment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported sentiment '{value}': expected POSITIVE, NEGATIVE, or NEUTRAL")]
pub struct SentimentParseError {
    value: String,
}

impl FromStr for Sentiment {
    type Err = SentimentParseError;

    /// Parses the exact wire representation; any other spelling is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "POSITIVE" => Ok(Self::Positive),
            "NEGATIVE" => Ok(Self::Negative),
            "NEUTRAL" => Ok(Self::Neutral),
            _ => Err(SentimentParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// One classified review together with its derived summary and keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    original_text: String,
    sentiment: Sentiment,
    summary: String,
    keywords: Vec<String>,
}

impl ReviewRecord {
    /// Constructs a review record.
    #[must_use]
    pub fn new(
        original_text: impl Into<String>,
        sentiment: Sentiment,
        summary: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            sentiment,
            summary: summary.into(),
            keywords,
        }
    }

    /// Review text as split out by the model.
    #[must_use]
    pub const fn original_text(&self) -> &str {
        self.original_text.as_str()
    }

    /// Classified sentiment.
    #[must_use]
    pub const fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// One-sentence summary.
    #[must_use]
    pub const fn summary(&self) -> &str {
        self.summary.as_str()
    }

    /// Extracted keywords, possibly empty.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Per-sentiment review tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    /// Number of positive reviews.
    pub positive: usize,
    /// Number of negative reviews.
    pub negative: usize,
    /// Number of neutral reviews.
    pub neutral: usize,
}

impl SentimentCounts {
    /// Tallies the sentiment of every review in `reviews`.
    #[must_use]
    pub fn tally<'a>(reviews: impl IntoIterator<Item = &'a ReviewRecord>) -> Self {
        reviews
            .into_iter()
            .fold(Self::default(), |mut counts, review| {
                counts.record(review.sentiment());
                counts
            })
    }

    /// Increments the tally for `sentiment`.
    pub const fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive = self.positive.saturating_add(1),
            Sentiment::Negative => self.negative = self.negative.saturating_add(1),
            Sentiment::Neutral => self.neutral = self.neutral.saturating_add(1),
        }
    }

    /// Returns the tally for `sentiment`.
    #[must_use]
    pub const fn count(self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Sum of all tallies.
    #[must_use]
    pub const fn total(self) -> usize {
        self.positive
            .saturating_add(self.negative)
            .saturating_add(self.neutral)
    }

    /// Share of `sentiment` in the total, as a whole percentage.
    ///
    /// Rounds half up and returns 0 when there are no reviews.
    #[must_use]
    pub const fn percentage(self, sentiment: Sentiment) -> usize {
        percentage_of(self.count(sentiment), self.total())
    }
}

/// Rounds `count / total` to the nearest whole percent, half up.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub const fn percentage_of(count: usize, total: usize) -> usize {
    // round(100c / t) == floor((200c + t) / 2t)
    let numerator = count.saturating_mul(200).saturating_add(total);
    match numerator.checked_div(total.saturating_mul(2)) {
        Some(percent) => percent,
        None => 0,
    }
}

/// Aggregate output of one analysis invocation.
///
/// Sentiment counts are always derived from `reviews`, so
/// `positive + negative + neutral == total_reviews() == reviews().len()`
/// holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    sentiment_counts: SentimentCounts,
    frequent_complaints: Vec<String>,
    frequent_praises: Vec<String>,
    reviews: Vec<ReviewRecord>,
}

impl AnalysisResult {
    /// Builds a result, tallying sentiment counts from `reviews`.
    #[must_use]
    pub fn new(
        reviews: Vec<ReviewRecord>,
        frequent_complaints: Vec<String>,
        frequent_praises: Vec<String>,
    ) -> Self {
        Self {
            sentiment_counts: SentimentCounts::tally(&reviews),
            frequent_complaints,
            frequent_praises,
            reviews,
        }
    }

    /// Number of classified reviews.
    #[must_use]
    pub const fn total_reviews(&self) -> usize {
        self.reviews.len()
    }

    /// Locally tallied sentiment counts.
    #[must_use]
    pub const fn sentiment_counts(&self) -> SentimentCounts {
        self.sentiment_counts
    }

    /// Most frequent complaints, in model order.
    #[must_use]
    pub fn frequent_complaints(&self) -> &[String] {
        &self.frequent_complaints
    }

    /// Most frequent praises, in model order.
    #[must_use]
    pub fn frequent_praises(&self) -> &[String] {
        &self.frequent_praises
    }

    /// Classified reviews, in model order.
    #[must_use]
    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SerializedAnalysisResult<'a> {
    total_reviews: usize,
    sentiment_counts: SentimentCounts,
    frequent_complaints: &'a [String],
    frequent_praises: &'a [String],
    reviews: &'a [ReviewRecord],
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerializedAnalysisResult {
            total_reviews: self.total_reviews(),
            sentiment_counts: self.sentiment_counts,
            frequent_complaints: &self.frequent_complaints,
            frequent_praises: &self.frequent_praises,
            reviews: &self.reviews,
        }
        .serialize(serializer)
    }
}
