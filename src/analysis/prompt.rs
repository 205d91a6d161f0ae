//! Prompt, output schema, and input truncation for review analysis.

use serde_json::{Value, json};

/// Maximum number of characters submitted to the model.
pub const MAX_INPUT_CHARS: usize = 30_000;

/// Sampling temperature; kept low so categorisation is repeatable.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Name attached to the structured-output schema.
pub const SCHEMA_NAME: &str = "review_analysis";

/// Input payload for one analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    review_text: String,
    truncated: bool,
}

impl AnalysisRequest {
    /// Builds a request, truncating `raw_text` to [`MAX_INPUT_CHARS`].
    #[must_use]
    pub fn new(raw_text: &str) -> Self {
        let review_text = truncate_input(raw_text);
        Self {
            truncated: review_text.len() < raw_text.len(),
            review_text: review_text.to_owned(),
        }
    }

    /// Review text that will be embedded in the prompt.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }

    /// Whether the caller's text exceeded the input limit.
    #[must_use]
    pub const fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Instructional prompt sent as the user message.
    #[must_use]
    pub fn user_prompt(&self) -> String {
        build_user_prompt(self.review_text())
    }
}

/// Returns the longest prefix of `raw` holding at most
/// [`MAX_INPUT_CHARS`] characters.
#[must_use]
pub fn truncate_input(raw: &str) -> &str {
    raw.char_indices()
        .nth(MAX_INPUT_CHARS)
        .and_then(|(byte_index, _)| raw.get(..byte_index))
        .unwrap_or(raw)
}

/// System message framing the model's role.
#[must_use]
pub const fn system_prompt() -> &'static str {
    concat!(
        "You are an expert sentiment analyst. ",
        "Respond only with JSON that matches the supplied schema."
    )
}

/// Builds the user prompt embedding `review_text`.
#[must_use]
pub fn build_user_prompt(review_text: &str) -> String {
    let mut prompt = String::from(concat!(
        "Analyze the following text, which may contain multiple customer reviews ",
        "(separated by newlines or just a block of text).\n\n",
        "1. Split the text into individual reviews. If the text is a single paragraph ",
        "talking about one thing, treat it as one review. If it contains bullet points ",
        "or distinct lines, treat them as separate reviews.\n",
        "2. Determine the sentiment for each review (POSITIVE, NEGATIVE, or NEUTRAL).\n",
        "3. Provide a very brief summary (one sentence) for each review.\n",
        "4. Extract 2-3 keywords for each review.\n",
        "5. Identify the top 3 frequent complaints across all negative/neutral reviews.\n",
        "6. Identify the top 3 frequent praises across all positive reviews.\n\n",
        "Input Text:\n\"",
    ));
    prompt.push_str(review_text);
    prompt.push('"');
    prompt
}

/// JSON schema the model's reply must satisfy.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "reviews": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "originalText": {
                            "type": "string",
                            "description": "The original text of the review"
                        },
                        "sentiment": {
                            "type": "string",
                            "enum": ["POSITIVE", "NEGATIVE", "NEUTRAL"]
                        },
                        "summary": {
                            "type": "string",
                            "description": "A brief one-sentence summary"
                        },
                        "keywords": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["originalText", "sentiment", "summary", "keywords"],
                    "additionalProperties": false
                }
            },
            "frequentComplaints": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of top 3 frequent complaints found in the text"
            },
            "frequentPraises": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of top 3 frequent praises found in the text"
            }
        },
        "required": ["reviews", "frequentComplaints", "frequentPraises"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::{AnalysisRequest, MAX_INPUT_CHARS, build_user_prompt, response_schema, truncate_input};

    #[test]
    fn short_input_is_untouched() {
        let request = AnalysisRequest::new("Great product");

        assert_eq!(request.review_text(), "Great product");
        assert!(!request.was_truncated());
    }

    #[test]
    fn long_input_is_cut_at_the_character_limit() {
        let raw = "a".repeat(MAX_INPUT_CHARS + 10);
        let request = AnalysisRequest::new(&raw);

        assert_eq!(request.review_text().chars().count(), MAX_INPUT_CHARS);
        assert!(request.was_truncated());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let raw = "é".repeat(MAX_INPUT_CHARS + 1);
        let truncated = truncate_input(&raw);

        assert_eq!(truncated.chars().count(), MAX_INPUT_CHARS);
        assert_eq!(truncated.len(), MAX_INPUT_CHARS * 2);
    }

    #[test]
    fn input_exactly_at_limit_is_not_truncated() {
        let raw = "b".repeat(MAX_INPUT_CHARS);
        let request = AnalysisRequest::new(&raw);

        assert!(!request.was_truncated());
    }

    #[test]
    fn user_prompt_embeds_review_text() {
        let prompt = build_user_prompt("Shipping was slow");

        assert!(prompt.contains("POSITIVE, NEGATIVE, or NEUTRAL"));
        assert!(prompt.ends_with("\"Shipping was slow\""));
    }

    #[test]
    fn schema_requires_all_top_level_lists() {
        let schema = response_schema();

        assert_eq!(
            schema["required"],
            serde_json::json!(["reviews", "frequentComplaints", "frequentPraises"])
        );
        assert_eq!(
            schema["properties"]["reviews"]["items"]["properties"]["sentiment"]["enum"],
            serde_json::json!(["POSITIVE", "NEGATIVE", "NEUTRAL"])
        );
    }
}
