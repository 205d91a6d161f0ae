//! Validating decoder for the model's JSON reply.
//!
//! The reply is parsed into an untyped [`Value`] first and then checked
//! field by field, so every schema violation names the offending JSON path.

use serde_json::{Map, Value};

use super::error::DecodeError;
use super::model::{AnalysisResult, ReviewRecord, Sentiment};

/// Decodes a model reply into an [`AnalysisResult`].
///
/// A reply wrapped in a Markdown code fence is unwrapped first. Missing or
/// null `keywords`, `frequentComplaints`, and `frequentPraises` decode as
/// empty lists; unknown fields are ignored.
///
/// # Errors
///
/// Returns [`DecodeError`] when the reply is empty, is not JSON, or does not
/// satisfy the output schema.
pub fn decode_analysis(reply: &str) -> Result<AnalysisResult, DecodeError> {
    let body = strip_code_fence(reply);
    if body.is_empty() {
        return Err(DecodeError::EmptyReply);
    }

    let document: Value =
        serde_json::from_str(body).map_err(|error| DecodeError::InvalidJson {
            message: error.to_string(),
        })?;
    let root = document.as_object().ok_or_else(|| DecodeError::WrongType {
        path: "$".to_owned(),
        expected: "an object",
    })?;

    let reviews = required_array(root, "reviews", "reviews")?
        .iter()
        .enumerate()
        .map(|(index, review)| decode_review(review, &format!("reviews[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;
    let complaints = optional_strings(root, "frequentComplaints", "frequentComplaints")?;
    let praises = optional_strings(root, "frequentPraises", "frequentPraises")?;

    Ok(AnalysisResult::new(reviews, complaints, praises))
}

fn decode_review(value: &Value, path: &str) -> Result<ReviewRecord, DecodeError> {
    let object = value.as_object().ok_or_else(|| DecodeError::WrongType {
        path: path.to_owned(),
        expected: "an object",
    })?;

    let original_text = required_string(object, "originalText", path)?;
    let sentiment_path = format!("{path}.sentiment");
    let sentiment_value = required_string(object, "sentiment", path)?;
    let sentiment = sentiment_value
        .parse::<Sentiment>()
        .map_err(|_| DecodeError::UnknownSentiment {
            path: sentiment_path,
            value: sentiment_value.to_owned(),
        })?;
    let summary = required_string(object, "summary", path)?;
    let keywords = optional_strings(object, "keywords", &format!("{path}.keywords"))?;

    Ok(ReviewRecord::new(original_text, sentiment, summary, keywords))
}

fn required_array<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(DecodeError::MissingField {
            path: path.to_owned(),
        }),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(DecodeError::WrongType {
            path: path.to_owned(),
            expected: "an array",
        }),
    }
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    parent_path: &str,
) -> Result<&'a str, DecodeError> {
    let path = || format!("{parent_path}.{key}");
    match object.get(key) {
        None | Some(Value::Null) => Err(DecodeError::MissingField { path: path() }),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(_) => Err(DecodeError::WrongType {
            path: path(),
            expected: "a string",
        }),
    }
}

fn optional_strings(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Vec<String>, DecodeError> {
    let items = match object.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DecodeError::WrongType {
                path: path.to_owned(),
                expected: "an array of strings",
            });
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(ToOwned::to_owned)
                .ok_or_else(|| DecodeError::WrongType {
                    path: format!("{path}[{index}]"),
                    expected: "a string",
                })
        })
        .collect()
}

/// Removes a surrounding Markdown code fence, if present.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`) on the opening line.
    let body = after_open
        .split_once('\n')
        .map_or("", |(_, remainder)| remainder);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
