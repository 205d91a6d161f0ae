//! Output formatting utilities for report mode.

use std::io::{self, Write};

use reviewpulse::tui::components::DashboardView;
use reviewpulse::tui::state::SentimentFilter;
use reviewpulse::{AnalysisResult, AppError};

/// Width used for plain-text reports.
const REPORT_WIDTH: usize = 100;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain-text dashboard.
    Text,
    /// Serialized analysis result.
    Json,
}

impl ReportFormat {
    /// Selects the format from the `--json` flag.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Renders `result` in `format`.
///
/// The filter narrows the text review list; JSON always carries the full
/// result.
///
/// # Errors
///
/// Returns [`AppError::Io`] when JSON serialisation fails.
pub fn render_report(
    result: &AnalysisResult,
    format: ReportFormat,
    filter: SentimentFilter,
) -> Result<String, AppError> {
    match format {
        ReportFormat::Text => Ok(DashboardView::new(result, REPORT_WIDTH).full_report(filter)),
        ReportFormat::Json => {
            serde_json::to_string_pretty(result).map_err(|error| AppError::Io {
                message: format!("failed to serialise report: {error}"),
            })
        }
    }
}

/// Writes a rendered report to the given writer.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the writer fails.
pub fn write_report_to<W: Write>(writer: &mut W, report: &str) -> Result<(), AppError> {
    writeln!(writer, "{}", report.trim_end()).map_err(|error| io_error(&error))
}

/// Converts an I/O error to an [`AppError::Io`].
pub(crate) fn io_error(error: &io::Error) -> AppError {
    AppError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use reviewpulse::analysis::decode_analysis;
    use reviewpulse::analysis::test_support::mixed_reply;
    use reviewpulse::tui::state::SentimentFilter;
    use rstest::rstest;
    use serde_json::Value;

    use super::{ReportFormat, render_report, write_report_to};

    #[rstest]
    #[case(false, ReportFormat::Text)]
    #[case(true, ReportFormat::Json)]
    fn format_follows_json_flag(#[case] json: bool, #[case] expected: ReportFormat) {
        assert_eq!(ReportFormat::from_json_flag(json), expected);
    }

    #[test]
    fn json_report_carries_totals_and_counts() {
        let result = decode_analysis(&mixed_reply()).expect("reply should decode");

        let report = render_report(&result, ReportFormat::Json, SentimentFilter::Negative)
            .expect("report should render");
        let value: Value = serde_json::from_str(&report).expect("report should be JSON");

        assert_eq!(value["totalReviews"], 5);
        assert_eq!(value["sentimentCounts"]["positive"], 3);
        assert_eq!(value["reviews"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn text_report_applies_filter() {
        let result = decode_analysis(&mixed_reply()).expect("reply should decode");

        let report = render_report(&result, ReportFormat::Text, SentimentFilter::Negative)
            .expect("report should render");

        assert!(report.starts_with("Analyzed 5 reviews"));
        assert!(report.contains("[NEGATIVE] Delivery took forever."));
        assert!(!report.contains("[POSITIVE]"));
    }

    #[test]
    fn write_report_ends_with_single_newline() {
        let mut buffer = Vec::new();

        write_report_to(&mut buffer, "line\n\n").expect("report should be written");

        assert_eq!(buffer, b"line\n");
    }
}
