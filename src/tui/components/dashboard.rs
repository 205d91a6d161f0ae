//! Result dashboard composed from the KPI, chart, insight, and list
//! components. Shared by the interactive view and the plain-text report.

use crate::analysis::{AnalysisResult, Sentiment};
use crate::tui::state::{FilterState, SentimentFilter};

use super::distribution_chart::DistributionChartComponent;
use super::insights::InsightsComponent;
use super::kpi::KpiComponent;
use super::review_list::{ReviewListComponent, ReviewListViewContext};
use super::text_wrap::truncate_to_width;

/// Lines rendered by [`DashboardView::compact_summary`].
pub const COMPACT_SUMMARY_HEIGHT: usize = 4;

/// Header line for a result, pluralised on the review count.
#[must_use]
pub fn analyzed_header(total_reviews: usize) -> String {
    let noun = if total_reviews == 1 { "review" } else { "reviews" };
    format!("Analyzed {total_reviews} {noun}")
}

/// Indices of reviews in `result` matching `filter`, in model order.
#[must_use]
pub fn filtered_indices(result: &AnalysisResult, filter: SentimentFilter) -> Vec<usize> {
    result
        .reviews()
        .iter()
        .enumerate()
        .filter(|(_, review)| filter.matches(review))
        .map(|(index, _)| index)
        .collect()
}

/// Composite dashboard view over one analysis result.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    result: &'a AnalysisResult,
    max_width: usize,
}

impl<'a> DashboardView<'a> {
    /// Creates a dashboard view rendering at most `max_width` columns.
    #[must_use]
    pub const fn new(result: &'a AnalysisResult, max_width: usize) -> Self {
        Self { result, max_width }
    }

    /// Renders the header, KPIs, chart, and insight lists.
    #[must_use]
    pub fn summary(&self) -> String {
        let counts = self.result.sentiment_counts();
        let mut output = analyzed_header(self.result.total_reviews());
        output.push_str("\n\nOverview\n");
        output.push_str(&KpiComponent::view(counts));
        output.push_str("\nSentiment Distribution\n");
        output.push_str(&DistributionChartComponent::view(counts, self.max_width));
        output.push('\n');
        output.push_str(&InsightsComponent::complaints(
            self.result.frequent_complaints(),
            self.max_width,
        ));
        output.push('\n');
        output.push_str(&InsightsComponent::praises(
            self.result.frequent_praises(),
            self.max_width,
        ));
        output
    }

    /// Renders the summary in [`COMPACT_SUMMARY_HEIGHT`] lines for short
    /// terminals: header, one KPI line, and one line per insight list.
    #[must_use]
    pub fn compact_summary(&self) -> String {
        let counts = self.result.sentiment_counts();
        let kpis = Sentiment::ALL
            .iter()
            .map(|sentiment| {
                format!(
                    "{} {} ({}%)",
                    sentiment.label(),
                    counts.count(*sentiment),
                    counts.percentage(*sentiment)
                )
            })
            .collect::<Vec<_>>()
            .join("  ");

        let mut output = analyzed_header(self.result.total_reviews());
        output.push('\n');
        for line in [
            kpis,
            inline_list("Complaints", self.result.frequent_complaints()),
            inline_list("Praises", self.result.frequent_praises()),
        ] {
            output.push_str(&truncate_to_width(&format!("  {line}"), self.max_width));
            output.push('\n');
        }
        output
    }

    /// Renders the review list section within `visible_height` lines.
    #[must_use]
    pub fn review_list(
        &self,
        filter_state: &FilterState,
        filtered_indices: &[usize],
        visible_height: usize,
    ) -> String {
        let ctx = ReviewListViewContext {
            reviews: self.result.reviews(),
            filtered_indices,
            active_filter: filter_state.active_filter,
            cursor_position: filter_state.cursor_position,
            scroll_offset: filter_state.scroll_offset,
            visible_height,
            max_width: self.max_width,
        };
        format!("Reviews\n{}", ReviewListComponent::view(&ctx))
    }

    /// Renders the whole dashboard with every matching review, for reports.
    #[must_use]
    pub fn full_report(&self, filter: SentimentFilter) -> String {
        let indices = filtered_indices(self.result, filter);
        let filter_state = FilterState {
            active_filter: filter,
            cursor_position: usize::MAX,
            scroll_offset: 0,
        };
        let mut output = self.summary();
        output.push('\n');
        output.push_str(&self.review_list(&filter_state, &indices, usize::MAX));
        output
    }
}

fn inline_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("{title}: none")
    } else {
        format!("{title}: {}", items.join("; "))
    }
}
