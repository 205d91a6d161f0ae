//! Review list component for the filtered per-review rows.
//!
//! Each row renders the sentiment badge with the wrapped original text, the
//! summary, and a keyword chip line. Rows have variable height, so the
//! visible window is computed in lines and shifted until the cursor row fits.

use crate::analysis::ReviewRecord;
use crate::tui::state::SentimentFilter;

use super::text_wrap::wrap_words;

/// Placeholder shown when the active filter yields no rows.
pub const NO_MATCHING_REVIEWS_MESSAGE: &str = "No reviews found for this filter.";

/// Columns reserved for the cursor marker and indentation.
const ROW_INDENT: usize = 4;

/// Context for rendering the review list view.
///
/// Bundles the data needed to render a filtered list of reviews without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Full slice of all reviews in model order.
    pub reviews: &'a [ReviewRecord],
    /// Indices of reviews matching the current filter.
    pub filtered_indices: &'a [usize],
    /// Active sentiment filter.
    pub active_filter: SentimentFilter,
    /// Current cursor position (0-indexed) within the filtered rows.
    pub cursor_position: usize,
    /// Index of the first filtered row to consider for display.
    pub scroll_offset: usize,
    /// Maximum visible height in lines, excluding the filter bar.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Component for displaying the filter bar and review rows.
#[derive(Debug, Clone, Copy)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Renders the filter bar followed by the visible rows.
    ///
    /// The cursor row is always rendered, even when it alone exceeds
    /// `visible_height`.
    #[must_use]
    pub fn view(ctx: &ReviewListViewContext<'_>) -> String {
        let mut output = Self::filter_bar(ctx.active_filter, ctx.reviews.len());
        output.push('\n');

        if ctx.filtered_indices.is_empty() {
            output.push_str("  ");
            output.push_str(NO_MATCHING_REVIEWS_MESSAGE);
            output.push('\n');
            return output;
        }

        let rows: Vec<Vec<String>> = ctx
            .filtered_indices
            .iter()
            .enumerate()
            .filter_map(|(display_index, review_index)| {
                let review = ctx.reviews.get(*review_index)?;
                let selected = display_index == ctx.cursor_position;
                Some(Self::format_row(review, selected, ctx.max_width))
            })
            .collect();

        let start = window_start(
            &rows,
            ctx.scroll_offset,
            ctx.cursor_position,
            ctx.visible_height,
        );
        let mut used = 0_usize;
        for row in rows.iter().skip(start) {
            if used > 0 && used.saturating_add(row.len()) > ctx.visible_height {
                break;
            }
            for line in row {
                output.push_str(line);
                output.push('\n');
            }
            used = used.saturating_add(row.len());
        }

        output
    }

    /// Renders the filter bar.
    ///
    /// Only the `All` entry carries a count: the unfiltered total.
    #[must_use]
    pub fn filter_bar(active: SentimentFilter, total: usize) -> String {
        let entries: Vec<String> = SentimentFilter::ALL
            .iter()
            .map(|filter| {
                let label = if *filter == SentimentFilter::All {
                    format!("{} ({total})", filter.label())
                } else {
                    filter.label().to_owned()
                };
                if *filter == active {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();
        format!("  Filter: {}", entries.join(" "))
    }

    /// Formats one review as its display lines.
    fn format_row(review: &ReviewRecord, selected: bool, max_width: usize) -> Vec<String> {
        let marker = if selected { ">" } else { " " };
        let badge = format!("[{}]", review.sentiment().as_str());
        let text_width = max_width.saturating_sub(ROW_INDENT);

        let mut lines = Vec::new();
        let text_lines = wrap_words(review.original_text(), text_width.saturating_sub(badge.len() + 1));
        let mut text_iter = text_lines.iter();
        let first = text_iter.next().map_or("", String::as_str);
        lines.push(format!("{marker} {badge} {first}"));
        let hang = " ".repeat(badge.len().saturating_add(3));
        lines.extend(text_iter.map(|line| format!("{hang}{line}")));

        lines.extend(
            wrap_words(review.summary(), text_width)
                .into_iter()
                .map(|line| format!("    {line}")),
        );

        if !review.keywords().is_empty() {
            let chips = review
                .keywords()
                .iter()
                .map(|keyword| format!("#{keyword}"))
                .collect::<Vec<_>>()
                .join(" ");
            lines.extend(
                wrap_words(&chips, text_width)
                    .into_iter()
                    .map(|line| format!("    {line}")),
            );
        }

        lines.push(String::new());
        lines
    }
}

/// First row to render so that the cursor row fits in `budget` lines.
fn window_start(rows: &[Vec<String>], scroll_offset: usize, cursor: usize, budget: usize) -> usize {
    let mut start = scroll_offset.min(cursor);
    loop {
        let needed: usize = rows
            .iter()
            .skip(start)
            .take(cursor.saturating_sub(start).saturating_add(1))
            .map(Vec::len)
            .sum();
        if needed <= budget || start >= cursor {
            return start;
        }
        start = start.saturating_add(1);
    }
}
