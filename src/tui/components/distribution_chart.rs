//! Proportional sentiment distribution rendered as horizontal bars.

use crate::analysis::{Sentiment, SentimentCounts};

const BAR_CHAR: char = '█';
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
// Label column plus the count/percentage suffix.
const CHROME_WIDTH: usize = 28;

/// One non-empty slice of the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlice {
    /// Sentiment the slice represents.
    pub sentiment: Sentiment,
    /// Number of reviews in the slice.
    pub count: usize,
    /// Rounded share of the total.
    pub percentage: usize,
}

/// Builds chart slices, omitting sentiments with a zero count.
#[must_use]
pub fn chart_slices(counts: SentimentCounts) -> Vec<ChartSlice> {
    Sentiment::ALL
        .iter()
        .filter_map(|sentiment| {
            let count = counts.count(*sentiment);
            (count > 0).then(|| ChartSlice {
                sentiment: *sentiment,
                count,
                percentage: counts.percentage(*sentiment),
            })
        })
        .collect()
}

/// Component rendering the distribution chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionChartComponent;

impl DistributionChartComponent {
    /// Renders one bar per non-empty slice, scaled to `max_width` columns.
    #[must_use]
    pub fn view(counts: SentimentCounts, max_width: usize) -> String {
        let slices = chart_slices(counts);
        if slices.is_empty() {
            return "  No reviews to chart.\n".to_owned();
        }

        let bar_width = max_width
            .saturating_sub(CHROME_WIDTH)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);
        let total = counts.total();

        slices
            .iter()
            .map(|slice| {
                let filled = bar_length(slice.count, total, bar_width);
                let bar: String = std::iter::repeat_n(BAR_CHAR, filled).collect();
                format!(
                    "  {label:<9}{bar:<bar_width$} {count} ({percent}%)\n",
                    label = slice.sentiment.label(),
                    count = slice.count,
                    percent = slice.percentage,
                )
            })
            .collect()
    }
}

/// Bar length for `count` out of `total`, at least one cell when non-zero.
fn bar_length(count: usize, total: usize, bar_width: usize) -> usize {
    count
        .saturating_mul(bar_width)
        .checked_div(total)
        .unwrap_or(0)
        .max(usize::from(count > 0))
}
