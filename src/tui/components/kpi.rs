//! KPI summary rows: per-sentiment counts and their share of the total.

use crate::analysis::{Sentiment, SentimentCounts};

/// Component rendering one KPI row per sentiment.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiComponent;

impl KpiComponent {
    /// Renders the KPI block.
    ///
    /// Every sentiment is listed, including those with a zero count.
    #[must_use]
    pub fn view(counts: SentimentCounts) -> String {
        let count_width = Sentiment::ALL
            .iter()
            .map(|sentiment| counts.count(*sentiment).to_string().len())
            .max()
            .unwrap_or(1);

        Sentiment::ALL
            .iter()
            .map(|sentiment| {
                format!(
                    "  {label:<9}{count:>count_width$}   {percent}% of total\n",
                    label = sentiment.label(),
                    count = counts.count(*sentiment),
                    percent = counts.percentage(*sentiment),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::KpiComponent;
    use crate::analysis::SentimentCounts;

    #[test]
    fn renders_counts_and_percentages() {
        let counts = SentimentCounts {
            positive: 3,
            negative: 1,
            neutral: 1,
        };

        let view = KpiComponent::view(counts);

        assert_eq!(
            view,
            concat!(
                "  Positive 3   60% of total\n",
                "  Negative 1   20% of total\n",
                "  Neutral  1   20% of total\n",
            )
        );
    }

    #[test]
    fn zero_total_shows_zero_percent() {
        let view = KpiComponent::view(SentimentCounts::default());

        assert_eq!(view.matches("0% of total").count(), 3);
    }

    #[test]
    fn counts_are_right_aligned() {
        let counts = SentimentCounts {
            positive: 12,
            negative: 3,
            neutral: 0,
        };

        let view = KpiComponent::view(counts);

        assert!(view.contains("  Positive 12   80% of total\n"));
        assert!(view.contains("  Negative  3   20% of total\n"));
        assert!(view.contains("  Neutral   0   0% of total\n"));
    }
}
