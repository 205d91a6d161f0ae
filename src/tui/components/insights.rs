//! Ranked lists of frequent complaints and praises.

/// Placeholder shown when no complaints were reported.
pub const NO_COMPLAINTS_MESSAGE: &str = "No major complaints detected.";
/// Placeholder shown when no praises were reported.
pub const NO_PRAISES_MESSAGE: &str = "No major praises detected.";

/// Component rendering one titled, ranked insight list.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightsComponent;

impl InsightsComponent {
    /// Renders the complaints section.
    #[must_use]
    pub fn complaints(items: &[String], max_width: usize) -> String {
        Self::view("Frequent Complaints", items, NO_COMPLAINTS_MESSAGE, max_width)
    }

    /// Renders the praises section.
    #[must_use]
    pub fn praises(items: &[String], max_width: usize) -> String {
        Self::view("Frequent Praises", items, NO_PRAISES_MESSAGE, max_width)
    }

    /// Renders `items` under `title` with 1-based ranks.
    ///
    /// Every item is shown, however many the model returned.
    fn view(title: &str, items: &[String], placeholder: &str, max_width: usize) -> String {
        let mut output = format!("{title}\n");
        if items.is_empty() {
            output.push_str("  ");
            output.push_str(placeholder);
            output.push('\n');
            return output;
        }

        for (rank, item) in (1_usize..).zip(items) {
            let prefix = format!("  {rank}. ");
            let indent = " ".repeat(prefix.len());
            let available = max_width.saturating_sub(prefix.len());
            let lines = super::text_wrap::wrap_words(item, available);
            for (index, line) in lines.iter().enumerate() {
                output.push_str(if index == 0 { &prefix } else { &indent });
                output.push_str(line);
                output.push('\n');
            }
        }
        output
    }
}
