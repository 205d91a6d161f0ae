//! UI components for the review dashboard.
//!
//! Components are stateless renderers: each takes the data it needs (often
//! through a borrowed view context) and returns the rendered string.

mod dashboard;
mod distribution_chart;
mod input_panel;
mod insights;
mod kpi;
mod review_list;
mod text_wrap;

pub use dashboard::{COMPACT_SUMMARY_HEIGHT, DashboardView, analyzed_header, filtered_indices};
pub use distribution_chart::{ChartSlice, DistributionChartComponent, chart_slices};
pub use input_panel::{INPUT_PLACEHOLDER, INPUT_TITLE, InputPanelComponent, InputPanelViewContext};
pub use insights::{InsightsComponent, NO_COMPLAINTS_MESSAGE, NO_PRAISES_MESSAGE};
pub use kpi::KpiComponent;
pub use review_list::{NO_MATCHING_REVIEWS_MESSAGE, ReviewListComponent, ReviewListViewContext};
pub use text_wrap::{truncate_to_width, wrap_words};
