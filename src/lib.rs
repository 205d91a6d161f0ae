//! `ReviewPulse` library crate: customer-review sentiment analysis.
//!
//! The library sends free-form review text to an OpenAI-compatible model,
//! validates the structured reply into an [`analysis::AnalysisResult`], and
//! renders it as a terminal dashboard with KPIs, a sentiment distribution,
//! frequent complaints and praises, and a filterable review list.

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;

pub use analysis::{AnalysisError, AnalysisResult, ReviewAnalysisService, analyze};
pub use config::{OperationMode, ReviewPulseConfig};
pub use error::AppError;
