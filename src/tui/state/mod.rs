//! State management for the review dashboard.
//!
//! This module provides the view-state machine, the editable draft, and the
//! filter and cursor state of the review list.

mod draft;
mod filter_state;
mod view_state;

pub use draft::{DraftLoadError, DraftState, SAMPLE_REVIEWS, read_plain_text_file};
pub use filter_state::{FilterState, SentimentFilter, SentimentFilterParseError};
pub use view_state::{BLANK_INPUT_MESSAGE, SubmitOutcome, UNEXPECTED_ERROR_MESSAGE, ViewState};
