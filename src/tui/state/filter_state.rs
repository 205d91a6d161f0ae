//! Sentiment filter and cursor state for the review list.
//!
//! Filtering is a pure predicate over the in-memory review list. The cursor
//! position is clamped to the filtered length whenever the filter changes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::analysis::{ReviewRecord, Sentiment};

/// Filter criteria for the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    /// Show every review.
    #[default]
    All,
    /// Show only positive reviews.
    Positive,
    /// Show only negative reviews.
    Negative,
    /// Show only neutral reviews.
    Neutral,
}

impl SentimentFilter {
    /// Every filter in filter-bar order.
    pub const ALL: [Self; 4] = [Self::All, Self::Positive, Self::Negative, Self::Neutral];

    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Returns true if this filter matches `review`.
    #[must_use]
    pub fn matches(self, review: &ReviewRecord) -> bool {
        self.sentiment()
            .is_none_or(|sentiment| review.sentiment() == sentiment)
    }

    /// Sentiment selected by this filter, or `None` for [`Self::All`].
    #[must_use]
    pub const fn sentiment(self) -> Option<Sentiment> {
        match self {
            Self::All => None,
            Self::Positive => Some(Sentiment::Positive),
            Self::Negative => Some(Sentiment::Negative),
            Self::Neutral => Some(Sentiment::Neutral),
        }
    }

    /// Next filter in filter-bar order, wrapping to [`Self::All`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Positive,
            Self::Positive => Self::Negative,
            Self::Negative => Self::Neutral,
            Self::Neutral => Self::All,
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Parse error for [`SentimentFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported filter '{value}': valid options are all, positive, negative, or neutral")]
pub struct SentimentFilterParseError {
    value: String,
}

impl FromStr for SentimentFilter {
    type Err = SentimentFilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(SentimentFilterParseError {
                value: value.to_owned(),
            }),
        }
    }
}

/// State managing the active filter and cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Currently active filter.
    pub active_filter: SentimentFilter,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a new filter state with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `filter`, returning the cursor to the top on a change.
    ///
    /// Returns whether the active filter changed.
    pub fn select_filter(&mut self, filter: SentimentFilter) -> bool {
        if self.active_filter == filter {
            return false;
        }
        self.active_filter = filter;
        self.home();
        true
    }

    /// Clamps the cursor position to be within the valid range.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
        if self.scroll_offset > self.cursor_position {
            self.scroll_offset = self.cursor_position;
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.cursor_position < max_index {
            self.cursor_position = self.cursor_position.saturating_add(1);
        }
    }

    /// Moves the cursor up by a page.
    pub const fn page_up(&mut self, page_size: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(page_size);
    }

    /// Moves the cursor down by a page.
    pub const fn page_down(&mut self, page_size: usize, max_index: usize) {
        let new_pos = self.cursor_position.saturating_add(page_size);
        self.cursor_position = if new_pos < max_index {
            new_pos
        } else {
            max_index
        };
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.cursor_position = max_index;
    }

    /// Scrolls so the cursor row is inside a window of `visible_rows`.
    pub const fn ensure_cursor_visible(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.cursor_position >= self.scroll_offset.saturating_add(visible_rows) {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_rows.saturating_sub(1));
        }
    }
}
