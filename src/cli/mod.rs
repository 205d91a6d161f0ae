//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`review_tui`]: Interactive dashboard
//! - [`report`]: One-shot analysis written to stdout
//!
//! Output formatting utilities are in [`output`].

use camino::Utf8Path;
use reviewpulse::tui::state::{SAMPLE_REVIEWS, read_plain_text_file};
use reviewpulse::{AppError, ReviewPulseConfig};

pub mod output;
pub mod report;
pub mod review_tui;

/// Resolves the draft text a run starts from.
///
/// `--input-file` loads a `.txt` file, `--sample` uses the bundled sample,
/// and otherwise the draft starts empty.
///
/// # Errors
///
/// Returns [`AppError::DraftLoad`] when the input file cannot be loaded.
pub fn initial_draft(config: &ReviewPulseConfig) -> Result<String, AppError> {
    if let Some(path) = config.input_file.as_deref() {
        return Ok(read_plain_text_file(Utf8Path::new(path))?);
    }
    if config.sample {
        return Ok(SAMPLE_REVIEWS.to_owned());
    }
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use reviewpulse::tui::state::{DraftLoadError, SAMPLE_REVIEWS};
    use reviewpulse::{AppError, ReviewPulseConfig};
    use tempfile::TempDir;

    use super::initial_draft;

    #[test]
    fn defaults_to_empty_draft() {
        let draft = initial_draft(&ReviewPulseConfig::default()).expect("draft should resolve");

        assert!(draft.is_empty());
    }

    #[test]
    fn sample_flag_uses_sample_reviews() {
        let config = ReviewPulseConfig {
            sample: true,
            ..ReviewPulseConfig::default()
        };

        let draft = initial_draft(&config).expect("draft should resolve");

        assert_eq!(draft, SAMPLE_REVIEWS);
    }

    #[test]
    fn input_file_is_loaded() {
        let dir = TempDir::new().expect("temporary directory should be created");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("reviews.txt"))
            .expect("temporary path should be UTF-8");
        std::fs::write(&path, "Solid build quality\n").expect("fixture file should be written");
        let config = ReviewPulseConfig {
            input_file: Some(path.to_string()),
            ..ReviewPulseConfig::default()
        };

        let draft = initial_draft(&config).expect("draft should resolve");

        assert_eq!(draft, "Solid build quality\n");
    }

    #[test]
    fn non_text_input_file_is_rejected() {
        let config = ReviewPulseConfig {
            input_file: Some("reviews.pdf".to_owned()),
            ..ReviewPulseConfig::default()
        };

        let error = initial_draft(&config).expect_err("pdf should be rejected");

        assert_eq!(error, AppError::DraftLoad(DraftLoadError::UnsupportedFileType));
    }
}
