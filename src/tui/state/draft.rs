//! Editable review draft and its loaders.
//!
//! The draft is the text the user intends to analyse. It can be typed,
//! replaced by the bundled sample, or replaced by the contents of a local
//! plain-text file.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

/// Illustrative reviews spanning all three sentiments.
pub const SAMPLE_REVIEWS: &str = "\
The product quality is amazing, I love the sleek design!
Shipping was terrible, it arrived 3 days late and the box was crushed.
Customer support was helpful but the wait time was too long.
Best purchase I've made this year, highly recommended.
The battery life is not as advertised, very disappointing.
Easy to set up and use right out of the box.
The price is a bit high for what you get.
I'm neutral about this, it does the job but nothing special.";

const PLAIN_TEXT_EXTENSION: &str = "txt";

/// Failures raised while loading a draft from disk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftLoadError {
    /// The path does not name a `.txt` file.
    #[error("Only plain-text (.txt) files can be loaded.")]
    UnsupportedFileType,

    /// The file could not be read.
    #[error("Could not read file '{path}': {reason}")]
    Read {
        /// Path as entered by the user.
        path: String,
        /// Underlying I/O error detail.
        reason: String,
    },
}

/// Current draft text awaiting submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    text: String,
}

impl DraftState {
    /// Creates a draft holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the draft is empty once surrounding whitespace is ignored.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines; an empty draft has none.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Appends one character.
    pub fn push_char(&mut self, character: char) {
        self.text.push(character);
    }

    /// Appends a newline.
    pub fn push_newline(&mut self) {
        self.text.push('\n');
    }

    /// Removes the last character, if present.
    pub fn backspace(&mut self) {
        let _removed = self.text.pop();
    }

    /// Empties the draft.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the draft with `text`.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the draft with [`SAMPLE_REVIEWS`].
    pub fn load_sample(&mut self) {
        self.replace(SAMPLE_REVIEWS);
    }

    /// Replaces the draft with the contents of the file at `path`.
    ///
    /// The draft is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DraftLoadError`] when `path` is not a `.txt` file or cannot
    /// be read.
    pub fn load_file(&mut self, path: &Utf8Path) -> Result<(), DraftLoadError> {
        let contents = read_plain_text_file(path)?;
        self.replace(contents);
        Ok(())
    }
}

/// Reads a `.txt` file as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected.
///
/// # Errors
///
/// Returns [`DraftLoadError::UnsupportedFileType`] for other extensions and
/// [`DraftLoadError::Read`] when the file cannot be opened or read.
pub fn read_plain_text_file(path: &Utf8Path) -> Result<String, DraftLoadError> {
    let is_plain_text = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(PLAIN_TEXT_EXTENSION));
    if !is_plain_text {
        return Err(DraftLoadError::UnsupportedFileType);
    }

    let read_error = |reason: String| DraftLoadError::Read {
        path: path.to_string(),
        reason,
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error("path has no file name".to_owned()))?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| read_error(error.to_string()))?;
    let bytes = dir
        .read(file_name)
        .map_err(|error| read_error(error.to_string()))?;
    let contents = String::from_utf8_lossy(&bytes).into_owned();

    tracing::debug!(path = %path, chars = contents.chars().count(), "loaded review file");
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use camino::{Utf8Path, Utf8PathBuf};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::{DraftLoadError, DraftState, SAMPLE_REVIEWS};

    struct TempFiles {
        _dir: TempDir,
        base: Utf8PathBuf,
    }

    impl TempFiles {
        fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> Utf8PathBuf {
            let path = self.base.join(name);
            fs::write(&path, contents).expect("fixture file should be written");
            path
        }
    }

    #[fixture]
    fn temp_files() -> TempFiles {
        let dir = TempDir::new().expect("temp dir should be created");
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .expect("temp directory path must be UTF-8");
        TempFiles { _dir: dir, base }
    }

    #[test]
    fn sample_has_eight_lines() {
        let mut draft = DraftState::default();
        draft.load_sample();

        assert_eq!(draft.text(), SAMPLE_REVIEWS);
        assert_eq!(draft.line_count(), 8);
        assert!(!draft.is_blank());
    }

    #[rstest]
    #[case("", true)]
    #[case("   \n\t ", true)]
    #[case("  x  ", false)]
    fn blank_check_ignores_surrounding_whitespace(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(DraftState::new(text).is_blank(), expected);
    }

    #[test]
    fn editing_operations_mutate_text() {
        let mut draft = DraftState::default();
        draft.push_char('h');
        draft.push_char('é');
        draft.push_newline();
        draft.push_char('x');
        draft.backspace();

        assert_eq!(draft.text(), "hé\n");
        assert_eq!(draft.char_count(), 3);
        assert_eq!(draft.line_count(), 1);

        draft.clear();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.line_count(), 0);
    }

    #[rstest]
    #[case("reviews.txt")]
    #[case("REVIEWS.TXT")]
    fn load_file_replaces_draft_with_contents(temp_files: TempFiles, #[case] name: &str) {
        let path = temp_files.write(name, "Great app\nToo slow\n");
        let mut draft = DraftState::new("old text");

        draft.load_file(&path).expect("file should load");

        assert_eq!(draft.text(), "Great app\nToo slow\n");
    }

    #[rstest]
    fn load_file_accepts_text_that_is_not_utf8(temp_files: TempFiles) {
        let path = temp_files.write("latin1.txt", b"Caf\xe9 was great\n");
        let mut draft = DraftState::default();

        draft.load_file(&path).expect("non-UTF-8 text should still load");

        assert_eq!(draft.text(), "Caf\u{fffd} was great\n");
        assert_eq!(draft.line_count(), 1);
    }

    #[rstest]
    #[case("reviews.csv")]
    #[case("reviews")]
    #[case("reviews.txt.bak")]
    fn load_file_rejects_non_text_files(temp_files: TempFiles, #[case] name: &str) {
        let path = temp_files.write(name, "data");
        let mut draft = DraftState::new("keep me");

        let error = draft.load_file(&path).expect_err("non-text file should fail");

        assert_eq!(error, DraftLoadError::UnsupportedFileType);
        assert_eq!(
            error.to_string(),
            "Only plain-text (.txt) files can be loaded."
        );
        assert_eq!(draft.text(), "keep me");
    }

    #[rstest]
    fn load_file_reports_missing_file(temp_files: TempFiles) {
        let path = temp_files.base.join("missing.txt");
        let mut draft = DraftState::new("keep me");

        let error = draft.load_file(&path).expect_err("missing file should fail");

        assert!(
            error
                .to_string()
                .starts_with(&format!("Could not read file '{path}': "))
        );
        assert_eq!(draft.text(), "keep me");
    }

    #[test]
    fn load_file_resolves_relative_paths_against_current_directory() {
        let error = DraftState::default()
            .load_file(Utf8Path::new("definitely-not-here.txt"))
            .expect_err("missing relative file should fail");

        assert!(matches!(error, DraftLoadError::Read { .. }));
    }
}
