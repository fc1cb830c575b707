//! Word-list loading for the segmentation experiment.

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::{Result, StemtokError};

/// Source of the word list consumed by the stem splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Whitespace-separated words read from a file.
    Path(PathBuf),
    /// Whitespace-separated words supplied directly.
    Inline(String),
}

/// Resolves a [`WordSource`] into a lowercased word list.
///
/// Words are split on whitespace and lowercased on load. A missing or
/// unreadable file surfaces as [`StemtokError::Io`] carrying the offending
/// path; callers that want the degraded empty-list behaviour handle the error
/// themselves.
pub fn load_words(source: &WordSource) -> Result<Vec<String>> {
    let text = match source {
        WordSource::Path(path) => {
            fs::read_to_string(path).map_err(|err| StemtokError::io(err, Some(path.clone())))?
        }
        WordSource::Inline(text) => text.clone(),
    };
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    debug!("loaded {} words", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_words_lowercases_and_splits() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nouns.txt");
        fs::write(&path, "Cats CAR\ncat\n").expect("write word list");
        let words = load_words(&WordSource::Path(path)).expect("load words");
        assert_eq!(words, vec!["cats", "car", "cat"]);
    }

    #[test]
    fn load_words_missing_file_reports_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.txt");
        let err = load_words(&WordSource::Path(path.clone())).expect_err("load should fail");
        assert!(matches!(
            err,
            StemtokError::Io { path: Some(reported), .. } if reported == path
        ));
    }

    #[test]
    fn load_words_inline_source() {
        let source = WordSource::Inline("walked  Walks".into());
        let words = load_words(&source).expect("load words");
        assert_eq!(words, vec!["walked", "walks"]);
    }
}
