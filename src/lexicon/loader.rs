//! Lexicon loading utilities
//!
//! Reads a word list (one word per line) from a file. A missing or unreadable
//! file is not fatal for the solver: `load_or_empty` degrades to an empty
//! lexicon and the heuristic fallback takes over.

use super::Lexicon;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a file
///
/// Every non-blank line is normalized into a word; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use hangman_solver::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Build a lexicon from newline-separated text
#[must_use]
pub fn parse_lines(content: &str) -> Lexicon {
    Lexicon::from_words(content.lines().filter_map(|line| Word::new(line).ok()))
}

/// Load a lexicon, falling back to an empty one when the source is unavailable
///
/// `None` means no lexicon was requested.
pub fn load_or_empty(path: Option<&Path>) -> Lexicon {
    let Some(path) = path else {
        info!("No lexicon given, using heuristic letter order only");
        return Lexicon::empty();
    };

    match load_from_file(path) {
        Ok(lexicon) => {
            info!("Lexicon loaded: {} words from {}", lexicon.len(), path.display());
            lexicon
        }
        Err(e) => {
            warn!(
                "Lexicon {} could not be read ({e}), using heuristic letter order only",
                path.display()
            );
            Lexicon::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_lines_normalizes_and_skips_blank() {
        let lexicon = parse_lines("Casa\n\n  masa  \r\n\t\nSARE\n");
        let words: Vec<&str> = lexicon.words().iter().map(Word::text).collect();
        assert_eq!(words, ["casa", "masa", "sare"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pisică").unwrap();
        writeln!(file, "câine").unwrap();

        let lexicon = load_from_file(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.words()[1].text(), "câine");
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn load_or_empty_degrades_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(load_or_empty(Some(&missing)).is_empty());
    }

    #[test]
    fn load_or_empty_without_path() {
        assert!(load_or_empty(None).is_empty());
    }
}
