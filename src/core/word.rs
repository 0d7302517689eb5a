//! Normalized word representation
//!
//! A Word stores the normalized text along with its characters, so length and
//! position checks work on letters rather than UTF-8 bytes.

use rustc_hash::FxHashSet;
use std::fmt;

/// A normalized (trimmed, lowercased) word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
        }
    }
}

impl std::error::Error for WordError {}

/// Trim and lowercase a piece of text
///
/// # Examples
/// ```
/// use hangman_solver::core::normalize;
///
/// assert_eq!(normalize("  ȘARPE \n"), "șarpe");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new(" Țară ").unwrap();
    /// assert_eq!(word.text(), "țară");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Check if the word contains any letter of `letters`
    #[must_use]
    pub fn contains_any(&self, letters: &FxHashSet<char>) -> bool {
        !letters.is_empty() && self.chars.iter().any(|c| letters.contains(c))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
