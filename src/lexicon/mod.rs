//! Reference word list
//!
//! The lexicon is loaded once and then only read. Words are bucketed by length
//! so candidate filtering only scans words that can fit a pattern, while each
//! bucket keeps the original load order.

pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Immutable collection of normalized reference words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Lexicon {
    /// A lexicon with no words, meaning "no lexicon available"
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon, keeping the iteration order of `words`
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let words: Vec<Word> = words.into_iter().collect();
        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(index);
        }
        Self { words, by_length }
    }

    /// Build a lexicon from raw strings, skipping blank entries
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_strs(&["Casa", " ", "masa"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.words()[0].text(), "casa");
    /// ```
    #[must_use]
    pub fn from_strs(slice: &[&str]) -> Self {
        Self::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `len` letters, in load order
    pub fn with_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.by_length
            .get(&len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&index| &self.words[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.with_length(4).count(), 0);
    }

    #[test]
    fn with_length_keeps_load_order() {
        let lexicon = Lexicon::from_strs(&["masa", "cub", "casa", "sare", "ac"]);
        let four: Vec<&str> = lexicon.with_length(4).map(Word::text).collect();
        assert_eq!(four, ["masa", "casa", "sare"]);
        assert_eq!(lexicon.with_length(3).count(), 1);
        assert_eq!(lexicon.with_length(7).count(), 0);
    }

    #[test]
    fn length_buckets_use_letters() {
        let lexicon = Lexicon::from_strs(&["țară", "casa"]);
        assert_eq!(lexicon.with_length(4).count(), 2);
    }
}
