//! Lexicon-driven letter selection
//!
//! Narrows the lexicon to words consistent with the pattern and the letters
//! already proved absent, then picks the letter that occurs most often among
//! the untried letters of those words.

use crate::core::{Pattern, Word};
use crate::lexicon::Lexicon;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letters already guessed in the current game, right or wrong
pub type TriedLetters = FxHashSet<char>;

/// Letter picked from the lexicon, with the candidate count behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconSuggestion {
    pub letter: char,
    pub candidates: usize,
}

/// Lexicon words that fit `pattern` and contain no known-wrong letter
///
/// Known-wrong letters are the tried letters that are not visible in the pattern.
/// Lexicon order is preserved.
#[must_use]
pub fn filter_candidates<'a>(
    pattern: &Pattern,
    tried: &TriedLetters,
    lexicon: &'a Lexicon,
) -> Vec<&'a Word> {
    let known = pattern.known_letters();
    let wrong: FxHashSet<char> = tried.difference(&known).copied().collect();

    lexicon
        .with_length(pattern.len())
        .filter(|word| pattern.matches(word) && !word.contains_any(&wrong))
        .collect()
}

/// Most frequent untried letter across `candidates`
///
/// Counts are accumulated in first-seen order (candidates in order, each word
/// left to right), and ties go to the letter seen first.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::{TriedLetters, choose_letter};
///
/// let words = [Word::new("casa").unwrap(), Word::new("masa").unwrap()];
/// let candidates: Vec<&Word> = words.iter().collect();
/// let tried: TriedLetters = ['a'].into_iter().collect();
///
/// assert_eq!(choose_letter(&candidates, &tried), Some('s'));
/// ```
#[must_use]
pub fn choose_letter(candidates: &[&Word], tried: &TriedLetters) -> Option<char> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut slots: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        for &letter in word.chars() {
            if tried.contains(&letter) {
                continue;
            }
            let slot = *slots.entry(letter).or_insert_with(|| {
                counts.push((letter, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }
    }

    let mut best: Option<(char, usize)> = None;
    for &(letter, count) in &counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }
    best.map(|(letter, _)| letter)
}

/// Letter suggested by the lexicon alone, or `None` if it has nothing to offer
#[must_use]
pub fn suggest_from_lexicon(
    pattern: &Pattern,
    tried: &TriedLetters,
    lexicon: &Lexicon,
) -> Option<char> {
    CandidateSelector::new(lexicon)
        .suggest(pattern, tried)
        .map(|suggestion| suggestion.letter)
}

/// Candidate selector bound to one lexicon
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> CandidateSelector<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Consistent candidates for the current game state
    #[must_use]
    pub fn candidates(&self, pattern: &Pattern, tried: &TriedLetters) -> Vec<&'a Word> {
        filter_candidates(pattern, tried, self.lexicon)
    }

    /// Most frequent untried letter among the candidates
    ///
    /// Returns `None` straight away for an empty lexicon.
    #[must_use]
    pub fn suggest(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<LexiconSuggestion> {
        if self.lexicon.is_empty() {
            return None;
        }

        let candidates = self.candidates(pattern, tried);
        choose_letter(&candidates, tried).map(|letter| LexiconSuggestion {
            letter,
            candidates: candidates.len(),
        })
    }
}
