//! Heuristic letter ordering
//!
//! Used when the lexicon is absent or has no usable candidate. Ranks every
//! untried alphabet letter from static linguistic hints:
//!
//! 1. Untried vowels, in alphabet order.
//! 2. If an unknown cell touches a revealed vowel, the vowel-friendly consonants.
//! 3. If a revealed letter repeats, the repetition-boosted consonants not placed yet.
//! 4. The remaining consonants, then any alphabet letter still missing.

use super::TriedLetters;
use crate::core::{Alphabet, Pattern};

/// Structural hints read off a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternTraits {
    pub wildcard_near_vowel: bool,
    pub wildcard_near_consonant: bool,
    pub repeated_letter: bool,
}

impl PatternTraits {
    #[must_use]
    pub fn detect(pattern: &Pattern, alphabet: &Alphabet) -> Self {
        Self {
            wildcard_near_vowel: pattern.wildcard_adjacent_to(|c| alphabet.is_vowel(c)),
            wildcard_near_consonant: pattern.wildcard_adjacent_to(|c| alphabet.is_consonant(c)),
            repeated_letter: pattern.has_repeated_letter(),
        }
    }
}

/// Fixed-priority fallback bound to one alphabet
#[derive(Debug, Clone, Copy)]
pub struct HeuristicFallback<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> HeuristicFallback<'a> {
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Every untried alphabet letter exactly once, best first
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Alphabet, Pattern};
    /// use hangman_solver::solver::{HeuristicFallback, TriedLetters};
    ///
    /// let alphabet = Alphabet::romanian();
    /// let pattern = Pattern::parse("*at", '*').unwrap();
    /// let tried: TriedLetters = ['a', 't'].into_iter().collect();
    ///
    /// let ranked = HeuristicFallback::new(&alphabet).ranked_letters(&pattern, &tried);
    /// assert_eq!(ranked[0], 'e');
    /// assert_eq!(ranked.len(), alphabet.len() - 2);
    /// ```
    #[must_use]
    pub fn ranked_letters(&self, pattern: &Pattern, tried: &TriedLetters) -> Vec<char> {
        let untried = |letters: &[char]| -> Vec<char> {
            letters
                .iter()
                .copied()
                .filter(|l| !tried.contains(l))
                .collect()
        };

        let vowels = untried(self.alphabet.vowels());
        let mut consonants = untried(self.alphabet.consonants());
        let mut preferred: Vec<char> = Vec::new();

        let traits = PatternTraits::detect(pattern, self.alphabet);

        if traits.wildcard_near_vowel {
            let friendly = untried(self.alphabet.vowel_friendly());
            consonants.retain(|c| !friendly.contains(c));
            preferred.extend(friendly);
        }

        if traits.repeated_letter {
            let mut boost = untried(self.alphabet.repetition_boost());
            boost.retain(|c| !preferred.contains(c));
            consonants.retain(|c| !boost.contains(c));
            preferred.extend(boost);
        }

        // Vowels lead even when an unknown cell touches a known consonant.
        let mut ranked = Vec::with_capacity(self.alphabet.len());
        push_unique(&mut ranked, vowels);
        push_unique(&mut ranked, preferred);
        push_unique(&mut ranked, consonants);
        push_unique(
            &mut ranked,
            self.alphabet.letters().filter(|l| !tried.contains(l)),
        );
        ranked
    }

    /// Head of the ranking, or `None` once every alphabet letter is tried
    #[must_use]
    pub fn first(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<char> {
        self.ranked_letters(pattern, tried).first().copied()
    }
}

fn push_unique(ranked: &mut Vec<char>, letters: impl IntoIterator<Item = char>) {
    for letter in letters {
        if !ranked.contains(&letter) {
            ranked.push(letter);
        }
    }
}
