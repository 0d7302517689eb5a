//! Letter classes and priority lists
//!
//! The alphabet is plain immutable configuration: the solver and the heuristic
//! fallback borrow it, so independent games can share one instance.

/// Class of an alphabet letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// A fixed alphabet split into vowels and consonants, plus the consonant
/// priority lists used by the heuristic fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: Vec<char>,
    consonants: Vec<char>,
    vowel_friendly: Vec<char>,
    repetition_boost: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from explicit class lists
    ///
    /// List order is significant: it is the order the fallback proposes letters in.
    #[must_use]
    pub fn new(
        vowels: impl Into<Vec<char>>,
        consonants: impl Into<Vec<char>>,
        vowel_friendly: impl Into<Vec<char>>,
        repetition_boost: impl Into<Vec<char>>,
    ) -> Self {
        Self {
            vowels: vowels.into(),
            consonants: consonants.into(),
            vowel_friendly: vowel_friendly.into(),
            repetition_boost: repetition_boost.into(),
        }
    }

    /// Romanian alphabet, diacritic letters included
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Alphabet, LetterClass};
    ///
    /// let alphabet = Alphabet::romanian();
    /// assert_eq!(alphabet.len(), 31);
    /// assert_eq!(alphabet.classify('ă'), Some(LetterClass::Vowel));
    /// assert_eq!(alphabet.classify('ș'), Some(LetterClass::Consonant));
    /// assert_eq!(alphabet.classify('9'), None);
    /// ```
    #[must_use]
    pub fn romanian() -> Self {
        Self::new(
            ['e', 'a', 'i', 'o', 'u', 'ă', 'â', 'î'],
            [
                'r', 'n', 't', 'l', 's', 'c', 'd', 'p', 'm', 'g', 'h', 'b', 'f', 'v', 'ș', 'ț',
                'k', 'j', 'x', 'z', 'q', 'y', 'w',
            ],
            ['r', 'n', 't', 'l', 's', 'c', 'd', 'p', 'm'],
            ['r', 'n', 't', 'l', 's'],
        )
    }

    /// Vowels in proposal order
    #[inline]
    #[must_use]
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Consonants in proposal order
    #[inline]
    #[must_use]
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Consonants that commonly sit next to a vowel
    #[inline]
    #[must_use]
    pub fn vowel_friendly(&self) -> &[char] {
        &self.vowel_friendly
    }

    /// Consonants that commonly repeat inside a word
    #[inline]
    #[must_use]
    pub fn repetition_boost(&self) -> &[char] {
        &self.repetition_boost
    }

    /// All letters, vowels first
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.iter().chain(&self.consonants).copied()
    }

    /// Number of letters in the alphabet
    #[must_use]
    pub fn len(&self) -> usize {
        self.vowels.len() + self.consonants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify a letter, or `None` if it is outside the alphabet
    #[must_use]
    pub fn classify(&self, letter: char) -> Option<LetterClass> {
        if self.vowels.contains(&letter) {
            Some(LetterClass::Vowel)
        } else if self.consonants.contains(&letter) {
            Some(LetterClass::Consonant)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_vowel(&self, letter: char) -> bool {
        self.vowels.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn is_consonant(&self, letter: char) -> bool {
        self.consonants.contains(&letter)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::romanian()
    }
}
