//! Partially revealed word pattern
//!
//! A pattern is a fixed-length row of cells, each either a revealed letter or
//! unknown. Unknown cells are written with a wildcard marker (`*` by default).
//! Solving only ever fills unknown cells in place; the length never changes.

use super::{Word, normalize};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Default wildcard marker
pub const DEFAULT_WILDCARD: char = '*';

/// Current knowledge of a target word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<char>>,
    wildcard: char,
}

/// Error type for invalid patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must contain at least one cell"),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern, treating `wildcard` as an unknown cell
    ///
    /// The text is normalized (trimmed, lowercased) first, and so is the
    /// wildcard.
    ///
    /// # Errors
    /// Returns `PatternError::Empty` if nothing is left after normalization.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("*A*", '*').unwrap();
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.to_string(), "*a*");
    /// ```
    pub fn parse(text: &str, wildcard: char) -> Result<Self, PatternError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        let wildcard = normalize_wildcard(wildcard);

        let cells = text
            .chars()
            .map(|c| if c == wildcard { None } else { Some(c) })
            .collect();
        Ok(Self { cells, wildcard })
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn wildcard(&self) -> char {
        self.wildcard
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells still unknown
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True iff `word` has the same length and agrees with every revealed cell
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("*at", '*').unwrap();
    /// assert!(pattern.matches(&Word::new("cat").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cot").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cats").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, &c)| cell.is_none_or(|known| known == c))
    }

    /// True iff the pattern reads exactly as the target
    ///
    /// Compared as written, so a target that itself holds the wildcard
    /// character is solved by an unknown cell at that position.
    #[must_use]
    pub fn is_solved_by(&self, target: &Word) -> bool {
        target.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(target.chars())
                .all(|(cell, &c)| cell.unwrap_or(self.wildcard) == c)
    }

    /// Reveal `letter` at every unknown cell where `target` holds it
    ///
    /// Revealed cells are never touched. Returns the number of cells filled.
    pub fn reveal(&mut self, target: &Word, letter: char) -> usize {
        let mut revealed = 0;
        for (cell, &c) in self.cells.iter_mut().zip(target.chars()) {
            if cell.is_none() && c == letter {
                *cell = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Set of letters visible in the pattern
    #[must_use]
    pub fn known_letters(&self) -> FxHashSet<char> {
        self.cells.iter().flatten().copied().collect()
    }

    /// True if some revealed letter occurs at two or more cells
    #[must_use]
    pub fn has_repeated_letter(&self) -> bool {
        let mut seen: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in self.cells.iter().flatten() {
            let count = seen.entry(letter).or_insert(0);
            *count += 1;
            if *count >= 2 {
                return true;
            }
        }
        false
    }

    /// True if an unknown cell has an immediate neighbour satisfying `predicate`
    pub fn wildcard_adjacent_to(&self, predicate: impl Fn(char) -> bool) -> bool {
        let neighbour_matches = |i: usize| {
            self.cells
                .get(i)
                .copied()
                .flatten()
                .is_some_and(&predicate)
        };

        self.cells.iter().enumerate().any(|(i, cell)| {
            cell.is_none() && ((i > 0 && neighbour_matches(i - 1)) || neighbour_matches(i + 1))
        })
    }
}

/// Lowercase a wildcard marker the same way pattern text is lowercased
fn normalize_wildcard(wildcard: char) -> char {
    let mut lower = wildcard.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => wildcard,
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(self.wildcard))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text, DEFAULT_WILDCARD).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn parse_marks_wildcards() {
        let p = pattern("c*t");
        assert_eq!(p.cells(), &[Some('c'), None, Some('t')]);
        assert_eq!(p.unknown_count(), 1);
    }

    #[test]
    fn parse_custom_wildcard() {
        let p = Pattern::parse("_a_", '_').unwrap();
        assert_eq!(p.cells(), &[None, Some('a'), None]);
        assert_eq!(p.to_string(), "_a_");
    }

    #[test]
    fn parse_lowercases_wildcard() {
        let p = Pattern::parse("XaX", 'X').unwrap();
        assert_eq!(p.cells(), &[None, Some('a'), None]);
        assert_eq!(p.wildcard(), 'x');
        assert_eq!(p.to_string(), "xax");
    }

    #[test]
    fn parse_empty_is_error() {
        assert_eq!(Pattern::parse("  ", '*'), Err(PatternError::Empty));
    }

    #[test]
    fn matches_all_wildcards() {
        assert!(pattern("****").matches(&word("casa")));
    }

    #[test]
    fn matches_rejects_length_mismatch() {
        assert!(!pattern("***").matches(&word("casa")));
        assert!(!pattern("*****").matches(&word("casa")));
    }

    #[test]
    fn matches_checks_every_revealed_cell() {
        let p = pattern("*a*a");
        assert!(p.matches(&word("casa")));
        assert!(p.matches(&word("masa")));
        assert!(!p.matches(&word("sare")));
    }

    #[test]
    fn matches_diacritics_by_letter() {
        let p = pattern("*ără");
        assert!(p.matches(&word("țără")));
        assert!(!p.matches(&word("țara")));
    }

    #[test]
    fn reveal_fills_only_unknown_matching_cells() {
        let target = word("banana");
        let mut p = pattern("b*****");
        assert_eq!(p.reveal(&target, 'a'), 3);
        assert_eq!(p.to_string(), "ba*a*a");
        assert_eq!(p.reveal(&target, 'x'), 0);
        assert_eq!(p.to_string(), "ba*a*a");
        assert_eq!(p.reveal(&target, 'b'), 0);
    }

    #[test]
    fn solved_requires_every_cell() {
        let target = word("cub");
        assert!(pattern("cub").is_solved_by(&target));
        assert!(!pattern("cu*").is_solved_by(&target));
        assert!(!pattern("cup").is_solved_by(&target));
    }

    #[test]
    fn solved_compares_written_form() {
        let target = word("a*b");
        assert!(pattern("a*b").is_solved_by(&target));
        assert!(!pattern("**b").is_solved_by(&target));
    }

    #[test]
    fn known_letters_skip_wildcards() {
        let known = pattern("*a*at").known_letters();
        assert_eq!(known.len(), 2);
        assert!(known.contains(&'a') && known.contains(&'t'));
    }

    #[test]
    fn repeated_letter_detection() {
        assert!(pattern("*a*a").has_repeated_letter());
        assert!(!pattern("*at").has_repeated_letter());
        assert!(!pattern("****").has_repeated_letter());
    }

    #[test]
    fn wildcard_adjacency() {
        let is_vowel = |c: char| "aeiou".contains(c);
        assert!(pattern("*at").wildcard_adjacent_to(is_vowel));
        assert!(pattern("ca*").wildcard_adjacent_to(is_vowel));
        assert!(!pattern("c*t").wildcard_adjacent_to(is_vowel));
        assert!(!pattern("cat").wildcard_adjacent_to(is_vowel));
        assert!(!pattern("***").wildcard_adjacent_to(is_vowel));
    }
}
