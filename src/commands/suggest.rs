//! Suggestion probe
//!
//! Shows what the lexicon and the heuristic fallback would propose for a given
//! game state, without playing a game.

use crate::core::{Alphabet, Pattern, PatternError};
use crate::lexicon::Lexicon;
use crate::solver::{
    CandidateSelector, HeuristicFallback, LexiconSuggestion, PatternTraits, TriedLetters,
};

/// What each selection stage proposes for one game state
pub struct SuggestionReport {
    pub pattern: Pattern,
    /// Tried letters in alphabet order, then any others in input order
    pub tried: Vec<char>,
    pub traits: PatternTraits,
    pub candidates: Vec<String>,
    pub lexicon: Option<LexiconSuggestion>,
    pub ranking: Vec<char>,
}

/// Build a suggestion report
///
/// Letters visible in the pattern count as tried, as they do in a game.
/// `tried` may list extra letters, separated by anything that is not a letter.
///
/// # Errors
///
/// Returns `PatternError` if the pattern is empty.
pub fn suggest_letters(
    pattern: &str,
    tried: &str,
    wildcard: char,
    lexicon: &Lexicon,
    alphabet: &Alphabet,
) -> Result<SuggestionReport, PatternError> {
    let pattern = Pattern::parse(pattern, wildcard)?;

    let mut tried_set: TriedLetters = pattern.known_letters();
    tried_set.extend(tried.to_lowercase().chars().filter(|c| c.is_alphabetic()));

    let selector = CandidateSelector::new(lexicon);
    let candidates = selector
        .candidates(&pattern, &tried_set)
        .into_iter()
        .map(|word| word.text().to_string())
        .collect();
    let ranking = HeuristicFallback::new(alphabet).ranked_letters(&pattern, &tried_set);

    let mut tried_letters: Vec<char> = alphabet
        .letters()
        .filter(|l| tried_set.contains(l))
        .collect();
    for letter in tried.to_lowercase().chars() {
        if tried_set.contains(&letter) && !tried_letters.contains(&letter) {
            tried_letters.push(letter);
        }
    }

    Ok(SuggestionReport {
        traits: PatternTraits::detect(&pattern, alphabet),
        lexicon: selector.suggest(&pattern, &tried_set),
        pattern,
        tried: tried_letters,
        candidates,
        ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_combines_both_stages() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa", "masa", "sare"]);

        let report = suggest_letters("*a**", "m", '*', &lexicon, &alphabet).unwrap();

        assert_eq!(report.tried, vec!['a', 'm']);
        assert_eq!(report.candidates, ["casa", "sare"]);
        assert_eq!(report.lexicon.map(|s| s.letter), Some('s'));
        assert!(report.traits.wildcard_near_vowel);
        assert_eq!(report.ranking[0], 'e');
        assert!(!report.ranking.contains(&'m'));
    }

    #[test]
    fn tried_letters_accept_separators() {
        let alphabet = Alphabet::romanian();
        let report =
            suggest_letters("****", "E, R; ș", '*', &Lexicon::empty(), &alphabet).unwrap();
        assert_eq!(report.tried, vec!['e', 'r', 'ș']);
        assert!(report.lexicon.is_none());
        assert_eq!(report.ranking.len(), alphabet.len() - 3);
    }

    #[test]
    fn empty_pattern_is_error() {
        let alphabet = Alphabet::romanian();
        assert!(suggest_letters("", "", '*', &Lexicon::empty(), &alphabet).is_err());
    }
}
