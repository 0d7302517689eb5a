//! Letter proposal strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{CandidateSelector, HeuristicFallback, TriedLetters};
use crate::core::{Alphabet, Pattern};
use crate::lexicon::Lexicon;

/// Where a proposed letter came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Most frequent letter among this many lexicon candidates
    Lexicon { candidates: usize },
    /// Head of the heuristic ranking
    Heuristic,
}

/// A letter to guess next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub letter: char,
    pub source: Source,
}

impl Proposal {
    #[must_use]
    pub const fn heuristic(letter: char) -> Self {
        Self {
            letter,
            source: Source::Heuristic,
        }
    }
}

/// A strategy for proposing the next letter of a game
pub trait Strategy {
    /// Propose an untried letter for the current pattern
    ///
    /// Returns `None` when nothing is left to propose.
    fn propose(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<Proposal>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Lexicon frequencies, heuristic ranking when the lexicon has no answer (default)
    Lexicon(LexiconStrategy<'a>),
    /// Heuristic ranking only
    Heuristic(HeuristicStrategy<'a>),
}

impl Strategy for StrategyType<'_> {
    fn propose(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<Proposal> {
        match self {
            Self::Lexicon(s) => s.propose(pattern, tried),
            Self::Heuristic(s) => s.propose(pattern, tried),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "lexicon", "heuristic"
    /// Defaults to lexicon if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, lexicon: &'a Lexicon, alphabet: &'a Alphabet) -> Self {
        match name {
            "heuristic" | "fallback" => Self::Heuristic(HeuristicStrategy::new(alphabet)),
            _ => Self::Lexicon(LexiconStrategy::new(lexicon, alphabet)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lexicon(_) => "lexicon",
            Self::Heuristic(_) => "heuristic",
        }
    }
}

/// Lexicon-first strategy
///
/// Asks the candidate selector, and takes the head of the heuristic ranking
/// when the lexicon is empty or has no usable candidate.
pub struct LexiconStrategy<'a> {
    selector: CandidateSelector<'a>,
    fallback: HeuristicFallback<'a>,
}

impl<'a> LexiconStrategy<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, alphabet: &'a Alphabet) -> Self {
        Self {
            selector: CandidateSelector::new(lexicon),
            fallback: HeuristicFallback::new(alphabet),
        }
    }
}

impl Strategy for LexiconStrategy<'_> {
    fn propose(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<Proposal> {
        self.selector
            .suggest(pattern, tried)
            .map(|suggestion| Proposal {
                letter: suggestion.letter,
                source: Source::Lexicon {
                    candidates: suggestion.candidates,
                },
            })
            .or_else(|| self.fallback.first(pattern, tried).map(Proposal::heuristic))
    }
}

/// Heuristic-only strategy
///
/// Ignores any lexicon; useful as a baseline.
pub struct HeuristicStrategy<'a> {
    fallback: HeuristicFallback<'a>,
}

impl<'a> HeuristicStrategy<'a> {
    #[must_use]
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            fallback: HeuristicFallback::new(alphabet),
        }
    }
}

impl Strategy for HeuristicStrategy<'_> {
    fn propose(&self, pattern: &Pattern, tried: &TriedLetters) -> Option<Proposal> {
        self.fallback.first(pattern, tried).map(Proposal::heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text, '*').unwrap()
    }

    fn tried(letters: &[char]) -> TriedLetters {
        letters.iter().copied().collect()
    }

    #[test]
    fn lexicon_strategy_prefers_lexicon() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa", "masa", "sare"]);
        let strategy = LexiconStrategy::new(&lexicon, &alphabet);

        let proposal = strategy.propose(&pattern("*a**"), &tried(&['a'])).unwrap();
        assert_eq!(proposal.letter, 's');
        assert_eq!(proposal.source, Source::Lexicon { candidates: 3 });
    }

    #[test]
    fn lexicon_strategy_falls_back_without_candidates() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["pisică"]);
        let strategy = LexiconStrategy::new(&lexicon, &alphabet);

        let proposal = strategy.propose(&pattern("*at"), &tried(&['a', 't'])).unwrap();
        assert_eq!(proposal, Proposal::heuristic('e'));
    }

    #[test]
    fn lexicon_strategy_falls_back_when_candidates_exhausted() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa"]);
        let strategy = LexiconStrategy::new(&lexicon, &alphabet);

        let proposal = strategy
            .propose(&pattern("cas*"), &tried(&['c', 'a', 's']))
            .unwrap();
        assert_eq!(proposal.source, Source::Heuristic);
    }

    #[test]
    fn heuristic_strategy_ignores_lexicon() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa", "masa"]);
        let strategy = StrategyType::from_name("heuristic", &lexicon, &alphabet);

        assert_eq!(strategy.name(), "heuristic");
        let proposal = strategy.propose(&pattern("*a**"), &tried(&['a'])).unwrap();
        assert_eq!(proposal, Proposal::heuristic('e'));
    }

    #[test]
    fn unknown_name_defaults_to_lexicon() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::empty();
        assert_eq!(
            StrategyType::from_name("entropy", &lexicon, &alphabet).name(),
            "lexicon"
        );
    }

    #[test]
    fn nothing_left_to_propose() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::empty();
        let strategy = LexiconStrategy::new(&lexicon, &alphabet);
        let everything: TriedLetters = alphabet.letters().collect();
        assert_eq!(strategy.propose(&pattern("**"), &everything), None);
    }
}
