//! Main hangman solver interface

use super::game::{GameStatus, GuessStep, Outcome, Puzzle};
use super::strategy::Strategy;
use super::TriedLetters;
use log::{debug, warn};

/// Main hangman solver
///
/// Drives one puzzle at a time to completion using a given strategy. The solver
/// holds no per-game state, so one instance can serve many games at once.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given letter strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Play one puzzle until it is solved or no letter can be proposed
    ///
    /// Letters visible in the starting pattern count as tried from the start, so
    /// they are never guessed. Every iteration adds one letter to the tried set,
    /// which bounds the number of guesses by the number of distinct letters.
    pub fn solve(&self, puzzle: &Puzzle) -> Outcome {
        let target = &puzzle.target;
        let mut pattern = puzzle.pattern.clone();
        let mut tried: TriedLetters = pattern.known_letters();
        let mut steps = Vec::new();

        let status = loop {
            if pattern.is_solved_by(target) {
                break GameStatus::Solved;
            }

            let Some(proposal) = self.strategy.propose(&pattern, &tried) else {
                break GameStatus::Stalled;
            };

            if !tried.insert(proposal.letter) {
                warn!(
                    "{}: strategy repeated letter '{}', stopping",
                    puzzle.id, proposal.letter
                );
                break GameStatus::Stalled;
            }

            let revealed = pattern.reveal(target, proposal.letter);
            steps.push(GuessStep {
                letter: proposal.letter,
                source: proposal.source,
                revealed,
                pattern_after: pattern.clone(),
            });
        };

        debug!(
            "{}: {} after {} guesses ({pattern})",
            puzzle.id,
            status.label(),
            steps.len()
        );

        Outcome {
            id: puzzle.id.clone(),
            steps,
            final_pattern: pattern,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Pattern, Word};
    use crate::lexicon::Lexicon;
    use crate::solver::{LexiconStrategy, Proposal, Source, StrategyType};

    fn puzzle(pattern: &str, target: &str) -> Puzzle {
        Puzzle::new(
            "t1",
            Pattern::parse(pattern, '*').unwrap(),
            Word::new(target).unwrap(),
        )
    }

    fn replay(initial: &Pattern, target: &Word, letters: &[char]) -> Pattern {
        let mut pattern = initial.clone();
        for &letter in letters {
            pattern.reveal(target, letter);
        }
        pattern
    }

    fn sequence(outcome: &Outcome) -> String {
        outcome.guesses().into_iter().collect()
    }

    #[test]
    fn heuristic_only_game_follows_ranking() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::empty();
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("*at", "cat"));

        assert_eq!(outcome.status, GameStatus::Solved);
        assert_eq!(sequence(&outcome), "eiouăâîrnlsc");
        assert_eq!(outcome.guess_count(), 12);
        assert_eq!(outcome.final_pattern.to_string(), "cat");
        assert_eq!(outcome.guess_sequence(" "), "e i o u ă â î r n l s c");
        assert!(outcome.steps.iter().all(|s| s.source == Source::Heuristic));
        assert!(outcome.steps.last().unwrap().is_hit());
    }

    #[test]
    fn lexicon_game_picks_frequent_letters() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["cana", "masa", "sare", "rama"]);
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("*a*a", "masa"));

        // Candidates cana, masa, rama: 'c' 'n' 'm' 's' 'r' 'm' -> 'm' wins
        assert_eq!(outcome.steps[0].letter, 'm');
        assert_eq!(outcome.steps[0].source, Source::Lexicon { candidates: 3 });
        assert_eq!(outcome.steps[0].pattern_after.to_string(), "ma*a");
        // Only masa is left; its last unknown letter is 's'
        assert_eq!(outcome.steps[1].letter, 's');
        assert_eq!(outcome.status, GameStatus::Solved);
        assert_eq!(outcome.guess_count(), 2);
    }

    #[test]
    fn lexicon_first_suggestion_for_partial_pattern() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa", "masa", "sare"]);
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("*a**", "casa"));
        assert_eq!(&outcome.guesses()[..2], &['s', 'c']);
        assert_eq!(outcome.steps[1].pattern_after.to_string(), "cas*");
    }

    #[test]
    fn partially_revealed_letter_stalls() {
        // 'a' is visible at one cell, so it counts as tried and the hidden 'a'
        // is never revealed
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["casa", "masa", "sare"]);
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("*a**", "casa"));
        assert_eq!(outcome.status, GameStatus::Stalled);
        assert_eq!(outcome.final_pattern.to_string(), "cas*");
        assert_eq!(outcome.guess_count(), alphabet.len() - 1);
    }

    #[test]
    fn already_solved_takes_no_guesses() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["cub"]);
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("cub", "cub"));
        assert_eq!(outcome.status, GameStatus::Solved);
        assert_eq!(outcome.guess_count(), 0);
        assert_eq!(outcome.guess_sequence(" "), "");
        assert_eq!(outcome.final_pattern.to_string(), "cub");
    }

    #[test]
    fn target_holding_wildcard_character_is_already_solved() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::empty();
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("a*b", "a*b"));
        assert_eq!(outcome.status, GameStatus::Solved);
        assert_eq!(outcome.guess_count(), 0);

        let outcome = solver.solve(&puzzle("**b", "a*b"));
        assert_eq!(outcome.status, GameStatus::Solved);
        assert_eq!(outcome.guesses(), ['e', 'a']);
    }

    #[test]
    fn letter_outside_alphabet_stalls_after_exhausting_alphabet() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::empty();
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        let outcome = solver.solve(&puzzle("ab*", "ab9"));
        assert_eq!(outcome.status, GameStatus::Stalled);
        assert_eq!(outcome.guess_count(), alphabet.len() - 2);
        assert_eq!(outcome.final_pattern.to_string(), "ab*");
        assert!(outcome.steps.iter().all(|s| !s.is_hit()));
    }

    #[test]
    fn guesses_are_unique_and_bounded() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["pădure", "pădurar", "mare", "carte"]);
        let solver = Solver::new(StrategyType::from_name("lexicon", &lexicon, &alphabet));

        for (pattern, target) in [("p*****", "pădure"), ("******", "zăpadă"), ("*a**", "mare")] {
            let outcome = solver.solve(&puzzle(pattern, target));
            let mut seen = outcome.guesses();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), total, "repeated guess for {target}");
            assert!(total <= alphabet.len());
        }
    }

    #[test]
    fn replaying_guesses_reproduces_final_pattern() {
        let alphabet = Alphabet::romanian();
        let lexicon = Lexicon::from_strs(&["munte", "mare", "masă", "carte", "curte"]);
        let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));

        for (pattern, target) in [("*u***", "munte"), ("c****", "curte"), ("****", "masă")] {
            let p = puzzle(pattern, target);
            let outcome = solver.solve(&p);
            assert!(outcome.is_solved(), "{target} not solved");
            assert_eq!(
                replay(&p.pattern, &p.target, &outcome.guesses()),
                outcome.final_pattern
            );
        }
    }

    #[test]
    fn reveal_only_touches_matching_wildcards() {
        let p = puzzle("m*s*", "masă");
        let after = replay(&p.pattern, &p.target, &['ă']);
        for (i, (before, now)) in p.pattern.cells().iter().zip(after.cells()).enumerate() {
            if before.is_some() || p.target.chars()[i] != 'ă' {
                assert_eq!(before, now);
            }
        }
        assert_eq!(after.to_string(), "m*să");
    }

    struct Repeating;

    impl Strategy for Repeating {
        fn propose(&self, _: &Pattern, _: &TriedLetters) -> Option<Proposal> {
            Some(Proposal::heuristic('x'))
        }
    }

    #[test]
    fn repeated_proposal_stops_the_game() {
        let outcome = Solver::new(Repeating).solve(&puzzle("**", "ab"));
        assert_eq!(outcome.status, GameStatus::Stalled);
        assert_eq!(outcome.guesses(), vec!['x']);
    }
}
