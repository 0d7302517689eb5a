//! Hangman solving algorithms
//!
//! Letter selection (lexicon frequencies with a heuristic fallback) and the
//! single-game solving loop.

pub mod candidates;
mod engine;
pub mod fallback;
pub mod game;
pub mod strategy;

pub use candidates::{
    CandidateSelector, LexiconSuggestion, TriedLetters, choose_letter, filter_candidates,
    suggest_from_lexicon,
};
pub use engine::Solver;
pub use fallback::{HeuristicFallback, PatternTraits};
pub use game::{GameStatus, GuessStep, Outcome, Puzzle};
pub use strategy::{
    HeuristicStrategy, LexiconStrategy, Proposal, Source, Strategy, StrategyType,
};
