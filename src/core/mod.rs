//! Core domain types for hangman puzzles
//!
//! This module contains the fundamental domain types: the alphabet, normalized
//! words, and revealed patterns. Everything here is pure and has no I/O.

mod alphabet;
mod pattern;
mod word;

pub use alphabet::{Alphabet, LetterClass};
pub use pattern::{DEFAULT_WILDCARD, Pattern, PatternError};
pub use word::{Word, WordError, normalize};
