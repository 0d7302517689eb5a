//! Hangman Solver
//!
//! Batch hangman solver: proposes letters from lexicon frequencies, falling back
//! to a fixed linguistic ordering, until each word is revealed or nothing is left
//! to propose.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{Alphabet, Pattern, Word};
//! use hangman_solver::lexicon::Lexicon;
//! use hangman_solver::solver::{LexiconStrategy, Puzzle, Solver};
//!
//! let alphabet = Alphabet::romanian();
//! let lexicon = Lexicon::from_strs(&["casa", "masa", "sare"]);
//! let solver = Solver::new(LexiconStrategy::new(&lexicon, &alphabet));
//!
//! let puzzle = Puzzle::new(
//!     "g1",
//!     Pattern::parse("*a*a", '*').unwrap(),
//!     Word::new("masa").unwrap(),
//! );
//! let outcome = solver.solve(&puzzle);
//! assert!(outcome.is_solved());
//! println!("Guesses: {}", outcome.guess_sequence(" "));
//! ```

// Core domain types
pub mod core;

// Letter selection and the game loop
pub mod solver;

// Reference word list
pub mod lexicon;

// CSV puzzle input and outcome output
pub mod table;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
