//! Connect Four move selection by Monte Carlo methods.
//!
//! Three strategies pick a column for the player on move: uniform random choice
//! with a one-ply win check (UR), flat Monte Carlo rollouts scored by win ratio
//! (PMCGS), and UCB1 scoring over a per-decision search tree (UCT). All random
//! numbers come from a generator owned by the engine, so a seeded generator
//! makes every decision reproducible.
//!
//! # Example
//!
//! ```rust
//! use connect_four_mcts::board::{Board, Player};
//! use connect_four_mcts::random::CustomNumberGenerator;
//! use connect_four_mcts::report::{Report, Verbosity};
//! use connect_four_mcts::search::{SearchEngine, Strategy};
//!
//! // Yellow to move on an empty board
//! let board = Board::empty();
//!
//! // Create and configure a search engine using the builder
//! let mut engine = SearchEngine::builder(board, Player::Yellow)
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .with_simulations(50)
//!     .build();
//!
//! // Score every legal column and pick the best one
//! let decision = engine.select_move(Strategy::Pmcgs).unwrap();
//! assert!(decision.column.is_some());
//!
//! print!("{}", Report::new(&decision, Verbosity::Verbose));
//! ```

/// The Connect Four grid, players, and win/draw detection.
pub mod board;
/// Simulation count and rollout cap.
pub mod config;
/// The crate error type.
pub mod error;
/// Parsing of move requests from position text.
pub mod position;
/// Traits and implementations for random number generation.
pub mod random;
/// Move selection from column statistics and report formatting.
pub mod report;
/// Random playouts to a terminal state.
pub mod rollout;
/// The search engine and its three strategies.
pub mod search;
/// The `SearchNode` stored in the UCT tree.
pub mod search_node;
/// The per-decision UCT tree and the UCB1 formula.
pub mod search_tree;

pub use error::{Error, Result};
