//! holdem-engine: a no-limit Texas Hold'em engine
//!
//! Goals:
//! - Deterministic, fast hand evaluation with a total order over hands
//! - A full betting state machine: blinds, min-raise tracking, side pots,
//!   odd-chip splitting, chip conservation
//! - Small, well-documented public API; no panics for invalid input; use
//!   `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_engine::evaluator::{evaluate_holdem, Category};
//! use holdem_engine::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## Playing a hand
//! ```
//! use holdem_engine::game::{HandState, SeatConfig};
//! use holdem_engine::round::Action;
//!
//! let players = vec![
//!     SeatConfig::new("alice", 200),
//!     SeatConfig::new("bob", 200),
//!     SeatConfig::new("carol", 200),
//! ];
//! let mut hand = HandState::start_seeded(&players, 0, 5, 10, 42).unwrap();
//! while let Some(seat) = hand.to_act() {
//!     hand.apply(seat, Action::Fold).unwrap();
//! }
//! let payouts = hand.settle().unwrap();
//! assert_eq!(payouts.iter().map(|p| p.amount).sum::<u64>(), 15);
//! ```
//!
//! ## Demo
//! Watch random agents play a few hands with:
//! ```sh
//! cargo run --bin holdem
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod pot;
pub mod room;
pub mod round;
pub mod seat;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
