//! # yujokenpo
//!
//! A deterministic match engine for the monster / trap / spell duel
//! game: a cyclic-dominance variant of rock-paper-scissors played as a
//! best-of-N match against a uniformly random opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Every operation maps (state, input) to a
//!    new immutable state. Prior snapshots are never mutated; history
//!    is a persistent `im` vector, so snapshots share structure.
//!
//! 2. **Derived conclusion**: Whether the match is over is recomputed
//!    from score and `best_of` on every query. No stored flag, no dual
//!    source of truth.
//!
//! 3. **Deterministic randomness**: The opponent's draw is the only
//!    nondeterminism, and it comes from a seedable ChaCha8 RNG. Same
//!    seed, same match.
//!
//! 4. **Engine, not UI**: The crate has no rendering, input handling,
//!    or bootstrap surface. A presentation adapter calls an operation,
//!    reads the returned snapshot, and re-renders.
//!
//! ## Example
//!
//! ```
//! use yujokenpo::{Choice, GameEngine, Transition};
//!
//! let mut engine = GameEngine::builder().best_of(5).seed(42).build();
//!
//! match engine.play_round(Choice::Monster) {
//!     Transition::Applied { state, concluded } => {
//!         let last = state.last.unwrap();
//!         println!("round {}: {} vs {} -> {}", last.round, last.player, last.opponent, last.outcome);
//!         if concluded {
//!             println!("match over: {:?}", state.result());
//!         }
//!     }
//!     Transition::Rejected(reason) => {
//!         println!("no round played: {:?}", reason);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Choice tokens, the resolution rule, match state, RNG
//! - `engine`: The `GameEngine` aggregate and its builder

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    resolve, Choice, MatchResult, MatchRng, MatchRngState, MatchState, Outcome, RoundRecord,
    Score, DEFAULT_BEST_OF,
};

pub use crate::engine::{EngineBuilder, GameEngine, RejectReason, Transition};
