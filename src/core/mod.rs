//! Core value types: choices, outcomes, match state, RNG.
//!
//! Everything here is a plain value with no behavior beyond pure
//! transitions; the `engine` module wires these into the playable API.

pub mod choice;
pub mod rng;
pub mod state;

pub use choice::{resolve, Choice, Outcome};
pub use rng::{MatchRng, MatchRngState};
pub use state::{MatchResult, MatchState, RoundRecord, Score, DEFAULT_BEST_OF};
