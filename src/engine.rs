//! The match engine: owns state and the opponent's random draws.
//!
//! One `GameEngine` instance per match; callers hold and pass it
//! explicitly, there is no process-wide singleton. A presentation
//! adapter drives it in a pull model: call an operation, read the
//! returned snapshot, re-render. The engine never reaches back into the
//! adapter.
//!
//! ## Transition results
//!
//! `play_round` returns a tagged [`Transition`] instead of silently
//! ignoring bad calls: a round played after the match has concluded
//! comes back as `Rejected` with the state untouched. Adapters that
//! want ignore-and-continue semantics just drop the `Rejected` arm.
//!
//! ## Changing match length
//!
//! `set_best_of` replaces the configured length without clearing the
//! score or history. Starting a clean match at the new length is a
//! two-step protocol, not one atomic operation:
//!
//! ```
//! use yujokenpo::GameEngine;
//!
//! let mut engine = GameEngine::new(5, 42);
//! engine.set_best_of(3);
//! engine.reset();
//! assert_eq!(engine.state().best_of, 3);
//! assert_eq!(engine.state().round, 0);
//! ```

use crate::core::{resolve, Choice, MatchResult, MatchRng, MatchState, DEFAULT_BEST_OF};

/// Result of attempting a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The round was resolved and folded into the state.
    Applied {
        /// Snapshot after the round.
        state: MatchState,
        /// Whether this round concluded the match.
        concluded: bool,
    },
    /// Nothing happened; the state is unchanged.
    Rejected(RejectReason),
}

impl Transition {
    /// Whether the round was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }

    /// The post-round snapshot, if the round was applied.
    #[must_use]
    pub fn state(&self) -> Option<&MatchState> {
        match self {
            Transition::Applied { state, .. } => Some(state),
            Transition::Rejected(_) => None,
        }
    }
}

/// Why a round was not played.
///
/// An out-of-set choice is the other rejection the original design
/// handles, but `Choice` is a closed enum, so that case cannot be
/// expressed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The match already has a winner; reset to play again.
    MatchConcluded,
}

/// A single best-of-N match against a uniformly random opponent.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: MatchState,
    rng: MatchRng,
}

impl GameEngine {
    /// Create an engine for a match of the given length.
    ///
    /// The seed fixes the opponent's entire draw sequence.
    #[must_use]
    pub fn new(best_of: u32, seed: u64) -> Self {
        Self {
            state: MatchState::new(best_of),
            rng: MatchRng::new(seed),
        }
    }

    /// Start building an engine with defaults.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Whether the match has concluded.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.state.is_concluded()
    }

    /// Final result, or `None` while the match is in progress.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.state.result()
    }

    /// Play one round against the random opponent.
    ///
    /// Samples the opponent's choice uniformly, resolves the outcome,
    /// and folds the round into a new state. Rejected once the match
    /// has concluded, without consuming a draw.
    pub fn play_round(&mut self, player: Choice) -> Transition {
        if self.state.is_concluded() {
            return Transition::Rejected(RejectReason::MatchConcluded);
        }

        let opponent = self.rng.draw_choice();
        self.play_round_against(player, opponent)
    }

    /// Play one round with the opponent's choice supplied by the caller.
    ///
    /// Same transition logic as [`GameEngine::play_round`] minus the
    /// random draw. This is the deterministic seam: tests and replays
    /// feed a scripted opponent through it.
    pub fn play_round_against(&mut self, player: Choice, opponent: Choice) -> Transition {
        if self.state.is_concluded() {
            return Transition::Rejected(RejectReason::MatchConcluded);
        }

        let outcome = resolve(player, opponent);
        self.state = self.state.with_round(player, opponent, outcome);

        Transition::Applied {
            state: self.state.clone(),
            concluded: self.state.is_concluded(),
        }
    }

    /// Start over, preserving only the configured match length.
    pub fn reset(&mut self) -> &MatchState {
        self.state = self.state.reset();
        &self.state
    }

    /// Replace the configured match length.
    ///
    /// Score and history are untouched; follow with
    /// [`GameEngine::reset`] to start a clean match at the new length.
    /// Oddness is not enforced here (the threshold stays sane for any
    /// `n >= 1`); validate upstream if even lengths are unwanted.
    pub fn set_best_of(&mut self, best_of: u32) -> &MatchState {
        self.state = self.state.with_best_of(best_of);
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

/// Builder for creating a `GameEngine`.
#[derive(Clone, Debug)]
pub struct EngineBuilder {
    best_of: u32,
    seed: u64,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            best_of: DEFAULT_BEST_OF,
            seed: 0,
        }
    }
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match length; first side to `ceil(best_of / 2)` wins.
    #[must_use]
    pub fn best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Seed for the opponent's draw sequence.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the engine with its initial state.
    #[must_use]
    pub fn build(self) -> GameEngine {
        GameEngine::new(self.best_of, self.seed)
    }
}
