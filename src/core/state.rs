//! Match state: score, round history, and the termination predicate.
//!
//! ## MatchState
//!
//! The aggregate root for one match:
//! - Running score (player wins, opponent wins, draws)
//! - Configured match length (`best_of`)
//! - Round counter and full round history
//!
//! State is a value: every transition builds a new `MatchState` and
//! leaves the prior snapshot untouched. The history uses an `im`
//! persistent `Vector`, so snapshots share structure and cloning is
//! O(1) regardless of match length.
//!
//! Whether the match has concluded is never stored; it is recomputed
//! from score and `best_of` on demand, so there is no second source of
//! truth to drift.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::choice::{Choice, Outcome};

/// Match length used when none is configured.
pub const DEFAULT_BEST_OF: u32 = 5;

/// Running score, one counter per outcome kind.
///
/// Invariant: the counters sum to the number of resolved rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl Score {
    /// Total rounds this score accounts for.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }

    /// Bump the counter matching an outcome, returning the new score.
    #[must_use]
    pub const fn bump(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self {
                player_wins: self.player_wins + 1,
                ..self
            },
            Outcome::Lose => Self {
                opponent_wins: self.opponent_wins + 1,
                ..self
            },
            Outcome::Draw => Self {
                draws: self.draws + 1,
                ..self
            },
        }
    }
}

/// One resolved round. Created once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, 1-based.
    pub round: u32,
    /// What the player threw.
    pub player: Choice,
    /// What the opponent threw.
    pub opponent: Choice,
    /// Result from the player's perspective.
    pub outcome: Outcome,
}

/// Final result of a concluded match.
///
/// `Drawn` covers the equal-score edge: unreachable with an odd
/// `best_of` played to conclusion, but changing `best_of` mid-match can
/// put both sides at or past the threshold with level scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    PlayerWins,
    OpponentWins,
    Drawn,
}

/// Full snapshot of one match at a point in time.
///
/// Invariants:
/// - `round == history.len()`
/// - `score.total() == round`
/// - `last` mirrors the most recent history entry, `None` before the
///   first round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Running score.
    pub score: Score,

    /// Configured match length; first side to `ceil(best_of / 2)` wins.
    pub best_of: u32,

    /// Rounds resolved so far.
    pub round: u32,

    /// Most recently resolved round.
    pub last: Option<RoundRecord>,

    /// Every resolved round, in order.
    pub history: Vector<RoundRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(DEFAULT_BEST_OF)
    }
}

impl MatchState {
    /// Create an initial state for a match of the given length.
    #[must_use]
    pub fn new(best_of: u32) -> Self {
        Self {
            score: Score::default(),
            best_of,
            round: 0,
            last: None,
            history: Vector::new(),
        }
    }

    /// Wins needed to take the match: `ceil(best_of / 2)`.
    ///
    /// Sane for any `best_of >= 1`, odd or not; oddness is a caller
    /// concern.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.best_of.div_ceil(2)
    }

    /// Whether either side has reached the winning threshold.
    ///
    /// Derived every time from score and `best_of`; there is no stored
    /// concluded flag.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.score.player_wins >= self.threshold()
            || self.score.opponent_wins >= self.threshold()
    }

    /// Final result, or `None` while the match is in progress.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        use std::cmp::Ordering;

        if !self.is_concluded() {
            return None;
        }

        match self.score.player_wins.cmp(&self.score.opponent_wins) {
            Ordering::Greater => Some(MatchResult::PlayerWins),
            Ordering::Less => Some(MatchResult::OpponentWins),
            Ordering::Equal => Some(MatchResult::Drawn),
        }
    }

    /// Reducer: fold one resolved round into a new state.
    ///
    /// The receiver is untouched; the returned state shares history
    /// structure with it.
    #[must_use]
    pub fn with_round(&self, player: Choice, opponent: Choice, outcome: Outcome) -> Self {
        let record = RoundRecord {
            round: self.round + 1,
            player,
            opponent,
            outcome,
        };

        let mut history = self.history.clone();
        history.push_back(record);

        Self {
            score: self.score.bump(outcome),
            best_of: self.best_of,
            round: self.round + 1,
            last: Some(record),
            history,
        }
    }

    /// Fresh state for a new match, preserving only `best_of`.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.best_of)
    }

    /// Same match, new length. Score and history keep their values;
    /// callers wanting a clean match at the new length follow up with
    /// [`MatchState::reset`].
    #[must_use]
    pub fn with_best_of(&self, best_of: u32) -> Self {
        Self {
            best_of,
            ..self.clone()
        }
    }
}
