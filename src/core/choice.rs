//! Choice tokens, round outcomes, and the resolution rule.
//!
//! The three tokens form a closed cycle:
//!
//! | player  | beats   | loses to |
//! |---------|---------|----------|
//! | Monster | Trap    | Spell    |
//! | Trap    | Spell   | Monster  |
//! | Spell   | Monster | Trap     |
//!
//! `resolve` is total over all 9 ordered pairs and anti-symmetric:
//! swapping the sides inverts Win/Lose and fixes Draw.

use serde::{Deserialize, Serialize};

/// One of the three playable tokens.
///
/// The set is closed: there is no "invalid choice" value, so the
/// resolution rule is total by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Monster,
    Trap,
    Spell,
}

impl Choice {
    /// All choices in their fixed cyclic ordering.
    pub const ALL: [Choice; 3] = [Choice::Monster, Choice::Trap, Choice::Spell];

    /// Position in the fixed ordering `[Monster, Trap, Spell]`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Choice::Monster => 0,
            Choice::Trap => 1,
            Choice::Spell => 2,
        }
    }

    /// Check if this choice beats the other.
    ///
    /// These three pairings are the entire rule set.
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Monster, Choice::Trap)
                | (Choice::Trap, Choice::Spell)
                | (Choice::Spell, Choice::Monster)
        )
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Choice::Monster => "Monster",
            Choice::Trap => "Trap",
            Choice::Spell => "Spell",
        };
        write!(f, "{}", name)
    }
}

/// Result of one round, always from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Swap perspectives: Win and Lose exchange, Draw is fixed.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        };
        write!(f, "{}", name)
    }
}

/// Resolve one round: the player's choice against the opponent's.
#[must_use]
pub fn resolve(player: Choice, opponent: Choice) -> Outcome {
    if player == opponent {
        Outcome::Draw
    } else if player.beats(opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
