//! Move definitions

use serde::{Deserialize, Serialize};

/// A hand shape a player can submit
///
/// `None` is the "not yet played" sentinel and is never accepted by `play`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[default]
    None,
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Moves a player may actually submit
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Map a wire index (0–3) to the corresponding Move variant.
    pub fn from_index(index: u8) -> Option<Move> {
        match index {
            0 => Some(Move::None),
            1 => Some(Move::Rock),
            2 => Some(Move::Paper),
            3 => Some(Move::Scissors),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_playable(self) -> bool {
        self != Move::None
    }

    /// True if this shape beats `other` under the cyclic rule
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Verb used when this shape wins
    pub fn verb(self) -> &'static str {
        match self {
            Move::Rock => "breaks",
            Move::Paper => "wraps",
            Move::Scissors => "cuts",
            Move::None => "",
        }
    }

    /// Capitalized shape name
    pub fn name(self) -> &'static str {
        match self {
            Move::None => "None",
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}
