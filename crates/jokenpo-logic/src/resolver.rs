//! Match resolution and result descriptions

use core::fmt;
use serde::{Deserialize, Serialize};
use crate::moves::Move;

/// One of the two player positions at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }
}

/// Outcome of a resolved match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player1Wins,
    Player2Wins,
    Tie,
}

impl Outcome {
    /// Seat of the winner, `None` on a tie
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Player1Wins => Some(Seat::One),
            Outcome::Player2Wins => Some(Seat::Two),
            Outcome::Tie => None,
        }
    }

    /// The same outcome seen with the seats swapped
    pub fn swapped(self) -> Outcome {
        match self {
            Outcome::Player1Wins => Outcome::Player2Wins,
            Outcome::Player2Wins => Outcome::Player1Wins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Resolve a pair of moves
///
/// Both moves are expected to be playable; `Move::None` never beats anything,
/// so a pairing involving it resolves as a tie.
pub fn resolve(move1: Move, move2: Move) -> Outcome {
    if move1.beats(move2) {
        Outcome::Player1Wins
    } else if move2.beats(move1) {
        Outcome::Player2Wins
    } else {
        Outcome::Tie
    }
}

/// Human-facing state of the table: what `get_result` reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Nothing played since creation
    #[default]
    Idle,
    /// Player 1 is seated and waiting for an opponent
    Waiting,
    /// Last match was decisive
    Won { winner: Move, loser: Move, seat: Seat },
    /// Last match was a draw
    Draw { choice: Move },
}

impl Verdict {
    /// Verdict of a completed match
    pub fn of_match(move1: Move, move2: Move) -> Verdict {
        match resolve(move1, move2) {
            Outcome::Player1Wins => Verdict::Won { winner: move1, loser: move2, seat: Seat::One },
            Outcome::Player2Wins => Verdict::Won { winner: move2, loser: move1, seat: Seat::Two },
            Outcome::Tie => Verdict::Draw { choice: move1 },
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Verdict::Won { seat: Seat::One, .. } => Some(Outcome::Player1Wins),
            Verdict::Won { seat: Seat::Two, .. } => Some(Outcome::Player2Wins),
            Verdict::Draw { .. } => Some(Outcome::Tie),
            Verdict::Idle | Verdict::Waiting => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Idle => write!(f, "Waiting for player 1"),
            Verdict::Waiting => write!(f, "Player 1 submitted their option. Waiting for player 2"),
            Verdict::Won { winner, loser, seat } => write!(
                f,
                "{} {} {}. Player {} won",
                winner.name(),
                winner.verb(),
                loser.name().to_lowercase(),
                seat.number()
            ),
            Verdict::Draw { .. } => write!(f, "Draw game. Both bids were refunded"),
        }
    }
}

/// Describe the result of a pair of moves
pub fn describe(move1: Move, move2: Move) -> String {
    Verdict::of_match(move1, move2).to_string()
}
