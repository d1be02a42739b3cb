//! Custom error codes

use anchor_lang::prelude::*;
use jokenpo_logic::{GameError, Resource};

#[error_code]
pub enum JoKenPoError {
    #[msg("The owner cannot play")]
    OwnerCannotPlay = 6000,

    #[msg("You do not have this permission")]
    Unauthorized = 6001,

    #[msg("Invalid move")]
    InvalidMove = 6002,

    #[msg("Invalid bid")]
    InvalidBid = 6003,

    #[msg("Wait for the other player")]
    WaitForOpponent = 6004,

    #[msg("You cannot change the bid with a game in progress")]
    BidLocked = 6005,

    #[msg("You cannot change the commission with a game in progress")]
    CommissionLocked = 6006,

    #[msg("Commission must be between 0 and 100")]
    InvalidCommission = 6007,

    #[msg("Bid must be greater than zero")]
    ZeroBid = 6008,

    #[msg("Payout could not be transferred")]
    PayoutFailed = 6009,

    #[msg("Arithmetic overflow")]
    Overflow = 6010,

    #[msg("Arena account holds an invalid value")]
    CorruptState = 6011,

    #[msg("Opponent account does not match the seated player")]
    InvalidOpponent = 6012,
}

impl From<GameError> for JoKenPoError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::OwnerCannotPlay => JoKenPoError::OwnerCannotPlay,
            GameError::Unauthorized => JoKenPoError::Unauthorized,
            GameError::InvalidMove => JoKenPoError::InvalidMove,
            GameError::InvalidBid => JoKenPoError::InvalidBid,
            GameError::WaitForOpponent => JoKenPoError::WaitForOpponent,
            GameError::GameInProgress { resource: Resource::Bid } => JoKenPoError::BidLocked,
            GameError::GameInProgress { resource: Resource::Commission } => JoKenPoError::CommissionLocked,
            GameError::InvalidCommission => JoKenPoError::InvalidCommission,
            GameError::ZeroBid => JoKenPoError::ZeroBid,
            GameError::Transfer(_) => JoKenPoError::PayoutFailed,
            GameError::Overflow => JoKenPoError::Overflow,
            GameError::Unavailable | GameError::Config(_) => JoKenPoError::CorruptState,
        }
    }
}
