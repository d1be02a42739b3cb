//! Error types

use thiserror::Error;

/// Error classes every rejected call falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Permission,
    TurnOrder,
    InvalidBid,
    Conflict,
    InvalidInput,
    Payout,
    Internal,
}

/// Admin-controlled setting named in conflict errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Bid,
    Commission,
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Resource::Bid => write!(f, "bid"),
            Resource::Commission => write!(f, "commission"),
        }
    }
}

/// A ledger movement that could not be carried out
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TransferError {
    #[error("{wallet} cannot receive funds")]
    Rejected { wallet: String },

    #[error("{wallet} holds {available}, needs {needed}")]
    InsufficientFunds { wallet: String, available: u64, needed: u64 },

    #[error("crediting {wallet} overflows")]
    Overflow { wallet: String },

    #[error("escrow holds {available}, needs {needed}")]
    EscrowShortfall { available: u64, needed: u64 },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("The owner cannot play")]
    OwnerCannotPlay,

    #[error("You do not have this permission")]
    Unauthorized,

    #[error("Invalid move")]
    InvalidMove,

    #[error("Invalid bid")]
    InvalidBid,

    #[error("Wait for the other player")]
    WaitForOpponent,

    #[error("You cannot change the {resource} with a game in progress")]
    GameInProgress { resource: Resource },

    #[error("Commission must be between 0 and 100")]
    InvalidCommission,

    #[error("Bid must be greater than zero")]
    ZeroBid,

    #[error("Payout failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Game state is unavailable")]
    Unavailable,

    #[error("Invalid config: {0}")]
    Config(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OwnerCannotPlay | GameError::Unauthorized => ErrorKind::Permission,
            GameError::WaitForOpponent => ErrorKind::TurnOrder,
            GameError::InvalidBid => ErrorKind::InvalidBid,
            GameError::GameInProgress { .. } => ErrorKind::Conflict,
            GameError::InvalidMove
            | GameError::InvalidCommission
            | GameError::ZeroBid
            | GameError::Config(_) => ErrorKind::InvalidInput,
            GameError::Transfer(_) => ErrorKind::Payout,
            GameError::Overflow | GameError::Unavailable => ErrorKind::Internal,
        }
    }
}
