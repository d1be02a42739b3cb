//! JoKenPo Logic
//!
//! Core game logic for escrowed two-player rock-paper-scissors.
//! This crate is compiled to:
//! - Native (for the on-chain program and off-chain hosts)
//! - WASM (for the frontend)

mod moves;
mod resolver;
mod leaderboard;
mod config;
mod escrow;
mod error;
mod game;
mod service;

#[cfg(feature = "wasm")]
mod wasm;

pub use moves::Move;
pub use resolver::{describe, resolve, Outcome, Seat, Verdict};
pub use leaderboard::{LeaderBoard, Player};
pub use config::{AdminConfig, Amount, DEFAULT_BID, DEFAULT_COMMISSION, MAX_COMMISSION, UNITS_PER_COIN};
pub use escrow::{commission_of, Ledger, MemoryCheckpoint, MemoryLedger, Reason, Settlement, Transfer};
pub use error::{ErrorKind, GameError, Resource, TransferError};
pub use game::{Hand, JoKenPo, Table, Wallet};
pub use service::SharedArcade;
