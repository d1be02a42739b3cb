//! JoKenPo - escrowed rock-paper-scissors
//!
//! A Solana program where two players stake the same bid, the winner takes
//! the pot minus the owner's commission, and winners are tallied on a
//! leaderboard. Game rules live in the `jokenpo-logic` crate.

use anchor_lang::prelude::*;

mod state;
mod instructions;
mod error;
mod ledger;

use instructions::*;
pub use state::{LastResult, LeaderEntry};

declare_id!("DNeX7wavjTSYsYDkrreqJ2xwZ6LKkEzme1XaVES8myj1");

#[program]
pub mod jokenpo {
    use super::*;

    /// Create the arena; the signer becomes the owner
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::admin::initialize(ctx, params)
    }

    /// Submit a move (1 = Rock, 2 = Paper, 3 = Scissors) with exactly the current bid
    pub fn play(ctx: Context<Play>, choice: u8, amount: u64) -> Result<()> {
        instructions::player::play(ctx, choice, amount)
    }

    /// Update the bid (owner only, no match in progress)
    pub fn set_bid(ctx: Context<UpdateConfig>, bid: u64) -> Result<()> {
        instructions::admin::set_bid(ctx, bid)
    }

    /// Update the commission percentage (owner only, no match in progress)
    pub fn set_commission(ctx: Context<UpdateConfig>, commission: u8) -> Result<()> {
        instructions::admin::set_commission(ctx, commission)
    }

    pub fn get_bid(ctx: Context<ReadArena>) -> Result<u64> {
        instructions::views::get_bid(ctx)
    }

    pub fn get_commission(ctx: Context<ReadArena>) -> Result<u8> {
        instructions::views::get_commission(ctx)
    }

    /// Description of the current or last match
    pub fn get_result(ctx: Context<ReadArena>) -> Result<String> {
        instructions::views::get_result(ctx)
    }

    pub fn get_leaderboard(ctx: Context<ReadArena>) -> Result<Vec<LeaderEntry>> {
        instructions::views::get_leaderboard(ctx)
    }

    pub fn get_owner(ctx: Context<ReadArena>) -> Result<Pubkey> {
        instructions::views::get_owner(ctx)
    }

    /// Escrowed balance of the unresolved match (owner only)
    pub fn get_balance(ctx: Context<OwnerRead>) -> Result<u64> {
        instructions::views::get_balance(ctx)
    }
}
