//! Read-only instructions; values are returned through the return data

use anchor_lang::prelude::*;
use crate::state::{Arena, LeaderEntry};
use crate::error::JoKenPoError;

#[derive(Accounts)]
pub struct ReadArena<'info> {
    #[account(
        seeds = [b"arena"],
        bump = arena.bump,
    )]
    pub arena: Account<'info, Arena>,
}

#[derive(Accounts)]
pub struct OwnerRead<'info> {
    #[account(
        seeds = [b"arena"],
        bump = arena.bump,
    )]
    pub arena: Account<'info, Arena>,

    pub caller: Signer<'info>,
}

pub fn get_bid(ctx: Context<ReadArena>) -> Result<u64> {
    Ok(ctx.accounts.arena.bid)
}

pub fn get_commission(ctx: Context<ReadArena>) -> Result<u8> {
    Ok(ctx.accounts.arena.commission)
}

pub fn get_result(ctx: Context<ReadArena>) -> Result<String> {
    Ok(ctx.accounts.arena.to_game()?.result())
}

pub fn get_leaderboard(ctx: Context<ReadArena>) -> Result<Vec<LeaderEntry>> {
    Ok(ctx.accounts.arena.leaderboard.clone())
}

pub fn get_owner(ctx: Context<ReadArena>) -> Result<Pubkey> {
    Ok(ctx.accounts.arena.owner)
}

/// Escrowed lamports of the unresolved match (owner only)
pub fn get_balance(ctx: Context<OwnerRead>) -> Result<u64> {
    let game = ctx.accounts.arena.to_game()?;
    let balance = game
        .balance(&ctx.accounts.caller.key())
        .map_err(JoKenPoError::from)?;
    Ok(balance)
}
