//! Player instructions

use anchor_lang::prelude::*;
use jokenpo_logic::Move;
use crate::state::Arena;
use crate::error::JoKenPoError;
use crate::ledger::LamportLedger;

/// Submit a move with the current bid
#[derive(Accounts)]
pub struct Play<'info> {
    #[account(
        mut,
        seeds = [b"arena"],
        bump = arena.bump,
        realloc = Arena::space(arena.leaderboard.len() + 1),
        realloc::payer = player,
        realloc::zero = false
    )]
    pub arena: Account<'info, Arena>,

    #[account(mut)]
    pub player: Signer<'info>,

    /// CHECK: must be the seated player 1 when a seat is taken (checked in the handler);
    /// may be any writable account while the table is empty
    #[account(mut)]
    pub opponent: UncheckedAccount<'info>,

    /// CHECK: commission recipient, pinned to the stored owner
    #[account(
        mut,
        address = arena.owner @ JoKenPoError::Unauthorized
    )]
    pub owner: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn play(ctx: Context<Play>, choice: u8, amount: u64) -> Result<()> {
    let choice = Move::from_index(choice).ok_or(JoKenPoError::InvalidMove)?;

    let arena_info = ctx.accounts.arena.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();
    let opponent_info = ctx.accounts.opponent.to_account_info();
    let owner_info = ctx.accounts.owner.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    let arena = &mut ctx.accounts.arena;
    if arena.player1 != Pubkey::default() {
        require_keys_eq!(opponent_info.key(), arena.player1, JoKenPoError::InvalidOpponent);
    }

    let mut game = arena.to_game()?;
    let mut ledger = LamportLedger {
        arena: &arena_info,
        player: &player_info,
        opponent: &opponent_info,
        owner: &owner_info,
        system_program: &system_info,
    };

    let verdict = game
        .play(player_info.key, choice, amount, &mut ledger)
        .map_err(JoKenPoError::from)?;
    arena.store(&game);

    msg!("{} played for {} lamports: {}", player_info.key(), amount, verdict);
    Ok(())
}
