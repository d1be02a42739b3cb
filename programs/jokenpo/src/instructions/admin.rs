//! Admin instructions

use anchor_lang::prelude::*;
use jokenpo_logic::{AdminConfig, JoKenPo};
use crate::state::Arena;
use crate::error::JoKenPoError;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeParams {
    pub bid: Option<u64>,
    pub commission: Option<u8>,
}

/// Create the arena; the signer becomes its permanent owner
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = Arena::space(0),
        seeds = [b"arena"],
        bump
    )]
    pub arena: Account<'info, Arena>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let InitializeParams { bid, commission } = params;

    let defaults = AdminConfig::default();
    let config = AdminConfig {
        bid: bid.unwrap_or(defaults.bid),
        commission: commission.unwrap_or(defaults.commission),
    };
    let owner = ctx.accounts.owner.key();
    let game = JoKenPo::with_config(owner, config).map_err(JoKenPoError::from)?;

    let arena = &mut ctx.accounts.arena;
    arena.owner = owner;
    arena.bump = ctx.bumps.arena;
    arena.store(&game);

    msg!(
        "Arena initialized by {}, bid = {} lamports, commission = {}%",
        arena.owner,
        arena.bid,
        arena.commission
    );
    Ok(())
}

/// Change bid or commission (owner only, between matches)
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"arena"],
        bump = arena.bump,
    )]
    pub arena: Account<'info, Arena>,

    pub caller: Signer<'info>,
}

pub fn set_bid(ctx: Context<UpdateConfig>, bid: u64) -> Result<()> {
    let arena = &mut ctx.accounts.arena;
    let mut game = arena.to_game()?;

    game.set_bid(&ctx.accounts.caller.key(), bid)
        .map_err(JoKenPoError::from)?;
    arena.store(&game);

    msg!("Bid set to {} lamports", bid);
    Ok(())
}

pub fn set_commission(ctx: Context<UpdateConfig>, commission: u8) -> Result<()> {
    let arena = &mut ctx.accounts.arena;
    let mut game = arena.to_game()?;

    game.set_commission(&ctx.accounts.caller.key(), commission)
        .map_err(JoKenPoError::from)?;
    arena.store(&game);

    msg!("Commission set to {}%", commission);
    Ok(())
}
