//! Lamport movements backing the engine's escrow

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use jokenpo_logic::{Amount, Ledger, TransferError};

/// Escrow held in the arena account's own lamports
///
/// Deposits come from the signing player through the system program; payouts
/// are debited straight from the program-owned arena. A failed call aborts the
/// whole transaction, so there is nothing to roll back here.
pub struct LamportLedger<'a, 'info> {
    pub arena: &'a AccountInfo<'info>,
    pub player: &'a AccountInfo<'info>,
    pub opponent: &'a AccountInfo<'info>,
    pub owner: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> LamportLedger<'a, 'info> {
    fn recipient(&self, wallet: &Pubkey) -> Option<&'a AccountInfo<'info>> {
        [self.owner, self.player, self.opponent]
            .into_iter()
            .find(|info| info.key == wallet)
    }
}

impl<'a, 'info> Ledger<Pubkey> for LamportLedger<'a, 'info> {
    type Checkpoint = ();

    fn deposit(&mut self, from: &Pubkey, amount: Amount) -> std::result::Result<(), TransferError> {
        if self.player.key != from {
            return Err(TransferError::Rejected { wallet: from.to_string() });
        }
        let available = self.player.lamports();
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                wallet: from.to_string(),
                available,
                needed: amount,
            });
        }

        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                system_program::Transfer {
                    from: self.player.clone(),
                    to: self.arena.clone(),
                },
            ),
            amount,
        )
        .map_err(|_| TransferError::Rejected { wallet: from.to_string() })
    }

    fn release(&mut self, to: &Pubkey, amount: Amount) -> std::result::Result<(), TransferError> {
        let recipient = self
            .recipient(to)
            .ok_or_else(|| TransferError::Rejected { wallet: to.to_string() })?;

        let available = self.arena.lamports();
        let shortfall = TransferError::EscrowShortfall { available, needed: amount };
        let debited = available.checked_sub(amount).ok_or(shortfall.clone())?;
        let credited = recipient
            .lamports()
            .checked_add(amount)
            .ok_or_else(|| TransferError::Overflow { wallet: to.to_string() })?;

        **self.arena.try_borrow_mut_lamports().map_err(|_| shortfall)? = debited;
        **recipient
            .try_borrow_mut_lamports()
            .map_err(|_| TransferError::Rejected { wallet: to.to_string() })? = credited;
        Ok(())
    }

    fn checkpoint(&self) -> Self::Checkpoint {}

    fn rollback(&mut self, _checkpoint: Self::Checkpoint) {}
}
