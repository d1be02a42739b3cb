//! Escrow accounting: deposits, commission split and payouts

use std::collections::{HashMap, HashSet};
use core::fmt;
use core::hash::Hash;
use serde::{Deserialize, Serialize};
use crate::config::Amount;
use crate::error::{GameError, TransferError};

/// Source of funds and destination of payouts
///
/// Implementations move value between wallets and the escrow that backs the
/// pot. `checkpoint`/`rollback` let the engine undo movements of a call that
/// fails half way; a host that already reverts failed calls as a whole may
/// implement them as no-ops.
pub trait Ledger<W> {
    type Checkpoint;

    /// Move `amount` from `from` into escrow
    fn deposit(&mut self, from: &W, amount: Amount) -> Result<(), TransferError>;

    /// Move `amount` out of escrow to `to`
    fn release(&mut self, to: &W, amount: Amount) -> Result<(), TransferError>;

    fn checkpoint(&self) -> Self::Checkpoint;

    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

/// Why a payout is made
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    Commission,
    Prize,
    Refund,
}

/// A single movement out of escrow
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer<W> {
    pub to: W,
    pub amount: Amount,
    pub reason: Reason,
}

/// Owner cut of a decisive pot; integer division truncates toward zero.
pub fn commission_of(pot: Amount, commission: u8) -> Result<Amount, GameError> {
    let cut = (pot as u128) * (commission as u128) / 100;
    Amount::try_from(cut).map_err(|_| GameError::Overflow)
}

/// Payouts that close a match, in the order they are made
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement<W> {
    /// Commission to the owner first, then the rest of the pot to the winner
    Win { commission: Transfer<W>, prize: Transfer<W> },
    /// Each bid goes back to whoever paid it, player 1 first
    Refund { first: Transfer<W>, second: Transfer<W> },
}

impl<W: Clone> Settlement<W> {
    pub fn win(owner: &W, winner: &W, pot: Amount, commission: u8) -> Result<Self, GameError> {
        let cut = commission_of(pot, commission)?;
        let prize = pot.checked_sub(cut).ok_or(GameError::Overflow)?;
        Ok(Settlement::Win {
            commission: Transfer { to: owner.clone(), amount: cut, reason: Reason::Commission },
            prize: Transfer { to: winner.clone(), amount: prize, reason: Reason::Prize },
        })
    }

    pub fn refund(player1: (&W, Amount), player2: (&W, Amount)) -> Self {
        Settlement::Refund {
            first: Transfer { to: player1.0.clone(), amount: player1.1, reason: Reason::Refund },
            second: Transfer { to: player2.0.clone(), amount: player2.1, reason: Reason::Refund },
        }
    }

    pub fn transfers(&self) -> [&Transfer<W>; 2] {
        match self {
            Settlement::Win { commission, prize } => [commission, prize],
            Settlement::Refund { first, second } => [first, second],
        }
    }

    /// Sum of all payouts; equals the pot being settled
    pub fn total(&self) -> Amount {
        self.transfers().iter().map(|t| t.amount).sum()
    }

    /// Release every non-zero transfer from escrow, stopping at the first failure
    pub fn pay<L: Ledger<W>>(&self, ledger: &mut L) -> Result<(), TransferError> {
        for transfer in self.transfers() {
            if transfer.amount == 0 {
                continue;
            }
            ledger.release(&transfer.to, transfer.amount)?;
        }
        Ok(())
    }
}

/// In-process ledger keeping wallet balances and the escrow in memory
#[derive(Clone, Debug)]
pub struct MemoryLedger<W: Eq + Hash> {
    balances: HashMap<W, Amount>,
    escrow: Amount,
    refusing: HashSet<W>,
}

impl<W: Clone + Eq + Hash> Default for MemoryLedger<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Clone + Eq + Hash> MemoryLedger<W> {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            escrow: 0,
            refusing: HashSet::new(),
        }
    }

    /// Credit `amount` to `wallet` from outside the game
    pub fn fund(&mut self, wallet: &W, amount: Amount) {
        let balance = self.balances.entry(wallet.clone()).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    pub fn balance(&self, wallet: &W) -> Amount {
        self.balances.get(wallet).copied().unwrap_or(0)
    }

    /// Funds currently held in escrow
    pub fn escrow(&self) -> Amount {
        self.escrow
    }

    /// Make every release to `wallet` fail until `accept` is called
    pub fn refuse(&mut self, wallet: &W) {
        self.refusing.insert(wallet.clone());
    }

    pub fn accept(&mut self, wallet: &W) {
        self.refusing.remove(wallet);
    }
}

/// Snapshot used to undo a failed call
#[derive(Clone, Debug)]
pub struct MemoryCheckpoint<W> {
    balances: HashMap<W, Amount>,
    escrow: Amount,
}

impl<W: Clone + Eq + Hash + fmt::Display> Ledger<W> for MemoryLedger<W> {
    type Checkpoint = MemoryCheckpoint<W>;

    fn deposit(&mut self, from: &W, amount: Amount) -> Result<(), TransferError> {
        let available = self.balance(from);
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                wallet: from.to_string(),
                available,
                needed: amount,
            });
        }
        let escrow = self.escrow.checked_add(amount).ok_or(TransferError::Overflow {
            wallet: from.to_string(),
        })?;
        self.balances.insert(from.clone(), available - amount);
        self.escrow = escrow;
        Ok(())
    }

    fn release(&mut self, to: &W, amount: Amount) -> Result<(), TransferError> {
        if self.refusing.contains(to) {
            return Err(TransferError::Rejected { wallet: to.to_string() });
        }
        if self.escrow < amount {
            return Err(TransferError::EscrowShortfall {
                available: self.escrow,
                needed: amount,
            });
        }
        let credited = self.balance(to).checked_add(amount).ok_or(TransferError::Overflow {
            wallet: to.to_string(),
        })?;
        self.escrow -= amount;
        self.balances.insert(to.clone(), credited);
        Ok(())
    }

    fn checkpoint(&self) -> Self::Checkpoint {
        MemoryCheckpoint {
            balances: self.balances.clone(),
            escrow: self.escrow,
        }
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        self.balances = checkpoint.balances;
        self.escrow = checkpoint.escrow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_commission_truncates() {
        assert_eq!(commission_of(20_000_000, 10).unwrap(), 2_000_000);
        assert_eq!(commission_of(199, 10).unwrap(), 19);
        assert_eq!(commission_of(99, 1).unwrap(), 0);
        assert_eq!(commission_of(u64::MAX, 100).unwrap(), u64::MAX);
        assert_eq!(commission_of(1_000, 0).unwrap(), 0);
    }

    #[test]
    fn test_win_orders_commission_first() {
        let settlement = Settlement::win(&"owner", &"alice", 20_000_000, 10).unwrap();
        let [first, second] = settlement.transfers();
        assert_eq!(first, &Transfer { to: "owner", amount: 2_000_000, reason: Reason::Commission });
        assert_eq!(second, &Transfer { to: "alice", amount: 18_000_000, reason: Reason::Prize });
    }

    #[test]
    fn test_pay_skips_zero_commission() {
        let mut ledger = MemoryLedger::new();
        ledger.fund(&"alice", 10);
        ledger.fund(&"bob", 10);
        ledger.deposit(&"alice", 10).unwrap();
        ledger.deposit(&"bob", 10).unwrap();
        // owner refuses funds but receives nothing at 0%
        ledger.refuse(&"owner");

        let settlement = Settlement::win(&"owner", &"bob", 20, 0).unwrap();
        settlement.pay(&mut ledger).unwrap();
        assert_eq!(ledger.balance(&"bob"), 20);
        assert_eq!(ledger.escrow(), 0);
    }

    #[test]
    fn test_memory_ledger_rejects_and_rolls_back() {
        let mut ledger = MemoryLedger::new();
        ledger.fund(&"alice", 5);
        assert!(matches!(
            ledger.deposit(&"alice", 6),
            Err(TransferError::InsufficientFunds { available: 5, needed: 6, .. })
        ));

        let checkpoint = ledger.checkpoint();
        ledger.deposit(&"alice", 5).unwrap();
        ledger.refuse(&"alice");
        assert!(matches!(ledger.release(&"alice", 5), Err(TransferError::Rejected { .. })));
        assert_eq!(ledger.escrow(), 5);

        ledger.rollback(checkpoint);
        assert_eq!(ledger.escrow(), 0);
        assert_eq!(ledger.balance(&"alice"), 5);
    }

    #[test]
    fn test_release_beyond_escrow_fails() {
        let mut ledger: MemoryLedger<&str> = MemoryLedger::new();
        assert_eq!(
            ledger.release(&"alice", 1),
            Err(TransferError::EscrowShortfall { available: 0, needed: 1 })
        );
    }

    #[test]
    fn test_deposit_overflowing_escrow_fails() {
        let big = u64::MAX / 2 + 1;
        let mut ledger = MemoryLedger::new();
        ledger.fund(&"alice", big);
        ledger.fund(&"bob", big);
        ledger.deposit(&"alice", big).unwrap();

        assert_eq!(
            ledger.deposit(&"bob", big),
            Err(TransferError::Overflow { wallet: "bob".to_string() })
        );
        assert_eq!(ledger.balance(&"bob"), big);
        assert_eq!(ledger.escrow(), big);
    }

    #[test]
    fn test_release_overflowing_recipient_fails() {
        let mut ledger = MemoryLedger::new();
        ledger.fund(&"alice", 10);
        ledger.deposit(&"alice", 10).unwrap();
        ledger.fund(&"whale", u64::MAX);

        assert_eq!(
            ledger.release(&"whale", 10),
            Err(TransferError::Overflow { wallet: "whale".to_string() })
        );
        assert_eq!(ledger.escrow(), 10);
        assert_eq!(ledger.balance(&"whale"), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_win_conserves_pot(bid in 1u64..=u64::MAX / 2, commission in 0u8..=100) {
            let pot = bid * 2;
            let settlement = Settlement::win(&"owner", &"winner", pot, commission).unwrap();
            prop_assert_eq!(settlement.total(), pot);
        }

        #[test]
        fn prop_refund_conserves_pot(bid in 1u64..=u64::MAX / 2) {
            let settlement = Settlement::refund((&"p1", bid), (&"p2", bid));
            prop_assert_eq!(settlement.total(), bid * 2);
            let [first, second] = settlement.transfers();
            prop_assert_eq!(first.amount, bid);
            prop_assert_eq!(second.amount, bid);
        }
    }
}
