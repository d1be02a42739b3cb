//! Shared access for hosts that serve many callers
//!
//! One lock guards the game and its ledger together, so every write runs
//! validation, resolution and payout as one unit and readers never observe
//! funds moved without the matching state change.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::config::Amount;
use crate::error::GameError;
use crate::escrow::Ledger;
use crate::game::{JoKenPo, Wallet};
use crate::leaderboard::Player;
use crate::moves::Move;
use crate::resolver::Verdict;

struct Inner<W, L> {
    game: JoKenPo<W>,
    ledger: L,
}

pub struct SharedArcade<W, L> {
    inner: RwLock<Inner<W, L>>,
}

impl<W: Wallet, L: Ledger<W>> SharedArcade<W, L> {
    pub fn new(game: JoKenPo<W>, ledger: L) -> Self {
        Self {
            inner: RwLock::new(Inner { game, ledger }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner<W, L>>, GameError> {
        self.inner.read().map_err(|_| GameError::Unavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner<W, L>>, GameError> {
        self.inner.write().map_err(|_| GameError::Unavailable)
    }

    pub fn play(&self, caller: &W, choice: Move, payment: Amount) -> Result<Verdict, GameError> {
        let mut guard = self.write()?;
        let Inner { game, ledger } = &mut *guard;
        game.play(caller, choice, payment, ledger)
    }

    pub fn set_bid(&self, caller: &W, bid: Amount) -> Result<(), GameError> {
        self.write()?.game.set_bid(caller, bid)
    }

    pub fn set_commission(&self, caller: &W, commission: u8) -> Result<(), GameError> {
        self.write()?.game.set_commission(caller, commission)
    }

    pub fn bid(&self) -> Result<Amount, GameError> {
        Ok(self.read()?.game.bid())
    }

    pub fn commission(&self) -> Result<u8, GameError> {
        Ok(self.read()?.game.commission())
    }

    pub fn result(&self) -> Result<String, GameError> {
        Ok(self.read()?.game.result())
    }

    pub fn leaderboard(&self) -> Result<Vec<Player<W>>, GameError> {
        Ok(self.read()?.game.leaderboard().to_vec())
    }

    pub fn balance(&self, caller: &W) -> Result<Amount, GameError> {
        self.read()?.game.balance(caller)
    }

    /// Consistent copy of the game and ledger taken under one read lock
    pub fn snapshot(&self) -> Result<(JoKenPo<W>, L), GameError>
    where
        L: Clone,
    {
        let guard = self.read()?;
        Ok((guard.game.clone(), guard.ledger.clone()))
    }

    pub fn into_inner(self) -> Result<(JoKenPo<W>, L), GameError> {
        let inner = self.inner.into_inner().map_err(|_| GameError::Unavailable)?;
        Ok((inner.game, inner.ledger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use crate::config::{DEFAULT_BID, UNITS_PER_COIN};
    use crate::escrow::MemoryLedger;

    fn arcade(players: &[String]) -> SharedArcade<String, MemoryLedger<String>> {
        let mut ledger = MemoryLedger::new();
        for player in players {
            ledger.fund(player, UNITS_PER_COIN);
        }
        SharedArcade::new(JoKenPo::new("owner".to_string()), ledger)
    }

    #[test]
    fn test_shared_match() {
        let p1 = "alice".to_string();
        let p2 = "bob".to_string();
        let arcade = arcade(&[p1.clone(), p2.clone()]);

        arcade.play(&p1, Move::Paper, DEFAULT_BID).unwrap();
        assert_eq!(arcade.balance(&"owner".to_string()), Ok(DEFAULT_BID));
        arcade.play(&p2, Move::Rock, DEFAULT_BID).unwrap();

        assert_eq!(arcade.result().unwrap(), "Paper wraps rock. Player 1 won");
        assert_eq!(arcade.leaderboard().unwrap()[0].wallet, p1);
        assert_eq!(arcade.bid(), Ok(DEFAULT_BID));
        assert_eq!(arcade.commission(), Ok(10));
    }

    #[test]
    fn test_concurrent_players_conserve_funds() {
        let players: Vec<String> = (0..8).map(|i| format!("player{}", i)).collect();
        let arcade = Arc::new(arcade(&players));

        let handles: Vec<_> = players
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, player)| {
                let arcade = Arc::clone(&arcade);
                thread::spawn(move || {
                    for round in 0..10 {
                        let choice = Move::PLAYABLE[(i + round) % 3];
                        // turn-order rejections are expected under contention
                        let _ = arcade.play(&player, choice, DEFAULT_BID);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let (game, ledger) = Arc::try_unwrap(arcade).ok().unwrap().into_inner().unwrap();
        let held: u64 = players.iter().map(|p| ledger.balance(p)).sum();
        let total = held + ledger.balance(&"owner".to_string()) + ledger.escrow();
        assert_eq!(total, players.len() as u64 * UNITS_PER_COIN);
        assert_eq!(ledger.escrow(), game.table().pot);
    }
}
