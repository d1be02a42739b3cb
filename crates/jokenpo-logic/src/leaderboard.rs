//! Persistent tally of wins per wallet

use serde::{Deserialize, Serialize};

/// A single leaderboard row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<W> {
    pub wallet: W,
    pub wins: u32,
}

/// Winners in order of their first win
///
/// Rows are never removed or reordered; later wins increment in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderBoard<W> {
    players: Vec<Player<W>>,
}

impl<W> Default for LeaderBoard<W> {
    fn default() -> Self {
        Self { players: Vec::new() }
    }
}

impl<W: Clone + PartialEq> LeaderBoard<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored rows, keeping their order
    pub fn from_players(players: Vec<Player<W>>) -> Self {
        Self { players }
    }

    /// Credit one win to `wallet`, inserting it at the end on its first win.
    /// Returns the wallet's new win count.
    pub fn record_win(&mut self, wallet: &W) -> u32 {
        match self.players.iter_mut().find(|p| &p.wallet == wallet) {
            Some(player) => {
                player.wins = player.wins.saturating_add(1);
                player.wins
            }
            None => {
                self.players.push(Player { wallet: wallet.clone(), wins: 1 });
                1
            }
        }
    }

    pub fn wins(&self, wallet: &W) -> u32 {
        self.players
            .iter()
            .find(|p| &p.wallet == wallet)
            .map_or(0, |p| p.wins)
    }

    pub fn players(&self) -> &[Player<W>] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
