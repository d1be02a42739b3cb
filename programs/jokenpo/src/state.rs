//! Account state definitions

use anchor_lang::prelude::*;
use jokenpo_logic::{AdminConfig, Hand, JoKenPo, LeaderBoard, Move, Player, Seat, Table, Verdict};
use crate::error::JoKenPoError;

/// Leaderboard row as stored on chain
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LeaderEntry {
    pub wallet: Pubkey,
    pub wins: u32,
}

/// Stored form of the last verdict (moves by wire index, seat 1 or 2)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LastResult {
    #[default]
    Idle,
    Waiting,
    Won { winner: u8, loser: u8, seat: u8 },
    Draw { choice: u8 },
}

/// Bytes added per leaderboard row (32-byte pubkey + 4-byte wins)
pub const BYTES_PER_LEADER: usize = 36;

/// The single arena account: config, seat 1, pot, last result and leaderboard.
///
/// The account's own lamports back the pot. Seat 2 is never persisted: it is
/// filled and cleared within the play that resolves the match.
#[account]
#[derive(Default)]
pub struct Arena {
    /// Creator; sole admin and commission recipient, never a player
    pub owner: Pubkey,
    /// Exact stake per player (lamports)
    pub bid: u64,
    /// Owner cut of a decisive pot, in percent
    pub commission: u8,
    /// Seated player 1 (default pubkey = empty seat)
    pub player1: Pubkey,
    /// Player 1 move by wire index (0 = none)
    pub player1_move: u8,
    /// Lamports deposited by player 1
    pub player1_deposit: u64,
    /// Escrowed lamports of the unresolved match
    pub pot: u64,
    pub last_result: LastResult,
    /// Winners in order of their first win
    pub leaderboard: Vec<LeaderEntry>,
    /// PDA bump seed
    pub bump: u8,
}

impl Arena {
    /// Base space with an empty leaderboard
    pub const BASE_SPACE: usize = 8 + // discriminator
        32 +  // owner
        8 +   // bid
        1 +   // commission
        32 +  // player1
        1 +   // player1_move
        8 +   // player1_deposit
        8 +   // pot
        4 +   // last_result (tag + up to 3 bytes)
        4 +   // leaderboard vec len
        1 +   // bump
        32;   // padding

    /// Space needed for a leaderboard of `leaders` rows
    pub fn space(leaders: usize) -> usize {
        Self::BASE_SPACE + leaders * BYTES_PER_LEADER
    }

    /// Load the persisted game into the engine
    pub fn to_game(&self) -> Result<JoKenPo<Pubkey>> {
        let config = AdminConfig {
            bid: self.bid,
            commission: self.commission,
        };

        let player1 = if self.player1 == Pubkey::default() {
            None
        } else {
            Some(Hand {
                wallet: self.player1,
                choice: decode_move(self.player1_move)?,
                deposit: self.player1_deposit,
            })
        };
        let table = Table {
            player1,
            player2: None,
            pot: self.pot,
        };

        let board = LeaderBoard::from_players(
            self.leaderboard
                .iter()
                .map(|e| Player { wallet: e.wallet, wins: e.wins })
                .collect(),
        );

        Ok(JoKenPo::restore(self.owner, config, table, board, decode_verdict(self.last_result)?))
    }

    /// Persist the engine state back into the account
    pub fn store(&mut self, game: &JoKenPo<Pubkey>) {
        self.bid = game.bid();
        self.commission = game.commission();

        let table = game.table();
        match &table.player1 {
            Some(hand) => {
                self.player1 = hand.wallet;
                self.player1_move = hand.choice.index();
                self.player1_deposit = hand.deposit;
            }
            None => {
                self.player1 = Pubkey::default();
                self.player1_move = Move::None.index();
                self.player1_deposit = 0;
            }
        }
        self.pot = table.pot;
        self.last_result = encode_verdict(game.verdict());
        self.leaderboard = game
            .leaderboard()
            .iter()
            .map(|p| LeaderEntry { wallet: p.wallet, wins: p.wins })
            .collect();
    }
}

fn decode_move(index: u8) -> Result<Move> {
    Move::from_index(index).ok_or_else(|| JoKenPoError::CorruptState.into())
}

fn decode_verdict(stored: LastResult) -> Result<Verdict> {
    Ok(match stored {
        LastResult::Idle => Verdict::Idle,
        LastResult::Waiting => Verdict::Waiting,
        LastResult::Won { winner, loser, seat } => Verdict::Won {
            winner: decode_move(winner)?,
            loser: decode_move(loser)?,
            seat: match seat {
                1 => Seat::One,
                2 => Seat::Two,
                _ => return Err(JoKenPoError::CorruptState.into()),
            },
        },
        LastResult::Draw { choice } => Verdict::Draw { choice: decode_move(choice)? },
    })
}

fn encode_verdict(verdict: Verdict) -> LastResult {
    match verdict {
        Verdict::Idle => LastResult::Idle,
        Verdict::Waiting => LastResult::Waiting,
        Verdict::Won { winner, loser, seat } => LastResult::Won {
            winner: winner.index(),
            loser: loser.index(),
            seat: seat.number(),
        },
        Verdict::Draw { choice } => LastResult::Draw { choice: choice.index() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_encoding_roundtrip() {
        let verdicts = [
            Verdict::Idle,
            Verdict::Waiting,
            Verdict::of_match(Move::Paper, Move::Rock),
            Verdict::of_match(Move::Paper, Move::Scissors),
            Verdict::of_match(Move::Rock, Move::Rock),
        ];
        for verdict in verdicts {
            assert_eq!(decode_verdict(encode_verdict(verdict)).unwrap(), verdict);
        }
    }

    #[test]
    fn test_corrupt_verdict_rejected() {
        assert!(decode_verdict(LastResult::Won { winner: 9, loser: 1, seat: 1 }).is_err());
        assert!(decode_verdict(LastResult::Won { winner: 2, loser: 1, seat: 3 }).is_err());
    }

    #[test]
    fn test_store_and_load_arena() {
        let owner = Pubkey::new_unique();
        let mut arena = Arena {
            owner,
            bid: 10_000_000,
            commission: 10,
            ..Arena::default()
        };

        let player = Pubkey::new_unique();
        let mut game = arena.to_game().unwrap();
        game.set_commission(&owner, 12).unwrap();
        let winner = Pubkey::new_unique();
        let table = Table {
            player1: Some(Hand { wallet: player, choice: Move::Scissors, deposit: 10_000_000 }),
            player2: None,
            pot: 10_000_000,
        };
        let mut board = LeaderBoard::new();
        board.record_win(&winner);
        let game = JoKenPo::restore(owner, *game.config(), table, board, Verdict::Waiting);

        arena.store(&game);
        assert_eq!(arena.player1, player);
        assert_eq!(arena.player1_move, 3);
        assert_eq!(arena.pot, 10_000_000);
        assert_eq!(arena.commission, 12);
        assert_eq!(arena.leaderboard, vec![LeaderEntry { wallet: winner, wins: 1 }]);

        assert_eq!(arena.to_game().unwrap(), game);
    }

    #[test]
    fn test_space_grows_per_leader() {
        assert_eq!(Arena::space(3) - Arena::space(0), 3 * BYTES_PER_LEADER);
    }
}
