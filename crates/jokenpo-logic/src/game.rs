//! The JoKenPo state machine: seats, escrowed pot, resolution and payout

use core::fmt;
use serde::{Deserialize, Serialize};
use crate::config::{check_bid, check_commission, AdminConfig, Amount};
use crate::error::{GameError, Resource};
use crate::escrow::{Ledger, Settlement};
use crate::leaderboard::{LeaderBoard, Player};
use crate::moves::Move;
use crate::resolver::{resolve, Seat, Verdict};

/// Anything that can identify a caller
pub trait Wallet: Clone + PartialEq + fmt::Display {}

impl<T: Clone + PartialEq + fmt::Display> Wallet for T {}

/// A submitted move together with the stake backing it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand<W> {
    pub wallet: W,
    pub choice: Move,
    pub deposit: Amount,
}

/// The in-progress match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table<W> {
    pub player1: Option<Hand<W>>,
    pub player2: Option<Hand<W>>,
    /// Sum of deposits held for the unresolved match
    pub pot: Amount,
}

impl<W> Default for Table<W> {
    fn default() -> Self {
        Self {
            player1: None,
            player2: None,
            pot: 0,
        }
    }
}

impl<W> Table<W> {
    /// No match in progress
    pub fn is_idle(&self) -> bool {
        self.player1.is_none()
    }

    fn reset(&mut self) {
        self.player1 = None;
        self.player2 = None;
        self.pot = 0;
    }
}

/// Required role for an entry point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Owner,
    Player,
}

/// Mutations of one call, applied to the game only once every step succeeded
struct Staged<W> {
    table: Table<W>,
    board: LeaderBoard<W>,
    verdict: Verdict,
}

/// Two-player rock-paper-scissors with escrowed bids and a winners board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoKenPo<W> {
    owner: W,
    config: AdminConfig,
    table: Table<W>,
    board: LeaderBoard<W>,
    verdict: Verdict,
}

impl<W: Wallet> JoKenPo<W> {
    /// New game owned by `owner` with the default bid and commission
    pub fn new(owner: W) -> Self {
        Self::restore(owner, AdminConfig::default(), Table::default(), LeaderBoard::new(), Verdict::Idle)
    }

    pub fn with_config(owner: W, config: AdminConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::restore(owner, config, Table::default(), LeaderBoard::new(), Verdict::Idle))
    }

    /// Reassemble a game from persisted parts
    pub fn restore(
        owner: W,
        config: AdminConfig,
        table: Table<W>,
        board: LeaderBoard<W>,
        verdict: Verdict,
    ) -> Self {
        Self { owner, config, table, board, verdict }
    }

    fn guard(&self, caller: &W, role: Role) -> Result<(), GameError> {
        let is_owner = *caller == self.owner;
        match role {
            Role::Owner if !is_owner => Err(GameError::Unauthorized),
            Role::Player if is_owner => Err(GameError::OwnerCannotPlay),
            _ => Ok(()),
        }
    }

    fn ensure_idle(&self, resource: Resource) -> Result<(), GameError> {
        if !self.table.is_idle() {
            return Err(GameError::GameInProgress { resource });
        }
        Ok(())
    }

    /// Submit a move backed by `payment`
    ///
    /// The first caller takes seat 1. A different second caller takes seat 2,
    /// which resolves the match, pays out through `ledger`, updates the
    /// leaderboard and clears the table, all in this call. On any error the
    /// game is unchanged and the ledger is rolled back.
    pub fn play<L: Ledger<W>>(
        &mut self,
        caller: &W,
        choice: Move,
        payment: Amount,
        ledger: &mut L,
    ) -> Result<Verdict, GameError> {
        self.guard(caller, Role::Player)?;
        if !choice.is_playable() {
            return Err(GameError::InvalidMove);
        }
        if payment != self.config.bid {
            return Err(GameError::InvalidBid);
        }
        if self.table.player1.as_ref().is_some_and(|hand| hand.wallet == *caller) {
            return Err(GameError::WaitForOpponent);
        }

        let checkpoint = ledger.checkpoint();
        let mut staged = Staged {
            table: self.table.clone(),
            board: self.board.clone(),
            verdict: self.verdict,
        };

        match self.advance(&mut staged, caller, choice, payment, ledger) {
            Ok(()) => {
                self.table = staged.table;
                self.board = staged.board;
                self.verdict = staged.verdict;
                Ok(self.verdict)
            }
            Err(err) => {
                ledger.rollback(checkpoint);
                log::warn!("play by {} rolled back: {}", caller, err);
                Err(err)
            }
        }
    }

    fn advance<L: Ledger<W>>(
        &self,
        staged: &mut Staged<W>,
        caller: &W,
        choice: Move,
        payment: Amount,
        ledger: &mut L,
    ) -> Result<(), GameError> {
        let pot = staged.table.pot.checked_add(payment).ok_or(GameError::Overflow)?;
        ledger.deposit(caller, payment)?;
        staged.table.pot = pot;

        let hand = Hand { wallet: caller.clone(), choice, deposit: payment };
        let first = match staged.table.player1.clone() {
            None => {
                staged.table.player1 = Some(hand);
                staged.verdict = Verdict::Waiting;
                log::info!("{} took seat 1, pot = {}", caller, staged.table.pot);
                return Ok(());
            }
            Some(first) => first,
        };
        staged.table.player2 = Some(hand.clone());
        log::info!("{} took seat 2, pot = {}", caller, staged.table.pot);

        self.settle(staged, &first, &hand, ledger)
    }

    fn settle<L: Ledger<W>>(
        &self,
        staged: &mut Staged<W>,
        first: &Hand<W>,
        second: &Hand<W>,
        ledger: &mut L,
    ) -> Result<(), GameError> {
        let pot = staged.table.pot;
        let settlement = match resolve(first.choice, second.choice).winner() {
            Some(Seat::One) => Settlement::win(&self.owner, &first.wallet, pot, self.config.commission)?,
            Some(Seat::Two) => Settlement::win(&self.owner, &second.wallet, pot, self.config.commission)?,
            None => Settlement::refund(
                (&first.wallet, first.deposit),
                (&second.wallet, second.deposit),
            ),
        };
        debug_assert_eq!(settlement.total(), pot);

        settlement.pay(ledger)?;

        if let Settlement::Win { prize, .. } = &settlement {
            let wins = staged.board.record_win(&prize.to);
            log::info!("{} won {} ({} wins)", prize.to, prize.amount, wins);
        }

        staged.verdict = Verdict::of_match(first.choice, second.choice);
        staged.table.reset();
        log::info!("{}", staged.verdict);
        Ok(())
    }

    /// Change the bid; owner only, and only while no match is in progress
    pub fn set_bid(&mut self, caller: &W, bid: Amount) -> Result<(), GameError> {
        self.guard(caller, Role::Owner)?;
        self.ensure_idle(Resource::Bid)?;
        check_bid(bid)?;
        self.config.bid = bid;
        log::info!("bid set to {}", bid);
        Ok(())
    }

    /// Change the commission; owner only, and only while no match is in progress
    pub fn set_commission(&mut self, caller: &W, commission: u8) -> Result<(), GameError> {
        self.guard(caller, Role::Owner)?;
        self.ensure_idle(Resource::Commission)?;
        check_commission(commission)?;
        self.config.commission = commission;
        log::info!("commission set to {}%", commission);
        Ok(())
    }

    pub fn bid(&self) -> Amount {
        self.config.bid
    }

    pub fn commission(&self) -> u8 {
        self.config.commission
    }

    /// Description of the current or last match
    pub fn result(&self) -> String {
        self.verdict.to_string()
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn leaderboard(&self) -> &[Player<W>] {
        self.board.players()
    }

    /// Escrowed balance of the unresolved match; owner only
    pub fn balance(&self, caller: &W) -> Result<Amount, GameError> {
        self.guard(caller, Role::Owner)?;
        Ok(self.table.pot)
    }

    pub fn owner(&self) -> &W {
        &self.owner
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub fn table(&self) -> &Table<W> {
        &self.table
    }

    pub fn board(&self) -> &LeaderBoard<W> {
        &self.board
    }
}
