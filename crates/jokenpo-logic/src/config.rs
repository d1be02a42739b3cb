//! Owner-controlled game settings

use serde::{Deserialize, Serialize};
use crate::error::GameError;

/// Amounts are expressed in the smallest native unit
pub type Amount = u64;

/// Smallest units per whole coin
pub const UNITS_PER_COIN: Amount = 1_000_000_000;

/// Default stake per player (0.01 coin)
pub const DEFAULT_BID: Amount = UNITS_PER_COIN / 100;

/// Default owner cut of a decisive pot, in percent
pub const DEFAULT_COMMISSION: u8 = 10;

/// Upper bound for the commission percentage
pub const MAX_COMMISSION: u8 = 100;

/// Bid and commission, both set by the owner while no match is in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Exact stake each player must deposit
    pub bid: Amount,
    /// Percentage of a decisive pot kept by the owner (0-100)
    pub commission: u8,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            bid: DEFAULT_BID,
            commission: DEFAULT_COMMISSION,
        }
    }
}

impl AdminConfig {
    pub fn new(bid: Amount, commission: u8) -> Result<Self, GameError> {
        let config = Self { bid, commission };
        config.validate()?;
        Ok(config)
    }

    /// Parse owner-provided settings; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        #[derive(Deserialize)]
        struct Partial {
            bid: Option<Amount>,
            commission: Option<u8>,
        }

        let partial: Partial = serde_json::from_str(json)
            .map_err(|e| GameError::Config(e.to_string()))?;
        let defaults = Self::default();
        Self::new(
            partial.bid.unwrap_or(defaults.bid),
            partial.commission.unwrap_or(defaults.commission),
        )
    }

    pub fn validate(&self) -> Result<(), GameError> {
        check_bid(self.bid)?;
        check_commission(self.commission)
    }
}

pub(crate) fn check_bid(bid: Amount) -> Result<(), GameError> {
    if bid == 0 {
        return Err(GameError::ZeroBid);
    }
    Ok(())
}

pub(crate) fn check_commission(commission: u8) -> Result<(), GameError> {
    if commission > MAX_COMMISSION {
        return Err(GameError::InvalidCommission);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.bid, 10_000_000);
        assert_eq!(config.commission, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(AdminConfig::new(0, 10), Err(GameError::ZeroBid));
        assert_eq!(AdminConfig::new(1, 101), Err(GameError::InvalidCommission));
        assert!(AdminConfig::new(1, 0).is_ok());
        assert!(AdminConfig::new(1, 100).is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = AdminConfig::from_json(r#"{"bid": 20000000, "commission": 11}"#).unwrap();
        assert_eq!(config, AdminConfig { bid: 20_000_000, commission: 11 });

        let partial = AdminConfig::from_json(r#"{"commission": 5}"#).unwrap();
        assert_eq!(partial.bid, DEFAULT_BID);
        assert_eq!(partial.commission, 5);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(AdminConfig::from_json("not json"), Err(GameError::Config(_))));
        assert_eq!(
            AdminConfig::from_json(r#"{"commission": 150}"#),
            Err(GameError::InvalidCommission)
        );
        assert_eq!(AdminConfig::from_json(r#"{"bid": 0}"#), Err(GameError::ZeroBid));
    }
}
