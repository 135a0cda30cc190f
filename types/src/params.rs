//! Fee and limit parameters — every value here is admin-tunable at runtime.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Total supply minted at genesis: 19 billion whole tokens.
pub const GENESIS_SUPPLY: Amount = Amount::from_whole(19_000_000_000);

/// Which side of the market a transfer sits on.
///
/// A transfer is a buy when the market pair is the sender, a sell when the
/// pair is the recipient; everything else is wallet-to-wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Transfer fee percentages, in whole percent (integer truncation applies).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParams {
    /// Liquidity share of the buy fee.
    pub buy_liquidity_pct: u8,
    /// Treasury share of the buy fee.
    pub buy_treasury_pct: u8,
    /// Liquidity share of the sell fee.
    pub sell_liquidity_pct: u8,
    /// Treasury share of the sell fee.
    pub sell_treasury_pct: u8,
    /// Flat fee on transfers where neither party is the market pair.
    pub wallet_to_wallet_pct: u8,
}

impl FeeParams {
    /// Launch configuration: 5% each way (2% liquidity + 3% treasury),
    /// wallet-to-wallet transfers free.
    pub fn defaults() -> Self {
        Self {
            buy_liquidity_pct: 2,
            buy_treasury_pct: 3,
            sell_liquidity_pct: 2,
            sell_treasury_pct: 3,
            wallet_to_wallet_pct: 0,
        }
    }

    /// Total fee percent charged on the given side. Saturates rather than
    /// overflowing on a directly-constructed oversized configuration.
    pub fn total_for(&self, side: TradeSide) -> u8 {
        match side {
            TradeSide::Buy => self.buy_liquidity_pct.saturating_add(self.buy_treasury_pct),
            TradeSide::Sell => self.sell_liquidity_pct.saturating_add(self.sell_treasury_pct),
        }
    }

    /// The liquidity : treasury split configured for the given side.
    pub fn split_for(&self, side: TradeSide) -> (u8, u8) {
        match side {
            TradeSide::Buy => (self.buy_liquidity_pct, self.buy_treasury_pct),
            TradeSide::Sell => (self.sell_liquidity_pct, self.sell_treasury_pct),
        }
    }
}

impl Default for FeeParams {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Per-transaction and per-wallet caps, plus the conversion trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitParams {
    /// Largest single buy for non-exempt recipients.
    pub max_buy: Amount,
    /// Largest single sell for non-exempt senders.
    pub max_sell: Amount,
    /// Largest post-transfer holding for non-exempt recipients.
    pub max_wallet: Amount,
    /// Self-held balance at which a conversion cycle fires (also the batch
    /// size processed per cycle).
    pub swap_trigger: Amount,
}

impl LimitParams {
    /// Launch configuration sized against the genesis supply:
    /// 0.5% max buy/sell, 1% max wallet, 0.002% conversion batches.
    pub fn defaults_for_supply(supply: Amount) -> Self {
        Self {
            max_buy: supply.div(200),
            max_sell: supply.div(200),
            max_wallet: supply.div(100),
            swap_trigger: supply.div(50_000),
        }
    }
}

impl Default for LimitParams {
    fn default() -> Self {
        Self::defaults_for_supply(GENESIS_SUPPLY)
    }
}
