//! Notifications emitted by the engine for external observers.
//!
//! The core never consumes its own events; they accumulate in the engine's
//! buffer until drained with `take_events`.

use crate::address::Address;
use crate::amount::Amount;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Principal movement, or fee retention when `to` is the ledger's own
    /// account.
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    TradingEnabled(bool),
    ExcludedFromFees {
        account: Address,
        excluded: bool,
    },
    ExcludedFromLimits {
        account: Address,
        excluded: bool,
    },
    AbusersAdded(Vec<Address>),
    AbusersRemoved(Vec<Address>),
    BuyFeesUpdated {
        liquidity_pct: u8,
        treasury_pct: u8,
    },
    SellFeesUpdated {
        liquidity_pct: u8,
        treasury_pct: u8,
    },
    WalletToWalletFeeUpdated {
        pct: u8,
    },
    MaxBuyUpdated(Amount),
    MaxSellUpdated(Amount),
    MaxWalletUpdated(Amount),
    SwapTriggerUpdated(Amount),
    SwapEnabledUpdated(bool),
    TreasuryWalletUpdated(Address),
    LpTokenReceiverUpdated(Address),
    /// A conversion cycle completed.
    SwapAndLiquify {
        tokens_swapped: Amount,
        base_received: Amount,
        tokens_into_liquidity: Amount,
    },
    ForeignAssetWithdrawn {
        asset: Address,
        to: Address,
        amount: Amount,
    },
    NativeWithdrawn {
        to: Address,
        amount: Amount,
    },
}
