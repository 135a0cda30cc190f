//! Engine error taxonomy.
//!
//! Four categories, all aborting the triggering operation with no partial
//! state change: validation errors (bad input), authorization errors
//! (missing role, carries the caller identity), collaborator errors
//! (market failures, wrapped), and invariant errors (insufficient balance,
//! wrapped from the ledger — state, not input). No retries anywhere.

use tariff_ledger::LedgerError;
use tariff_market::MarketError;
use tariff_registry::RegistryError;
use tariff_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    // ── Validation ───────────────────────────────────────────────────────
    #[error("transfer to the zero address")]
    TransferToZeroAddress,

    #[error("transfer amount must be greater than zero")]
    ZeroAmount,

    #[error("trading not yet enabled")]
    TradingNotEnabled,

    #[error("address {0} is on the abuse deny-list")]
    AddressIsAbuser(Address),

    #[error("sell transfer of {amount} exceeds the max sell transaction {max}")]
    SellExceedsMax { amount: u128, max: u128 },

    #[error("buy transfer of {amount} exceeds the max buy transaction {max}")]
    BuyExceedsMax { amount: u128, max: u128 },

    #[error("recipient would hold {would_hold}, exceeding the max wallet {max}")]
    MaxWalletExceeded { would_hold: u128, max: u128 },

    #[error("fee of {total_pct}% exceeds 100%")]
    FeeTooHigh { total_pct: u8 },

    #[error("zero address")]
    ZeroAddress,

    #[error("cannot withdraw the ledger's own asset through the recovery path")]
    SelfAssetWithdrawal,

    #[error("genesis config invalid: {0}")]
    InvalidGenesis(&'static str),

    // ── Authorization ────────────────────────────────────────────────────
    #[error("caller {caller} is missing the {required} role")]
    Unauthorized {
        caller: Address,
        required: &'static str,
    },

    // ── Invariant (state) ────────────────────────────────────────────────
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    // ── Validation (batch) ───────────────────────────────────────────────
    #[error(transparent)]
    Registry(#[from] RegistryError),

    // ── Collaborator ─────────────────────────────────────────────────────
    #[error("market collaborator failed: {0}")]
    Market(#[from] MarketError),
}
