//! Balance ledger.
//!
//! Holds per-account balances and the total supply, with atomic
//! debit/credit/move primitives, plus the spender allowance table.
//! The ledger is side-effect-only on its maps — notifications are the
//! engine's concern.

pub mod allowances;
pub mod balances;
pub mod error;

pub use allowances::Allowances;
pub use balances::Balances;
pub use error::LedgerError;
