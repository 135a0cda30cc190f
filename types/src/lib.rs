//! Fundamental types for the Tariff ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, token amounts, fee and limit parameters,
//! and the notification events emitted by the engine.

pub mod address;
pub mod amount;
pub mod event;
pub mod params;

pub use address::Address;
pub use amount::Amount;
pub use event::Event;
pub use params::{FeeParams, LimitParams, TradeSide, GENESIS_SUPPLY};
