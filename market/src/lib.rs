//! External market seam.
//!
//! The engine never talks to a real exchange directly; it goes through the
//! [`Market`] trait, and the market reaches back into the token ledger
//! through [`TokenHooks`] — the reentrancy seam. `SimulatedMarket` is the
//! deterministic in-memory implementation used by tests: controllable,
//! no I/O, no clock.

pub mod connector;
pub mod error;
pub mod sim;

pub use connector::{Market, TokenHooks};
pub use error::MarketError;
pub use sim::SimulatedMarket;
