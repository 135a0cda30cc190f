//! Fee engine — transfer authorization, fee computation, and the
//! automated liquidity-conversion cycle.
//!
//! The engine composes the balance ledger, the access registry, and the
//! external market seam into one strictly serial state machine. The one
//! concurrency hazard, reentrancy through the market callback, is guarded
//! by the conversion lock in [`swap`].

mod admin;
pub mod config;
mod core;
pub mod engine;
pub mod error;
mod swap;

pub use config::GenesisConfig;
pub use engine::{FeeLedger, ADMIN_ROLE};
pub use error::EngineError;
