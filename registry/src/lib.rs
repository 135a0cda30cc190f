//! Access and limit registry.
//!
//! Tracks the fee-exclusion set, the max-transaction exclusion set, and the
//! abuse deny-list. Authorization lives above this crate — the engine's
//! control surface checks the caller before mutating.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::AccessRegistry;
