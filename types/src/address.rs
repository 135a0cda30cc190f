//! Account address type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; 20]);

impl Address {
    /// The null address. Transfers to it are rejected; it is never a valid
    /// counterparty.
    pub const ZERO: Self = Self([0u8; 20]);

    /// The designated burn sink. Tokens sent here are unrecoverable by
    /// convention; the address has no known key.
    pub const BURN: Self = Self([0xDD; 20]);

    /// The ledger's own account — the balance slot where fee revenue
    /// accumulates pending conversion. Compared structurally, never derived.
    pub const LEDGER: Self = Self([0x5E; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
