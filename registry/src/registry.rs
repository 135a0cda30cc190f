//! Exclusion sets and the abuse deny-list.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tariff_types::Address;

/// Per-address opt-outs and the deny-list.
///
/// Exclusion setters are idempotent and accept any address, the zero
/// address included. Deny-list batches are all-or-nothing: the whole input
/// is validated before any entry is committed, so a single bad entry
/// aborts the batch with no partial application.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccessRegistry {
    fee_exempt: HashSet<Address>,
    limit_exempt: HashSet<Address>,
    abusers: HashSet<Address>,
}

impl AccessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fee_exempt(&self, account: &Address) -> bool {
        self.fee_exempt.contains(account)
    }

    pub fn is_limit_exempt(&self, account: &Address) -> bool {
        self.limit_exempt.contains(account)
    }

    pub fn is_abuser(&self, account: &Address) -> bool {
        self.abusers.contains(account)
    }

    pub fn set_fee_exempt(&mut self, account: Address, exempt: bool) {
        if exempt {
            self.fee_exempt.insert(account);
        } else {
            self.fee_exempt.remove(&account);
        }
    }

    pub fn set_limit_exempt(&mut self, account: Address, exempt: bool) {
        if exempt {
            self.limit_exempt.insert(account);
        } else {
            self.limit_exempt.remove(&account);
        }
    }

    /// Add every address in `batch` to the deny-list, or none of them.
    pub fn add_abusers(&mut self, batch: &[Address]) -> Result<(), RegistryError> {
        // Validate pass: no mutation until the entire batch is clean.
        for account in batch {
            if account.is_zero() {
                return Err(RegistryError::ZeroAddress);
            }
            if self.abusers.contains(account) {
                return Err(RegistryError::AlreadyAbuser(*account));
            }
        }
        for account in batch {
            self.abusers.insert(*account);
        }
        Ok(())
    }

    /// Remove every address in `batch` from the deny-list, or none of them.
    pub fn remove_abusers(&mut self, batch: &[Address]) -> Result<(), RegistryError> {
        for account in batch {
            if account.is_zero() {
                return Err(RegistryError::ZeroAddress);
            }
            if !self.abusers.contains(account) {
                return Err(RegistryError::NotAbuser(*account));
            }
        }
        for account in batch {
            self.abusers.remove(account);
        }
        Ok(())
    }
}
