//! Spender allowance table.
//!
//! `Amount::MAX` is the unlimited sentinel: it is never decremented on
//! spend, so a one-time unlimited approval (the market router's) stays
//! unlimited for the ledger's life.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tariff_types::{Address, Amount};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Allowances {
    grants: HashMap<(Address, Address), Amount>,
}

impl Allowances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.grants
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Unconditionally overwrite the grant.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.grants.remove(&(owner, spender));
        } else {
            self.grants.insert((owner, spender), amount);
        }
    }

    /// Consume `amount` of the grant, leaving unlimited grants untouched.
    pub fn spend(
        &mut self,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let have = self.allowance(&owner, &spender);
        if have == Amount::MAX {
            return Ok(());
        }
        let remaining = have
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                need: amount.raw(),
                have: have.raw(),
            })?;
        self.approve(owner, spender, remaining);
        Ok(())
    }
}
