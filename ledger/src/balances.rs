//! Per-account balance map and total supply.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tariff_types::{Address, Amount};

/// The account book: address → balance, plus the fixed total supply.
///
/// Invariant: the sum of all balances equals `total_supply` after every
/// operation. Supply is minted once at construction and never changes;
/// fee retention only redistributes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Balances {
    accounts: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl Balances {
    /// Mint the entire supply to `holder`.
    pub fn mint_genesis(holder: Address, supply: Amount) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(holder, supply);
        Self {
            accounts,
            total_supply: supply,
        }
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn balance(&self, account: &Address) -> Amount {
        self.accounts.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Sum of every balance slot. Equals `total_supply` by invariant;
    /// exposed so tests can assert it.
    pub fn sum(&self) -> Amount {
        self.accounts
            .values()
            .fold(Amount::ZERO, |acc, b| acc + *b)
    }

    /// Add `amount` to `account`. Fails on zero amounts.
    pub fn credit(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        let slot = self.accounts.entry(account).or_insert(Amount::ZERO);
        *slot = *slot + amount;
        Ok(())
    }

    /// Remove `amount` from `account`. Fails on zero amounts or when the
    /// account holds less than `amount`.
    pub fn debit(&mut self, account: Address, amount: Amount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        let have = self.balance(&account);
        let remaining = have
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                need: amount.raw(),
                have: have.raw(),
            })?;
        if remaining.is_zero() {
            self.accounts.remove(&account);
        } else {
            self.accounts.insert(account, remaining);
        }
        Ok(())
    }

    /// Atomic debit + credit. Fails before any mutation, so a failed move
    /// leaves both accounts untouched.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::ZeroAddressTarget);
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn genesis_mints_entire_supply_to_holder() {
        let book = Balances::mint_genesis(addr(1), Amount::from_whole(100));
        assert_eq!(book.balance(&addr(1)), Amount::from_whole(100));
        assert_eq!(book.total_supply(), Amount::from_whole(100));
        assert_eq!(book.sum(), book.total_supply());
    }

    #[test]
    fn transfer_moves_and_preserves_supply() {
        let mut book = Balances::mint_genesis(addr(1), Amount::from_whole(100));
        book.transfer(addr(1), addr(2), Amount::from_whole(30)).unwrap();

        assert_eq!(book.balance(&addr(1)), Amount::from_whole(70));
        assert_eq!(book.balance(&addr(2)), Amount::from_whole(30));
        assert_eq!(book.sum(), book.total_supply());
    }

    #[test]
    fn debit_rejects_overdraft() {
        let mut book = Balances::mint_genesis(addr(1), Amount::new(10));
        let err = book.debit(addr(1), Amount::new(11)).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientBalance { need: 11, have: 10 });
        // Failed debit left the slot untouched.
        assert_eq!(book.balance(&addr(1)), Amount::new(10));
    }

    #[test]
    fn zero_amount_rejected_everywhere() {
        let mut book = Balances::mint_genesis(addr(1), Amount::new(10));
        assert_eq!(book.credit(addr(2), Amount::ZERO), Err(LedgerError::ZeroAmount));
        assert_eq!(book.debit(addr(1), Amount::ZERO), Err(LedgerError::ZeroAmount));
    }

    #[test]
    fn transfer_to_zero_address_rejected() {
        let mut book = Balances::mint_genesis(addr(1), Amount::new(10));
        assert_eq!(
            book.transfer(addr(1), Address::ZERO, Amount::new(5)),
            Err(LedgerError::ZeroAddressTarget)
        );
    }

    #[test]
    fn emptied_slot_is_removed() {
        let mut book = Balances::mint_genesis(addr(1), Amount::new(10));
        book.transfer(addr(1), addr(2), Amount::new(10)).unwrap();
        assert_eq!(book.balance(&addr(1)), Amount::ZERO);
        assert_eq!(book.sum(), book.total_supply());
    }
}
