//! Deterministic in-memory market for tests.
//!
//! A fixed-rate AMM stand-in: swaps convert at a configurable token→base
//! rate against the pair's base reserve, and every balance is queryable.
//! Failure injection covers the collaborator-error paths (liquidity depth,
//! forced swap failure) without a real exchange.

use crate::connector::{Market, TokenHooks};
use crate::error::MarketError;
use std::collections::HashMap;
use tariff_types::{Address, Amount};

/// In-memory market with per-address base-currency balances and LP receipts.
#[derive(Clone, Debug)]
pub struct SimulatedMarket {
    router: Address,
    pair: Option<Address>,
    /// Token→base conversion applied to swaps, as num/den.
    rate_num: u128,
    rate_den: u128,
    base_balances: HashMap<Address, Amount>,
    lp_receipts: HashMap<Address, Amount>,
    fail_swaps: bool,
}

impl SimulatedMarket {
    /// Well-known simulated pair address.
    pub const PAIR: Address = Address::new([0xAA; 20]);

    pub fn new(router: Address) -> Self {
        Self {
            router,
            pair: None,
            rate_num: 1,
            rate_den: 1,
            base_balances: HashMap::new(),
            lp_receipts: HashMap::new(),
            fail_swaps: false,
        }
    }

    /// Set the token→base swap rate. `den` must be nonzero.
    pub fn set_rate(&mut self, num: u128, den: u128) {
        self.rate_num = num;
        self.rate_den = den;
    }

    /// Credit base currency to an account (funds the pair's reserve, or
    /// models a stray native deposit to the ledger account).
    pub fn seed_base(&mut self, account: Address, amount: Amount) {
        let slot = self.base_balances.entry(account).or_insert(Amount::ZERO);
        *slot = *slot + amount;
    }

    /// Force every subsequent swap to fail, for abort-path tests.
    pub fn set_fail_swaps(&mut self, fail: bool) {
        self.fail_swaps = fail;
    }

    pub fn lp_receipts_of(&self, account: &Address) -> Amount {
        self.lp_receipts.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn pair(&self) -> Result<Address, MarketError> {
        self.pair.ok_or(MarketError::PairNotCreated)
    }

    fn debit_base(&mut self, account: Address, amount: Amount) -> Result<(), MarketError> {
        let have = self.base_balance_of(&account);
        let remaining = have
            .checked_sub(amount)
            .ok_or(MarketError::InsufficientLiquidity {
                need: amount.raw(),
                have: have.raw(),
            })?;
        self.base_balances.insert(account, remaining);
        Ok(())
    }

    fn credit_base(&mut self, account: Address, amount: Amount) {
        let slot = self.base_balances.entry(account).or_insert(Amount::ZERO);
        *slot = *slot + amount;
    }
}

impl Market for SimulatedMarket {
    fn router_address(&self) -> Address {
        self.router
    }

    fn create_pair(&mut self, _token: Address) -> Result<Address, MarketError> {
        if self.pair.is_some() {
            return Err(MarketError::PairAlreadyExists);
        }
        self.pair = Some(Self::PAIR);
        Ok(Self::PAIR)
    }

    fn swap_exact_tokens_for_base(
        &mut self,
        amount_in: Amount,
        min_out: Amount,
        to: Address,
        hooks: &mut dyn TokenHooks,
    ) -> Result<Amount, MarketError> {
        let pair = self.pair()?;
        if self.fail_swaps {
            return Err(MarketError::InsufficientLiquidity {
                need: amount_in.raw(),
                have: 0,
            });
        }

        // Tokens into the pool through the ordinary transfer path.
        hooks.transfer(Address::LEDGER, pair, amount_in)?;

        let out = amount_in.mul_ratio(self.rate_num, self.rate_den);
        if out < min_out {
            return Err(MarketError::SlippageExceeded {
                min: min_out.raw(),
                got: out.raw(),
            });
        }
        self.debit_base(pair, out)?;
        self.credit_base(to, out);
        Ok(out)
    }

    fn add_liquidity(
        &mut self,
        token_amount: Amount,
        base_amount: Amount,
        to: Address,
        hooks: &mut dyn TokenHooks,
    ) -> Result<(), MarketError> {
        let pair = self.pair()?;

        hooks.transfer(Address::LEDGER, pair, token_amount)?;
        self.debit_base(Address::LEDGER, base_amount)?;
        self.credit_base(pair, base_amount);

        // LP receipt measured in token units supplied; enough for observers.
        let slot = self.lp_receipts.entry(to).or_insert(Amount::ZERO);
        *slot = *slot + token_amount;
        Ok(())
    }

    fn base_balance_of(&self, account: &Address) -> Amount {
        self.base_balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn sweep_base(&mut self, from: Address, to: Address) -> Result<Amount, MarketError> {
        let amount = self.base_balance_of(&from);
        if !amount.is_zero() {
            self.base_balances.remove(&from);
            self.credit_base(to, amount);
        }
        Ok(amount)
    }
}
