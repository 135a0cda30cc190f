//! Administrative control surface.
//!
//! Every mutator takes the caller's identity explicitly and requires the
//! admin role — there is no ambient authority. Each successful mutation
//! emits a notification carrying the new value(s).

use crate::engine::{FeeLedger, ADMIN_ROLE};
use crate::error::EngineError;
use tariff_market::Market;
use tariff_types::{Address, Amount, Event};

impl<M: Market> FeeLedger<M> {
    pub(crate) fn ensure_admin(&self, caller: Address) -> Result<(), EngineError> {
        if caller != self.core.admin {
            return Err(EngineError::Unauthorized {
                caller,
                required: ADMIN_ROLE,
            });
        }
        Ok(())
    }

    fn ensure_fee_bound(total_pct: u8) -> Result<(), EngineError> {
        if total_pct > 100 {
            return Err(EngineError::FeeTooHigh { total_pct });
        }
        Ok(())
    }

    pub fn enable_trading(&mut self, caller: Address, enabled: bool) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.trading_enabled = enabled;
        tracing::debug!(enabled, "trading gate updated");
        self.core.emit(Event::TradingEnabled(enabled));
        Ok(())
    }

    pub fn update_buy_fees(
        &mut self,
        caller: Address,
        liquidity_pct: u8,
        treasury_pct: u8,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        Self::ensure_fee_bound(liquidity_pct.saturating_add(treasury_pct))?;
        self.core.fees.buy_liquidity_pct = liquidity_pct;
        self.core.fees.buy_treasury_pct = treasury_pct;
        self.core.emit(Event::BuyFeesUpdated {
            liquidity_pct,
            treasury_pct,
        });
        Ok(())
    }

    pub fn update_sell_fees(
        &mut self,
        caller: Address,
        liquidity_pct: u8,
        treasury_pct: u8,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        Self::ensure_fee_bound(liquidity_pct.saturating_add(treasury_pct))?;
        self.core.fees.sell_liquidity_pct = liquidity_pct;
        self.core.fees.sell_treasury_pct = treasury_pct;
        self.core.emit(Event::SellFeesUpdated {
            liquidity_pct,
            treasury_pct,
        });
        Ok(())
    }

    pub fn update_wallet_to_wallet_fee(
        &mut self,
        caller: Address,
        pct: u8,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        Self::ensure_fee_bound(pct)?;
        self.core.fees.wallet_to_wallet_pct = pct;
        self.core.emit(Event::WalletToWalletFeeUpdated { pct });
        Ok(())
    }

    pub fn update_max_buy(&mut self, caller: Address, max: Amount) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.limits.max_buy = max;
        self.core.emit(Event::MaxBuyUpdated(max));
        Ok(())
    }

    pub fn update_max_sell(&mut self, caller: Address, max: Amount) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.limits.max_sell = max;
        self.core.emit(Event::MaxSellUpdated(max));
        Ok(())
    }

    pub fn update_max_wallet(&mut self, caller: Address, max: Amount) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.limits.max_wallet = max;
        self.core.emit(Event::MaxWalletUpdated(max));
        Ok(())
    }

    pub fn update_swap_trigger(
        &mut self,
        caller: Address,
        trigger: Amount,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.limits.swap_trigger = trigger;
        self.core.emit(Event::SwapTriggerUpdated(trigger));
        Ok(())
    }

    pub fn update_swap_enabled(
        &mut self,
        caller: Address,
        enabled: bool,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.swap_enabled = enabled;
        self.core.emit(Event::SwapEnabledUpdated(enabled));
        Ok(())
    }

    pub fn set_treasury_wallet(
        &mut self,
        caller: Address,
        treasury: Address,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        if treasury.is_zero() {
            return Err(EngineError::ZeroAddress);
        }
        self.core.treasury = treasury;
        self.core.emit(Event::TreasuryWalletUpdated(treasury));
        Ok(())
    }

    pub fn set_lp_token_receiver(
        &mut self,
        caller: Address,
        receiver: Address,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        if receiver.is_zero() {
            return Err(EngineError::ZeroAddress);
        }
        self.core.lp_token_receiver = receiver;
        self.core.emit(Event::LpTokenReceiverUpdated(receiver));
        Ok(())
    }

    pub fn exclude_from_fees(
        &mut self,
        caller: Address,
        account: Address,
        excluded: bool,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.registry.set_fee_exempt(account, excluded);
        self.core.emit(Event::ExcludedFromFees { account, excluded });
        Ok(())
    }

    pub fn exclude_from_limits(
        &mut self,
        caller: Address,
        account: Address,
        excluded: bool,
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.registry.set_limit_exempt(account, excluded);
        self.core.emit(Event::ExcludedFromLimits { account, excluded });
        Ok(())
    }

    /// All-or-nothing batch: one aggregate notification on success.
    pub fn add_abusers(&mut self, caller: Address, batch: &[Address]) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.registry.add_abusers(batch)?;
        self.core.emit(Event::AbusersAdded(batch.to_vec()));
        Ok(())
    }

    pub fn remove_abusers(
        &mut self,
        caller: Address,
        batch: &[Address],
    ) -> Result<(), EngineError> {
        self.ensure_admin(caller)?;
        self.core.registry.remove_abusers(batch)?;
        self.core.emit(Event::AbusersRemoved(batch.to_vec()));
        Ok(())
    }

    /// Recover a foreign token stranded in the ledger's account. Refuses
    /// the ledger's own asset — that balance is user fee revenue.
    pub fn withdraw_foreign_asset(
        &mut self,
        caller: Address,
        asset: Address,
        to: Address,
    ) -> Result<Amount, EngineError> {
        self.ensure_admin(caller)?;
        if asset.is_zero() {
            return Err(EngineError::ZeroAddress);
        }
        if asset == Address::LEDGER {
            return Err(EngineError::SelfAssetWithdrawal);
        }
        let amount = self
            .core
            .foreign_holdings
            .remove(&asset)
            .unwrap_or(Amount::ZERO);
        self.core
            .emit(Event::ForeignAssetWithdrawn { asset, to, amount });
        Ok(amount)
    }

    /// Sweep the ledger account's base-currency balance to `to`.
    pub fn withdraw_native_balance(
        &mut self,
        caller: Address,
        to: Address,
    ) -> Result<Amount, EngineError> {
        self.ensure_admin(caller)?;
        let amount = self.market.sweep_base(Address::LEDGER, to)?;
        self.core.emit(Event::NativeWithdrawn { to, amount });
        Ok(amount)
    }
}
