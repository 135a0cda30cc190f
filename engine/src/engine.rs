//! The fee-bearing ledger engine.

use crate::config::GenesisConfig;
use crate::core::Core;
use crate::error::EngineError;
use crate::swap;
use std::collections::HashMap;
use tariff_ledger::{Allowances, Balances};
use tariff_market::Market;
use tariff_registry::AccessRegistry;
use tariff_types::{Address, Amount, Event, FeeParams, LimitParams, TradeSide};

/// The single privileged role.
pub const ADMIN_ROLE: &str = "admin";

/// A fee-bearing value-transfer ledger bound to an external market.
///
/// Execution is strictly serial: each public operation runs to completion
/// before the next begins. The whole unit of work, core state and market
/// collaborator both, is checkpointed at the transfer boundary, so any
/// failure — validation, insufficient balance, or a market error deep
/// inside a conversion cycle — leaves no partial state behind on either
/// side.
pub struct FeeLedger<M: Market> {
    pub(crate) core: Core,
    pub(crate) market: M,
}

impl<M: Market> FeeLedger<M> {
    /// The ledger's own account, where fee revenue accumulates.
    pub const SELF: Address = Address::LEDGER;

    /// Construct the ledger: mint the supply to the admin, create the
    /// market pair, pre-approve the router, and seed the exclusion sets.
    pub fn new(config: GenesisConfig, mut market: M) -> Result<Self, EngineError> {
        config.validate()?;

        let router = market.router_address();
        if router.is_zero() {
            return Err(EngineError::ZeroAddress);
        }
        let pair = market.create_pair(Self::SELF)?;

        let balances = Balances::mint_genesis(config.admin, config.supply);

        // The router holds a standing unlimited approval of the ledger's
        // own tokens, granted once here.
        let mut allowances = Allowances::new();
        allowances.approve(Self::SELF, router, Amount::MAX);

        let mut registry = AccessRegistry::new();
        for account in [config.admin, Self::SELF, Address::BURN, config.treasury] {
            registry.set_fee_exempt(account, true);
        }
        for account in [config.admin, Self::SELF, pair, router] {
            registry.set_limit_exempt(account, true);
        }

        let mut core = Core {
            name: config.name,
            symbol: config.symbol,
            admin: config.admin,
            treasury: config.treasury,
            lp_token_receiver: config.admin,
            pair,
            router,
            balances,
            allowances,
            registry,
            fees: FeeParams::defaults(),
            limits: LimitParams::defaults_for_supply(config.supply),
            trading_enabled: false,
            swap_enabled: true,
            converting: false,
            accrual_side: TradeSide::Sell,
            foreign_holdings: HashMap::new(),
            events: Vec::new(),
        };
        core.emit(Event::Transfer {
            from: Address::ZERO,
            to: config.admin,
            amount: config.supply,
        });
        core.emit(Event::Approval {
            owner: Self::SELF,
            spender: router,
            amount: Amount::MAX,
        });

        Ok(Self { core, market })
    }

    /// Transfer `amount` from `sender` to `recipient`, applying fees and
    /// limits, possibly running a conversion cycle before returning.
    pub fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), EngineError>
    where
        M: Clone,
    {
        self.atomically(|core, market| {
            core.execute_transfer(sender, recipient, amount)?;
            swap::maybe_convert(core, market, recipient)
        })
    }

    /// Spend `caller`'s allowance from `from`, then transfer as usual.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), EngineError>
    where
        M: Clone,
    {
        self.atomically(|core, market| {
            core.allowances.spend(from, caller, amount)?;
            core.execute_transfer(from, to, amount)?;
            swap::maybe_convert(core, market, to)
        })
    }

    /// Grant `spender` an allowance over `owner`'s balance.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.core.allowances.approve(owner, spender, amount);
        self.core.emit(Event::Approval {
            owner,
            spender,
            amount,
        });
    }

    /// Checkpoint the core and the market, run `op`, restore both on
    /// failure. The market is part of the unit of work: a conversion cycle
    /// that dies after a successful swap or liquidity supply must not leave
    /// LP receipts or base-currency movements behind once the token side
    /// rolls back.
    fn atomically<F>(&mut self, op: F) -> Result<(), EngineError>
    where
        M: Clone,
        F: FnOnce(&mut Core, &mut M) -> Result<(), EngineError>,
    {
        let core_checkpoint = self.core.clone();
        let market_checkpoint = self.market.clone();
        match op(&mut self.core, &mut self.market) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.core = core_checkpoint;
                self.market = market_checkpoint;
                Err(err)
            }
        }
    }

    // ── Read surface ─────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.core.name
    }

    pub fn symbol(&self) -> &str {
        &self.core.symbol
    }

    pub fn admin(&self) -> Address {
        self.core.admin
    }

    pub fn treasury_wallet(&self) -> Address {
        self.core.treasury
    }

    pub fn lp_token_receiver(&self) -> Address {
        self.core.lp_token_receiver
    }

    pub fn pair_address(&self) -> Address {
        self.core.pair
    }

    pub fn router_address(&self) -> Address {
        self.core.router
    }

    pub fn total_supply(&self) -> Amount {
        self.core.balances.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.core.balances.balance(account)
    }

    /// Sum of every balance slot; equals `total_supply` by invariant.
    pub fn balance_sum(&self) -> Amount {
        self.core.balances.sum()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.core.allowances.allowance(owner, spender)
    }

    pub fn is_fee_exempt(&self, account: &Address) -> bool {
        self.core.registry.is_fee_exempt(account)
    }

    pub fn is_limit_exempt(&self, account: &Address) -> bool {
        self.core.registry.is_limit_exempt(account)
    }

    pub fn is_abuser(&self, account: &Address) -> bool {
        self.core.registry.is_abuser(account)
    }

    pub fn trading_enabled(&self) -> bool {
        self.core.trading_enabled
    }

    pub fn swap_enabled(&self) -> bool {
        self.core.swap_enabled
    }

    pub fn fees(&self) -> FeeParams {
        self.core.fees
    }

    pub fn limits(&self) -> LimitParams {
        self.core.limits
    }

    pub fn market(&self) -> &M {
        &self.market
    }

    pub fn foreign_holding(&self, asset: &Address) -> Amount {
        self.core
            .foreign_holdings
            .get(asset)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Model an external token contract crediting this ledger's account —
    /// the stranded-asset scenario the recovery path exists for.
    pub fn deposit_foreign_asset(&mut self, asset: Address, amount: Amount) {
        let slot = self
            .core
            .foreign_holdings
            .entry(asset)
            .or_insert(Amount::ZERO);
        *slot = *slot + amount;
    }

    /// Drain the buffered notifications.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.core.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.core.events
    }
}
