//! Core ledger state and the validated transfer path.
//!
//! `Core` owns everything the engine mutates in one atomic unit of work:
//! balances, allowances, the access registry, configuration, the event
//! buffer, and the conversion lock. It is `Clone` so the engine can
//! checkpoint it at an operation boundary and restore on failure.

use crate::error::EngineError;
use std::collections::HashMap;
use tariff_ledger::{Allowances, Balances};
use tariff_market::{MarketError, TokenHooks};
use tariff_registry::AccessRegistry;
use tariff_types::{Address, Amount, Event, FeeParams, LimitParams, TradeSide};

#[derive(Clone, Debug)]
pub(crate) struct Core {
    pub(crate) name: String,
    pub(crate) symbol: String,
    pub(crate) admin: Address,
    pub(crate) treasury: Address,
    /// Where liquidity-provider receipts go; may be the burn sink.
    pub(crate) lp_token_receiver: Address,
    pub(crate) pair: Address,
    pub(crate) router: Address,
    pub(crate) balances: Balances,
    pub(crate) allowances: Allowances,
    pub(crate) registry: AccessRegistry,
    pub(crate) fees: FeeParams,
    pub(crate) limits: LimitParams,
    pub(crate) trading_enabled: bool,
    pub(crate) swap_enabled: bool,
    /// Reentrancy lock: true only for the duration of a conversion cycle.
    pub(crate) converting: bool,
    /// Which side's fee configuration most recently accrued revenue.
    /// The conversion split uses this side's *current* ratio — a running
    /// approximation, not a per-accrual ledger.
    pub(crate) accrual_side: TradeSide,
    /// Foreign tokens stranded in the ledger's account, by asset address.
    pub(crate) foreign_holdings: HashMap<Address, Amount>,
    pub(crate) events: Vec<Event>,
}

impl Core {
    pub(crate) fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    fn is_fee_exempt_pair(&self, sender: &Address, recipient: &Address) -> bool {
        self.registry.is_fee_exempt(sender) || self.registry.is_fee_exempt(recipient)
    }

    /// Buy/sell classification; `None` is wallet-to-wallet.
    fn classify(&self, sender: &Address, recipient: &Address) -> Option<TradeSide> {
        if *recipient == self.pair {
            Some(TradeSide::Sell)
        } else if *sender == self.pair {
            Some(TradeSide::Buy)
        } else {
            None
        }
    }

    /// The full validated transfer path: ordered checks, fee computation,
    /// then the ledger mutation and notifications.
    ///
    /// Runs both for external transfers and for the market's internal
    /// movements during a conversion cycle (the ledger account and the
    /// pair are fee- and limit-exempt, so those inner transfers pass
    /// through untaxed and uncapped).
    pub(crate) fn execute_transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), EngineError> {
        if recipient.is_zero() {
            return Err(EngineError::TransferToZeroAddress);
        }
        if amount.is_zero() {
            return Err(EngineError::ZeroAmount);
        }

        let fee_exempt = self.is_fee_exempt_pair(&sender, &recipient);
        if !fee_exempt && !self.trading_enabled {
            return Err(EngineError::TradingNotEnabled);
        }

        if self.registry.is_abuser(&sender) {
            return Err(EngineError::AddressIsAbuser(sender));
        }
        if self.registry.is_abuser(&recipient) {
            return Err(EngineError::AddressIsAbuser(recipient));
        }

        let side = self.classify(&sender, &recipient);

        if side == Some(TradeSide::Sell)
            && !self.registry.is_limit_exempt(&sender)
            && amount > self.limits.max_sell
        {
            return Err(EngineError::SellExceedsMax {
                amount: amount.raw(),
                max: self.limits.max_sell.raw(),
            });
        }
        if side == Some(TradeSide::Buy)
            && !self.registry.is_limit_exempt(&recipient)
            && amount > self.limits.max_buy
        {
            return Err(EngineError::BuyExceedsMax {
                amount: amount.raw(),
                max: self.limits.max_buy.raw(),
            });
        }

        let fee_pct = if fee_exempt {
            0
        } else {
            match side {
                Some(side) => self.fees.total_for(side),
                None => self.fees.wallet_to_wallet_pct,
            }
        };
        let fee = amount.percent(fee_pct);
        let net = amount - fee;

        // Wallet cap uses the net, post-fee amount; the pair itself is
        // never capped.
        if recipient != self.pair && !self.registry.is_limit_exempt(&recipient) {
            let would_hold = self.balances.balance(&recipient) + net;
            if would_hold > self.limits.max_wallet {
                return Err(EngineError::MaxWalletExceeded {
                    would_hold: would_hold.raw(),
                    max: self.limits.max_wallet.raw(),
                });
            }
        }

        self.balances.debit(sender, amount)?;
        if !net.is_zero() {
            self.balances.credit(recipient, net)?;
        }
        self.emit(Event::Transfer {
            from: sender,
            to: recipient,
            amount: net,
        });

        if !fee.is_zero() {
            // Fee retention is an ordinary credit to the ledger's own
            // account, with its own notification.
            self.balances.credit(Address::LEDGER, fee)?;
            self.emit(Event::Transfer {
                from: sender,
                to: Address::LEDGER,
                amount: fee,
            });
            if let Some(side) = side {
                self.accrual_side = side;
            }
        }

        Ok(())
    }
}

/// The market moves tokens through the ordinary transfer path; engine-side
/// errors cross the seam as collaborator errors.
impl TokenHooks for Core {
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), MarketError> {
        self.execute_transfer(from, to, amount)
            .map_err(|err| MarketError::Token(err.to_string()))
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.balance(account)
    }
}
