//! Liquidity conversion subsystem.
//!
//! Two states, Idle and Converting, governed by the `converting` flag on
//! the core. The flag is set before any external call and cleared on every
//! exit path — `maybe_convert` wraps the fallible cycle body so a failed
//! cycle can never wedge future transfers, while the failure itself still
//! propagates and aborts the enclosing transfer.

use crate::core::Core;
use crate::error::EngineError;
use tariff_market::Market;
use tariff_types::{Address, Amount, Event};

/// Run a conversion cycle if this transfer qualifies: a sell, lock free,
/// conversion enabled, and enough fee revenue accumulated.
pub(crate) fn maybe_convert<M: Market>(
    core: &mut Core,
    market: &mut M,
    recipient: Address,
) -> Result<(), EngineError> {
    let accrued = core.balances.balance(&Address::LEDGER);
    let should = recipient == core.pair
        && !core.converting
        && core.swap_enabled
        && accrued >= core.limits.swap_trigger;
    if !should {
        return Ok(());
    }

    core.converting = true;
    let result = run_cycle(core, market);
    core.converting = false;

    if let Err(err) = &result {
        tracing::warn!(error = %err, "conversion cycle aborted, rolling back transfer");
    }
    result
}

/// One bounded conversion batch: split by the current fee ratio, swap half
/// the liquidity share, pool it with the retained half, convert the
/// treasury share fully and forward the proceeds.
fn run_cycle<M: Market>(core: &mut Core, market: &mut M) -> Result<(), EngineError> {
    // Bounded batch; excess stays for the next cycle. A zero trigger with
    // nothing accrued means there is nothing to convert.
    let accrued = core.balances.balance(&Address::LEDGER);
    let batch = accrued.min(core.limits.swap_trigger);
    if batch.is_zero() {
        return Ok(());
    }

    // Running-ratio split: whatever is configured *now* for the side that
    // most recently accrued, not the ratio in force per accrual.
    let (liq_pct, treasury_pct) = core.fees.split_for(core.accrual_side);
    let total = liq_pct as u128 + treasury_pct as u128;
    if total == 0 {
        return Ok(());
    }

    let liquidity_share = batch.mul_ratio(liq_pct as u128, total);
    let treasury_share = batch - liquidity_share;

    let half = liquidity_share.div(2);
    let retained = liquidity_share - half;

    let mut base_received = Amount::ZERO;
    let mut tokens_into_liquidity = Amount::ZERO;
    if !half.is_zero() {
        base_received =
            market.swap_exact_tokens_for_base(half, Amount::ZERO, Address::LEDGER, core)?;
        market.add_liquidity(retained, base_received, core.lp_token_receiver, core)?;
        tokens_into_liquidity = retained;
    }

    if !treasury_share.is_zero() {
        let out =
            market.swap_exact_tokens_for_base(treasury_share, Amount::ZERO, core.treasury, core)?;
        base_received = base_received + out;
    }

    let tokens_swapped = half + treasury_share;
    tracing::debug!(
        tokens_swapped = %tokens_swapped,
        base_received = %base_received,
        tokens_into_liquidity = %tokens_into_liquidity,
        "conversion cycle complete"
    );
    core.emit(Event::SwapAndLiquify {
        tokens_swapped,
        base_received,
        tokens_into_liquidity,
    });
    Ok(())
}
