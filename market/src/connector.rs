//! The two traits that form the market boundary.

use crate::error::MarketError;
use tariff_types::{Address, Amount};

/// Token-side operations a market implementation may invoke while executing
/// a swap or liquidity supply.
///
/// This is the reentrancy seam: a market calling `transfer` here re-enters
/// the engine's transfer path mid-cycle, exactly the hazard the conversion
/// lock guards against. Implementations of [`Market`] move tokens only
/// through these hooks, never by touching the ledger directly.
pub trait TokenHooks {
    /// Move tokens through the engine's ordinary transfer path.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), MarketError>;

    /// Current token balance of `account`.
    fn balance_of(&self, account: &Address) -> Amount;
}

/// The external automated market maker.
///
/// Base-currency accounting lives entirely on this side of the boundary —
/// the token ledger never holds base currency itself, it only directs
/// where swap proceeds go.
pub trait Market {
    /// The router address, fixed for the market's life. Seeded into the
    /// limit-exclusion set at engine construction.
    fn router_address(&self) -> Address;

    /// Create (or look up) the pair pooling `token` against the base
    /// currency. Called exactly once, at engine construction.
    fn create_pair(&mut self, token: Address) -> Result<Address, MarketError>;

    /// Swap exactly `amount_in` tokens for base currency, delivering the
    /// proceeds to `to`. Fails with `SlippageExceeded` when the proceeds
    /// fall below `min_out`.
    fn swap_exact_tokens_for_base(
        &mut self,
        amount_in: Amount,
        min_out: Amount,
        to: Address,
        hooks: &mut dyn TokenHooks,
    ) -> Result<Amount, MarketError>;

    /// Supply `token_amount` + `base_amount` as pooled liquidity, crediting
    /// the liquidity-provider receipt to `to`. The base side is drawn from
    /// the ledger account's base balance, funded by the preceding half-swap.
    fn add_liquidity(
        &mut self,
        token_amount: Amount,
        base_amount: Amount,
        to: Address,
        hooks: &mut dyn TokenHooks,
    ) -> Result<(), MarketError>;

    /// Base-currency balance held by `account` on the market side.
    fn base_balance_of(&self, account: &Address) -> Amount;

    /// Sweep `from`'s entire base balance to `to`, returning the amount
    /// moved. Backs the engine's native-currency recovery path.
    fn sweep_base(&mut self, from: Address, to: Address) -> Result<Amount, MarketError>;
}
