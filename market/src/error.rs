use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    #[error("market pair has not been created")]
    PairNotCreated,

    #[error("market pair already exists")]
    PairAlreadyExists,

    #[error("insufficient liquidity depth: need {need}, have {have}")]
    InsufficientLiquidity { need: u128, have: u128 },

    #[error("slippage bound violated: minimum {min}, got {got}")]
    SlippageExceeded { min: u128, got: u128 },

    /// A token-side operation invoked through the callback seam failed.
    #[error("token callback failed: {0}")]
    Token(String),
}
