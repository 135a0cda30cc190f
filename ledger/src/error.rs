use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// State-class error: the account does not hold enough to cover the debit.
    #[error("insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: u128, have: u128 },

    #[error("insufficient allowance: need {need}, have {have}")]
    InsufficientAllowance { need: u128, have: u128 },

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("transfer to the zero address")]
    ZeroAddressTarget,
}
