use tariff_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("zero address in deny-list batch")]
    ZeroAddress,

    #[error("address {0} is already on the deny-list")]
    AlreadyAbuser(Address),

    #[error("address {0} is not on the deny-list")]
    NotAbuser(Address),
}
