//! Genesis configuration for a new fee ledger.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tariff_types::{Address, Amount, GENESIS_SUPPLY};

/// Construction parameters. The market router address is not here — it
/// comes from the market collaborator itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Display name of the asset.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// The single privileged principal; receives the entire minted supply.
    pub admin: Address,
    /// Treasury (marketing) wallet receiving converted fee proceeds.
    pub treasury: Address,
    /// Supply minted once to `admin`; defaults to [`GENESIS_SUPPLY`].
    pub supply: Amount,
}

impl GenesisConfig {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        admin: Address,
        treasury: Address,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            admin,
            treasury,
            supply: GENESIS_SUPPLY,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), EngineError> {
        if self.name.is_empty() {
            return Err(EngineError::InvalidGenesis("display name is empty"));
        }
        if self.symbol.is_empty() {
            return Err(EngineError::InvalidGenesis("symbol is empty"));
        }
        if self.admin.is_zero() || self.treasury.is_zero() {
            return Err(EngineError::ZeroAddress);
        }
        if self.supply.is_zero() {
            return Err(EngineError::InvalidGenesis("supply is zero"));
        }
        Ok(())
    }
}
