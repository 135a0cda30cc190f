//! Token amount type.
//!
//! Amounts are fixed-point integers (u128) with 18 implied decimal places.
//! The smallest unit is 1 raw. All fee math is integer division truncating
//! toward zero — never floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A token amount in raw units (18 implied decimals).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Sentinel for an unlimited allowance; never decremented on spend.
    pub const MAX: Self = Self(u128::MAX);

    /// Raw units per whole token.
    pub const UNIT: u128 = 1_000_000_000_000_000_000;

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Whole tokens to raw units.
    pub const fn from_whole(units: u128) -> Self {
        Self(units * Self::UNIT)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `floor(raw * pct / 100)`, exact for any `raw` when `pct <= 100`.
    ///
    /// Split into quotient and remainder by 100 so the intermediate product
    /// cannot overflow: `raw = 100q + r` gives
    /// `floor(raw * pct / 100) = q * pct + floor(r * pct / 100)`.
    pub fn percent(self, pct: u8) -> Self {
        let q = self.0 / 100;
        let r = self.0 % 100;
        Self(q * pct as u128 + r * pct as u128 / 100)
    }

    /// Integer division by a nonzero scalar, truncating toward zero.
    pub fn div(self, divisor: u128) -> Self {
        Self(self.0 / divisor)
    }

    /// `floor(raw * num / den)`. Used for the liquidity : treasury split of
    /// a conversion batch. `den` must be nonzero and `num <= den`.
    pub fn mul_ratio(self, num: u128, den: u128) -> Self {
        let q = self.0 / den;
        let r = self.0 % den;
        Self(q * num + r * num / den)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
