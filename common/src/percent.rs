//! [`Percent`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::Money;

/// Percentage in the `[0, 100]` range.
///
/// Always displayed with two decimal places (`50.00%`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be greater than `0` and less than `100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Creates a new [`Percent`] expressing `part` out of `total`.
    ///
    /// [`None`] is returned if the `total` is zero, or the `part` exceeds it.
    #[must_use]
    pub fn ratio(part: u32, total: u32) -> Option<Self> {
        (total != 0)
            .then(|| {
                Decimal::from(part) * Decimal::ONE_HUNDRED
                    / Decimal::from(total)
            })
            .and_then(Self::new)
    }

    /// Applies this [`Percent`] to the provided [`Money`] amount.
    #[must_use]
    pub fn of(self, amount: Money) -> Money {
        (amount * (self.0 / Decimal::ONE_HUNDRED)).round_dp(2)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0.round_dp(2))
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}
