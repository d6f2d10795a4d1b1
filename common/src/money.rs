//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

use derive_more::{From, Into};
use rust_decimal::Decimal;

/// Amount of money.
///
/// Always displayed with two decimal places.
#[derive(
    Clone, Copy, Debug, Default, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Money(Decimal);

impl Money {
    /// [`Money`] amount of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] of the provided amount.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Rounds this [`Money`] to the provided number of decimal places.
    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }

    /// Indicates whether this [`Money`] amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self).map_err(|_| "invalid amount")
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Money;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(money("1500").to_string(), "1500.00");
        assert_eq!(money("1250.5").to_string(), "1250.50");
        assert_eq!(money("0").to_string(), "0.00");
        assert_eq!(money("1234.567").to_string(), "1234.57");
        assert_eq!(money("0.004").to_string(), "0.00");
    }

    #[test]
    fn from_str() {
        assert_eq!(money("123.45").amount(), Decimal::new(12345, 2));
        assert!("12,3".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(money("100") + money("20.50"), money("120.50"));
        assert_eq!(money("100") - money("20.50"), money("79.50"));
        assert_eq!(money("100") * Decimal::new(5, 2), money("5"));
        assert_eq!(
            [money("100"), money("200"), money("0.50")]
                .into_iter()
                .sum::<Money>(),
            money("300.50"),
        );
    }
}
