//! Date and time utilities.

use std::{
    cmp::Ordering, marker::PhantomData, ops, sync::LazyLock, time::Duration,
};

use derive_more::{Debug, Display, Error};
use time::{format_description::FormatItem, Month};

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// Format description of a `YYYY-MM-DD` calendar date.
static DATE_FORMAT: LazyLock<Vec<FormatItem<'static>>> = LazyLock::new(|| {
    time::format_description::parse("[year]-[month]-[day]")
        .expect("valid format description")
});

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`DateTime`] at midnight UTC of the provided `YYYY-MM-DD`
    /// calendar date.
    ///
    /// # Errors
    ///
    /// If the provided string is not a valid `YYYY-MM-DD` calendar date.
    pub fn from_date_str(input: &str) -> Result<Self, ParseError> {
        let date =
            time::Date::parse(input, &DATE_FORMAT).map_err(ParseError)?;
        Ok(Self {
            inner: date.midnight().assume_utc(),
            _of: PhantomData,
        })
    }

    /// Formats the calendar date of this [`DateTime`] as `YYYY-MM-DD`.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn format_date(&self) -> String {
        self.inner.date().format(&DATE_FORMAT).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as a calendar date: {e}")
        })
    }

    /// Adds the provided number of calendar months to this [`DateTime`].
    ///
    /// The day of the month is clamped to the length of the target month
    /// (leap years respected), so adding 1 month to January 31 lands on
    /// February 29 or 28.
    ///
    /// [`None`] is returned if the result falls outside the representable
    /// calendar range.
    #[must_use]
    pub fn checked_add_months(self, months: u32) -> Option<Self> {
        let date = self.inner.date();

        let month0 =
            i64::from(u8::from(date.month())) - 1 + i64::from(months);
        let year =
            i32::try_from(i64::from(date.year()) + month0.div_euclid(12))
                .ok()?;
        let month =
            Month::try_from(u8::try_from(month0.rem_euclid(12) + 1).ok()?)
                .ok()?;
        let day = date.day().min(time::util::days_in_year_month(year, month));

        let date = time::Date::from_calendar_date(year, month, day).ok()?;
        Some(Self {
            inner: self.inner.replace_date(date),
            _of: PhantomData,
        })
    }

    /// Returns the number of whole days elapsed since the `earlier`
    /// [`DateTime`].
    ///
    /// Negative if the `earlier` one is actually in the future.
    #[must_use]
    pub fn whole_days_since(self, earlier: Self) -> i64 {
        (self.inner - earlier.inner).whole_days()
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`DateTime`] from a calendar date string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid calendar date: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> ops::Add<Duration> for DateTimeOf<Of> {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self {
            inner: self.inner + rhs,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> ops::Sub<Duration> for DateTimeOf<Of> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self {
            inner: self.inner - rhs,
            _of: PhantomData,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::DateTime;

    fn date(s: &str) -> DateTime {
        DateTime::from_date_str(s).unwrap()
    }

    #[test]
    fn parses_calendar_dates() {
        assert!(DateTime::from_date_str("2025-01-31").is_ok());
        assert!(DateTime::from_date_str("2024-02-29").is_ok());

        assert!(DateTime::from_date_str("2023-02-29").is_err());
        assert!(DateTime::from_date_str("2025-13-01").is_err());
        assert!(DateTime::from_date_str("not-a-date").is_err());
        assert!(DateTime::from_date_str("2025/01/31").is_err());
        assert!(DateTime::from_date_str("").is_err());
    }

    #[test]
    fn adds_months_clamping_day() {
        assert_eq!(
            date("2024-01-31").checked_add_months(1).unwrap().format_date(),
            "2024-02-29",
        );
        assert_eq!(
            date("2023-01-31").checked_add_months(1).unwrap().format_date(),
            "2023-02-28",
        );
        assert_eq!(
            date("2024-03-31").checked_add_months(11).unwrap().format_date(),
            "2025-02-28",
        );
        assert_eq!(
            date("2024-10-15").checked_add_months(12).unwrap().format_date(),
            "2025-10-15",
        );
        assert_eq!(
            date("2024-11-30").checked_add_months(26).unwrap().format_date(),
            "2027-01-30",
        );
        assert_eq!(
            date("2024-05-05").checked_add_months(0).unwrap().format_date(),
            "2024-05-05",
        );
    }

    #[test]
    fn month_addition_out_of_range_is_none() {
        assert!(date("2024-01-01").checked_add_months(u32::MAX).is_none());
    }

    #[test]
    fn counts_whole_days() {
        assert_eq!(
            date("2025-03-10").whole_days_since(date("2025-03-01")),
            9,
        );
        assert_eq!(
            date("2025-03-01").whole_days_since(date("2025-03-10")),
            -9,
        );
    }
}
