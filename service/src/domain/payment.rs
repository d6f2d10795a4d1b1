//! [`Payment`] definitions.

use std::ops::RangeInclusive;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, DateTimeOf, Money};
use derive_more::{
    Display, Error, From, FromStr as DeriveFromStr, Into,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::lease;

/// Rent payment under a [`LeaseAgreement`].
///
/// [`LeaseAgreement`]: crate::domain::LeaseAgreement
#[derive(Clone, Debug)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// ID of the [`LeaseAgreement`] this [`Payment`] is made under.
    ///
    /// [`LeaseAgreement`]: crate::domain::LeaseAgreement
    pub lease_id: lease::Id,

    /// Base amount of this [`Payment`], excluding any [`LateFee`].
    pub amount: Money,

    /// [`DateTime`] when this [`Payment`] is due.
    pub due_at: DueDateTime,

    /// [`DateTime`] when this [`Payment`] was made, if it was.
    pub paid_at: Option<PaymentDateTime>,

    /// Current [`Status`] of this [`Payment`].
    pub status: Status,

    /// [`LateFee`] assessed on this [`Payment`], if any.
    pub late_fee: Option<LateFee>,
}

impl Payment {
    /// Creates a new pending [`Payment`].
    #[must_use]
    pub fn new(lease_id: lease::Id, amount: Money, due_at: DueDateTime) -> Self {
        Self {
            id: Id::new(),
            lease_id,
            amount,
            due_at,
            paid_at: None,
            status: Status::Pending,
            late_fee: None,
        }
    }

    /// Processes this [`Payment`] as made at the provided [`DateTime`].
    ///
    /// A [`Payment`] made past its due date becomes [`Status::Late`] and gets
    /// a [`LateFee`] assessed.
    ///
    /// # Errors
    ///
    /// If this [`Payment`] has been processed already.
    pub fn process(
        &mut self,
        at: PaymentDateTime,
    ) -> Result<Status, AlreadyProcessedError> {
        if self.paid_at.is_some() {
            return Err(AlreadyProcessedError { id: self.id });
        }

        self.paid_at = Some(at);
        if at.coerce::<()>() <= self.due_at.coerce() {
            self.status = Status::Paid;
        } else {
            let days_late = u32::try_from(
                at.coerce::<()>()
                    .whole_days_since(self.due_at.coerce())
                    .max(1),
            )
            .unwrap_or(u32::MAX);
            self.late_fee = Some(LateFee::assess(self.amount, days_late));
            self.status = Status::Late;
        }
        Ok(self.status)
    }

    /// Total amount of this [`Payment`], including its [`LateFee`] (if any).
    #[must_use]
    pub fn total(&self) -> Money {
        self.amount + self.late_fee.map_or(Money::ZERO, |fee| fee.amount)
    }
}

/// Error of processing an already processed [`Payment`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`Payment(id: {id})` has been processed already")]
pub struct AlreadyProcessedError {
    /// ID of the already processed [`Payment`].
    #[error(not(source))]
    pub id: Id,
}

/// Fee assessed on a [`Payment`] made past its due date.
///
/// 5% of the base amount, plus 2% for every day beyond the first one.
#[derive(Clone, Copy, Debug)]
pub struct LateFee {
    /// Number of days the [`Payment`] was late by.
    pub days_late: u32,

    /// Assessed fee amount.
    pub amount: Money,
}

impl LateFee {
    /// Assesses a new [`LateFee`] on the provided base `amount` for the
    /// provided number of `days_late`.
    #[must_use]
    pub fn assess(amount: Money, days_late: u32) -> Self {
        let base = amount * Decimal::new(5, 2);
        let additional = if days_late > 1 {
            amount * (Decimal::new(2, 2) * Decimal::from(days_late - 1))
        } else {
            Money::ZERO
        };
        Self {
            days_late,
            amount: (base + additional).round_dp(2),
        }
    }
}

define_kind! {
    #[doc = "Status of a [`Payment`]."]
    enum Status {
        #[doc = "[`Payment`] hasn't been made yet."]
        Pending = 1,

        #[doc = "[`Payment`] was made on time."]
        Paid = 2,

        #[doc = "[`Payment`] was made past its due date."]
        Late = 3,
    }
}

/// ID of a [`Payment`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    DeriveFromStr,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Type marker of a [`DateTime`] when a [`Payment`] is due.
#[derive(Clone, Copy, Debug)]
pub struct Due;

/// Type marker of a [`DateTime`] when a [`Payment`] was made.
#[derive(Clone, Copy, Debug)]
pub struct Settlement;

/// [`DateTime`] when a [`Payment`] is due.
pub type DueDateTime = DateTimeOf<(Payment, Due)>;

/// [`DateTime`] when a [`Payment`] was made.
pub type PaymentDateTime = DateTimeOf<(Payment, Settlement)>;

/// History of [`Payment`]s made under a [`LeaseAgreement`].
///
/// [`LeaseAgreement`]: crate::domain::LeaseAgreement
#[derive(Clone, Debug, Default)]
pub struct PaymentHistory {
    /// Recorded [`Payment`]s, by due date.
    payments: Vec<Payment>,
}

impl PaymentHistory {
    /// Adds the provided [`Payment`] to this [`PaymentHistory`].
    pub fn add(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Returns all the [`Payment`]s of this [`PaymentHistory`].
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns the not-yet-made [`Payment`]s of this [`PaymentHistory`].
    pub fn unpaid(&self) -> impl Iterator<Item = &Payment> {
        self.payments.iter().filter(|p| p.status == Status::Pending)
    }

    /// Total amount collected by the processed [`Payment`]s of this
    /// [`PaymentHistory`], late fees included.
    #[must_use]
    pub fn total_paid(&self) -> Money {
        self.payments
            .iter()
            .filter(|p| p.paid_at.is_some())
            .map(Payment::total)
            .sum()
    }

    /// Total amount collected by the [`Payment`]s made within the provided
    /// period, late fees included.
    #[must_use]
    pub fn revenue_in(
        &self,
        period: RangeInclusive<common::DateTime>,
    ) -> Money {
        self.payments
            .iter()
            .filter(|p| {
                p.paid_at.is_some_and(|at| period.contains(&at.coerce()))
            })
            .map(Payment::total)
            .sum()
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Money};

    use crate::domain::lease;

    use super::{DueDateTime, Payment, PaymentHistory, Status};

    fn due(s: &str) -> DueDateTime {
        DateTime::from_date_str(s).unwrap().coerce()
    }

    fn payment(amount: &str, due_at: DueDateTime) -> Payment {
        Payment::new(lease::Id::new(), amount.parse().unwrap(), due_at)
    }

    #[test]
    fn on_time_payment_has_no_late_fee() {
        let mut payment = payment("1200", due("2025-03-01"));

        let status = payment
            .process(DateTime::from_date_str("2025-02-27").unwrap().coerce())
            .unwrap();

        assert_eq!(status, Status::Paid);
        assert!(payment.late_fee.is_none());
        assert_eq!(payment.total().to_string(), "1200.00");
    }

    #[test]
    fn late_payment_gets_fee_assessed() {
        let mut payment = payment("100", due("2025-03-01"));

        let status = payment
            .process(DateTime::from_date_str("2025-03-04").unwrap().coerce())
            .unwrap();

        assert_eq!(status, Status::Late);
        let fee = payment.late_fee.unwrap();
        assert_eq!(fee.days_late, 3);
        // 5% base plus 2% for each of the 2 days beyond the first.
        assert_eq!(fee.amount.to_string(), "9.00");
        assert_eq!(payment.total().to_string(), "109.00");
    }

    #[test]
    fn single_day_late_fee_is_base_only() {
        let mut payment = payment("100", due("2025-03-01"));

        _ = payment
            .process(DateTime::from_date_str("2025-03-02").unwrap().coerce())
            .unwrap();

        assert_eq!(payment.late_fee.unwrap().amount.to_string(), "5.00");
    }

    #[test]
    fn processing_twice_errors() {
        let mut payment = payment("1200", due("2025-03-01"));
        let paid_at = DateTime::from_date_str("2025-03-01").unwrap().coerce();

        _ = payment.process(paid_at).unwrap();

        assert!(payment.process(paid_at).is_err());
        assert_eq!(payment.status, Status::Paid);
    }

    #[test]
    fn history_sums_processed_payments_only() {
        let mut history = PaymentHistory::default();

        let mut on_time = payment("1000", due("2025-01-01"));
        _ = on_time
            .process(DateTime::from_date_str("2025-01-01").unwrap().coerce())
            .unwrap();
        history.add(on_time);

        let mut late = payment("100", due("2025-02-01"));
        _ = late
            .process(DateTime::from_date_str("2025-02-04").unwrap().coerce())
            .unwrap();
        history.add(late);

        history.add(payment("1000", due("2025-03-01")));

        assert_eq!(history.total_paid().to_string(), "1109.00");
        assert_eq!(history.unpaid().count(), 1);
    }

    #[test]
    fn revenue_is_filtered_by_settlement_date() {
        let mut history = PaymentHistory::default();

        let mut january = payment("1000", due("2025-01-01"));
        _ = january
            .process(DateTime::from_date_str("2025-01-01").unwrap().coerce())
            .unwrap();
        history.add(january);

        let mut march = payment("1000", due("2025-03-01"));
        _ = march
            .process(DateTime::from_date_str("2025-03-01").unwrap().coerce())
            .unwrap();
        history.add(march);

        let from = DateTime::from_date_str("2025-01-01").unwrap();
        let to = DateTime::from_date_str("2025-01-31").unwrap();
        assert_eq!(history.revenue_in(from..=to).to_string(), "1000.00");

        assert_eq!(history.total_paid().to_string(), "2000.00");
    }
}
