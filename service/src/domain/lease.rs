//! [`LeaseAgreement`] definitions.

use std::ops;

use common::{unit, DateTime, DateTimeOf};
use derive_more::{
    Display, Error, From, FromStr as DeriveFromStr, Into,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{property, user};

/// Agreement of a resident to rent a [`Property`] for a fixed term.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug)]
pub struct LeaseAgreement {
    /// ID of this [`LeaseAgreement`].
    pub id: Id,

    /// ID of the leased [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// ID of the [`User`] renting the [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    /// [`User`]: crate::domain::User
    pub resident_id: user::Id,

    /// [`DateTime`] when this [`LeaseAgreement`] starts.
    pub starts_at: StartDateTime,

    /// Total duration of this [`LeaseAgreement`] in [`Months`], including
    /// renewals.
    pub duration: Months,

    /// Monthly rent agreed in this [`LeaseAgreement`].
    pub monthly_rent: common::Money,

    /// [`DateTime`] when this [`LeaseAgreement`] ends.
    pub ends_at: EndDateTime,

    /// [`DateTime`] when this [`LeaseAgreement`] was terminated early, if it
    /// was.
    pub terminated_at: Option<TerminationDateTime>,
}

impl LeaseAgreement {
    /// Creates a new [`LeaseAgreement`].
    ///
    /// # Errors
    ///
    /// If the computed end date is out of the representable range.
    pub fn new(
        property_id: property::Id,
        resident_id: user::Id,
        starts_at: StartDateTime,
        duration: Months,
        monthly_rent: common::Money,
    ) -> Result<Self, OutOfRangeError> {
        let ends_at = Self::end_of(starts_at, duration)?;
        Ok(Self {
            id: Id::new(),
            property_id,
            resident_id,
            starts_at,
            duration,
            monthly_rent,
            ends_at,
            terminated_at: None,
        })
    }

    /// Extends this [`LeaseAgreement`] by the provided number of [`Months`],
    /// recomputing its end date from the original start date.
    ///
    /// # Errors
    ///
    /// If the recomputed end date is out of the representable range.
    pub fn renew(&mut self, extra: Months) -> Result<(), OutOfRangeError> {
        let duration = self.duration + extra;
        self.ends_at = Self::end_of(self.starts_at, duration)?;
        self.duration = duration;
        Ok(())
    }

    /// Terminates this [`LeaseAgreement`] now, cutting its end date short.
    ///
    /// No-op if this [`LeaseAgreement`] has been terminated already.
    pub fn terminate(&mut self) {
        if self.terminated_at.is_none() {
            let now = DateTime::now();
            self.ends_at = now.coerce();
            self.terminated_at = Some(now.coerce());
        }
    }

    /// Indicates whether this [`LeaseAgreement`] is active at the moment.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.terminated_at.is_none()
            && DateTime::now() < self.ends_at.coerce()
    }

    /// Computes the end date of a lease starting at the provided `starts_at`
    /// [`DateTime`] and lasting the provided `duration`.
    fn end_of(
        starts_at: StartDateTime,
        duration: Months,
    ) -> Result<EndDateTime, OutOfRangeError> {
        starts_at
            .checked_add_months(duration.into())
            .map(DateTimeOf::coerce)
            .ok_or(OutOfRangeError)
    }
}

/// Error of a [`LeaseAgreement`] end date not fitting the representable range.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`LeaseAgreement` end date is out of the representable range")]
pub struct OutOfRangeError;

/// ID of a [`LeaseAgreement`].
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

/// Duration of a [`LeaseAgreement`] in months.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Months(u32);

impl ops::Add for Months {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Type marker of a [`DateTime`] when a [`LeaseAgreement`] starts.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Type marker of a [`DateTime`] when a [`LeaseAgreement`] ends.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// [`DateTime`] when a [`LeaseAgreement`] starts.
pub type StartDateTime = DateTimeOf<(LeaseAgreement, Start)>;

/// [`DateTime`] when a [`LeaseAgreement`] ends.
pub type EndDateTime = DateTimeOf<(LeaseAgreement, End)>;

/// [`DateTime`] when a [`LeaseAgreement`] was terminated early.
pub type TerminationDateTime = DateTimeOf<(LeaseAgreement, unit::Deletion)>;
