//! [`RentalContract`] definitions.

use common::{unit, DateTime, DateTimeOf, Money, Percent};
use derive_more::{Display, From, FromStr as DeriveFromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{property, user};

/// Contract of a rental company managing an owner's [`Property`] for a fee.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug)]
pub struct RentalContract {
    /// ID of this [`RentalContract`].
    pub id: Id,

    /// ID of the [`User`] owning the managed [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    /// [`User`]: crate::domain::User
    pub owner_id: user::Id,

    /// ID of the managed [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// [`DateTime`] when this [`RentalContract`] was signed.
    pub signed_at: CreationDateTime,

    /// [`DateTime`] when this [`RentalContract`] expires.
    pub expires_at: ExpirationDateTime,

    /// Commission fee of this [`RentalContract`] as a [`Percent`] of the
    /// monthly rent.
    pub fee: Percent,

    /// [`DateTime`] when this [`RentalContract`] was terminated early, if it
    /// was.
    pub terminated_at: Option<TerminationDateTime>,
}

impl RentalContract {
    /// Creates a new [`RentalContract`] signed now.
    #[must_use]
    pub fn new(
        owner_id: user::Id,
        property_id: property::Id,
        expires_at: ExpirationDateTime,
        fee: Percent,
    ) -> Self {
        Self {
            id: Id::new(),
            owner_id,
            property_id,
            signed_at: DateTimeOf::now(),
            expires_at,
            fee,
            terminated_at: None,
        }
    }

    /// Returns the current [`Status`] of this [`RentalContract`].
    #[must_use]
    pub fn status(&self) -> Status {
        if self.terminated_at.is_some() {
            Status::Terminated
        } else if DateTime::now() > self.expires_at.coerce() {
            Status::Completed
        } else {
            Status::Active
        }
    }

    /// Indicates whether this [`RentalContract`] is in force at the moment.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let now = DateTime::now();
        self.terminated_at.is_none()
            && self.signed_at.coerce() <= now
            && now <= self.expires_at.coerce()
    }

    /// Commission earned from the provided monthly rent `price` under this
    /// [`RentalContract`].
    ///
    /// Zero while this [`RentalContract`] is not in force.
    #[must_use]
    pub fn commission(&self, price: Money) -> Money {
        if self.is_active() {
            self.fee.of(price)
        } else {
            Money::ZERO
        }
    }

    /// Terminates this [`RentalContract`] now.
    ///
    /// No-op if this [`RentalContract`] has been terminated already.
    pub fn terminate(&mut self) {
        if self.terminated_at.is_none() {
            self.terminated_at = Some(DateTimeOf::now());
        }
    }
}

/// Status of a [`RentalContract`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// [`RentalContract`] is in force.
    Active = 1,

    /// [`RentalContract`] has reached its expiration date.
    Completed = 2,

    /// [`RentalContract`] was terminated before its expiration date.
    Terminated = 3,
}

/// ID of a [`RentalContract`].
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

/// Type marker of a [`DateTime`] when a [`RentalContract`] expires.
#[derive(Clone, Copy, Debug)]
pub struct Expiration;

/// [`DateTime`] when a [`RentalContract`] was signed.
pub type CreationDateTime = DateTimeOf<(RentalContract, unit::Creation)>;

/// [`DateTime`] when a [`RentalContract`] expires.
pub type ExpirationDateTime = DateTimeOf<(RentalContract, Expiration)>;

/// [`DateTime`] when a [`RentalContract`] was terminated early.
pub type TerminationDateTime = DateTimeOf<(RentalContract, unit::Deletion)>;
