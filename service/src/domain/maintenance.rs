//! [`MaintenanceRequest`] and [`Renovation`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{
    AsRef, Display, Error, From, FromStr as DeriveFromStr, Into,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{property, Event};

/// Request to fix something in a [`Property`].
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug)]
pub struct MaintenanceRequest {
    /// ID of this [`MaintenanceRequest`].
    pub id: Id,

    /// ID of the [`Property`] this [`MaintenanceRequest`] concerns.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// [`DateTime`] when this [`MaintenanceRequest`] was filed.
    pub requested_at: RequestDateTime,

    /// Current [`Status`] of this [`MaintenanceRequest`].
    pub status: Status,
}

impl MaintenanceRequest {
    /// Files a new pending [`MaintenanceRequest`] for the specified
    /// [`Property`].
    ///
    /// [`Property`]: crate::domain::Property
    #[must_use]
    pub fn new(property_id: property::Id) -> Self {
        Self {
            id: Id::new(),
            property_id,
            requested_at: DateTimeOf::now(),
            status: Status::Pending,
        }
    }

    /// Approves this [`MaintenanceRequest`].
    ///
    /// # Errors
    ///
    /// If this [`MaintenanceRequest`] is not [`Status::Pending`].
    pub fn approve(&mut self) -> Result<Event, ApproveError> {
        if self.status != Status::Pending {
            return Err(ApproveError {
                status: self.status,
            });
        }
        self.status = Status::Approved;
        Ok(Event::opened(
            format!("Maintenance request {} approved", self.id).into(),
        ))
    }

    /// Resolves this [`MaintenanceRequest`].
    ///
    /// Only a [`Status::Approved`] one transitions. Otherwise this is a
    /// no-op, and the returned [`Event`] names the current [`Status`]
    /// instead.
    pub fn resolve(&mut self) -> Event {
        if self.status == Status::Approved {
            self.status = Status::Resolved;
            Event::opened(
                format!("Maintenance request {} resolved", self.id).into(),
            )
        } else {
            Event::opened(
                format!(
                    "Maintenance request {} is {}, not approved yet",
                    self.id, self.status,
                )
                .into(),
            )
        }
    }
}

/// Error of approving a [`MaintenanceRequest`] in a wrong [`Status`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`MaintenanceRequest` cannot be approved from the {status} status")]
pub struct ApproveError {
    /// Actual [`Status`] of the [`MaintenanceRequest`].
    #[error(not(source))]
    pub status: Status,
}

define_kind! {
    #[doc = "Status of a [`MaintenanceRequest`]."]
    enum Status {
        #[doc = "[`MaintenanceRequest`] is filed and awaits approval."]
        Pending = 1,

        #[doc = "[`MaintenanceRequest`] is approved and awaits works."]
        Approved = 2,

        #[doc = "[`MaintenanceRequest`] is resolved."]
        Resolved = 3,
    }
}

/// ID of a [`MaintenanceRequest`].
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

/// Planned renovation of a [`Property`].
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug)]
pub struct Renovation {
    /// ID of this [`Renovation`].
    pub id: RenovationId,

    /// ID of the [`Property`] being renovated.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// [`DateTime`] when this [`Renovation`] is scheduled to start.
    pub scheduled_at: ScheduleDateTime,

    /// Budgeted cost of this [`Renovation`].
    pub cost: Money,

    /// [`Description`] of the works.
    pub description: Description,
}

impl Renovation {
    /// Schedules a new [`Renovation`].
    #[must_use]
    pub fn new(
        property_id: property::Id,
        scheduled_at: ScheduleDateTime,
        cost: Money,
        description: Description,
    ) -> Self {
        Self {
            id: RenovationId::new(),
            property_id,
            scheduled_at,
            cost,
            description,
        }
    }

    /// Total budgeted cost of this [`Renovation`].
    #[must_use]
    pub fn total_cost(&self) -> Money {
        self.cost
    }
}

/// ID of a [`Renovation`].
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
pub struct RenovationId(Uuid);

impl RenovationId {
    /// Creates a new random [`RenovationId`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Description of a [`Renovation`]'s works.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `description` matches the
    /// format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// Creates a new [`Description`] if the given `description` is valid.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Option<Self> {
        let description = description.into();
        Self::check(&description).then_some(Self(description))
    }

    /// Checks whether the given `description` is a valid [`Description`].
    fn check(description: impl AsRef<str>) -> bool {
        let description = description.as_ref();
        description.trim() == description
            && !description.is_empty()
            && description.len() <= 1024
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Type marker of a [`DateTime`] when a [`Renovation`] is scheduled.
#[derive(Clone, Copy, Debug)]
pub struct Schedule;

/// [`DateTime`] when a [`MaintenanceRequest`] was filed.
pub type RequestDateTime = DateTimeOf<(MaintenanceRequest, unit::Creation)>;

/// [`DateTime`] when a [`Renovation`] is scheduled to start.
pub type ScheduleDateTime = DateTimeOf<(Renovation, Schedule)>;
