//! [`Property`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{
    AsRef, Display, Error, From, FromStr as DeriveFromStr, Into,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{lease, LeaseAgreement};

/// Rentable property of a rental company's portfolio.
#[derive(Clone, Debug)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Address`] of this [`Property`].
    pub address: Address,

    /// [`Size`] of this [`Property`] in square meters.
    pub size: Size,

    /// Monthly rent price of this [`Property`].
    pub price: common::Money,

    /// Kind-specific [`Details`] of this [`Property`].
    pub details: Details,

    /// [`Facility`]s available at this [`Property`].
    pub facilities: Vec<Facility>,

    /// Currently attached [`LeaseAgreement`], if any.
    ///
    /// At most one lease may be attached at a time.
    pub current_lease: Option<LeaseAgreement>,

    /// Past [`LeaseAgreement`]s of this [`Property`], oldest first.
    pub lease_history: Vec<LeaseAgreement>,

    /// [`DateTime`] when this [`Property`] was created.
    pub created_at: CreationDateTime,
}

impl Property {
    /// Creates a new vacant [`Property`].
    #[must_use]
    pub fn new(
        address: Address,
        size: Size,
        price: common::Money,
        details: Details,
    ) -> Self {
        Self {
            id: Id::new(),
            address,
            size,
            price,
            details,
            facilities: Vec::new(),
            current_lease: None,
            lease_history: Vec::new(),
            created_at: DateTimeOf::now(),
        }
    }

    /// Returns [`Kind`] of this [`Property`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.details.kind()
    }

    /// Returns the occupancy [`Status`] of this [`Property`], derived from
    /// its currently attached [`LeaseAgreement`].
    #[must_use]
    pub fn status(&self) -> Status {
        if self
            .current_lease
            .as_ref()
            .is_some_and(LeaseAgreement::is_active)
        {
            Status::Occupied
        } else {
            Status::Available
        }
    }

    /// Indicates whether this [`Property`] is occupied.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.status() == Status::Occupied
    }

    /// Monthly cost of this [`Property`].
    #[must_use]
    pub fn cost(&self) -> common::Money {
        self.price
    }

    /// Adds the provided [`Facility`] to this [`Property`].
    ///
    /// No-op if this [`Property`] has such [`Facility`] already.
    pub fn add_facility(&mut self, facility: Facility) {
        if !self.facilities.contains(&facility) {
            self.facilities.push(facility);
        }
    }

    /// Attaches the provided [`LeaseAgreement`] to this [`Property`].
    ///
    /// An inactive current lease is moved into the history first.
    ///
    /// # Errors
    ///
    /// If an active [`LeaseAgreement`] is attached already.
    pub fn add_lease(
        &mut self,
        lease: LeaseAgreement,
    ) -> Result<(), OccupiedError> {
        if let Some(current) = self.current_lease.take() {
            if current.is_active() {
                let lease_id = current.id;
                self.current_lease = Some(current);
                return Err(OccupiedError { lease_id });
            }
            self.lease_history.push(current);
        }
        self.current_lease = Some(lease);
        Ok(())
    }

    /// Terminates the currently attached [`LeaseAgreement`], moving it into
    /// the history and vacating this [`Property`].
    ///
    /// Returns ID of the terminated lease, or [`None`] if there was nothing
    /// to terminate.
    pub fn terminate_lease(&mut self) -> Option<lease::Id> {
        let mut lease = self.current_lease.take()?;
        lease.terminate();
        let lease_id = lease.id;
        self.lease_history.push(lease);
        Some(lease_id)
    }
}

/// Error of attaching a [`LeaseAgreement`] to an occupied [`Property`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display(
    "`Property` is occupied by an active `LeaseAgreement(id: {lease_id})` \
     already"
)]
pub struct OccupiedError {
    /// ID of the already attached active [`LeaseAgreement`].
    #[error(not(source))]
    pub lease_id: lease::Id,
}

/// ID of a [`Property`].
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

/// Full address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Indicates whether this [`Address`] contains the provided `location`
    /// text, ignoring letter case.
    #[must_use]
    pub fn matches(&self, location: &str) -> bool {
        self.0.to_lowercase().contains(&location.to_lowercase())
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Facility available at a [`Property`] (parking, laundry, gym, etc).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Facility(String);

impl Facility {
    /// Creates a new [`Facility`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `facility` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(facility: impl Into<String>) -> Self {
        Self(facility.into())
    }

    /// Creates a new [`Facility`] if the given `facility` is valid.
    #[must_use]
    pub fn new(facility: impl Into<String>) -> Option<Self> {
        let facility = facility.into();
        Self::check(&facility).then_some(Self(facility))
    }

    /// Checks whether the given `facility` is a valid [`Facility`].
    fn check(facility: impl AsRef<str>) -> bool {
        let facility = facility.as_ref();
        facility.trim() == facility
            && !facility.is_empty()
            && facility.len() <= 128
    }
}

impl FromStr for Facility {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Facility`")
    }
}

/// Size of a [`Property`] in square meters.
pub type Size = Decimal;

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "A [`Land`] plot."]
        Land = 1,

        #[doc = "A standalone [`House`]."]
        House = 2,

        #[doc = "An [`Apartment`] in a building."]
        Apartment = 3,

        #[doc = "A commercial [`Shop`] space."]
        Shop = 4,
    }
}

define_kind! {
    #[doc = "Occupancy status of a [`Property`]."]
    enum Status {
        #[doc = "No active lease is attached to the [`Property`]."]
        Available = 1,

        #[doc = "An active lease is attached to the [`Property`]."]
        Occupied = 2,
    }
}

/// Kind-specific details of a [`Property`].
#[derive(Clone, Debug, From)]
pub enum Details {
    #[doc(hidden)]
    Land(Land),
    #[doc(hidden)]
    House(House),
    #[doc(hidden)]
    Apartment(Apartment),
    #[doc(hidden)]
    Shop(Shop),
}

impl Details {
    /// Returns [`Kind`] of the [`Property`] described by these [`Details`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Land(_) => Kind::Land,
            Self::House(_) => Kind::House,
            Self::Apartment(_) => Kind::Apartment,
            Self::Shop(_) => Kind::Shop,
        }
    }
}

/// Details of a [`Kind::Land`] [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct Land {
    /// [`Zoning`] of this land plot.
    pub zoning: Zoning,

    /// Buildable area of this land plot in square meters.
    pub buildable_area: Size,
}

define_kind! {
    #[doc = "Zoning of a [`Land`] plot."]
    enum Zoning {
        #[doc = "Residential buildings allowed."]
        Residential = 1,

        #[doc = "Commercial buildings allowed."]
        Commercial = 2,

        #[doc = "Agricultural use only."]
        Agricultural = 3,
    }
}

/// Details of a [`Kind::House`] [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct House {
    /// Number of bedrooms in this house.
    pub bedrooms: RoomCount,

    /// Number of bathrooms in this house.
    pub bathrooms: RoomCount,

    /// Indicator whether this house has a garden.
    pub has_garden: bool,
}

/// Details of a [`Kind::Apartment`] [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct Apartment {
    /// Floor this apartment is located on.
    pub floor: Floor,

    /// Indicator whether the building has an elevator.
    pub has_elevator: bool,

    /// Indicator whether this apartment has a balcony.
    pub has_balcony: bool,
}

/// Details of a [`Kind::Shop`] [`Property`].
#[derive(Clone, Debug)]
pub struct Shop {
    /// Kind of business this shop space is fit for.
    pub business: Business,

    /// Indicator whether parking is available at this shop space.
    pub has_parking: bool,
}

/// Number of rooms of some kind in a [`Property`].
pub type RoomCount = u8;

/// Floor of an [`Apartment`].
pub type Floor = u16;

/// Kind of business a [`Shop`] space is fit for.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Business(String);

impl Business {
    /// Creates a new [`Business`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `business` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(business: impl Into<String>) -> Self {
        Self(business.into())
    }

    /// Creates a new [`Business`] if the given `business` is valid.
    #[must_use]
    pub fn new(business: impl Into<String>) -> Option<Self> {
        let business = business.into();
        Self::check(&business).then_some(Self(business))
    }

    /// Checks whether the given `business` is a valid [`Business`].
    fn check(business: impl AsRef<str>) -> bool {
        let business = business.as_ref();
        business.trim() == business
            && !business.is_empty()
            && business.len() <= 512
    }
}

impl FromStr for Business {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Business`")
    }
}

/// [`DateTime`] when a [`Property`] was created.
pub type CreationDateTime = DateTimeOf<(Property, unit::Creation)>;
