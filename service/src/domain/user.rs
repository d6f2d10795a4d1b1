//! [`User`] definitions.

use std::{str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{
    AsRef, Display, From, FromStr as DeriveFromStr, Into,
};
use regex::Regex;
use secrecy::{zeroize::Zeroize, CloneableSecret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use xxhash_rust::xxh3::xxh3_64;

use crate::domain::{lease, property};

/// Participant of the rental system.
#[derive(Clone, Debug)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// Unique [`Username`] of this [`User`].
    pub username: Username,

    /// [`PasswordHash`] of this [`User`].
    pub password_hash: PasswordHash,

    /// [`Role`] of this [`User`] with its role-specific state.
    pub role: Role,

    /// [`DateTime`] when this [`User`] was created.
    pub created_at: CreationDateTime,
}

impl User {
    /// Creates a new [`User`] with the provided credentials and [`Role`].
    #[must_use]
    pub fn new(username: Username, password: &Password, role: Role) -> Self {
        Self {
            id: Id::new(),
            username,
            password_hash: PasswordHash::new(password),
            role,
            created_at: DateTimeOf::now(),
        }
    }

    /// Checks the provided [`Password`] against this [`User`]'s stored
    /// [`PasswordHash`].
    #[must_use]
    pub fn authenticate(&self, password: &Password) -> bool {
        self.password_hash == PasswordHash::new(password)
    }

    /// Returns [`Kind`] of this [`User`]'s [`Role`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.role.kind()
    }
}

/// Role of a [`User`] with its role-specific state.
#[derive(Clone, Debug, From)]
pub enum Role {
    #[doc(hidden)]
    Owner(Owner),
    #[doc(hidden)]
    Admin(Admin),
    #[doc(hidden)]
    Manager(Manager),
    #[doc(hidden)]
    Renter,
    #[doc(hidden)]
    Resident(Resident),
}

impl Role {
    /// Returns [`Kind`] of this [`Role`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Owner(_) => Kind::Owner,
            Self::Admin(_) => Kind::Admin,
            Self::Manager(_) => Kind::Manager,
            Self::Renter => Kind::Renter,
            Self::Resident(_) => Kind::Resident,
        }
    }

    /// Returns the [`Property`] IDs collection of this [`Role`], if it holds
    /// one.
    ///
    /// [`Property`]: crate::domain::Property
    pub fn property_ids_mut(&mut self) -> Option<&mut Vec<property::Id>> {
        match self {
            Self::Owner(owner) => Some(&mut owner.property_ids),
            Self::Admin(admin) => Some(&mut admin.property_ids),
            Self::Manager(manager) => Some(&mut manager.property_ids),
            Self::Renter | Self::Resident(_) => None,
        }
    }

    /// Returns the [`Resident`] state of this [`Role`], if it's one.
    #[must_use]
    pub fn as_resident(&self) -> Option<&Resident> {
        if let Self::Resident(resident) = self {
            Some(resident)
        } else {
            None
        }
    }

    /// Returns the mutable [`Resident`] state of this [`Role`], if it's one.
    pub fn as_resident_mut(&mut self) -> Option<&mut Resident> {
        if let Self::Resident(resident) = self {
            Some(resident)
        } else {
            None
        }
    }
}

/// State of a [`Kind::Owner`] [`Role`].
#[derive(Clone, Debug, Default)]
pub struct Owner {
    /// IDs of the [`Property`]s this owner owns.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_ids: Vec<property::Id>,
}

/// State of a [`Kind::Admin`] [`Role`].
#[derive(Clone, Debug)]
pub struct Admin {
    /// [`Permission`]s granted to this administrator.
    pub permissions: Vec<Permission>,

    /// IDs of the [`Property`]s this administrator oversees.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_ids: Vec<property::Id>,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            permissions: vec![
                Permission::ManageProperties,
                Permission::ManageUsers,
            ],
            property_ids: Vec::new(),
        }
    }
}

/// State of a [`Kind::Manager`] [`Role`].
#[derive(Clone, Debug, Default)]
pub struct Manager {
    /// IDs of the [`Property`]s this manager is assigned to.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_ids: Vec<property::Id>,
}

/// State of a [`Kind::Resident`] [`Role`].
#[derive(Clone, Debug, Default)]
pub struct Resident {
    /// ID of the [`LeaseAgreement`] this resident currently lives under.
    ///
    /// [`LeaseAgreement`]: crate::domain::LeaseAgreement
    pub current_lease: Option<lease::Id>,

    /// IDs of all [`LeaseAgreement`]s this resident has ever signed.
    ///
    /// [`LeaseAgreement`]: crate::domain::LeaseAgreement
    pub lease_ids: Vec<lease::Id>,
}

define_kind! {
    #[doc = "Kind of a [`User`]'s [`Role`]."]
    enum Kind {
        #[doc = "[`User`] owning properties managed by a rental company."]
        Owner = 1,

        #[doc = "[`User`] administering the whole rental system."]
        Admin = 2,

        #[doc = "[`User`] managing properties on behalf of a rental \
                 company."]
        Manager = 3,

        #[doc = "[`User`] browsing properties to rent one."]
        Renter = 4,

        #[doc = "[`User`] living in a rented property."]
        Resident = 5,
    }
}

define_kind! {
    #[doc = "Permission granted to a [`Kind::Admin`] [`User`]."]
    enum Permission {
        #[doc = "Allows managing properties."]
        ManageProperties = 1,

        #[doc = "Allows managing users."]
        ManageUsers = 2,
    }
}

/// ID of a [`User`].
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

/// Username of a [`User`].
///
/// Starts and ends with a letter or digit, may contain underscores inside,
/// and is 3 to 32 characters long.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Username(String);

impl Username {
    /// Creates a new [`Username`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `username` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Creates a new [`Username`] if the given `username` is valid.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Option<Self> {
        let username = username.into();
        Self::check(&username).then_some(Self(username))
    }

    /// Checks whether the given `username` is a valid [`Username`].
    fn check(username: impl AsRef<str>) -> bool {
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                r"^[\p{L}\p{N}][\p{L}\p{N}_]{1,30}[\p{L}\p{N}]$",
            )
            .unwrap_or_else(|e| panic!("invalid `Username` regex: {e}"))
        });

        REGEX.is_match(username.as_ref())
    }
}

impl FromStr for Username {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Username`")
    }
}

/// Password of a [`User`].
///
/// Any non-empty string up to 128 bytes long.
#[derive(AsRef, Clone, Debug, Into)]
#[as_ref(str)]
pub struct Password(String);

impl Password {
    /// Creates a new [`Password`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `password` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Creates a new [`Password`] if the given `password` is valid.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        Self::check(&password).then_some(Self(password))
    }

    /// Checks whether the given `password` is a valid [`Password`].
    fn check(password: impl AsRef<str>) -> bool {
        let len = password.as_ref().len();
        (1..=128).contains(&len)
    }
}

impl FromStr for Password {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Password`")
    }
}

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl CloneableSecret for Password {}

/// Hash of a [`User`]'s [`Password`].
///
/// Not a cryptographic hash.
// TODO: Switch to `argon2` before exposing authentication to a network.
#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Computes a new [`PasswordHash`] of the provided [`Password`].
    #[must_use]
    pub fn new(password: &Password) -> Self {
        Self(format!("{:016x}", xxh3_64(password.as_ref().as_bytes())))
    }
}

/// [`DateTime`] when a [`User`] was created.
pub type CreationDateTime = DateTimeOf<(User, unit::Creation)>;
