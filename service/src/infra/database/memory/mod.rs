//! In-memory [`Database`] implementation.
//!
//! [`Database`]: super::Database

mod impls;

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use derive_more::{Display, Error as StdError};
use tracerr::Traced;

use crate::{
    domain::{
        company, maintenance, payment, user, MaintenanceRequest, Payment,
        RentalCompany, User,
    },
    infra::database,
};

/// In-memory [`Database`] holding the whole rental system state behind an
/// [`RwLock`].
///
/// Cheap to [`Clone`], all the clones share the same state.
///
/// [`Database`]: super::Database
#[derive(Clone, Debug)]
pub struct Memory(Arc<RwLock<State>>);

impl Memory {
    /// Creates a new empty [`Memory`] database for a [`RentalCompany`] with
    /// the provided [`company::Name`].
    #[must_use]
    pub fn new(company: company::Name) -> Self {
        Self(Arc::new(RwLock::new(State {
            company: RentalCompany::new(company),
            users: HashMap::new(),
            requests: HashMap::new(),
            payments: HashMap::new(),
        })))
    }

    /// Acquires a shared lock on the [`State`].
    ///
    /// # Errors
    ///
    /// If the lock has been poisoned.
    fn state(
        &self,
    ) -> Result<RwLockReadGuard<'_, State>, Traced<database::Error>> {
        self.0
            .read()
            .map_err(|_| tracerr::new!(database::Error::from(Error::Poisoned)))
    }

    /// Acquires an exclusive lock on the [`State`].
    ///
    /// # Errors
    ///
    /// If the lock has been poisoned.
    fn state_mut(
        &self,
    ) -> Result<RwLockWriteGuard<'_, State>, Traced<database::Error>> {
        self.0
            .write()
            .map_err(|_| tracerr::new!(database::Error::from(Error::Poisoned)))
    }
}

/// State held by a [`Memory`] database.
#[derive(Debug)]
struct State {
    /// The [`RentalCompany`] with its portfolio and contracts.
    company: RentalCompany,

    /// All the registered [`User`]s.
    users: HashMap<user::Id, User>,

    /// All the filed [`MaintenanceRequest`]s.
    requests: HashMap<maintenance::Id, MaintenanceRequest>,

    /// All the recorded [`Payment`]s.
    payments: HashMap<payment::Id, Payment>,
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Requested entity is absent.
    #[display("{_0} not found")]
    NotFound(#[error(not(source))] &'static str),

    /// State lock has been poisoned by a panicked thread.
    #[display("state lock poisoned")]
    Poisoned,
}
