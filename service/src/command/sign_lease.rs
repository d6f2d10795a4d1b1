//! [`Command`] for signing a new [`LeaseAgreement`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lease, property, user, LeaseAgreement, Property, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for signing a new [`LeaseAgreement`] on a vacant [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct SignLease {
    /// ID of the [`Property`] to be leased.
    pub property_id: property::Id,

    /// ID of the [`User`] moving in.
    pub resident_id: user::Id,

    /// [`DateTime`] when the lease starts.
    ///
    /// [`DateTime`]: common::DateTime
    pub starts_at: lease::StartDateTime,

    /// Duration of the lease in [`Months`].
    ///
    /// [`Months`]: lease::Months
    pub duration: lease::Months,

    /// Agreed monthly rent.
    pub monthly_rent: common::Money,
}

impl<Db> Command<SignLease> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<Update<Property>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<User>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = LeaseAgreement;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SignLease) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SignLease {
            property_id,
            resident_id,
            starts_at,
            duration,
            monthly_rent,
        } = cmd;

        let mut property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let mut resident = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(resident_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(resident_id))
            .map_err(tracerr::wrap!())?;
        if resident.role.as_resident().is_none() {
            return Err(tracerr::new!(E::UserNotResident(resident_id)));
        }

        let lease = LeaseAgreement::new(
            property_id,
            resident_id,
            starts_at,
            duration,
            monthly_rent,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        property
            .add_lease(lease.clone())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if let Some(state) = resident.role.as_resident_mut() {
            _ = state.current_lease.replace(lease.id);
            state.lease_ids.push(lease.id);
        }

        self.database()
            .execute(Update(property))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        self.database()
            .execute(Update(resident))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lease)
    }
}

/// Error of [`SignLease`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Lease term doesn't fit the representable calendar range.
    #[display("{_0}")]
    #[from]
    InvalidTerm(lease::OutOfRangeError),

    /// [`Property`] is occupied by an active [`LeaseAgreement`] already.
    #[display("{_0}")]
    #[from]
    PropertyOccupied(property::OccupiedError),

    /// [`Property`] with the provided ID is not listed.
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`User`] with the provided ID does not exist.
    #[display("`User(id: {_0})` does not exist")]
    UserNotExists(#[error(not(source))] user::Id),

    /// [`User`] with the provided ID is not a resident.
    #[display("`User(id: {_0})` is not a resident")]
    UserNotResident(#[error(not(source))] user::Id),
}
