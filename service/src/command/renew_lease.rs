//! [`Command`] for renewing a [`LeaseAgreement`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lease, property, LeaseAgreement, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for renewing the active [`LeaseAgreement`] of a [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct RenewLease {
    /// ID of the leased [`Property`].
    pub property_id: property::Id,

    /// Number of [`Months`] to extend the lease by.
    ///
    /// [`Months`]: lease::Months
    pub extra: lease::Months,
}

impl<Db> Command<RenewLease> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<Update<Property>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = LeaseAgreement;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RenewLease) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RenewLease {
            property_id,
            extra,
        } = cmd;

        let mut property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let lease = property
            .current_lease
            .as_mut()
            .filter(|l| l.is_active())
            .ok_or(E::NoActiveLease(property_id))
            .map_err(tracerr::wrap!())?;
        lease.renew(extra).map_err(tracerr::from_and_wrap!(=> E))?;
        let lease = lease.clone();

        self.database()
            .execute(Update(property))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lease)
    }
}

/// Error of [`RenewLease`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Extended term doesn't fit the representable calendar range.
    #[display("{_0}")]
    #[from]
    InvalidTerm(lease::OutOfRangeError),

    /// [`Property`] has no active [`LeaseAgreement`] to renew.
    #[display("`Property(id: {_0})` has no active lease")]
    NoActiveLease(#[error(not(source))] property::Id),

    /// [`Property`] with the provided ID is not listed.
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
