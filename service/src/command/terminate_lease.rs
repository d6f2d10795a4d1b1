//! [`Command`] for terminating a [`LeaseAgreement`].
//!
//! [`LeaseAgreement`]: crate::domain::LeaseAgreement

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lease, property, user, Property, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for terminating the current [`LeaseAgreement`] of a
/// [`Property`], vacating it.
///
/// [`LeaseAgreement`]: crate::domain::LeaseAgreement
#[derive(Clone, Copy, Debug)]
pub struct TerminateLease {
    /// ID of the leased [`Property`].
    pub property_id: property::Id,
}

impl<Db> Command<TerminateLease> for Service<Db>
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
    type Ok = lease::Id;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TerminateLease,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let property_id = cmd.property_id;

        let mut property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let resident_id =
            property.current_lease.as_ref().map(|l| l.resident_id);
        let lease_id = property
            .terminate_lease()
            .ok_or(E::NoLease(property_id))
            .map_err(tracerr::wrap!())?;

        if let Some(resident_id) = resident_id {
            let resident = self
                .database()
                .execute(Select(By::<Option<User>, _>::new(resident_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if let Some(mut resident) = resident {
                if let Some(state) = resident.role.as_resident_mut() {
                    if state.current_lease == Some(lease_id) {
                        state.current_lease = None;
                    }
                }
                self.database()
                    .execute(Update(resident))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
            }
        }

        self.database()
            .execute(Update(property))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lease_id)
    }
}

/// Error of [`TerminateLease`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] has no [`LeaseAgreement`] to terminate.
    ///
    /// [`LeaseAgreement`]: crate::domain::LeaseAgreement
    #[display("`Property(id: {_0})` has no lease to terminate")]
    NoLease(#[error(not(source))] property::Id),

    /// [`Property`] with the provided ID is not listed.
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use futures::executor::block_on;
    use secrecy::SecretBox;

    use crate::{
        command::{AddProperty, CreateUser, SignLease},
        domain::{company, lease, property, user, Property, User},
        infra::Memory,
        Command as _, Service,
    };

    use super::TerminateLease;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn setup(service: &Service<Memory>) -> (Property, User) {
        let property = block_on(service.execute(AddProperty {
            address: property::Address::new("9 Pine Close").unwrap(),
            size: "85".parse().unwrap(),
            price: "1400".parse().unwrap(),
            details: property::House {
                bedrooms: 3,
                bathrooms: 1,
                has_garden: true,
            }
            .into(),
        }))
        .unwrap();
        let resident = block_on(service.execute(CreateUser {
            username: user::Username::new("hank_05").unwrap(),
            password: SecretBox::new(Box::new(
                user::Password::new("s3cret").unwrap(),
            )),
            role: user::Resident::default().into(),
        }))
        .unwrap();
        (property, resident)
    }

    #[test]
    fn vacates_property_and_clears_resident_backref() {
        use common::operations::{By, Select};

        use crate::infra::Database as _;

        let service = service();
        let (property, resident) = setup(&service);
        let lease = block_on(service.execute(SignLease {
            property_id: property.id,
            resident_id: resident.id,
            starts_at: DateTime::now().coerce(),
            duration: lease::Months::from(12),
            monthly_rent: property.price,
        }))
        .unwrap();

        let lease_id = block_on(service.execute(TerminateLease {
            property_id: property.id,
        }))
        .unwrap();
        assert_eq!(lease_id, lease.id);

        let stored = block_on(service.database().execute(Select(
            By::<Option<Property>, _>::new(property.id),
        )))
        .unwrap()
        .unwrap();
        assert!(!stored.is_occupied());
        assert_eq!(stored.lease_history.len(), 1);

        let stored = block_on(service.database().execute(Select(
            By::<Option<User>, _>::new(resident.id),
        )))
        .unwrap()
        .unwrap();
        let state = stored.role.as_resident().unwrap();
        assert_eq!(state.current_lease, None);
        assert_eq!(state.lease_ids, vec![lease.id]);
    }

    #[test]
    fn vacant_property_has_nothing_to_terminate() {
        let service = service();
        let (property, _) = setup(&service);

        assert!(block_on(service.execute(TerminateLease {
            property_id: property.id,
        }))
        .is_err());
    }
}
