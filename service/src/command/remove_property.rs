//! [`Command`] for removing a [`Property`] from the portfolio.
//!
//! [`Property`]: crate::domain::Property

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for removing a [`Property`] from the portfolio.
///
/// Removing an unlisted [`Property`] is not an error: the outcome is
/// reported as a [`read::company::Event`].
#[derive(Clone, Copy, Debug)]
pub struct RemoveProperty {
    /// ID of the [`Property`] to be removed.
    pub property_id: property::Id,
}

impl<Db> Command<RemoveProperty> for Service<Db>
where
    Db: Database<
        Delete<By<Property, property::Id>>,
        Ok = read::company::Event,
        Err = Traced<database::Error>,
    >,
{
    type Ok = read::company::Event;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RemoveProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.database()
            .execute(Delete(By::new(cmd.property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`RemoveProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        command::AddProperty,
        domain::{company, property},
        infra::Memory,
        read, Command as _, Service,
    };

    use super::RemoveProperty;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    #[test]
    fn removes_listed_property() {
        let service = service();
        let property = block_on(service.execute(AddProperty {
            address: property::Address::new("3 Oak Avenue").unwrap(),
            size: "90".parse().unwrap(),
            price: "1100".parse().unwrap(),
            details: property::House {
                bedrooms: 3,
                bathrooms: 2,
                has_garden: true,
            }
            .into(),
        }))
        .unwrap();

        let event = block_on(service.execute(RemoveProperty {
            property_id: property.id,
        }))
        .unwrap();
        assert_eq!(
            event,
            read::company::Event::Removed {
                property_id: property.id,
            },
        );

        let event = block_on(service.execute(RemoveProperty {
            property_id: property.id,
        }))
        .unwrap();
        assert_eq!(
            event,
            read::company::Event::NotListed {
                property_id: property.id,
            },
        );
    }

    #[test]
    fn removing_unknown_property_is_reported() {
        let service = service();
        let property_id = property::Id::new();

        let event = block_on(service.execute(RemoveProperty {
            property_id,
        }))
        .unwrap();

        assert_eq!(
            event,
            read::company::Event::NotListed { property_id },
        );
    }
}
