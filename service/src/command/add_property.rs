//! [`Command`] for adding a [`Property`] to the portfolio.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{database, Database},
    read,
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Property`] to the portfolio.
#[derive(Clone, Debug)]
pub struct AddProperty {
    /// [`Address`] of the [`Property`].
    ///
    /// [`Address`]: property::Address
    pub address: property::Address,

    /// Size of the [`Property`] in square meters.
    pub size: property::Size,

    /// Monthly rent price of the [`Property`].
    pub price: common::Money,

    /// Kind-specific [`Details`] of the [`Property`].
    ///
    /// [`Details`]: property::Details
    pub details: property::Details,
}

impl<Db> Command<AddProperty> for Service<Db>
where
    Db: Database<
        Insert<Property>,
        Ok = read::company::Event,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddProperty) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddProperty {
            address,
            size,
            price,
            details,
        } = cmd;

        let property = Property::new(address, size, price, details);

        let event = self
            .database()
            .execute(Insert(property.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let read::company::Event::AlreadyListed { property_id } = event {
            return Err(tracerr::new!(E::AlreadyListed(property_id)));
        }

        Ok(property)
    }
}

/// Error of [`AddProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Property`] is listed in the portfolio already.
    #[display("`Property(id: {_0})` is listed already")]
    AlreadyListed(#[error(not(source))] property::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        domain::{company, property},
        infra::Memory,
        Command as _, Service,
    };

    use super::AddProperty;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn cmd(address: &str) -> AddProperty {
        AddProperty {
            address: property::Address::new(address).unwrap(),
            size: "75".parse().unwrap(),
            price: "1300".parse().unwrap(),
            details: property::Apartment {
                floor: 2,
                has_elevator: true,
                has_balcony: false,
            }
            .into(),
        }
    }

    #[test]
    fn lists_new_property() {
        let service = service();

        let property =
            block_on(service.execute(cmd("12 Green Street"))).unwrap();

        assert_eq!(property.address.as_ref(), "12 Green Street");
        assert!(!property.is_occupied());
    }

    #[test]
    fn listed_properties_get_distinct_ids() {
        let service = service();

        let first =
            block_on(service.execute(cmd("12 Green Street"))).unwrap();
        let second =
            block_on(service.execute(cmd("12 Green Street"))).unwrap();

        assert_ne!(first.id, second.id);
    }
}
