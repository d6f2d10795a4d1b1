//! [`Query`] collection related to multiple [`Property`]s.
//!
//! [`Property`]: crate::domain::Property

use common::operations::By;

use crate::{domain::Property, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Property`]s matching a [`Filter`].
///
/// [`Filter`]: read::property::list::Filter
pub type List =
    DatabaseQuery<By<Vec<Property>, read::property::list::Filter>>;

/// Queries total count of listed [`Property`]s.
pub type TotalCount = DatabaseQuery<By<read::property::list::TotalCount, ()>>;

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        command::AddProperty,
        domain::{company, property, Property},
        infra::Memory,
        read, Command as _, Query as _, Service,
    };

    use super::{List, TotalCount};

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn add_property(
        service: &Service<Memory>,
        address: &str,
        price: &str,
    ) -> Property {
        block_on(service.execute(AddProperty {
            address: property::Address::new(address).unwrap(),
            size: "80".parse().unwrap(),
            price: price.parse().unwrap(),
            details: property::Apartment {
                floor: 1,
                has_elevator: false,
                has_balcony: false,
            }
            .into(),
        }))
        .unwrap()
    }

    #[test]
    fn filters_by_location_case_insensitively() {
        let service = service();
        _ = add_property(&service, "City Center, 12 Green Street", "1500");
        _ = add_property(&service, "Suburbs, 3 Oak Avenue", "900");

        let found = block_on(service.execute(List::by(
            read::property::list::Filter {
                location: Some("city center".into()),
                ..read::property::list::Filter::default()
            },
        )))
        .unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0].address.matches("Green"));
    }

    #[test]
    fn filters_by_price_range() {
        let service = service();
        _ = add_property(&service, "City Center, 12 Green Street", "1500");
        _ = add_property(&service, "Suburbs, 3 Oak Avenue", "900");

        let found = block_on(service.execute(List::by(
            read::property::list::Filter {
                price: Some(
                    "800".parse().unwrap()..="1000".parse().unwrap(),
                ),
                ..read::property::list::Filter::default()
            },
        )))
        .unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0].address.matches("Oak"));
    }

    #[test]
    fn counts_listed_properties() {
        let service = service();
        _ = add_property(&service, "City Center, 12 Green Street", "1500");
        _ = add_property(&service, "Suburbs, 3 Oak Avenue", "900");

        let count =
            block_on(service.execute(TotalCount::by(()))).unwrap();

        assert_eq!(i32::from(count), 2);
    }
}
