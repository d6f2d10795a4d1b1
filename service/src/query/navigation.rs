//! [`NearestAvailable`] definition.

use common::operations::{By, Select};
use tracerr::Traced;
use xxhash_rust::xxh3::xxh3_64;

use crate::{
    domain::Property,
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] to find the available [`Property`] nearest to a location.
#[derive(Clone, Debug)]
pub struct NearestAvailable {
    /// Location to search around.
    pub location: String,
}

impl<Db> Query<NearestAvailable> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Property>, read::property::list::Filter>>,
        Ok = Vec<Property>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        NearestAvailable { location }: NearestAvailable,
    ) -> Result<Self::Ok, Self::Err> {
        let available = self
            .database()
            .execute(Select(By::new(
                read::property::list::Filter::available_only(),
            )))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(available
            .into_iter()
            .min_by_key(|p| distance(&location, p.address.as_ref())))
    }
}

/// Estimates a distance between the two locations.
///
/// Not geographic in any way: a stable pseudo-metric over the location texts,
/// so the ranking stays deterministic.
// TODO: Replace with real geocoding once a provider is wired in.
fn distance(from: &str, to: &str) -> u64 {
    xxh3_64(from.as_bytes()).abs_diff(xxh3_64(to.as_bytes())) % 100
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use futures::executor::block_on;
    use secrecy::SecretBox;

    use crate::{
        command::{AddProperty, CreateUser, SignLease},
        domain::{company, lease, property, user, Property},
        infra::Memory,
        Command as _, Query as _, Service,
    };

    use super::NearestAvailable;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn add_property(service: &Service<Memory>, address: &str) -> Property {
        block_on(service.execute(AddProperty {
            address: property::Address::new(address).unwrap(),
            size: "80".parse().unwrap(),
            price: "1200".parse().unwrap(),
            details: property::House {
                bedrooms: 2,
                bathrooms: 1,
                has_garden: false,
            }
            .into(),
        }))
        .unwrap()
    }

    #[test]
    fn empty_portfolio_yields_nothing() {
        let service = service();

        let found = block_on(service.execute(NearestAvailable {
            location: "City Center".into(),
        }))
        .unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn never_suggests_occupied_properties() {
        let service = service();
        let occupied = add_property(&service, "City Center, 12 Green Street");
        let vacant = add_property(&service, "Suburbs, 3 Oak Avenue");

        let resident = block_on(service.execute(CreateUser {
            username: user::Username::new("nick_11").unwrap(),
            password: SecretBox::new(Box::new(
                user::Password::new("s3cret").unwrap(),
            )),
            role: user::Resident::default().into(),
        }))
        .unwrap();
        _ = block_on(service.execute(SignLease {
            property_id: occupied.id,
            resident_id: resident.id,
            starts_at: DateTime::now().coerce(),
            duration: lease::Months::from(12),
            monthly_rent: occupied.price,
        }))
        .unwrap();

        let found = block_on(service.execute(NearestAvailable {
            location: "City Center".into(),
        }))
        .unwrap()
        .unwrap();

        assert_eq!(found.id, vacant.id);
    }

    #[test]
    fn ranking_is_deterministic() {
        let service = service();
        _ = add_property(&service, "City Center, 12 Green Street");
        _ = add_property(&service, "Suburbs, 3 Oak Avenue");

        let first = block_on(service.execute(NearestAvailable {
            location: "City Center".into(),
        }))
        .unwrap()
        .unwrap();
        let second = block_on(service.execute(NearestAvailable {
            location: "City Center".into(),
        }))
        .unwrap()
        .unwrap();

        assert_eq!(first.id, second.id);
    }
}
