//! [`Monthly`] definition.

use common::{
    operations::{By, Select},
    Money, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::Property,
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] to build a monthly occupancy report over the current portfolio.
#[derive(Clone, Copy, Debug)]
pub struct Monthly {
    /// Month the report is built for (1 to 12).
    pub month: u8,

    /// Year the report is built for.
    pub year: i32,
}

/// Output of the [`Monthly`] [`Query`].
#[derive(Clone, Copy, Debug)]
pub struct Output {
    /// Month this report covers (1 to 12).
    pub month: u8,

    /// Year this report covers.
    pub year: i32,

    /// Share of available [`Property`]s.
    pub vacancy_rate: Percent,

    /// Monthly rent collected from the occupied [`Property`]s.
    pub income: Money,

    /// Monthly rent missed out on the available [`Property`]s.
    pub loss_due_to_vacancy: Money,
}

impl<Db> Query<Monthly> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Property>, read::property::list::Filter>>,
        Ok = Vec<Property>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: Monthly) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Monthly { month, year } = query;
        if !(1..=12).contains(&month) {
            return Err(tracerr::new!(E::InvalidMonth(month)));
        }

        let properties = self
            .database()
            .execute(Select(By::<Vec<Property>, _>::new(
                read::property::list::Filter::default(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if properties.is_empty() {
            return Err(tracerr::new!(E::NoProperties));
        }

        let total = u32::try_from(properties.len())
            .expect("portfolio size overflows `u32`");
        let vacant = u32::try_from(
            properties.iter().filter(|p| !p.is_occupied()).count(),
        )
        .expect("vacant count overflows `u32`");

        let income = properties
            .iter()
            .filter(|p| p.is_occupied())
            .map(Property::cost)
            .sum::<Money>();
        let loss_due_to_vacancy = properties
            .iter()
            .filter(|p| !p.is_occupied())
            .map(Property::cost)
            .sum::<Money>();

        Ok(Output {
            month,
            year,
            vacancy_rate: Percent::ratio(vacant, total)
                .expect("`vacant` never exceeds `total`"),
            income,
            loss_due_to_vacancy,
        })
    }
}

/// Error of [`Monthly`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Provided month is not a calendar month.
    #[display("`{_0}` is not a calendar month")]
    InvalidMonth(#[error(not(source))] u8),

    /// No [`Property`]s are listed to report on.
    #[display("no properties are listed")]
    NoProperties,
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

    use super::Monthly;

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
    fn splits_income_and_vacancy_loss() {
        let service = service();
        let occupied = add_property(&service, "12 Green Street", "1500");
        _ = add_property(&service, "3 Oak Avenue", "1000");
        let resident = block_on(service.execute(CreateUser {
            username: user::Username::new("rita_14").unwrap(),
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

        let output = block_on(service.execute(Monthly {
            month: 6,
            year: 2025,
        }))
        .unwrap();

        assert_eq!(output.month, 6);
        assert_eq!(output.year, 2025);
        assert_eq!(output.vacancy_rate.to_string(), "50.00%");
        assert_eq!(output.income.to_string(), "1500.00");
        assert_eq!(output.loss_due_to_vacancy.to_string(), "1000.00");
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let service = service();
        _ = add_property(&service, "12 Green Street", "1500");

        assert!(block_on(service.execute(Monthly {
            month: 13,
            year: 2025,
        }))
        .is_err());
    }

    #[test]
    fn empty_portfolio_is_an_error() {
        let service = service();

        assert!(block_on(service.execute(Monthly {
            month: 6,
            year: 2025,
        }))
        .is_err());
    }
}
