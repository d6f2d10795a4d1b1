//! [`Analytics`] definition.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    Money, Percent,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{property, Property, RentalContract},
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] to build a portfolio-wide snapshot of rental analytics.
#[derive(Clone, Copy, Debug)]
pub struct Analytics;

/// Output of the [`Analytics`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Total count of listed [`Property`]s.
    pub total_properties: u32,

    /// Share of occupied [`Property`]s.
    pub occupancy_rate: Percent,

    /// Share of available [`Property`]s.
    pub vacancy_rate: Percent,

    /// Share of [`Property`]s turned over (vacated and back on the market).
    pub turnover_rate: Percent,

    /// Mean monthly rent price over the portfolio.
    pub average_rent: Money,

    /// Monthly revenue of the whole portfolio at full occupancy.
    pub total_revenue: Money,

    /// Monthly rent missed out on the available [`Property`]s.
    pub loss_due_to_vacancy: Money,

    /// Monthly rent price per [`Property`].
    pub revenue_by_property: HashMap<property::Id, Money>,

    /// Monthly commission income from the active [`RentalContract`]s.
    pub commission_income: Money,
}

impl<Db> Query<Analytics> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Property>, read::property::list::Filter>>,
            Ok = Vec<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<RentalContract>, ()>>,
            Ok = Vec<RentalContract>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: Analytics) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

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
        let occupied = u32::try_from(
            properties.iter().filter(|p| p.is_occupied()).count(),
        )
        .expect("occupied count overflows `u32`");
        let vacant = total - occupied;

        let occupancy_rate = Percent::ratio(occupied, total)
            .expect("`occupied` never exceeds `total`");
        let vacancy_rate = Percent::ratio(vacant, total)
            .expect("`vacant` never exceeds `total`");

        let total_revenue =
            properties.iter().map(Property::cost).sum::<Money>();
        let loss_due_to_vacancy = properties
            .iter()
            .filter(|p| !p.is_occupied())
            .map(Property::cost)
            .sum::<Money>();
        let average_rent = Money::from(
            (total_revenue.amount() / Decimal::from(total)).round_dp(2),
        );
        let revenue_by_property = properties
            .iter()
            .map(|p| (p.id, p.cost()))
            .collect::<HashMap<_, _>>();

        let prices = properties
            .iter()
            .map(|p| (p.id, p.price))
            .collect::<HashMap<_, _>>();
        let commission_income = self
            .database()
            .execute(Select(By::<Vec<RentalContract>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .iter()
            .filter_map(|c| {
                prices.get(&c.property_id).map(|price| c.commission(*price))
            })
            .sum::<Money>();

        Ok(Output {
            total_properties: total,
            occupancy_rate,
            vacancy_rate,
            turnover_rate: vacancy_rate,
            average_rent,
            total_revenue,
            loss_due_to_vacancy,
            revenue_by_property,
            commission_income,
        })
    }
}

/// Error of [`Analytics`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// No [`Property`]s are listed to analyze.
    #[display("no properties are listed")]
    NoProperties,
}
