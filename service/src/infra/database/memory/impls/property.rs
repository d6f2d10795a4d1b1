//! [`Property`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{
        database::{self, memory, Memory},
        Database,
    },
    read,
};

impl Database<Insert<Property>> for Memory {
    type Ok = read::company::Event;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state_mut()?.company.add_property(property))
    }
}

impl Database<Delete<By<Property, property::Id>>> for Memory {
    type Ok = read::company::Event;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state_mut()?.company.remove_property(by.into_inner()))
    }
}

impl Database<Select<By<Option<Property>, property::Id>>> for Memory {
    type Ok = Option<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state()?.company.property(by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Property>, read::property::list::Filter>>>
    for Memory
{
    type Ok = Vec<Property>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, read::property::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .state()?
            .company
            .properties()
            .iter()
            .filter(|p| {
                filter
                    .location
                    .as_ref()
                    .is_none_or(|loc| p.address.matches(loc))
            })
            .filter(|p| {
                filter
                    .price
                    .as_ref()
                    .is_none_or(|range| range.contains(&p.price))
            })
            .filter(|p| {
                if p.is_occupied() {
                    filter.occupied
                } else {
                    filter.available
                }
            })
            .cloned()
            .collect())
    }
}

impl Database<Select<By<read::property::list::TotalCount, ()>>> for Memory {
    type Ok = read::property::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::property::list::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let count = self.state()?.company.properties().len();
        Ok(i32::try_from(count).unwrap_or(i32::MAX).into())
    }
}

impl Database<Update<Property>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(property): Update<Property>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut()?;
        let stored =
            state.company.property_mut(property.id).ok_or_else(|| {
                tracerr::new!(database::Error::from(memory::Error::NotFound(
                    "`Property`",
                )))
            })?;
        *stored = property;
        Ok(())
    }
}
