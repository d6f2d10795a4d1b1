//! [`RentalContract`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{contract, property, RentalContract},
    infra::{
        database::{self, memory, Memory},
        Database,
    },
    read,
};

impl Database<Insert<RentalContract>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(contract): Insert<RentalContract>,
    ) -> Result<Self::Ok, Self::Err> {
        self.state_mut()?.company.sign_contract(contract);
        Ok(())
    }
}

impl Database<Select<By<Option<RentalContract>, contract::Id>>> for Memory {
    type Ok = Option<RentalContract>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<RentalContract>, contract::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state()?.company.contract(by.into_inner()).cloned())
    }
}

impl
    Database<
        Select<
            By<Option<read::contract::Active<RentalContract>>, property::Id>,
        >,
    > for Memory
{
    type Ok = Option<read::contract::Active<RentalContract>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Option<read::contract::Active<RentalContract>>, property::Id>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        Ok(self
            .state()?
            .company
            .contracts()
            .iter()
            .find(|c| c.property_id == property_id && c.is_active())
            .cloned()
            .map(read::contract::Active))
    }
}

impl Database<Select<By<Vec<RentalContract>, ()>>> for Memory {
    type Ok = Vec<RentalContract>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<RentalContract>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state()?.company.contracts().to_vec())
    }
}

impl Database<Update<RentalContract>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(contract): Update<RentalContract>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut()?;
        let stored =
            state.company.contract_mut(contract.id).ok_or_else(|| {
                tracerr::new!(database::Error::from(memory::Error::NotFound(
                    "`RentalContract`",
                )))
            })?;
        *stored = contract;
        Ok(())
    }
}
