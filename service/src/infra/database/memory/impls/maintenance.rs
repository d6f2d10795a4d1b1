//! [`MaintenanceRequest`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{maintenance, MaintenanceRequest},
    infra::{
        database::{self, memory, Memory},
        Database,
    },
};

impl Database<Insert<MaintenanceRequest>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(request): Insert<MaintenanceRequest>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.state_mut()?.requests.insert(request.id, request);
        Ok(())
    }
}

impl Database<Select<By<Option<MaintenanceRequest>, maintenance::Id>>>
    for Memory
{
    type Ok = Option<MaintenanceRequest>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<MaintenanceRequest>, maintenance::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state()?.requests.get(&by.into_inner()).cloned())
    }
}

impl Database<Update<MaintenanceRequest>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(request): Update<MaintenanceRequest>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut()?;
        let stored = state.requests.get_mut(&request.id).ok_or_else(|| {
            tracerr::new!(database::Error::from(memory::Error::NotFound(
                "`MaintenanceRequest`",
            )))
        })?;
        *stored = request;
        Ok(())
    }
}
