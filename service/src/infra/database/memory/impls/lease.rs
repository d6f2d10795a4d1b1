//! [`LeaseAgreement`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{lease, LeaseAgreement},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Select<By<Option<LeaseAgreement>, lease::Id>>> for Memory {
    type Ok = Option<LeaseAgreement>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<LeaseAgreement>, lease::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let lease_id = by.into_inner();
        Ok(self
            .state()?
            .company
            .properties()
            .iter()
            .flat_map(|p| p.current_lease.iter().chain(&p.lease_history))
            .find(|l| l.id == lease_id)
            .cloned())
    }
}
