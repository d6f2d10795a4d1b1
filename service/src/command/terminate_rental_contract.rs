//! [`Command`] for terminating a [`RentalContract`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, RentalContract},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for terminating a [`RentalContract`].
#[derive(Clone, Copy, Debug)]
pub struct TerminateRentalContract {
    /// ID of the [`RentalContract`] to be terminated.
    pub contract_id: contract::Id,
}

impl<Db> Command<TerminateRentalContract> for Service<Db>
where
    Db: Database<
            Select<By<Option<RentalContract>, contract::Id>>,
            Ok = Option<RentalContract>,
            Err = Traced<database::Error>,
        > + Database<
            Update<RentalContract>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = RentalContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TerminateRentalContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let contract_id = cmd.contract_id;

        let mut contract = self
            .database()
            .execute(Select(By::<Option<RentalContract>, _>::new(
                contract_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ContractNotExists(contract_id))
            .map_err(tracerr::wrap!())?;

        if contract.terminated_at.is_some() {
            return Err(tracerr::new!(E::ContractAlreadyTerminated(
                contract_id
            )));
        }

        contract.terminate();

        self.database()
            .execute(Update(contract.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(contract)
    }
}

/// Error of [`TerminateRentalContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`RentalContract`] is already terminated.
    #[display("`RentalContract(id: {_0})` is already terminated")]
    ContractAlreadyTerminated(#[error(not(source))] contract::Id),

    /// [`RentalContract`] with the provided ID does not exist.
    #[display("`RentalContract(id: {_0})` does not exist")]
    ContractNotExists(#[error(not(source))] contract::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}
