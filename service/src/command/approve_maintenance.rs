//! [`Command`] for approving a [`MaintenanceRequest`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{maintenance, Event, MaintenanceRequest},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for approving a pending [`MaintenanceRequest`].
#[derive(Clone, Copy, Debug)]
pub struct ApproveMaintenance {
    /// ID of the [`MaintenanceRequest`] to be approved.
    pub request_id: maintenance::Id,
}

impl<Db> Command<ApproveMaintenance> for Service<Db>
where
    Db: Database<
            Select<By<Option<MaintenanceRequest>, maintenance::Id>>,
            Ok = Option<MaintenanceRequest>,
            Err = Traced<database::Error>,
        > + Database<
            Update<MaintenanceRequest>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = Event;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ApproveMaintenance,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let request_id = cmd.request_id;

        let mut request = self
            .database()
            .execute(Select(By::<Option<MaintenanceRequest>, _>::new(
                request_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RequestNotExists(request_id))
            .map_err(tracerr::wrap!())?;

        let event =
            request.approve().map_err(tracerr::from_and_wrap!(=> E))?;

        self.database()
            .execute(Update(request))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(event)
    }
}

/// Error of [`ApproveMaintenance`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`MaintenanceRequest`] is not pending.
    #[display("{_0}")]
    #[from]
    CannotApprove(maintenance::ApproveError),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`MaintenanceRequest`] with the provided ID does not exist.
    #[display("`MaintenanceRequest(id: {_0})` does not exist")]
    RequestNotExists(#[error(not(source))] maintenance::Id),
}
