//! [`Command`] for resolving a [`MaintenanceRequest`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{maintenance, Event, MaintenanceRequest},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for resolving an approved [`MaintenanceRequest`].
///
/// Resolving a non-approved one changes nothing, and the returned [`Event`]
/// names its current status instead.
#[derive(Clone, Copy, Debug)]
pub struct ResolveMaintenance {
    /// ID of the [`MaintenanceRequest`] to be resolved.
    pub request_id: maintenance::Id,
}

impl<Db> Command<ResolveMaintenance> for Service<Db>
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
        cmd: ResolveMaintenance,
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

        let event = request.resolve();

        self.database()
            .execute(Update(request))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(event)
    }
}

/// Error of [`ResolveMaintenance`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`MaintenanceRequest`] with the provided ID does not exist.
    #[display("`MaintenanceRequest(id: {_0})` does not exist")]
    RequestNotExists(#[error(not(source))] maintenance::Id),
}
