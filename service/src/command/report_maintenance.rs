//! [`Command`] for filing a [`MaintenanceRequest`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, MaintenanceRequest, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for filing a new [`MaintenanceRequest`] against a listed
/// [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct ReportMaintenance {
    /// ID of the [`Property`] needing maintenance.
    pub property_id: property::Id,
}

impl<Db> Command<ReportMaintenance> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<MaintenanceRequest>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = MaintenanceRequest;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReportMaintenance,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let property_id = cmd.property_id;

        self.database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let request = MaintenanceRequest::new(property_id);

        self.database()
            .execute(Insert(request.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(request)
    }
}

/// Error of [`ReportMaintenance`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the provided ID is not listed.
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
