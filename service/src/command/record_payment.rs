//! [`Command`] for recording a rent [`Payment`].

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lease, payment, LeaseAgreement, Payment},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for recording a new pending rent [`Payment`] under a
/// [`LeaseAgreement`].
#[derive(Clone, Copy, Debug)]
pub struct RecordPayment {
    /// ID of the [`LeaseAgreement`] the [`Payment`] is made under.
    pub lease_id: lease::Id,

    /// Base amount of the [`Payment`].
    pub amount: common::Money,

    /// [`DateTime`] when the [`Payment`] is due.
    ///
    /// [`DateTime`]: common::DateTime
    pub due_at: payment::DueDateTime,
}

impl<Db> Command<RecordPayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<LeaseAgreement>, lease::Id>>,
            Ok = Option<LeaseAgreement>,
            Err = Traced<database::Error>,
        > + Database<Insert<Payment>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RecordPayment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecordPayment {
            lease_id,
            amount,
            due_at,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<LeaseAgreement>, _>::new(lease_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LeaseNotExists(lease_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let payment = Payment::new(lease_id, amount, due_at);

        self.database()
            .execute(Insert(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(payment)
    }
}

/// Error of [`RecordPayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`LeaseAgreement`] with the provided ID does not exist.
    #[display("`LeaseAgreement(id: {_0})` does not exist")]
    LeaseNotExists(#[error(not(source))] lease::Id),
}
