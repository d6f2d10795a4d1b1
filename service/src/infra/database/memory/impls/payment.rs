//! [`Payment`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{lease, payment, Payment, PaymentHistory},
    infra::{
        database::{self, memory, Memory},
        Database,
    },
};

impl Database<Insert<Payment>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.state_mut()?.payments.insert(payment.id, payment);
        Ok(())
    }
}

impl Database<Select<By<Option<Payment>, payment::Id>>> for Memory {
    type Ok = Option<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Payment>, payment::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.state()?.payments.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<PaymentHistory, lease::Id>>> for Memory {
    type Ok = PaymentHistory;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<PaymentHistory, lease::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let lease_id = by.into_inner();
        let mut payments = self
            .state()?
            .payments
            .values()
            .filter(|p| p.lease_id == lease_id)
            .cloned()
            .collect::<Vec<_>>();
        payments.sort_unstable_by_key(|p| p.due_at);

        let mut history = PaymentHistory::default();
        for payment in payments {
            history.add(payment);
        }
        Ok(history)
    }
}

impl Database<Update<Payment>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(payment): Update<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state_mut()?;
        let stored = state.payments.get_mut(&payment.id).ok_or_else(|| {
            tracerr::new!(database::Error::from(memory::Error::NotFound(
                "`Payment`",
            )))
        })?;
        *stored = payment;
        Ok(())
    }
}
