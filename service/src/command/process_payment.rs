//! [`Command`] for processing a rent [`Payment`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{payment, Payment},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for processing a recorded rent [`Payment`] as made at the
/// provided moment.
#[derive(Clone, Copy, Debug)]
pub struct ProcessPayment {
    /// ID of the [`Payment`] to be processed.
    pub payment_id: payment::Id,

    /// [`DateTime`] when the [`Payment`] was made.
    ///
    /// [`DateTime`]: common::DateTime
    pub paid_at: payment::PaymentDateTime,
}

impl<Db> Command<ProcessPayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<Payment>, payment::Id>>,
            Ok = Option<Payment>,
            Err = Traced<database::Error>,
        > + Database<Update<Payment>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ProcessPayment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ProcessPayment {
            payment_id,
            paid_at,
        } = cmd;

        let mut payment = self
            .database()
            .execute(Select(By::<Option<Payment>, _>::new(payment_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PaymentNotExists(payment_id))
            .map_err(tracerr::wrap!())?;

        _ = payment
            .process(paid_at)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        self.database()
            .execute(Update(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(payment)
    }
}

/// Error of [`ProcessPayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Payment`] has been processed already.
    #[display("{_0}")]
    #[from]
    AlreadyProcessed(payment::AlreadyProcessedError),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Payment`] with the provided ID does not exist.
    #[display("`Payment(id: {_0})` does not exist")]
    PaymentNotExists(#[error(not(source))] payment::Id),
}

#[cfg(test)]
mod spec {
    use common::DateTime;
    use futures::executor::block_on;
    use secrecy::SecretBox;

    use crate::{
        command::{AddProperty, CreateUser, RecordPayment, SignLease},
        domain::{company, lease, payment, property, user, Payment},
        infra::Memory,
        Command as _, Service,
    };

    use super::ProcessPayment;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn record_payment(
        service: &Service<Memory>,
        due_at: &str,
    ) -> Payment {
        let property = block_on(service.execute(AddProperty {
            address: property::Address::new("6 Willow Drive").unwrap(),
            size: "65".parse().unwrap(),
            price: "100".parse().unwrap(),
            details: property::Apartment {
                floor: 2,
                has_elevator: false,
                has_balcony: true,
            }
            .into(),
        }))
        .unwrap();
        let resident = block_on(service.execute(CreateUser {
            username: user::Username::new("mira_10").unwrap(),
            password: SecretBox::new(Box::new(
                user::Password::new("s3cret").unwrap(),
            )),
            role: user::Resident::default().into(),
        }))
        .unwrap();
        let lease = block_on(service.execute(SignLease {
            property_id: property.id,
            resident_id: resident.id,
            starts_at: DateTime::now().coerce(),
            duration: lease::Months::from(12),
            monthly_rent: property.price,
        }))
        .unwrap();
        block_on(service.execute(RecordPayment {
            lease_id: lease.id,
            amount: lease.monthly_rent,
            due_at: DateTime::from_date_str(due_at).unwrap().coerce(),
        }))
        .unwrap()
    }

    #[test]
    fn late_payment_gets_fee() {
        let service = service();
        let payment = record_payment(&service, "2025-03-01");

        let processed = block_on(service.execute(ProcessPayment {
            payment_id: payment.id,
            paid_at: DateTime::from_date_str("2025-03-04")
                .unwrap()
                .coerce(),
        }))
        .unwrap();

        assert_eq!(processed.status, payment::Status::Late);
        assert_eq!(processed.total().to_string(), "109.00");
    }

    #[test]
    fn processing_twice_errors() {
        let service = service();
        let payment = record_payment(&service, "2025-03-01");
        let paid_at = DateTime::from_date_str("2025-03-01")
            .unwrap()
            .coerce();

        let processed = block_on(service.execute(ProcessPayment {
            payment_id: payment.id,
            paid_at,
        }))
        .unwrap();
        assert_eq!(processed.status, payment::Status::Paid);

        assert!(block_on(service.execute(ProcessPayment {
            payment_id: payment.id,
            paid_at,
        }))
        .is_err());
    }

    #[test]
    fn unknown_payment_is_rejected() {
        let service = service();

        assert!(block_on(service.execute(ProcessPayment {
            payment_id: payment::Id::new(),
            paid_at: DateTime::now().coerce(),
        }))
        .is_err());
    }
}
