//! [`Query`] collection related to rent [`Payment`]s.
//!
//! [`Payment`]: crate::domain::Payment

use common::operations::By;

use crate::domain::{lease, PaymentHistory};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the [`PaymentHistory`] of a single [`LeaseAgreement`], ordered by
/// due date.
///
/// [`LeaseAgreement`]: crate::domain::LeaseAgreement
pub type History = DatabaseQuery<By<PaymentHistory, lease::Id>>;

#[cfg(test)]
mod spec {
    use common::DateTime;
    use futures::executor::block_on;
    use secrecy::SecretBox;

    use crate::{
        command::{
            AddProperty, CreateUser, ProcessPayment, RecordPayment, SignLease,
        },
        domain::{company, lease, payment, property, user},
        infra::Memory,
        Command as _, Query as _, Service,
    };

    use super::History;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn due(s: &str) -> payment::DueDateTime {
        DateTime::from_date_str(s).unwrap().coerce()
    }

    fn signed_lease(service: &Service<Memory>) -> lease::Id {
        let property = block_on(service.execute(AddProperty {
            address: property::Address::new("7 Maple Road").unwrap(),
            size: "85".parse().unwrap(),
            price: "1000".parse().unwrap(),
            details: property::Apartment {
                floor: 2,
                has_elevator: true,
                has_balcony: false,
            }
            .into(),
        }))
        .unwrap();
        let resident = block_on(service.execute(CreateUser {
            username: user::Username::new("oleg_07").unwrap(),
            password: SecretBox::new(Box::new(
                user::Password::new("s3cret").unwrap(),
            )),
            role: user::Resident::default().into(),
        }))
        .unwrap();
        block_on(service.execute(SignLease {
            property_id: property.id,
            resident_id: resident.id,
            starts_at: DateTime::now().coerce(),
            duration: lease::Months::from(12),
            monthly_rent: property.price,
        }))
        .unwrap()
        .id
    }

    #[test]
    fn collects_lease_payments_by_due_date() {
        let service = service();
        let lease_id = signed_lease(&service);

        let february = block_on(service.execute(RecordPayment {
            lease_id,
            amount: "1000".parse().unwrap(),
            due_at: due("2025-02-01"),
        }))
        .unwrap();
        _ = block_on(service.execute(RecordPayment {
            lease_id,
            amount: "1000".parse().unwrap(),
            due_at: due("2025-01-01"),
        }))
        .unwrap();
        _ = block_on(service.execute(ProcessPayment {
            payment_id: february.id,
            paid_at: DateTime::from_date_str("2025-02-01")
                .unwrap()
                .coerce(),
        }))
        .unwrap();

        let history = block_on(service.execute(History::by(lease_id))).unwrap();

        assert_eq!(history.payments().len(), 2);
        assert_eq!(history.payments()[0].due_at, due("2025-01-01"));
        assert_eq!(history.payments()[1].due_at, due("2025-02-01"));
        assert_eq!(history.total_paid().to_string(), "1000.00");
        assert_eq!(history.unpaid().count(), 1);
    }

    #[test]
    fn unknown_lease_has_empty_history() {
        let service = service();
        _ = signed_lease(&service);

        let history =
            block_on(service.execute(History::by(lease::Id::new()))).unwrap();

        assert!(history.payments().is_empty());
    }
}
