//! [`Command`] for signing a new [`RentalContract`].

use common::{operations::{By, Insert, Select}, Percent};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{contract, property, user, Property, RentalContract, User},
    infra::{database, Database},
    read::contract::Active,
    Service,
};

use super::Command;

/// [`Command`] for signing a new [`RentalContract`] between a [`Property`]
/// owner and the rental company.
#[derive(Clone, Copy, Debug)]
pub struct SignRentalContract {
    /// ID of the [`User`] owning the [`Property`].
    pub owner_id: user::Id,

    /// ID of the managed [`Property`].
    pub property_id: property::Id,

    /// [`DateTime`] when the contract expires.
    ///
    /// [`DateTime`]: common::DateTime
    pub expires_at: contract::ExpirationDateTime,

    /// Commission fee as a [`Percent`] of the monthly rent.
    pub fee: Percent,
}

impl<Db> Command<SignRentalContract> for Service<Db>
where
    Db: Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Active<RentalContract>>, property::Id>>,
            Ok = Option<Active<RentalContract>>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<RentalContract>,
            Ok = (),
            Err = Traced<database::Error>,
        >,
{
    type Ok = RentalContract;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SignRentalContract,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SignRentalContract {
            owner_id,
            property_id,
            expires_at,
            fee,
        } = cmd;

        let owner = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(owner_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(owner_id))
            .map_err(tracerr::wrap!())?;
        if owner.kind() != user::Kind::Owner {
            return Err(tracerr::new!(E::UserNotOwner(owner_id)));
        }

        self.database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let active = self
            .database()
            .execute(Select(
                By::<Option<Active<RentalContract>>, _>::new(property_id),
            ))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(Active(contract)) = active {
            return Err(tracerr::new!(E::PropertyAlreadyUnderContract(
                contract.id
            )));
        }

        let contract =
            RentalContract::new(owner_id, property_id, expires_at, fee);

        self.database()
            .execute(Insert(contract.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(contract)
    }
}

/// Error of [`SignRentalContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] is managed under an active [`RentalContract`] already.
    #[display(
        "`Property` is managed under the active `RentalContract(id: {_0})` \
         already"
    )]
    PropertyAlreadyUnderContract(#[error(not(source))] contract::Id),

    /// [`Property`] with the provided ID is not listed.
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`User`] with the provided ID does not exist.
    #[display("`User(id: {_0})` does not exist")]
    UserNotExists(#[error(not(source))] user::Id),

    /// [`User`] with the provided ID is not an owner.
    #[display("`User(id: {_0})` is not an owner")]
    UserNotOwner(#[error(not(source))] user::Id),
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Percent};
    use futures::executor::block_on;
    use secrecy::SecretBox;

    use crate::{
        command::{AddProperty, CreateUser},
        domain::{company, contract, property, user, Property, User},
        infra::Memory,
        Command as _, Service,
    };

    use super::SignRentalContract;

    fn service() -> Service<Memory> {
        Service::new(Memory::new(company::Name::new("Acme Rentals").unwrap()))
    }

    fn add_property(service: &Service<Memory>) -> Property {
        block_on(service.execute(AddProperty {
            address: property::Address::new("2 Maple Way").unwrap(),
            size: "100".parse().unwrap(),
            price: "2000".parse().unwrap(),
            details: property::House {
                bedrooms: 4,
                bathrooms: 2,
                has_garden: true,
            }
            .into(),
        }))
        .unwrap()
    }

    fn create_user(
        service: &Service<Memory>,
        username: &str,
        role: user::Role,
    ) -> User {
        block_on(service.execute(CreateUser {
            username: user::Username::new(username).unwrap(),
            password: SecretBox::new(Box::new(
                user::Password::new("s3cret").unwrap(),
            )),
            role,
        }))
        .unwrap()
    }

    fn cmd(owner: &User, property: &Property) -> SignRentalContract {
        SignRentalContract {
            owner_id: owner.id,
            property_id: property.id,
            expires_at: DateTime::now()
                .checked_add_months(12)
                .unwrap()
                .coerce(),
            fee: Percent::new("10".parse().unwrap()).unwrap(),
        }
    }

    #[test]
    fn signs_contract_for_listed_property() {
        let service = service();
        let property = add_property(&service);
        let owner =
            create_user(&service, "ivan_06", user::Owner::default().into());

        let signed =
            block_on(service.execute(cmd(&owner, &property))).unwrap();

        assert_eq!(signed.status(), contract::Status::Active);
        assert_eq!(
            signed.commission(property.price).to_string(),
            "200.00",
        );
    }

    #[test]
    fn one_active_contract_per_property() {
        let service = service();
        let property = add_property(&service);
        let owner =
            create_user(&service, "ivan_06", user::Owner::default().into());

        _ = block_on(service.execute(cmd(&owner, &property))).unwrap();

        assert!(
            block_on(service.execute(cmd(&owner, &property))).is_err()
        );
    }

    #[test]
    fn non_owner_cannot_sign() {
        let service = service();
        let property = add_property(&service);
        let renter = create_user(&service, "jane_07", user::Role::Renter);

        assert!(
            block_on(service.execute(cmd(&renter, &property))).is_err()
        );
    }
}
