//! [`Command`] for assigning a [`Property`] to a [`User`].
//!
//! [`Property`]: crate::domain::Property

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, user, Property, User},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for assigning a [`Property`] to a [`User`] whose [`Role`]
/// holds a properties collection.
///
/// [`Property`]: crate::domain::Property
/// [`Role`]: user::Role
#[derive(Clone, Copy, Debug)]
pub struct AssignProperty {
    /// ID of the [`Property`] to be assigned.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// ID of the [`User`] to assign the [`Property`] to.
    ///
    /// [`Property`]: crate::domain::Property
    pub user_id: user::Id,
}

impl<Db> Command<AssignProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<Update<User>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AssignProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AssignProperty {
            property_id,
            user_id,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let mut user = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(user_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(user_id))
            .map_err(tracerr::wrap!())?;

        let Some(property_ids) = user.role.property_ids_mut() else {
            return Err(tracerr::new!(E::RoleCannotHoldProperties(
                user.kind()
            )));
        };
        if !property_ids.contains(&property_id) {
            property_ids.push(property_id);
        }

        self.database()
            .execute(Update(user))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(())
    }
}

/// Error of [`AssignProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the provided ID is not listed.
    ///
    /// [`Property`]: crate::domain::Property
    #[display("`Property(id: {_0})` is not listed")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`User`]'s role doesn't hold a properties collection.
    #[display("`{_0}` role cannot hold properties")]
    RoleCannotHoldProperties(#[error(not(source))] user::Kind),

    /// [`User`] with the provided ID does not exist.
    #[display("`User(id: {_0})` does not exist")]
    UserNotExists(#[error(not(source))] user::Id),
}
