//! Read models of [`RentalCompany`] definitions.
//!
//! [`RentalCompany`]: crate::domain::RentalCompany

use crate::domain::property;

/// Outcome of altering a [`RentalCompany`]'s portfolio.
///
/// [`RentalCompany`]: crate::domain::RentalCompany
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// [`Property`] was added to the portfolio.
    ///
    /// [`Property`]: crate::domain::Property
    Added {
        /// ID of the added [`Property`].
        ///
        /// [`Property`]: crate::domain::Property
        property_id: property::Id,
    },

    /// [`Property`] was listed in the portfolio already, so nothing changed.
    ///
    /// [`Property`]: crate::domain::Property
    AlreadyListed {
        /// ID of the already listed [`Property`].
        ///
        /// [`Property`]: crate::domain::Property
        property_id: property::Id,
    },

    /// [`Property`] was removed from the portfolio.
    ///
    /// [`Property`]: crate::domain::Property
    Removed {
        /// ID of the removed [`Property`].
        ///
        /// [`Property`]: crate::domain::Property
        property_id: property::Id,
    },

    /// [`Property`] was not listed in the portfolio, so nothing changed.
    ///
    /// [`Property`]: crate::domain::Property
    NotListed {
        /// ID of the non-listed [`Property`].
        ///
        /// [`Property`]: crate::domain::Property
        property_id: property::Id,
    },
}
