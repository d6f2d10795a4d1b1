//! [`RentalCompany`] definitions.

use std::str::FromStr;

use common::Money;
use derive_more::{AsRef, Display};
use tracing as log;

use crate::{
    domain::{contract, property, Property, RentalContract},
    read,
};

/// Company managing a portfolio of [`Property`]s under [`RentalContract`]s
/// with their owners.
#[derive(Clone, Debug)]
pub struct RentalCompany {
    /// [`Name`] of this [`RentalCompany`].
    pub name: Name,

    /// Portfolio of [`Property`]s managed by this [`RentalCompany`].
    properties: Vec<Property>,

    /// [`RentalContract`]s signed by this [`RentalCompany`].
    contracts: Vec<RentalContract>,
}

impl RentalCompany {
    /// Creates a new [`RentalCompany`] with an empty portfolio.
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            properties: Vec::new(),
            contracts: Vec::new(),
        }
    }

    /// Returns the whole portfolio of this [`RentalCompany`].
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a [`Property`] of this [`RentalCompany`] by its ID.
    #[must_use]
    pub fn property(&self, id: property::Id) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Looks up a [`Property`] of this [`RentalCompany`] by its ID, mutably.
    pub fn property_mut(&mut self, id: property::Id) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.id == id)
    }

    /// Adds the provided [`Property`] to this [`RentalCompany`]'s portfolio.
    ///
    /// Adding an already listed [`Property`] is a no-op.
    pub fn add_property(&mut self, property: Property) -> read::company::Event {
        let property_id = property.id;
        if self.property(property_id).is_some() {
            log::debug!("`Property(id: {property_id})` is listed already");
            return read::company::Event::AlreadyListed { property_id };
        }

        self.properties.push(property);
        log::info!("`Property(id: {property_id})` added to the portfolio");
        read::company::Event::Added { property_id }
    }

    /// Removes the specified [`Property`] from this [`RentalCompany`]'s
    /// portfolio.
    ///
    /// Removing a non-listed [`Property`] is a no-op.
    pub fn remove_property(
        &mut self,
        property_id: property::Id,
    ) -> read::company::Event {
        let Some(pos) =
            self.properties.iter().position(|p| p.id == property_id)
        else {
            log::warn!("`Property(id: {property_id})` is not listed");
            return read::company::Event::NotListed { property_id };
        };

        _ = self.properties.remove(pos);
        log::info!("`Property(id: {property_id})` removed from the portfolio");
        read::company::Event::Removed { property_id }
    }

    /// Returns all the [`RentalContract`]s signed by this [`RentalCompany`].
    #[must_use]
    pub fn contracts(&self) -> &[RentalContract] {
        &self.contracts
    }

    /// Looks up a [`RentalContract`] of this [`RentalCompany`] by its ID.
    #[must_use]
    pub fn contract(&self, id: contract::Id) -> Option<&RentalContract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Looks up a [`RentalContract`] of this [`RentalCompany`] by its ID,
    /// mutably.
    pub fn contract_mut(
        &mut self,
        id: contract::Id,
    ) -> Option<&mut RentalContract> {
        self.contracts.iter_mut().find(|c| c.id == id)
    }

    /// Signs the provided [`RentalContract`] on behalf of this
    /// [`RentalCompany`].
    pub fn sign_contract(&mut self, contract: RentalContract) {
        log::info!(
            "`RentalContract(id: {})` signed for `Property(id: {})`",
            contract.id,
            contract.property_id,
        );
        self.contracts.push(contract);
    }

    /// Total commission income of this [`RentalCompany`] from its active
    /// [`RentalContract`]s, based on the current prices of the listed
    /// [`Property`]s.
    #[must_use]
    pub fn income(&self) -> Money {
        self.contracts
            .iter()
            .filter_map(|c| {
                self.property(c.property_id).map(|p| c.commission(p.price))
            })
            .sum()
    }
}

/// Name of a [`RentalCompany`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Percent};

    use crate::{
        domain::{
            property, user, Property, RentalContract,
        },
        read,
    };

    use super::{Name, RentalCompany};

    fn company() -> RentalCompany {
        RentalCompany::new(Name::new("Acme Rentals").unwrap())
    }

    fn property(address: &str, price: &str) -> Property {
        Property::new(
            property::Address::new(address).unwrap(),
            "80".parse().unwrap(),
            price.parse().unwrap(),
            property::House {
                bedrooms: 2,
                bathrooms: 1,
                has_garden: false,
            }
            .into(),
        )
    }

    #[test]
    fn listing_is_idempotent_by_id() {
        let mut company = company();
        let property = property("12 Green Street", "1500");
        let property_id = property.id;

        assert_eq!(
            company.add_property(property.clone()),
            read::company::Event::Added { property_id },
        );
        assert_eq!(
            company.add_property(property),
            read::company::Event::AlreadyListed { property_id },
        );
        assert_eq!(company.properties().len(), 1);
    }

    #[test]
    fn removing_absent_property_is_a_no_op() {
        let mut company = company();
        let property_id = property::Id::new();

        assert_eq!(
            company.remove_property(property_id),
            read::company::Event::NotListed { property_id },
        );
    }

    #[test]
    fn income_sums_commissions_of_listed_properties() {
        let mut company = company();

        let first = property("12 Green Street", "2000");
        let second = property("3 Oak Avenue", "1000");
        let expires_at = DateTime::now()
            .checked_add_months(12)
            .unwrap()
            .coerce();
        company.sign_contract(RentalContract::new(
            user::Id::new(),
            first.id,
            expires_at,
            Percent::new("10".parse().unwrap()).unwrap(),
        ));
        company.sign_contract(RentalContract::new(
            user::Id::new(),
            second.id,
            expires_at,
            Percent::new("10".parse().unwrap()).unwrap(),
        ));
        _ = company.add_property(first);
        // The second property never makes it into the portfolio.

        assert_eq!(company.income().to_string(), "200.00");
    }
}
