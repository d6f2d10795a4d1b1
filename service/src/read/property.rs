//! [`Property`]-related read definitions.
//!
//! [`Property`]: crate::domain::Property

pub mod list {
    //! [`Property`] list definitions.
    //!
    //! [`Property`]: crate::domain::Property

    use std::ops::RangeInclusive;

    use common::Money;
    use derive_more::{From, Into};
    use smart_default::SmartDefault;

    /// Filter for selecting a list of [`Property`]s.
    ///
    /// [`Property`]: crate::domain::Property
    #[derive(Clone, Debug, SmartDefault)]
    pub struct Filter {
        /// Location text (or its part) to search addresses for, ignoring
        /// letter case.
        pub location: Option<String>,

        /// Range of acceptable monthly rent prices.
        pub price: Option<RangeInclusive<Money>>,

        /// Indicator whether occupied [`Property`]s pass this [`Filter`].
        ///
        /// [`Property`]: crate::domain::Property
        #[default = true]
        pub occupied: bool,

        /// Indicator whether available [`Property`]s pass this [`Filter`].
        ///
        /// [`Property`]: crate::domain::Property
        #[default = true]
        pub available: bool,
    }

    impl Filter {
        /// [`Filter`] passing available [`Property`]s only.
        ///
        /// [`Property`]: crate::domain::Property
        #[must_use]
        pub fn available_only() -> Self {
            Self {
                occupied: false,
                ..Self::default()
            }
        }
    }

    /// Total count of [`Property`]s.
    ///
    /// [`Property`]: crate::domain::Property
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(i32);
}
