//! [`RentalContract`] read model definitions.

#[cfg(doc)]
use crate::domain::RentalContract;

/// Wrapper around a [`RentalContract`] indicating that it [`is_active()`].
///
/// [`is_active()`]: RentalContract::is_active
#[derive(Clone, Copy, Debug)]
pub struct Active<T>(pub T);
