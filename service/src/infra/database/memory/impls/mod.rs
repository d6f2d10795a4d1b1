//! [`Database`] operation implementations of the [`Memory`] database.
//!
//! [`Database`]: crate::infra::Database
//! [`Memory`]: super::Memory

mod contract;
mod lease;
mod maintenance;
mod payment;
mod property;
mod user;
