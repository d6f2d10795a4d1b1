//! [`Query`] collection for building reports.
//!
//! [`Query`]: super::Query

pub mod analytics;
pub mod monthly;

pub use self::{analytics::Analytics, monthly::Monthly};
