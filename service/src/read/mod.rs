//! Read models of domain definitions.

pub mod company;
pub mod contract;
pub mod property;
