//! Domain entities of a rental company.

pub mod company;
pub mod contract;
pub mod event;
pub mod lease;
pub mod maintenance;
pub mod payment;
pub mod property;
pub mod user;

pub use self::{
    company::RentalCompany,
    contract::RentalContract,
    event::{Event, EventLog, Notification},
    lease::LeaseAgreement,
    maintenance::{MaintenanceRequest, Renovation},
    payment::{Payment, PaymentHistory},
    property::Property,
    user::User,
};
