//! [`Command`] definition.

pub mod add_property;
pub mod approve_maintenance;
pub mod assign_property;
pub mod create_user;
pub mod process_payment;
pub mod record_payment;
pub mod remove_property;
pub mod renew_lease;
pub mod report_maintenance;
pub mod resolve_maintenance;
pub mod sign_lease;
pub mod sign_rental_contract;
pub mod terminate_lease;
pub mod terminate_rental_contract;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_property::AddProperty, approve_maintenance::ApproveMaintenance,
    assign_property::AssignProperty, create_user::CreateUser,
    process_payment::ProcessPayment, record_payment::RecordPayment,
    remove_property::RemoveProperty, renew_lease::RenewLease,
    report_maintenance::ReportMaintenance,
    resolve_maintenance::ResolveMaintenance, sign_lease::SignLease,
    sign_rental_contract::SignRentalContract, terminate_lease::TerminateLease,
    terminate_rental_contract::TerminateRentalContract,
};
