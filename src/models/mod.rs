//! Core data models for the payslip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod form;
mod payroll_input;
mod payroll_result;
mod profile;
mod worker;

pub use form::{PayslipForm, WorkPeriodType};
pub use payroll_input::PayrollInput;
pub use payroll_result::{
    DeductionAmounts, DeductionBreakdown, DeductionKind, DeductionLine, PayItem, PayrollResult,
};
pub use profile::{CompanyProfile, CompanyProfileData, WorkerProfile, WorkerProfileData};
pub use worker::WorkerType;
