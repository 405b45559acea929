//! Calculation logic for the payslip engine.
//!
//! This module contains the pure computation pipeline: monetary text
//! coercion at the form boundary, the simplified progressive income tax
//! table, the employee and freelancer deduction schedules, and the
//! top-level [`compute`] function that maps a
//! [`PayrollInput`](crate::models::PayrollInput) to a
//! [`PayrollResult`](crate::models::PayrollResult).

mod coerce;
mod employee;
mod engine;
mod freelancer;
mod income_tax;

pub use coerce::coerce_monetary;
pub use employee::{
    calculate_employee_deductions, employee_local_tax_rate, employment_insurance_rate,
    health_insurance_rate, long_term_care_rate, national_pension_rate,
};
pub use engine::{compute, pay_item_breakdown};
pub use freelancer::{
    calculate_freelancer_deductions, freelancer_local_tax_rate, freelancer_withholding_rate,
};
pub use income_tax::{TaxBracket, simplified_income_tax, tax_brackets};
