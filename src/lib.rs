//! Payslip calculation engine for Korean wage statements.
//!
//! This crate computes a Korean payslip: given gross pay components and a
//! worker classification (employee vs freelancer), it derives taxable income
//! and statutory deductions using a simplified withholding schedule. Around
//! that pure core it provides the pieces a payslip application needs:
//! text-to-number coercion for form input, currency formatting and
//! plain-text rendering, and saved worker/company profiles over an injected
//! key-value store.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
