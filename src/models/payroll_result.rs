//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs from a payroll computation: the
//! gross/taxable/net figures, the per-kind deduction amounts, and the
//! ordered deduction lines shown on the slip.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One named statutory withholding category.
///
/// Every result carries an amount for all six kinds regardless of worker
/// classification; the freelancer schedule simply fixes the four
/// social-insurance kinds at zero.
///
/// # Example
///
/// ```
/// use payslip_engine::models::DeductionKind;
///
/// let kind = DeductionKind::NationalPension;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"national_pension\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// National pension premium (employee schedule only).
    NationalPension,
    /// Health insurance premium (employee schedule only).
    HealthInsurance,
    /// Long-term care premium, levied on the health premium.
    LongTermCare,
    /// Employment insurance premium (employee schedule only).
    EmploymentInsurance,
    /// Income tax withholding.
    IncomeTax,
    /// Local income tax surtax.
    LocalTax,
}

/// A single deduction line as shown on the rendered slip.
///
/// Lines are produced in a fixed order per schedule: two for freelancers,
/// six for employees. The label carries the Korean display text including
/// the rate annotation (e.g. "소득세(3%)").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The withholding category of this line.
    pub kind: DeductionKind,
    /// The display label for this line.
    pub label: String,
    /// The exact (unrounded) deduction amount.
    pub amount: Decimal,
}

/// The amounts for all six deduction kinds.
///
/// Kinds that do not apply to the worker's schedule are present at zero so
/// both schedules share one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionAmounts {
    /// National pension premium.
    pub national_pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term care premium.
    pub long_term_care: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Income tax withholding.
    pub income_tax: Decimal,
    /// Local income tax surtax.
    pub local_tax: Decimal,
}

impl DeductionAmounts {
    /// All six amounts at zero.
    pub fn zero() -> Self {
        DeductionAmounts {
            national_pension: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            long_term_care: Decimal::ZERO,
            employment_insurance: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            local_tax: Decimal::ZERO,
        }
    }

    /// Returns the amount recorded for a given kind.
    pub fn amount(&self, kind: DeductionKind) -> Decimal {
        match kind {
            DeductionKind::NationalPension => self.national_pension,
            DeductionKind::HealthInsurance => self.health_insurance,
            DeductionKind::LongTermCare => self.long_term_care,
            DeductionKind::EmploymentInsurance => self.employment_insurance,
            DeductionKind::IncomeTax => self.income_tax,
            DeductionKind::LocalTax => self.local_tax,
        }
    }
}

/// The deduction side of a schedule evaluation.
///
/// Produced by the per-schedule calculation functions and folded into a
/// [`PayrollResult`] by [`compute`](crate::calculation::compute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionBreakdown {
    /// Amounts for all six kinds (unapplied kinds at zero).
    pub amounts: DeductionAmounts,
    /// The ordered lines exposed on the slip for this schedule.
    pub lines: Vec<DeductionLine>,
    /// Sum of the exposed lines.
    pub total: Decimal,
}

/// A single pay component line: label plus exact amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayItem {
    /// The display label (e.g. "기본급").
    pub label: String,
    /// The exact amount for this component.
    pub amount: Decimal,
}

/// The complete result of one payroll computation.
///
/// A result is derived from scratch on every call to
/// [`compute`](crate::calculation::compute); it has no identity beyond the
/// computation that produced it. Amounts are exact decimals; rounding to
/// whole won happens only at render time.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::compute;
/// use payslip_engine::models::{PayrollInput, WorkerType};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     worker_type: WorkerType::Freelancer,
///     base_pay: Decimal::from(1_000_000),
///     overtime_pay: Decimal::ZERO,
///     bonus_pay: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
///     non_taxable: Decimal::ZERO,
/// };
/// let result = compute(&input);
/// assert_eq!(result.total_deductions, Decimal::from(33_000));
/// assert_eq!(result.net_pay, Decimal::from(967_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Sum of all four pay components.
    pub gross_pay: Decimal,
    /// Gross pay minus the non-taxable amount, floored at zero.
    pub taxable_income: Decimal,
    /// Amounts for all six deduction kinds (unapplied kinds at zero).
    pub deductions: DeductionAmounts,
    /// The ordered deduction lines shown on the slip (2 or 6 entries).
    pub deduction_lines: Vec<DeductionLine>,
    /// Sum of the exposed deduction lines.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions. May be negative; not clamped.
    pub net_pay: Decimal,
}
