//! Employee deduction schedule.
//!
//! Employees are withheld the four social-insurance premiums plus income
//! tax from the simplified progressive table and a 10% local income tax
//! surtax on that income tax. The long-term care premium is levied on the
//! health insurance premium, not on taxable income, so it must be computed
//! after the health premium.

use rust_decimal::Decimal;

use crate::models::{DeductionAmounts, DeductionBreakdown, DeductionKind, DeductionLine};

use super::income_tax::simplified_income_tax;

/// Returns the national pension rate (4.5% of taxable income).
pub fn national_pension_rate() -> Decimal {
    Decimal::new(45, 3)
}

/// Returns the health insurance rate (3.545% of taxable income).
pub fn health_insurance_rate() -> Decimal {
    Decimal::new(3545, 5)
}

/// Returns the long-term care rate (12.81% of the health premium).
pub fn long_term_care_rate() -> Decimal {
    Decimal::new(1281, 4)
}

/// Returns the employment insurance rate (0.9% of taxable income).
pub fn employment_insurance_rate() -> Decimal {
    Decimal::new(9, 3)
}

/// Returns the employee local income tax rate (10% of income tax).
pub fn employee_local_tax_rate() -> Decimal {
    Decimal::new(1, 1)
}

/// Calculates the employee deduction breakdown for a taxable income.
///
/// Income tax from the progressive table is clamped at zero before the
/// local surtax is derived from it; the subtraction constants in the table
/// could otherwise produce a tiny negative withholding near zero income.
/// All six lines are exposed on the slip in fixed order: national pension,
/// health insurance, long-term care, employment insurance, income tax,
/// local tax.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_employee_deductions;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_employee_deductions(Decimal::from(1_200_000));
/// assert_eq!(breakdown.amounts.income_tax, Decimal::from(7_200));
/// assert_eq!(breakdown.amounts.local_tax, Decimal::from(720));
/// ```
pub fn calculate_employee_deductions(taxable_income: Decimal) -> DeductionBreakdown {
    let national_pension = taxable_income * national_pension_rate();
    let health_insurance = taxable_income * health_insurance_rate();
    // Levied on the health premium; keep this after the line above.
    let long_term_care = health_insurance * long_term_care_rate();
    let employment_insurance = taxable_income * employment_insurance_rate();
    let income_tax = simplified_income_tax(taxable_income).max(Decimal::ZERO);
    let local_tax = income_tax * employee_local_tax_rate();

    let total = national_pension
        + health_insurance
        + long_term_care
        + employment_insurance
        + income_tax
        + local_tax;

    let amounts = DeductionAmounts {
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        income_tax,
        local_tax,
    };

    let lines = vec![
        DeductionLine {
            kind: DeductionKind::NationalPension,
            label: "국민연금(4.5%)".to_string(),
            amount: national_pension,
        },
        DeductionLine {
            kind: DeductionKind::HealthInsurance,
            label: "건강보험(3.545%)".to_string(),
            amount: health_insurance,
        },
        DeductionLine {
            kind: DeductionKind::LongTermCare,
            label: "장기요양(건보 12.81%)".to_string(),
            amount: long_term_care,
        },
        DeductionLine {
            kind: DeductionKind::EmploymentInsurance,
            label: "고용보험(0.9%)".to_string(),
            amount: employment_insurance,
        },
        DeductionLine {
            kind: DeductionKind::IncomeTax,
            label: "근로소득세(간이)".to_string(),
            amount: income_tax,
        },
        DeductionLine {
            kind: DeductionKind::LocalTax,
            label: "지방소득세(소득세 10%)".to_string(),
            amount: local_tax,
        },
    ];

    DeductionBreakdown {
        amounts,
        lines,
        total,
    }
}
