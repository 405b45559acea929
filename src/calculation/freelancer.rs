//! Freelancer deduction schedule.
//!
//! Freelancers (business-income earners) are withheld a flat 3% income tax
//! plus a 0.3% local income tax, both levied directly on taxable income.
//! Note the contrast with the employee schedule: the freelancer local tax
//! is NOT derived as 10% of the income tax, it is an independent 0.3%
//! surtax on the same taxable base.

use rust_decimal::Decimal;

use crate::models::{DeductionAmounts, DeductionBreakdown, DeductionKind, DeductionLine};

/// Returns the freelancer income tax withholding rate (3%).
pub fn freelancer_withholding_rate() -> Decimal {
    Decimal::new(3, 2)
}

/// Returns the freelancer local income tax rate (0.3% of taxable income).
pub fn freelancer_local_tax_rate() -> Decimal {
    Decimal::new(3, 3)
}

/// Calculates the freelancer deduction breakdown for a taxable income.
///
/// The four social-insurance kinds are present in the amounts at zero for
/// schema uniformity with the employee schedule, but only the two tax
/// lines are exposed on the slip, in fixed order: income tax, local tax.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_freelancer_deductions;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_freelancer_deductions(Decimal::from(1_000_000));
/// assert_eq!(breakdown.amounts.income_tax, Decimal::from(30_000));
/// assert_eq!(breakdown.amounts.local_tax, Decimal::from(3_000));
/// assert_eq!(breakdown.total, Decimal::from(33_000));
/// ```
pub fn calculate_freelancer_deductions(taxable_income: Decimal) -> DeductionBreakdown {
    let income_tax = taxable_income * freelancer_withholding_rate();
    let local_tax = taxable_income * freelancer_local_tax_rate();
    let total = income_tax + local_tax;

    let amounts = DeductionAmounts {
        income_tax,
        local_tax,
        ..DeductionAmounts::zero()
    };

    let lines = vec![
        DeductionLine {
            kind: DeductionKind::IncomeTax,
            label: "소득세(3%)".to_string(),
            amount: income_tax,
        },
        DeductionLine {
            kind: DeductionKind::LocalTax,
            label: "지방소득세(0.3%)".to_string(),
            amount: local_tax,
        },
    ];

    DeductionBreakdown {
        amounts,
        lines,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_worked_example_one_million() {
        let breakdown = calculate_freelancer_deductions(dec("1000000"));

        assert_eq!(breakdown.amounts.income_tax, dec("30000"));
        assert_eq!(breakdown.amounts.local_tax, dec("3000"));
        assert_eq!(breakdown.total, dec("33000"));
    }

    #[test]
    fn test_local_tax_is_flat_surtax_not_ten_percent_of_income_tax() {
        // 0.3% of taxable income coincides numerically with 10% of the 3%
        // withholding, but it is computed from the taxable base. A taxable
        // income with a fractional tail distinguishes the derivations only
        // in intermediate form, so pin the base-derived value directly.
        let taxable = dec("1234567");
        let breakdown = calculate_freelancer_deductions(taxable);
        assert_eq!(breakdown.amounts.local_tax, taxable * dec("0.003"));
    }

    #[test]
    fn test_insurance_kinds_present_at_zero() {
        let breakdown = calculate_freelancer_deductions(dec("2000000"));

        assert_eq!(breakdown.amounts.national_pension, Decimal::ZERO);
        assert_eq!(breakdown.amounts.health_insurance, Decimal::ZERO);
        assert_eq!(breakdown.amounts.long_term_care, Decimal::ZERO);
        assert_eq!(breakdown.amounts.employment_insurance, Decimal::ZERO);
    }

    #[test]
    fn test_exposes_exactly_two_lines_in_order() {
        let breakdown = calculate_freelancer_deductions(dec("2000000"));

        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.lines[0].kind, DeductionKind::IncomeTax);
        assert_eq!(breakdown.lines[0].label, "소득세(3%)");
        assert_eq!(breakdown.lines[1].kind, DeductionKind::LocalTax);
        assert_eq!(breakdown.lines[1].label, "지방소득세(0.3%)");
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let breakdown = calculate_freelancer_deductions(dec("3456789"));
        let sum: Decimal = breakdown.lines.iter().map(|l| l.amount).sum();
        assert_eq!(breakdown.total, sum);
    }

    #[test]
    fn test_zero_taxable_income() {
        let breakdown = calculate_freelancer_deductions(Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
        assert_eq!(breakdown.amounts.income_tax, Decimal::ZERO);
        assert_eq!(breakdown.amounts.local_tax, Decimal::ZERO);
    }

    #[test]
    fn test_rates_are_exact() {
        assert_eq!(freelancer_withholding_rate(), dec("0.03"));
        assert_eq!(freelancer_local_tax_rate(), dec("0.003"));
    }
}
