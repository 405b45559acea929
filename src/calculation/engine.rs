//! The top-level payroll computation.

use rust_decimal::Decimal;

use crate::models::{PayItem, PayrollInput, PayrollResult, WorkerType};

use super::employee::calculate_employee_deductions;
use super::freelancer::calculate_freelancer_deductions;

/// Computes a complete payroll result from an input snapshot.
///
/// This is a pure, total function: it performs no I/O, holds no state, and
/// cannot fail. Gross pay is the sum of the four pay components, taxable
/// income is gross minus the non-taxable amount floored at zero, and the
/// deduction schedule is selected by the worker classification. Net pay is
/// gross minus total deductions and is deliberately not clamped; the
/// simplistic schedule can push it negative and the result reflects that.
///
/// Callers embedding this in a reactive form should call it with the
/// complete current input on every change; results are fully derived and
/// never updated incrementally.
///
/// # Examples
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
///
/// let result = compute(&input);
/// assert_eq!(result.gross_pay, Decimal::from(1_000_000));
/// assert_eq!(result.net_pay, Decimal::from(967_000));
/// ```
pub fn compute(input: &PayrollInput) -> PayrollResult {
    let gross_pay =
        input.base_pay + input.overtime_pay + input.bonus_pay + input.other_allowances;
    let taxable_income = (gross_pay - input.non_taxable).max(Decimal::ZERO);

    let breakdown = match input.worker_type {
        WorkerType::Employee => calculate_employee_deductions(taxable_income),
        WorkerType::Freelancer => calculate_freelancer_deductions(taxable_income),
    };

    PayrollResult {
        gross_pay,
        taxable_income,
        deductions: breakdown.amounts,
        deduction_lines: breakdown.lines,
        total_deductions: breakdown.total,
        net_pay: gross_pay - breakdown.total,
    }
}

/// Returns the ordered pay-item lines for the slip.
///
/// Always all four components in fixed order, regardless of whether the
/// form currently shows the optional ones.
pub fn pay_item_breakdown(input: &PayrollInput) -> Vec<PayItem> {
    vec![
        PayItem {
            label: "기본급".to_string(),
            amount: input.base_pay,
        },
        PayItem {
            label: "연장/야간".to_string(),
            amount: input.overtime_pay,
        },
        PayItem {
            label: "상여".to_string(),
            amount: input.bonus_pay,
        },
        PayItem {
            label: "기타수당".to_string(),
            amount: input.other_allowances,
        },
    ]
}
