//! Payslip presentation: currency formatting and plain-text rendering.
//!
//! The engine returns exact, possibly fractional decimals; every rounding
//! decision lives here. Amounts are rounded half away from zero to whole
//! won and grouped with commas only when they are printed.

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::{compute, pay_item_breakdown};
use crate::models::{PayrollInput, PayslipForm};

/// The fixed disclaimer printed under the totals on every slip.
pub const SCHEDULE_DISCLAIMER: &str =
    "※ 세금 및 4대보험은 2024년 기준 간이 계산값이며 실제 고지 금액과 차이가 있을 수 있습니다.";

/// Formats a monetary amount for display.
///
/// Rounds half away from zero to the nearest whole won, then groups digits
/// in threes with commas.
///
/// # Examples
///
/// ```
/// use payslip_engine::render::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(1234567)), "1,234,567");
/// assert_eq!(format_currency(Decimal::from_str("7200.5").unwrap()), "7,201");
/// assert_eq!(format_currency(Decimal::from(-33000)), "-33,000");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }
    let text = rounded.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Renders a plain-text payslip for the current form state.
///
/// Computes the payroll result from the form (through the coercion
/// boundary) and lays out the identity blocks, pay items, deduction lines,
/// totals, optional memo, and the fixed disclaimer. Identity rows with
/// blank values are omitted; the calculation sections always appear.
///
/// # Examples
///
/// ```
/// use payslip_engine::models::PayslipForm;
/// use payslip_engine::render::render_payslip;
///
/// let mut form = PayslipForm::default();
/// form.worker_name = "김철수".to_string();
/// form.base_pay = "1,000,000".to_string();
///
/// let slip = render_payslip(&form);
/// assert!(slip.contains("급여명세서"));
/// assert!(slip.contains("실수령액"));
/// ```
pub fn render_payslip(form: &PayslipForm) -> String {
    let input = PayrollInput::from_form(form);
    let result = compute(&input);
    let pay_items = pay_item_breakdown(&input);

    let mut out = String::new();
    let _ = writeln!(out, "급여명세서");
    let _ = writeln!(out, "지급일: {}", form.pay_date);
    out.push('\n');

    let identity_rows = [
        ("회사명", form.company_name.as_str()),
        ("사업자등록번호", form.company_reg_no.as_str()),
        ("주소", form.company_address.as_str()),
        ("담당자", form.company_manager.as_str()),
        ("근로자", form.worker_name.as_str()),
        ("은행", form.bank_name.as_str()),
        ("계좌번호", form.bank_account.as_str()),
    ];
    for (label, value) in identity_rows {
        if !value.trim().is_empty() {
            let _ = writeln!(out, "{}: {}", label, value);
        }
    }
    if !form.work_period_start.is_empty() || !form.work_period_end.is_empty() {
        let _ = writeln!(
            out,
            "{}: {} ~ {}",
            form.work_period_label(),
            form.work_period_start,
            form.work_period_end
        );
    }
    out.push('\n');

    let _ = writeln!(out, "[지급 내역]");
    for item in &pay_items {
        let _ = writeln!(out, "{}  {}원", item.label, format_currency(item.amount));
    }
    let _ = writeln!(out, "총지급액  {}원", format_currency(result.gross_pay));
    out.push('\n');

    let _ = writeln!(out, "[공제 내역]");
    for line in &result.deduction_lines {
        let _ = writeln!(out, "{}  {}원", line.label, format_currency(line.amount));
    }
    let _ = writeln!(out, "총공제  {}원", format_currency(result.total_deductions));
    out.push('\n');

    let _ = writeln!(out, "실수령액  {}원", format_currency(result.net_pay));

    if !form.memo.trim().is_empty() {
        let _ = writeln!(out, "메모: {}", form.memo);
    }
    let _ = writeln!(out, "{}", SCHEDULE_DISCLAIMER);

    out
}
