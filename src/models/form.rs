//! The payslip form model.
//!
//! This module contains the [`PayslipForm`] record that mirrors what the
//! input form collects: every field is kept as entered text, and the
//! monetary fields only become numbers at the coercion boundary when a
//! [`PayrollInput`](super::PayrollInput) is constructed.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::WorkerType;

/// How the work period is expressed on the slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPeriodType {
    /// An explicit date range (start and end dates).
    Date,
    /// A month range (start and end months).
    Month,
}

impl Default for WorkPeriodType {
    fn default() -> Self {
        WorkPeriodType::Month
    }
}

/// The complete payslip form state, all fields as entered text.
///
/// Monetary fields (`base_pay` through `non_taxable`) hold raw user input,
/// possibly with thousands separators or garbage; they are normalized by
/// [`coerce_monetary`](crate::calculation::coerce_monetary) when building a
/// [`PayrollInput`](super::PayrollInput).
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayslipForm, WorkerType};
///
/// let mut form = PayslipForm::default();
/// form.worker_name = "김철수".to_string();
/// form.base_pay = "2,400,000".to_string();
/// assert_eq!(form.worker_type, WorkerType::Employee);
/// assert_eq!(form.overtime_pay, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipForm {
    /// The worker classification selecting the deduction schedule.
    pub worker_type: WorkerType,
    /// The worker's name.
    pub worker_name: String,
    /// The company name.
    pub company_name: String,
    /// The company's business registration number.
    pub company_reg_no: String,
    /// The company address.
    pub company_address: String,
    /// The name of the person issuing the slip.
    pub company_manager: String,
    /// The pay date as `YYYY-MM-DD` text.
    pub pay_date: String,
    /// Whether the work period is a date range or a month range.
    pub work_period_type: WorkPeriodType,
    /// The start of the work period.
    pub work_period_start: String,
    /// The end of the work period.
    pub work_period_end: String,
    /// The payout bank name.
    pub bank_name: String,
    /// The payout bank account number.
    pub bank_account: String,
    /// Base pay for the period, as entered.
    pub base_pay: String,
    /// Overtime/night pay, as entered.
    pub overtime_pay: String,
    /// Bonus pay, as entered.
    pub bonus_pay: String,
    /// Other allowances, as entered.
    pub other_allowances: String,
    /// The non-taxable portion of pay, as entered.
    pub non_taxable: String,
    /// Free-form memo printed at the bottom of the slip.
    pub memo: String,
}

impl Default for PayslipForm {
    /// An empty employee form dated today, with every monetary field at "0".
    fn default() -> Self {
        PayslipForm {
            worker_type: WorkerType::Employee,
            worker_name: String::new(),
            company_name: String::new(),
            company_reg_no: String::new(),
            company_address: String::new(),
            company_manager: String::new(),
            pay_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            work_period_type: WorkPeriodType::Month,
            work_period_start: String::new(),
            work_period_end: String::new(),
            bank_name: String::new(),
            bank_account: String::new(),
            base_pay: "0".to_string(),
            overtime_pay: "0".to_string(),
            bonus_pay: "0".to_string(),
            other_allowances: "0".to_string(),
            non_taxable: "0".to_string(),
            memo: String::new(),
        }
    }
}

impl PayslipForm {
    /// Returns the label for the work period row on the rendered slip.
    pub fn work_period_label(&self) -> &'static str {
        match self.work_period_type {
            WorkPeriodType::Date => "근로기간(일자)",
            WorkPeriodType::Month => "근로기간(월)",
        }
    }

    /// Returns the default label for saving this form as a worker profile.
    ///
    /// The label is `{worker name}_{pay date}`; a blank name falls back to
    /// "근로자" and a blank pay date to the supplied fallback.
    pub fn worker_profile_label(&self, fallback: &str) -> String {
        let name = self.worker_name.trim();
        let name = if name.is_empty() { "근로자" } else { name };
        let date = if self.pay_date.is_empty() {
            fallback
        } else {
            &self.pay_date
        };
        format!("{}_{}", name, date)
    }

    /// Returns the default label for saving this form as a company profile.
    ///
    /// A blank company name falls back to "회사".
    pub fn company_profile_label(&self) -> String {
        let name = self.company_name.trim();
        if name.is_empty() {
            "회사".to_string()
        } else {
            name.to_string()
        }
    }
}
