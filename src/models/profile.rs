//! Saved profile models.
//!
//! Profiles are labelled subsets of the form that users save and reload:
//! worker profiles capture the pay-related fields, company profiles the
//! issuer identity block.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayslipForm, WorkPeriodType, WorkerType};

/// The worker-side form fields captured by a worker profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerProfileData {
    /// The worker classification.
    pub worker_type: WorkerType,
    /// The worker's name.
    pub worker_name: String,
    /// The pay date as entered.
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
    /// Base pay as entered.
    pub base_pay: String,
    /// Overtime/night pay as entered.
    pub overtime_pay: String,
    /// Bonus pay as entered.
    pub bonus_pay: String,
    /// Other allowances as entered.
    pub other_allowances: String,
    /// The non-taxable amount as entered.
    pub non_taxable: String,
    /// The memo text.
    pub memo: String,
}

impl WorkerProfileData {
    /// Captures the worker-side fields of a form.
    pub fn from_form(form: &PayslipForm) -> Self {
        WorkerProfileData {
            worker_type: form.worker_type,
            worker_name: form.worker_name.clone(),
            pay_date: form.pay_date.clone(),
            work_period_type: form.work_period_type,
            work_period_start: form.work_period_start.clone(),
            work_period_end: form.work_period_end.clone(),
            bank_name: form.bank_name.clone(),
            bank_account: form.bank_account.clone(),
            base_pay: form.base_pay.clone(),
            overtime_pay: form.overtime_pay.clone(),
            bonus_pay: form.bonus_pay.clone(),
            other_allowances: form.other_allowances.clone(),
            non_taxable: form.non_taxable.clone(),
            memo: form.memo.clone(),
        }
    }

    /// Applies these fields onto a form, leaving company fields untouched.
    pub fn apply_to(&self, form: &mut PayslipForm) {
        form.worker_type = self.worker_type;
        form.worker_name = self.worker_name.clone();
        form.pay_date = self.pay_date.clone();
        form.work_period_type = self.work_period_type;
        form.work_period_start = self.work_period_start.clone();
        form.work_period_end = self.work_period_end.clone();
        form.bank_name = self.bank_name.clone();
        form.bank_account = self.bank_account.clone();
        form.base_pay = self.base_pay.clone();
        form.overtime_pay = self.overtime_pay.clone();
        form.bonus_pay = self.bonus_pay.clone();
        form.other_allowances = self.other_allowances.clone();
        form.non_taxable = self.non_taxable.clone();
        form.memo = self.memo.clone();
    }
}

/// A saved worker profile.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayslipForm, WorkerProfile, WorkerProfileData};
/// use uuid::Uuid;
///
/// let form = PayslipForm::default();
/// let profile = WorkerProfile {
///     id: Uuid::new_v4(),
///     label: "김철수_2026-08-25".to_string(),
///     data: WorkerProfileData::from_form(&form),
/// };
/// assert!(!profile.label.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// Unique identifier for this saved profile.
    pub id: Uuid,
    /// The user-chosen (or derived) display label.
    pub label: String,
    /// The captured form fields.
    pub data: WorkerProfileData,
}

/// The company identity fields captured by a company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfileData {
    /// The company name.
    pub company_name: String,
    /// The business registration number.
    pub company_reg_no: String,
    /// The company address.
    pub company_address: String,
    /// The issuing manager's name.
    pub company_manager: String,
}

impl CompanyProfileData {
    /// Captures the company fields of a form.
    pub fn from_form(form: &PayslipForm) -> Self {
        CompanyProfileData {
            company_name: form.company_name.clone(),
            company_reg_no: form.company_reg_no.clone(),
            company_address: form.company_address.clone(),
            company_manager: form.company_manager.clone(),
        }
    }

    /// Applies these fields onto a form, leaving worker fields untouched.
    pub fn apply_to(&self, form: &mut PayslipForm) {
        form.company_name = self.company_name.clone();
        form.company_reg_no = self.company_reg_no.clone();
        form.company_address = self.company_address.clone();
        form.company_manager = self.company_manager.clone();
    }
}

/// A saved company profile.
///
/// Company profiles are keyed by business registration number: saving a
/// profile with an already-stored registration number replaces that entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// The business registration number, doubling as the profile id.
    pub id: String,
    /// The user-chosen (or derived) display label.
    pub label: String,
    /// The captured company fields.
    pub data: CompanyProfileData,
}
