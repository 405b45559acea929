//! Payroll input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::coerce_monetary;

use super::{PayslipForm, WorkerType};

/// The complete input snapshot for one payroll computation.
///
/// All monetary fields are whole-won amounts held as [`Decimal`]. An input
/// is immutable per computation: the engine derives a fresh
/// [`PayrollResult`](super::PayrollResult) from it every time and never
/// updates anything incrementally.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayrollInput, WorkerType};
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     worker_type: WorkerType::Employee,
///     base_pay: Decimal::from(2_400_000),
///     overtime_pay: Decimal::ZERO,
///     bonus_pay: Decimal::ZERO,
///     other_allowances: Decimal::ZERO,
///     non_taxable: Decimal::from(200_000),
/// };
/// assert_eq!(input.worker_type, WorkerType::Employee);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The worker classification selecting the deduction schedule.
    pub worker_type: WorkerType,
    /// Base pay for the period.
    pub base_pay: Decimal,
    /// Overtime/night pay.
    pub overtime_pay: Decimal,
    /// Bonus pay.
    pub bonus_pay: Decimal,
    /// Other allowances.
    pub other_allowances: Decimal,
    /// The non-taxable portion of pay, excluded from the taxable base.
    pub non_taxable: Decimal,
}

impl PayrollInput {
    /// Builds a payroll input from a form, coercing each monetary text
    /// field with [`coerce_monetary`].
    ///
    /// This is the typed boundary between the stringly form layer and the
    /// engine: malformed or empty text becomes zero here, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::{PayrollInput, PayslipForm};
    /// use rust_decimal::Decimal;
    ///
    /// let mut form = PayslipForm::default();
    /// form.base_pay = "2,400,000".to_string();
    /// form.bonus_pay = "abc".to_string();
    ///
    /// let input = PayrollInput::from_form(&form);
    /// assert_eq!(input.base_pay, Decimal::from(2_400_000));
    /// assert_eq!(input.bonus_pay, Decimal::ZERO);
    /// ```
    pub fn from_form(form: &PayslipForm) -> Self {
        PayrollInput {
            worker_type: form.worker_type,
            base_pay: coerce_monetary(&form.base_pay),
            overtime_pay: coerce_monetary(&form.overtime_pay),
            bonus_pay: coerce_monetary(&form.bonus_pay),
            other_allowances: coerce_monetary(&form.other_allowances),
            non_taxable: coerce_monetary(&form.non_taxable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_coerces_every_monetary_field() {
        let mut form = PayslipForm::default();
        form.base_pay = "2,400,000".to_string();
        form.overtime_pay = "150000".to_string();
        form.bonus_pay = "".to_string();
        form.other_allowances = "n/a".to_string();
        form.non_taxable = "200,000".to_string();

        let input = PayrollInput::from_form(&form);
        assert_eq!(input.base_pay, Decimal::from(2_400_000));
        assert_eq!(input.overtime_pay, Decimal::from(150_000));
        assert_eq!(input.bonus_pay, Decimal::ZERO);
        assert_eq!(input.other_allowances, Decimal::ZERO);
        assert_eq!(input.non_taxable, Decimal::from(200_000));
    }

    #[test]
    fn test_from_form_carries_worker_type() {
        let mut form = PayslipForm::default();
        form.worker_type = WorkerType::Freelancer;
        let input = PayrollInput::from_form(&form);
        assert_eq!(input.worker_type, WorkerType::Freelancer);
    }

    #[test]
    fn test_serde_round_trip() {
        let input = PayrollInput {
            worker_type: WorkerType::Freelancer,
            base_pay: Decimal::from(1_000_000),
            overtime_pay: Decimal::ZERO,
            bonus_pay: Decimal::from(50_000),
            other_allowances: Decimal::ZERO,
            non_taxable: Decimal::ZERO,
        };

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"worker_type\":\"freelancer\""));
        let back: PayrollInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }
}
