//! Worker classification model.

use serde::{Deserialize, Serialize};

/// Represents the statutory classification of a worker.
///
/// The classification selects which deduction schedule applies: employees
/// pay the four social-insurance premiums plus progressive income tax,
/// while freelancers pay the flat 3.3% business-income withholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerType {
    /// A regular employee subject to social insurance and wage withholding.
    Employee,
    /// A freelancer (business-income earner) subject to flat withholding.
    Freelancer,
}

impl WorkerType {
    /// Returns true if this worker is a freelancer.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::WorkerType;
    ///
    /// assert!(WorkerType::Freelancer.is_freelancer());
    /// assert!(!WorkerType::Employee.is_freelancer());
    /// ```
    pub fn is_freelancer(&self) -> bool {
        matches!(self, WorkerType::Freelancer)
    }
}

impl Default for WorkerType {
    fn default() -> Self {
        WorkerType::Employee
    }
}
