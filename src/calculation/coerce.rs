//! Monetary text coercion.
//!
//! This module provides the boundary function that turns raw form text into
//! a [`Decimal`] amount. The form is a forgiving calculator, not a
//! validating financial system: anything unparseable becomes zero and no
//! input is ever rejected.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Coerces monetary text to a [`Decimal`] amount.
///
/// Thousands separators (commas) and surrounding whitespace are stripped
/// before parsing. Empty input and parse failures yield zero. A literal
/// negative numeral is NOT clamped: it parses to a negative amount and
/// flows through the arithmetic unchanged.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::coerce_monetary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_monetary("2,400,000"), Decimal::from(2_400_000));
/// assert_eq!(coerce_monetary(""), Decimal::ZERO);
/// assert_eq!(coerce_monetary("abc"), Decimal::ZERO);
/// assert_eq!(coerce_monetary("-1000"), Decimal::from(-1000));
/// ```
pub fn coerce_monetary(text: &str) -> Decimal {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
