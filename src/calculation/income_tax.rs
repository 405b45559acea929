//! Simplified progressive income tax table.
//!
//! This module encodes the fixed six-band withholding table used for the
//! employee schedule. Each band carries a rate and a cumulative subtraction
//! constant; the result is `taxable * rate - subtract` for the first band
//! whose upper bound covers the income. The table is only approximately
//! continuous at band boundaries; that is a property of the simplified
//! reference table itself and is deliberately left as-is.

use rust_decimal::Decimal;

/// One band of the progressive tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// The inclusive upper income bound, or `None` for the uncapped band.
    pub upper: Option<Decimal>,
    /// The withholding rate applied to the whole taxable income.
    pub rate: Decimal,
    /// The cumulative subtraction constant for this band.
    pub subtract: Decimal,
}

/// Returns the fixed six-band withholding table (2024 simplified basis).
///
/// Bands are ordered by ascending upper bound; the last band is uncapped.
pub fn tax_brackets() -> [TaxBracket; 6] {
    [
        TaxBracket {
            upper: Some(Decimal::from(1_200_000)),
            rate: Decimal::new(6, 3),
            subtract: Decimal::ZERO,
        },
        TaxBracket {
            upper: Some(Decimal::from(4_600_000)),
            rate: Decimal::new(15, 3),
            subtract: Decimal::from(10_800),
        },
        TaxBracket {
            upper: Some(Decimal::from(8_800_000)),
            rate: Decimal::new(24, 3),
            subtract: Decimal::from(52_200),
        },
        TaxBracket {
            upper: Some(Decimal::from(15_000_000)),
            rate: Decimal::new(35, 3),
            subtract: Decimal::from(149_000),
        },
        TaxBracket {
            upper: Some(Decimal::from(30_000_000)),
            rate: Decimal::new(38, 3),
            subtract: Decimal::from(194_000),
        },
        TaxBracket {
            upper: None,
            rate: Decimal::new(4, 2),
            subtract: Decimal::from(254_000),
        },
    ]
}

/// Evaluates the simplified progressive tax for a taxable income.
///
/// The first band (in table order) whose inclusive upper bound is at or
/// above the income applies; incomes above every bound fall into the
/// uncapped final band. The raw result can be slightly negative for very
/// small incomes because of the subtraction constant; the employee
/// schedule clamps it to zero before use, this function does not.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::simplified_income_tax;
/// use rust_decimal::Decimal;
///
/// // Inclusive boundary of the first band.
/// assert_eq!(
///     simplified_income_tax(Decimal::from(1_200_000)),
///     Decimal::from(7_200),
/// );
/// ```
pub fn simplified_income_tax(taxable_income: Decimal) -> Decimal {
    let brackets = tax_brackets();
    let bracket = brackets
        .iter()
        .find(|b| b.upper.map_or(true, |upper| taxable_income <= upper))
        // the final band is uncapped, so the search always succeeds
        .unwrap_or(&brackets[5]);
    taxable_income * bracket.rate - bracket.subtract
}
