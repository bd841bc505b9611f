//! Federal tax bracket proximity.
//!
//! Answers "how close is this income to the next marginal rate?" Useful
//! for flagging when a raise or overtime push would start being taxed at a
//! higher rate. Distances are measured against post-standard-deduction
//! taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, TaxTables};

/// Distance below which [`BracketProximity::within_threshold`] is set.
const PROXIMITY_THRESHOLD: i64 = 5_000;

/// Errors that can occur while locating a tax bracket.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketProximityError {
    /// No bracket in the schedule contains the taxable income. Only possible
    /// with a malformed schedule that does not cover `[0, ∞)`.
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Where a taxable income sits within the federal bracket schedule.
///
/// Rates are percentages (12 for the 12% bracket). The open-ended top
/// bracket has no ceiling, so `next_rate` and `distance_to_next` are `None`
/// there and the threshold flag is never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketProximity {
    pub current_rate: Decimal,
    pub next_rate: Option<Decimal>,
    pub distance_to_next: Option<Decimal>,
    /// True when the income is within 5000 of the next bracket's floor.
    pub within_threshold: bool,
}

/// Locates the federal bracket containing `gross_annual` (after the filing
/// status's standard deduction) and reports the distance to the bracket
/// ceiling.
///
/// # Errors
///
/// Returns [`BracketProximityError::NoMatchingBracket`] if the schedule has
/// a gap at the taxable income (malformed rate tables).
pub fn bracket_proximity(
    tables: &TaxTables,
    gross_annual: Decimal,
    filing_status: FilingStatus,
) -> Result<BracketProximity, BracketProximityError> {
    let schedule = tables.schedule(filing_status);
    let taxable_income = (gross_annual - schedule.standard_deduction).max(Decimal::ZERO);

    let index = schedule
        .brackets
        .iter()
        .position(|bracket| bracket.contains(taxable_income))
        .ok_or(BracketProximityError::NoMatchingBracket(taxable_income))?;
    let bracket = &schedule.brackets[index];

    let current_rate = bracket.rate * Decimal::ONE_HUNDRED;

    match (bracket.max_income, schedule.brackets.get(index + 1)) {
        (Some(max_income), Some(next)) => {
            let distance = max_income - taxable_income;
            Ok(BracketProximity {
                current_rate,
                next_rate: Some(next.rate * Decimal::ONE_HUNDRED),
                distance_to_next: Some(distance),
                within_threshold: distance < Decimal::from(PROXIMITY_THRESHOLD),
            })
        }
        _ => Ok(BracketProximity {
            current_rate,
            next_rate: None,
            distance_to_next: None,
            within_threshold: false,
        }),
    }
}
