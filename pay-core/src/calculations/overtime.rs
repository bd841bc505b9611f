//! Overtime scenario analysis.
//!
//! Answers "what does working N extra hours a week actually pay?" by
//! comparing annualized taxes at the base hours against base plus extra
//! hours. Extra hours are always paid at 1.5x, as a standalone
//! what-if path, independent of the overtime election on [`PayInput`].
//!
//! The reported `effective_tax_rate` is the *marginal* rate on just the
//! incremental income, not the average rate on the whole paycheck.
//!
//! [`PayInput`]: crate::models::PayInput

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::take_home::WEEKS_PER_YEAR;
use crate::calculations::taxes;
use crate::models::{FilingStatus, TaxTables};

/// Pay-rate premium for scenario overtime hours.
fn overtime_premium() -> Decimal {
    Decimal::new(15, 1)
}

/// Errors that can occur during overtime scenario analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OvertimeScenarioError {
    /// The hourly rate must be positive.
    #[error("hourly rate must be positive, got {0}")]
    InvalidHourlyRate(Decimal),

    /// Extra hours must be positive (the marginal rate divides by the gross
    /// increase).
    #[error("extra hours must be positive, got {0}")]
    InvalidExtraHours(Decimal),
}

/// Outcome of working `extra_hours` beyond the base schedule for a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeScenario {
    pub extra_hours: Decimal,
    pub gross_increase: Decimal,
    pub taxes_increase: Decimal,
    pub net_increase: Decimal,
    /// Marginal tax rate on the incremental income, as a percentage.
    pub effective_tax_rate: Decimal,
}

/// Compares annualized pay at `regular_hours` against `regular_hours +
/// extra_hours`, with the extra hours paid at 1.5x.
///
/// Taxes on both sides are computed directly on gross income (no retirement
/// deduction is modeled in this scenario).
///
/// # Errors
///
/// Returns [`OvertimeScenarioError`] when the hourly rate or extra hours are
/// not positive.
pub fn overtime_scenario(
    tables: &TaxTables,
    hourly_rate: Decimal,
    regular_hours: Decimal,
    extra_hours: Decimal,
    state: &str,
    filing_status: FilingStatus,
) -> Result<OvertimeScenario, OvertimeScenarioError> {
    if hourly_rate <= Decimal::ZERO {
        return Err(OvertimeScenarioError::InvalidHourlyRate(hourly_rate));
    }
    if extra_hours <= Decimal::ZERO {
        return Err(OvertimeScenarioError::InvalidExtraHours(extra_hours));
    }

    let weeks = Decimal::from(WEEKS_PER_YEAR);
    let base_annual = hourly_rate * regular_hours * weeks;
    let overtime_annual = hourly_rate * overtime_premium() * extra_hours * weeks;
    let new_annual = base_annual + overtime_annual;

    let base_taxes = annual_taxes(tables, base_annual, state, filing_status);
    let new_taxes = annual_taxes(tables, new_annual, state, filing_status);

    let gross_increase = overtime_annual;
    let taxes_increase = new_taxes - base_taxes;
    let net_increase = gross_increase - taxes_increase;
    let effective_tax_rate = taxes_increase / gross_increase * Decimal::ONE_HUNDRED;

    Ok(OvertimeScenario {
        extra_hours,
        gross_increase,
        taxes_increase,
        net_increase,
        effective_tax_rate,
    })
}

/// Combined federal + FICA + state tax on a gross annual amount.
fn annual_taxes(
    tables: &TaxTables,
    gross_annual: Decimal,
    state: &str,
    filing_status: FilingStatus,
) -> Decimal {
    taxes::federal_tax(tables, gross_annual, filing_status)
        + taxes::fica_tax(&tables.fica, gross_annual)
        + taxes::state_tax(tables, gross_annual, state)
}
