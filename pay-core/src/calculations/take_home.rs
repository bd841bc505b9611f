//! Core take-home pay calculation.
//!
//! Given a [`PayInput`] and one tax year's [`TaxTables`], derives gross
//! income, applies the pre-tax retirement deduction, computes federal, FICA,
//! and state tax, and reports gross/net amounts across annual, biweekly,
//! weekly, and hourly-equivalent granularities.
//!
//! The calculation is pure: no I/O, no shared state, deterministic for a
//! given input and table set. Results are unrounded.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use rust_decimal_macros::dec;
//! use pay_core::{
//!     FicaConfig, FilingSchedule, FilingStatus, PayInput, TaxBracket, TaxTables,
//!     TakeHomeCalculator,
//! };
//!
//! let schedule = FilingSchedule {
//!     brackets: vec![
//!         TaxBracket { min_income: dec!(0), max_income: Some(dec!(11600)), rate: dec!(0.10) },
//!         TaxBracket { min_income: dec!(11600), max_income: Some(dec!(47150)), rate: dec!(0.12) },
//!         TaxBracket { min_income: dec!(47150), max_income: None, rate: dec!(0.22) },
//!     ],
//!     standard_deduction: dec!(14600),
//! };
//! let tables = TaxTables {
//!     tax_year: 2024,
//!     single: schedule.clone(),
//!     married: schedule.clone(),
//!     head_of_household: schedule,
//!     fica: FicaConfig {
//!         ss_rate: dec!(0.062),
//!         ss_wage_base: dec!(168600),
//!         medicare_rate: dec!(0.0145),
//!         additional_medicare_rate: dec!(0.009),
//!         additional_medicare_threshold: dec!(200000),
//!     },
//!     state_rates: BTreeMap::from([("TX".to_string(), dec!(0))]),
//! };
//!
//! let calculator = TakeHomeCalculator::new(&tables);
//! let result = calculator
//!     .calculate(&PayInput::hourly(dec!(20), dec!(40), "TX", FilingStatus::Single))
//!     .unwrap();
//!
//! assert_eq!(result.gross_annual, dec!(41600));
//! assert_eq!(result.federal_tax, dec!(3008.00));
//! assert_eq!(result.fica_tax, dec!(3182.40));
//! assert_eq!(result.net_annual, dec!(35409.60));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::taxes;
use crate::models::{PayBasis, PayInput, PayResult, RetirementContribution, TaxTables};

pub(crate) const PAY_PERIODS_PER_YEAR: i64 = 26;
pub(crate) const WEEKS_PER_YEAR: i64 = 52;
pub(crate) const REGULAR_HOURS_PER_WEEK: i64 = 40;

/// Annual cap on pre-tax retirement contributions (2024 IRS elective
/// deferral limit), applied flat regardless of filing status or tax year.
const RETIREMENT_CONTRIBUTION_CAP: i64 = 23_000;

/// Errors that can occur during a take-home pay calculation.
///
/// The engine validates fail-fast: inputs that would otherwise divide by
/// zero or produce nonsense amounts are rejected up front.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TakeHomeError {
    /// The annual salary must be positive.
    #[error("annual salary must be positive, got {0}")]
    InvalidAnnualSalary(Decimal),

    /// The hourly rate must be positive.
    #[error("hourly rate must be positive, got {0}")]
    InvalidHourlyRate(Decimal),

    /// Hours per week must be positive (the hourly-equivalent fields divide
    /// by annual hours worked).
    #[error("hours per week must be positive, got {0}")]
    InvalidHoursPerWeek(Decimal),

    /// The overtime multiplier must be positive.
    #[error("overtime multiplier must be positive, got {0}")]
    InvalidOvertimeMultiplier(Decimal),

    /// The retirement contribution must be non-negative.
    #[error("retirement contribution must be non-negative, got {0}")]
    InvalidRetirementContribution(Decimal),
}

/// Calculator for gross-to-net take-home pay.
///
/// Borrows one tax year's [`TaxTables`]; every call is independent and the
/// calculator is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct TakeHomeCalculator<'a> {
    tables: &'a TaxTables,
}

impl<'a> TakeHomeCalculator<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Computes the full [`PayResult`] for an input.
    ///
    /// # Errors
    ///
    /// Returns [`TakeHomeError`] when the salary, hourly rate, hours per
    /// week, or overtime multiplier is not positive, or when a retirement
    /// contribution is negative.
    pub fn calculate(&self, input: &PayInput) -> Result<PayResult, TakeHomeError> {
        self.validate(input)?;

        let gross_annual = self.gross_annual(input);
        let retirement = self.retirement_deduction(input, gross_annual);

        // Retirement contributions reduce the federal and state tax bases
        // but not the FICA base.
        let taxable_income = gross_annual - retirement;

        let federal_tax = taxes::federal_tax(self.tables, taxable_income, input.filing_status);
        let fica_tax = taxes::fica_tax(&self.tables.fica, gross_annual);
        let state_tax = taxes::state_tax(self.tables, taxable_income, &input.state);
        let total_tax = federal_tax + fica_tax + state_tax;

        // The deduction is subtracted again here: it was never part of the
        // tax total, but it still reduces take-home pay.
        let net_annual = gross_annual - total_tax - retirement;

        let biweekly_periods = Decimal::from(PAY_PERIODS_PER_YEAR);
        let weeks = Decimal::from(WEEKS_PER_YEAR);
        let annual_hours = input.hours_per_week * weeks;

        Ok(PayResult {
            gross_annual,
            gross_biweekly: gross_annual / biweekly_periods,
            gross_weekly: gross_annual / weeks,
            gross_hourly: gross_annual / annual_hours,

            federal_tax,
            federal_tax_biweekly: federal_tax / biweekly_periods,
            fica_tax,
            fica_tax_biweekly: fica_tax / biweekly_periods,
            state_tax,
            state_tax_biweekly: state_tax / biweekly_periods,
            total_tax,
            tax_percentage: total_tax / gross_annual * Decimal::ONE_HUNDRED,

            net_annual,
            net_biweekly: net_annual / biweekly_periods,
            net_weekly: net_annual / weeks,
            net_hourly: net_annual / annual_hours,
        })
    }

    fn validate(&self, input: &PayInput) -> Result<(), TakeHomeError> {
        match input.basis {
            PayBasis::Salary { annual_salary } if annual_salary <= Decimal::ZERO => {
                return Err(TakeHomeError::InvalidAnnualSalary(annual_salary));
            }
            PayBasis::Hourly { hourly_rate } if hourly_rate <= Decimal::ZERO => {
                return Err(TakeHomeError::InvalidHourlyRate(hourly_rate));
            }
            _ => {}
        }

        if input.hours_per_week <= Decimal::ZERO {
            return Err(TakeHomeError::InvalidHoursPerWeek(input.hours_per_week));
        }
        if input.overtime_multiplier <= Decimal::ZERO {
            return Err(TakeHomeError::InvalidOvertimeMultiplier(
                input.overtime_multiplier,
            ));
        }
        if let Some(contribution) = input.retirement {
            let amount = contribution.amount();
            if amount < Decimal::ZERO {
                return Err(TakeHomeError::InvalidRetirementContribution(amount));
            }
        }

        Ok(())
    }

    /// Derives gross annual income from the pay basis.
    ///
    /// Overtime pay applies only when the input is overtime-eligible and
    /// hours exceed 40; otherwise all hours are paid at the flat rate.
    fn gross_annual(&self, input: &PayInput) -> Decimal {
        let weeks = Decimal::from(WEEKS_PER_YEAR);

        match input.basis {
            PayBasis::Salary { annual_salary } => annual_salary,
            PayBasis::Hourly { hourly_rate } => {
                let regular_cap = Decimal::from(REGULAR_HOURS_PER_WEEK);
                if input.overtime_eligible && input.hours_per_week > regular_cap {
                    let overtime_hours = input.hours_per_week - regular_cap;
                    let weekly_pay = hourly_rate * regular_cap
                        + hourly_rate * input.overtime_multiplier * overtime_hours;
                    weekly_pay * weeks
                } else {
                    hourly_rate * input.hours_per_week * weeks
                }
            }
        }
    }

    /// Annualized pre-tax retirement deduction, clamped at the contribution
    /// cap. A contribution of zero is treated as no contribution.
    fn retirement_deduction(&self, input: &PayInput, gross_annual: Decimal) -> Decimal {
        let Some(contribution) = input.retirement else {
            return Decimal::ZERO;
        };

        let annual = match contribution {
            RetirementContribution::PercentOfGross(pct) if pct > Decimal::ZERO => {
                gross_annual * (pct / Decimal::ONE_HUNDRED)
            }
            RetirementContribution::PerPaycheck(amount) if amount > Decimal::ZERO => {
                amount * Decimal::from(PAY_PERIODS_PER_YEAR)
            }
            _ => return Decimal::ZERO,
        };

        let cap = Decimal::from(RETIREMENT_CONTRIBUTION_CAP);
        if annual > cap {
            warn!(
                requested = %annual,
                cap = %cap,
                "retirement contribution exceeds annual cap; clamping"
            );
            cap
        } else {
            annual
        }
    }
}
