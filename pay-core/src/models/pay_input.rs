use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// How a worker's base pay is quoted.
///
/// The two variants carry their own amount, so an input can never declare
/// one pay type while only supplying the other type's figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    Salary { annual_salary: Decimal },
    Hourly { hourly_rate: Decimal },
}

/// A pre-tax 401k-style retirement contribution election.
///
/// `PerPaycheck` is a biweekly dollar amount (26 paychecks per year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementContribution {
    PercentOfGross(Decimal),
    PerPaycheck(Decimal),
}

impl RetirementContribution {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::PercentOfGross(pct) => *pct,
            Self::PerPaycheck(dollars) => *dollars,
        }
    }
}

/// Caller-constructed input for a take-home pay calculation.
///
/// Overtime pay only applies when `overtime_eligible` is set and
/// `hours_per_week` exceeds 40; otherwise excess hours are paid at the flat
/// rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInput {
    pub basis: PayBasis,
    pub hours_per_week: Decimal,
    /// Two-letter state code, e.g. "TX". Codes missing from the rate table
    /// are treated as 0% state tax.
    pub state: String,
    #[serde(default)]
    pub filing_status: FilingStatus,
    #[serde(default)]
    pub retirement: Option<RetirementContribution>,
    #[serde(default)]
    pub overtime_eligible: bool,
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

impl PayInput {
    pub fn salaried(
        annual_salary: Decimal,
        hours_per_week: Decimal,
        state: &str,
        filing_status: FilingStatus,
    ) -> Self {
        Self::new(
            PayBasis::Salary { annual_salary },
            hours_per_week,
            state,
            filing_status,
        )
    }

    pub fn hourly(
        hourly_rate: Decimal,
        hours_per_week: Decimal,
        state: &str,
        filing_status: FilingStatus,
    ) -> Self {
        Self::new(
            PayBasis::Hourly { hourly_rate },
            hours_per_week,
            state,
            filing_status,
        )
    }

    fn new(
        basis: PayBasis,
        hours_per_week: Decimal,
        state: &str,
        filing_status: FilingStatus,
    ) -> Self {
        Self {
            basis,
            hours_per_week,
            state: state.to_string(),
            filing_status,
            retirement: None,
            overtime_eligible: false,
            overtime_multiplier: default_overtime_multiplier(),
        }
    }

    pub fn with_retirement(mut self, contribution: RetirementContribution) -> Self {
        self.retirement = Some(contribution);
        self
    }

    /// Marks the worker overtime-eligible at the default 1.5x multiplier.
    pub fn with_overtime(mut self) -> Self {
        self.overtime_eligible = true;
        self
    }

    pub fn with_overtime_multiplier(mut self, multiplier: Decimal) -> Self {
        self.overtime_eligible = true;
        self.overtime_multiplier = multiplier;
        self
    }
}
