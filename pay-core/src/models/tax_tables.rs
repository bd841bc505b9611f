use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{FilingStatus, TaxBracket};

/// The progressive bracket schedule and standard deduction for one filing
/// status. Brackets are sorted by `min_income` ascending and cover `[0, ∞)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingSchedule {
    pub brackets: Vec<TaxBracket>,
    pub standard_deduction: Decimal,
}

/// FICA payroll tax parameters for a tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConfig {
    /// Social Security rate (employee share), applied up to `ss_wage_base`.
    pub ss_rate: Decimal,

    /// Annual wage cap for the Social Security component.
    pub ss_wage_base: Decimal,

    /// Medicare rate (employee share), applied to all gross income.
    pub medicare_rate: Decimal,

    /// Surtax rate on gross income above `additional_medicare_threshold`.
    pub additional_medicare_rate: Decimal,

    /// High-earner threshold above which the Medicare surtax applies.
    pub additional_medicare_threshold: Decimal,
}

/// One tax year's complete rate configuration: federal bracket schedules per
/// filing status, FICA parameters, and the flat per-state income tax rates.
///
/// Instances are immutable data, typically built once at startup (see the
/// `pay-data` crate for the embedded datasets and CSV loaders) and shared by
/// reference with the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTables {
    pub tax_year: i32,
    pub single: FilingSchedule,
    pub married: FilingSchedule,
    pub head_of_household: FilingSchedule,
    pub fica: FicaConfig,
    pub state_rates: BTreeMap<String, Decimal>,
}

impl TaxTables {
    pub fn schedule(&self, filing_status: FilingStatus) -> &FilingSchedule {
        match filing_status {
            FilingStatus::Single => &self.single,
            FilingStatus::Married => &self.married,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }

    /// Flat income tax rate for a two-letter state code.
    ///
    /// Unknown codes are treated as 0% rather than an error; a handful of
    /// states genuinely have no income tax and the table is not exhaustive.
    pub fn state_rate(&self, state: &str) -> Decimal {
        match self.state_rates.get(state) {
            Some(rate) => *rate,
            None => {
                warn!(state, "unknown state code; treating as 0% state tax");
                Decimal::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_tables() -> TaxTables {
        let schedule = FilingSchedule {
            brackets: vec![TaxBracket {
                min_income: dec!(0),
                max_income: None,
                rate: dec!(0.10),
            }],
            standard_deduction: dec!(14600),
        };

        TaxTables {
            tax_year: 2024,
            single: schedule.clone(),
            married: FilingSchedule {
                standard_deduction: dec!(29200),
                ..schedule.clone()
            },
            head_of_household: FilingSchedule {
                standard_deduction: dec!(21900),
                ..schedule
            },
            fica: FicaConfig {
                ss_rate: dec!(0.062),
                ss_wage_base: dec!(168600),
                medicare_rate: dec!(0.0145),
                additional_medicare_rate: dec!(0.009),
                additional_medicare_threshold: dec!(200000),
            },
            state_rates: BTreeMap::from([
                ("TX".to_string(), dec!(0)),
                ("CA".to_string(), dec!(0.093)),
            ]),
        }
    }

    #[test]
    fn schedule_selects_by_filing_status() {
        let tables = test_tables();

        assert_eq!(
            tables.schedule(FilingStatus::Single).standard_deduction,
            dec!(14600)
        );
        assert_eq!(
            tables.schedule(FilingStatus::Married).standard_deduction,
            dec!(29200)
        );
        assert_eq!(
            tables
                .schedule(FilingStatus::HeadOfHousehold)
                .standard_deduction,
            dec!(21900)
        );
    }

    #[test]
    fn state_rate_returns_table_entry() {
        let tables = test_tables();

        assert_eq!(tables.state_rate("CA"), dec!(0.093));
        assert_eq!(tables.state_rate("TX"), dec!(0));
    }

    #[test]
    fn state_rate_defaults_unknown_code_to_zero() {
        let tables = test_tables();

        assert_eq!(tables.state_rate("ZZ"), dec!(0));
    }
}
