//! Year-keyed rate-table registry.
//!
//! Assembles parsed CSV records into [`TaxTables`] and keeps one table set
//! per tax year, so adding a year is a data change with no calculation-code
//! impact. The 2024 dataset is embedded in the crate; additional years can
//! be parsed from CSV at runtime and inserted.

use std::collections::BTreeMap;

use pay_core::{FicaConfig, FilingSchedule, FilingStatus, TaxBracket, TaxTables};

use crate::loader::{
    FederalBracketRecord, FicaRecord, RateTableError, StandardDeductionRecord, StateRateRecord,
    parse_federal_brackets, parse_fica_configs, parse_standard_deductions, parse_state_rates,
};

const FEDERAL_BRACKETS_CSV: &str = include_str!("../data/federal_brackets.csv");
const STANDARD_DEDUCTIONS_CSV: &str = include_str!("../data/standard_deductions.csv");
const FICA_CSV: &str = include_str!("../data/fica.csv");
const STATE_RATES_CSV: &str = include_str!("../data/state_tax_rates.csv");

/// The tax year shipped with the crate.
pub const BUILTIN_TAX_YEAR: i32 = 2024;

/// Assembles one tax year's [`TaxTables`] from parsed records.
///
/// Brackets are filtered to the year and filing status and sorted by
/// `min_income`. The state-rate table is not year-keyed; the same records
/// apply to every year built from them.
///
/// # Errors
///
/// Returns [`RateTableError`] when any filing status is missing brackets or
/// a standard deduction for the year, or when the year has no FICA row.
pub fn build_tables(
    tax_year: i32,
    brackets: &[FederalBracketRecord],
    deductions: &[StandardDeductionRecord],
    fica_configs: &[FicaRecord],
    state_rates: &[StateRateRecord],
) -> Result<TaxTables, RateTableError> {
    let fica = fica_configs
        .iter()
        .find(|record| record.tax_year == tax_year)
        .ok_or(RateTableError::MissingFicaConfig(tax_year))?;

    let schedule_for = |filing_status: FilingStatus| -> Result<FilingSchedule, RateTableError> {
        let mut status_brackets: Vec<TaxBracket> = brackets
            .iter()
            .filter(|record| {
                record.tax_year == tax_year && record.filing_status == filing_status
            })
            .map(|record| TaxBracket {
                min_income: record.min_income,
                max_income: record.max_income,
                rate: record.rate,
            })
            .collect();

        if status_brackets.is_empty() {
            return Err(RateTableError::MissingBrackets {
                tax_year,
                filing_status: filing_status.as_str(),
            });
        }
        status_brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));

        let standard_deduction = deductions
            .iter()
            .find(|record| {
                record.tax_year == tax_year && record.filing_status == filing_status
            })
            .map(|record| record.amount)
            .ok_or(RateTableError::MissingStandardDeduction {
                tax_year,
                filing_status: filing_status.as_str(),
            })?;

        Ok(FilingSchedule {
            brackets: status_brackets,
            standard_deduction,
        })
    };

    Ok(TaxTables {
        tax_year,
        single: schedule_for(FilingStatus::Single)?,
        married: schedule_for(FilingStatus::Married)?,
        head_of_household: schedule_for(FilingStatus::HeadOfHousehold)?,
        fica: FicaConfig {
            ss_rate: fica.ss_rate,
            ss_wage_base: fica.ss_wage_base,
            medicare_rate: fica.medicare_rate,
            additional_medicare_rate: fica.additional_medicare_rate,
            additional_medicare_threshold: fica.additional_medicare_threshold,
        },
        state_rates: state_rates
            .iter()
            .map(|record| (record.state.clone(), record.rate))
            .collect(),
    })
}

/// Rate tables keyed by tax year.
#[derive(Debug, Clone, Default)]
pub struct TaxTableRegistry {
    years: BTreeMap<i32, TaxTables>,
}

impl TaxTableRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the embedded [`BUILTIN_TAX_YEAR`] dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RateTableError`] if the embedded CSV data is malformed:
    /// a packaging defect, not a runtime condition.
    pub fn builtin() -> Result<Self, RateTableError> {
        let brackets = parse_federal_brackets(FEDERAL_BRACKETS_CSV.as_bytes())?;
        let deductions = parse_standard_deductions(STANDARD_DEDUCTIONS_CSV.as_bytes())?;
        let fica = parse_fica_configs(FICA_CSV.as_bytes())?;
        let states = parse_state_rates(STATE_RATES_CSV.as_bytes())?;

        let mut registry = Self::new();
        registry.insert(build_tables(
            BUILTIN_TAX_YEAR,
            &brackets,
            &deductions,
            &fica,
            &states,
        )?);
        Ok(registry)
    }

    /// Inserts (or replaces) one year's tables.
    pub fn insert(&mut self, tables: TaxTables) {
        self.years.insert(tables.tax_year, tables);
    }

    pub fn get(&self, tax_year: i32) -> Option<&TaxTables> {
        self.years.get(&tax_year)
    }

    /// The most recent tax year in the registry.
    pub fn latest(&self) -> Option<&TaxTables> {
        self.years.values().next_back()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }
}
