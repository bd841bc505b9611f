//! CSV loaders for rate-table data.
//!
//! ## CSV formats
//!
//! Column order does not matter (headers are matched by name); whitespace
//! around values is tolerated. Empty optional cells deserialize to `None`.
//!
//! Federal brackets (`max_income` empty for the open top bracket):
//!
//! ```csv
//! tax_year,filing_status,min_income,max_income,rate
//! 2024,single,0,11600,0.10
//! 2024,single,609350,,0.37
//! ```
//!
//! Standard deductions:
//!
//! ```csv
//! tax_year,filing_status,amount
//! 2024,single,14600
//! ```
//!
//! FICA configuration (one row per tax year):
//!
//! ```csv
//! tax_year,ss_wage_base,ss_rate,medicare_rate,additional_medicare_rate,additional_medicare_threshold
//! 2024,168600,0.062,0.0145,0.009,200000
//! ```
//!
//! State rates (two-letter codes, flat fractional rates):
//!
//! ```csv
//! state,rate
//! TX,0
//! CA,0.093
//! ```
//!
//! Filing status codes are `single`, `married`, and `head_of_household`.

use std::io::Read;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use pay_core::FilingStatus;

/// Errors that can occur while loading or assembling rate-table data.
#[derive(Debug, Error)]
pub enum RateTableError {
    /// The underlying CSV deserialization failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// A `filing_status` cell contained an unrecognized code. `row` is the
    /// 1-based data row number.
    #[error("unrecognized filing status '{status}' on row {row}")]
    UnknownFilingStatus { status: String, row: usize },

    /// No federal brackets were found for a tax year and filing status.
    #[error("no federal brackets for tax year {tax_year}, filing status '{filing_status}'")]
    MissingBrackets {
        tax_year: i32,
        filing_status: &'static str,
    },

    /// No standard deduction was found for a tax year and filing status.
    #[error("no standard deduction for tax year {tax_year}, filing status '{filing_status}'")]
    MissingStandardDeduction {
        tax_year: i32,
        filing_status: &'static str,
    },

    /// No FICA configuration row was found for a tax year.
    #[error("no FICA configuration for tax year {0}")]
    MissingFicaConfig(i32),
}

impl From<csv::Error> for RateTableError {
    fn from(err: csv::Error) -> Self {
        RateTableError::CsvParse(err.to_string())
    }
}

/// A federal bracket row with the filing status resolved to its enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederalBracketRecord {
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// A standard deduction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardDeductionRecord {
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub amount: Decimal,
}

/// A FICA configuration row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FicaRecord {
    pub tax_year: i32,
    pub ss_wage_base: Decimal,
    pub ss_rate: Decimal,
    pub medicare_rate: Decimal,
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold: Decimal,
}

/// A state tax rate row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateRateRecord {
    pub state: String,
    pub rate: Decimal,
}

// Serde-compatible rows mirroring the CSV layout; filing statuses arrive as
// strings and are validated during conversion.

#[derive(Debug, Deserialize)]
struct BracketRow {
    tax_year: i32,
    filing_status: String,
    min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    max_income: Option<Decimal>,
    rate: Decimal,
}

#[derive(Debug, Deserialize)]
struct DeductionRow {
    tax_year: i32,
    filing_status: String,
    amount: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_filing_status(status: &str, row: usize) -> Result<FilingStatus, RateTableError> {
    FilingStatus::parse(status).ok_or_else(|| RateTableError::UnknownFilingStatus {
        status: status.to_string(),
        row,
    })
}

/// Parses federal bracket records. Rows are returned in file order.
pub fn parse_federal_brackets<R: Read>(
    reader: R,
) -> Result<Vec<FederalBracketRecord>, RateTableError> {
    csv_reader(reader)
        .deserialize::<BracketRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            Ok(FederalBracketRecord {
                tax_year: row.tax_year,
                filing_status: parse_filing_status(&row.filing_status, idx + 1)?,
                min_income: row.min_income,
                max_income: row.max_income,
                rate: row.rate,
            })
        })
        .collect()
}

/// Parses standard deduction records.
pub fn parse_standard_deductions<R: Read>(
    reader: R,
) -> Result<Vec<StandardDeductionRecord>, RateTableError> {
    csv_reader(reader)
        .deserialize::<DeductionRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            Ok(StandardDeductionRecord {
                tax_year: row.tax_year,
                filing_status: parse_filing_status(&row.filing_status, idx + 1)?,
                amount: row.amount,
            })
        })
        .collect()
}

/// Parses FICA configuration records.
pub fn parse_fica_configs<R: Read>(reader: R) -> Result<Vec<FicaRecord>, RateTableError> {
    csv_reader(reader)
        .deserialize::<FicaRecord>()
        .map(|result| result.map_err(RateTableError::from))
        .collect()
}

/// Parses state tax rate records.
pub fn parse_state_rates<R: Read>(reader: R) -> Result<Vec<StateRateRecord>, RateTableError> {
    csv_reader(reader)
        .deserialize::<StateRateRecord>()
        .map(|result| result.map_err(RateTableError::from))
        .collect()
}
