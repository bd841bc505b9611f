//! Side-by-side comparison of hourly job offers.
//!
//! Runs the take-home calculator once per offer under a shared filing
//! status. Results come back in input order with no implicit ranking;
//! [`best_offer`] performs the highest-net-annual scan when the caller
//! wants a single winner.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::take_home::{TakeHomeCalculator, TakeHomeError};
use crate::models::{FilingStatus, PayInput, TaxTables};

const MONTHS_PER_YEAR: i64 = 12;

/// One hourly job offer under consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub name: String,
    pub hourly_rate: Decimal,
    pub hours_per_week: Decimal,
    pub state: String,
}

/// Take-home summary for a single offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobComparison {
    pub offer: JobOffer,
    pub gross_annual: Decimal,
    pub net_annual: Decimal,
    pub net_biweekly: Decimal,
    pub net_monthly: Decimal,
    pub tax_percentage: Decimal,
}

/// Computes a [`JobComparison`] per offer, in input order.
///
/// # Errors
///
/// Propagates [`TakeHomeError`] from the underlying calculation (e.g. an
/// offer with a non-positive rate or hours).
pub fn compare_jobs(
    tables: &TaxTables,
    offers: &[JobOffer],
    filing_status: FilingStatus,
) -> Result<Vec<JobComparison>, TakeHomeError> {
    let calculator = TakeHomeCalculator::new(tables);

    offers
        .iter()
        .map(|offer| {
            let result = calculator.calculate(&PayInput::hourly(
                offer.hourly_rate,
                offer.hours_per_week,
                &offer.state,
                filing_status,
            ))?;

            Ok(JobComparison {
                offer: offer.clone(),
                gross_annual: result.gross_annual,
                net_annual: result.net_annual,
                net_biweekly: result.net_biweekly,
                net_monthly: result.net_annual / Decimal::from(MONTHS_PER_YEAR),
                tax_percentage: result.tax_percentage,
            })
        })
        .collect()
}

/// The offer with the highest net annual pay.
///
/// Ties go to the earliest offer in the slice; returns `None` for an empty
/// slice.
pub fn best_offer(comparisons: &[JobComparison]) -> Option<&JobComparison> {
    comparisons.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.net_annual <= current.net_annual => best,
        _ => Some(candidate),
    })
}
