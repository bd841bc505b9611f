//! Monthly and yearly take-home forecasting.
//!
//! The monthly forecast takes a caller-supplied list of weekly hour counts
//! (typically ~4 weeks) and prices each week individually: gross via the
//! direct overtime-aware formula (hours beyond 40 at 1.5x), net by
//! re-running the take-home calculator with that week's hours as if it were
//! the full-year average. The net figure is therefore an approximation of a
//! week-specific withholding, not an exact one. That is the documented
//! behavior of this forecast and callers rely on it matching the main
//! calculator at steady hours.
//!
//! The yearly forecast is a single take-home calculation at the average
//! weekly hours, projected flat across 12 months.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::take_home::{
    REGULAR_HOURS_PER_WEEK, TakeHomeCalculator, TakeHomeError, WEEKS_PER_YEAR,
};
use crate::models::{FilingStatus, PayInput, TaxTables};

const MONTHS_PER_YEAR: i64 = 12;

/// Errors that can occur while building a forecast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// The weekly-hours list must not be empty (the weekly average divides
    /// by the week count).
    #[error("forecast requires at least one week of hours")]
    EmptyWeeks,

    /// The underlying take-home calculation failed.
    #[error(transparent)]
    TakeHome(#[from] TakeHomeError),
}

/// One forecast week: hours worked, the overtime portion, and pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekForecast {
    pub week_number: u32,
    pub hours: Decimal,
    pub overtime_hours: Decimal,
    pub gross_pay: Decimal,
    pub net_pay: Decimal,
}

/// A month of per-week forecasts with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    pub weeks: Vec<WeekForecast>,
    pub total_gross: Decimal,
    pub total_net: Decimal,
    pub total_hours: Decimal,
    pub avg_weekly_net: Decimal,
}

/// A flat 12-month projection from one annualized calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyForecast {
    pub monthly_net: Vec<Decimal>,
    pub total_net: Decimal,
    pub avg_monthly_net: Decimal,
    pub total_hours: Decimal,
    pub avg_weekly_hours: Decimal,
}

/// Forecasts take-home pay for a list of weekly hour counts.
///
/// A week with zero or negative hours is treated as unpaid: it stays in the
/// output with zero gross and net so week numbering is preserved.
///
/// # Errors
///
/// Returns [`ForecastError::EmptyWeeks`] for an empty list and propagates
/// take-home calculation failures otherwise.
pub fn forecast_monthly(
    tables: &TaxTables,
    hourly_rate: Decimal,
    weekly_hours: &[Decimal],
    state: &str,
    filing_status: FilingStatus,
) -> Result<MonthlyForecast, ForecastError> {
    if weekly_hours.is_empty() {
        return Err(ForecastError::EmptyWeeks);
    }

    let calculator = TakeHomeCalculator::new(tables);
    let regular_cap = Decimal::from(REGULAR_HOURS_PER_WEEK);
    let premium = Decimal::new(15, 1);

    let mut weeks = Vec::with_capacity(weekly_hours.len());
    for (index, &hours) in weekly_hours.iter().enumerate() {
        let week_number = (index + 1) as u32;

        if hours <= Decimal::ZERO {
            warn!(week = week_number, %hours, "non-positive hours; treating week as unpaid");
            weeks.push(WeekForecast {
                week_number,
                hours,
                overtime_hours: Decimal::ZERO,
                gross_pay: Decimal::ZERO,
                net_pay: Decimal::ZERO,
            });
            continue;
        }

        let regular_hours = hours.min(regular_cap);
        let overtime_hours = (hours - regular_cap).max(Decimal::ZERO);
        let gross_pay = regular_hours * hourly_rate + overtime_hours * hourly_rate * premium;

        // Net is approximated from an annualized calculation at this week's
        // hours; see the module docs.
        let result =
            calculator.calculate(&PayInput::hourly(hourly_rate, hours, state, filing_status))?;

        weeks.push(WeekForecast {
            week_number,
            hours,
            overtime_hours,
            gross_pay,
            net_pay: result.net_weekly,
        });
    }

    let total_gross = weeks.iter().map(|w| w.gross_pay).sum();
    let total_net: Decimal = weeks.iter().map(|w| w.net_pay).sum();
    let total_hours = weeks.iter().map(|w| w.hours).sum();

    Ok(MonthlyForecast {
        avg_weekly_net: total_net / Decimal::from(weeks.len() as i64),
        weeks,
        total_gross,
        total_net,
        total_hours,
    })
}

/// Projects a year of take-home pay at the average weekly hours.
///
/// # Errors
///
/// Propagates [`TakeHomeError`] when the rate or hours are not positive.
pub fn forecast_yearly(
    tables: &TaxTables,
    hourly_rate: Decimal,
    avg_hours_per_week: Decimal,
    state: &str,
    filing_status: FilingStatus,
) -> Result<YearlyForecast, TakeHomeError> {
    let calculator = TakeHomeCalculator::new(tables);
    let result = calculator.calculate(&PayInput::hourly(
        hourly_rate,
        avg_hours_per_week,
        state,
        filing_status,
    ))?;

    let monthly = result.net_annual / Decimal::from(MONTHS_PER_YEAR);

    Ok(YearlyForecast {
        monthly_net: vec![monthly; MONTHS_PER_YEAR as usize],
        total_net: result.net_annual,
        avg_monthly_net: monthly,
        total_hours: avg_hours_per_week * Decimal::from(WEEKS_PER_YEAR),
        avg_weekly_hours: avg_hours_per_week,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::fixtures::tables_2024;

    // =========================================================================
    // forecast_monthly tests
    // =========================================================================

    #[test]
    fn steady_weeks_match_the_core_weekly_net() {
        let tables = tables_2024();

        let forecast = forecast_monthly(
            &tables,
            dec!(20),
            &[dec!(40), dec!(40)],
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        // 40h at $20 in TX nets 35409.60 annually
        let expected_weekly_net = dec!(35409.60) / dec!(52);
        assert_eq!(forecast.weeks[0].gross_pay, dec!(800));
        assert_eq!(forecast.weeks[0].net_pay, expected_weekly_net);
        assert_eq!(forecast.weeks[1].net_pay, expected_weekly_net);
    }

    #[test]
    fn overtime_week_gross_uses_premium_but_net_uses_flat_annualization() {
        let tables = tables_2024();

        let forecast = forecast_monthly(
            &tables,
            dec!(20),
            &[dec!(45)],
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        let week = &forecast.weeks[0];
        assert_eq!(week.overtime_hours, dec!(5));
        // Gross prices the 5 extra hours at 1.5x: 800 + 150
        assert_eq!(week.gross_pay, dec!(950));
        // Net annualizes 45 flat hours: gross 46800, federal 3632,
        // FICA 3580.20 -> net 39587.80
        assert_eq!(week.net_pay, dec!(39587.80) / dec!(52));
    }

    #[test]
    fn varied_month_totals_and_average() {
        let tables = tables_2024();

        let forecast = forecast_monthly(
            &tables,
            dec!(20),
            &[dec!(40), dec!(45), dec!(40), dec!(38)],
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        assert_eq!(forecast.weeks.len(), 4);
        assert_eq!(forecast.total_gross, dec!(3310));
        assert_eq!(forecast.total_hours, dec!(163));

        // Annual nets at 40/45/38 flat hours: 35409.60 / 39587.80 / 33738.32,
        // each divided down to a weekly figure before summing
        let expected_net = dec!(35409.60) / dec!(52)
            + dec!(39587.80) / dec!(52)
            + dec!(35409.60) / dec!(52)
            + dec!(33738.32) / dec!(52);
        assert_eq!(forecast.total_net, expected_net);
        assert_eq!(forecast.avg_weekly_net, expected_net / dec!(4));
    }

    #[test]
    fn week_numbers_are_one_based_and_ordered() {
        let tables = tables_2024();

        let forecast = forecast_monthly(
            &tables,
            dec!(20),
            &[dec!(40), dec!(38), dec!(45)],
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        let numbers: Vec<u32> = forecast.weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn zero_hour_week_is_unpaid_but_keeps_its_slot() {
        let tables = tables_2024();

        let forecast = forecast_monthly(
            &tables,
            dec!(20),
            &[dec!(0), dec!(40)],
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        assert_eq!(forecast.weeks.len(), 2);
        assert_eq!(forecast.weeks[0].gross_pay, dec!(0));
        assert_eq!(forecast.weeks[0].net_pay, dec!(0));
        assert_eq!(forecast.weeks[1].gross_pay, dec!(800));
    }

    #[test]
    fn empty_week_list_is_an_error() {
        let tables = tables_2024();

        let result = forecast_monthly(&tables, dec!(20), &[], "TX", FilingStatus::Single);

        assert_eq!(result, Err(ForecastError::EmptyWeeks));
    }

    #[test]
    fn invalid_rate_propagates_take_home_error() {
        let tables = tables_2024();

        let result = forecast_monthly(&tables, dec!(0), &[dec!(40)], "TX", FilingStatus::Single);

        assert_eq!(
            result,
            Err(ForecastError::TakeHome(TakeHomeError::InvalidHourlyRate(
                dec!(0)
            )))
        );
    }

    // =========================================================================
    // forecast_yearly tests
    // =========================================================================

    #[test]
    fn yearly_forecast_is_flat_across_twelve_months() {
        let tables = tables_2024();

        let forecast =
            forecast_yearly(&tables, dec!(20), dec!(40), "TX", FilingStatus::Single).unwrap();

        assert_eq!(forecast.monthly_net.len(), 12);
        assert_eq!(forecast.avg_monthly_net, dec!(2950.80));
        assert!(forecast.monthly_net.iter().all(|m| *m == dec!(2950.80)));
        assert_eq!(forecast.total_net, dec!(35409.60));
    }

    #[test]
    fn yearly_forecast_reports_hours() {
        let tables = tables_2024();

        let forecast =
            forecast_yearly(&tables, dec!(20), dec!(37.5), "TX", FilingStatus::Single).unwrap();

        assert_eq!(forecast.avg_weekly_hours, dec!(37.5));
        assert_eq!(forecast.total_hours, dec!(1950));
    }

    #[test]
    fn yearly_forecast_rejects_invalid_hours() {
        let tables = tables_2024();

        let result = forecast_yearly(&tables, dec!(20), dec!(0), "TX", FilingStatus::Single);

        assert_eq!(result, Err(TakeHomeError::InvalidHoursPerWeek(dec!(0))));
    }
}
