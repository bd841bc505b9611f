//! State relocation comparison.
//!
//! Runs the take-home calculator twice (same rate, hours, and filing
//! status, two state codes) and reports both nets plus the change in
//! annual and approximate monthly take-home from moving.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::take_home::{TakeHomeCalculator, TakeHomeError};
use crate::models::{FilingStatus, PayInput, TaxTables};

const MONTHS_PER_YEAR: i64 = 12;

/// Outcome of relocating from `current_state` to `new_state`.
///
/// `difference` is new net minus current net: negative when the new state
/// taxes more. `difference_per_month` is the annual difference divided by
/// 12, not an independently computed monthly figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComparison {
    pub current_state: String,
    pub new_state: String,
    pub current_net_annual: Decimal,
    pub new_net_annual: Decimal,
    pub difference: Decimal,
    pub difference_per_month: Decimal,
    /// Effective total tax percentage in the current state.
    pub current_tax_rate: Decimal,
    /// Effective total tax percentage in the new state.
    pub new_tax_rate: Decimal,
}

/// Compares hourly take-home pay between two states.
///
/// # Errors
///
/// Propagates [`TakeHomeError`] when the rate or hours are not positive.
pub fn compare_states(
    tables: &TaxTables,
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    current_state: &str,
    new_state: &str,
    filing_status: FilingStatus,
) -> Result<StateComparison, TakeHomeError> {
    let calculator = TakeHomeCalculator::new(tables);

    let current = calculator.calculate(&PayInput::hourly(
        hourly_rate,
        hours_per_week,
        current_state,
        filing_status,
    ))?;
    let new = calculator.calculate(&PayInput::hourly(
        hourly_rate,
        hours_per_week,
        new_state,
        filing_status,
    ))?;

    let difference = new.net_annual - current.net_annual;

    Ok(StateComparison {
        current_state: current_state.to_string(),
        new_state: new_state.to_string(),
        current_net_annual: current.net_annual,
        new_net_annual: new.net_annual,
        difference,
        difference_per_month: difference / Decimal::from(MONTHS_PER_YEAR),
        current_tax_rate: current.tax_percentage,
        new_tax_rate: new.tax_percentage,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::fixtures::tables_2024;

    #[test]
    fn moving_to_a_higher_tax_state_loses_net_income() {
        let tables = tables_2024();

        let comparison = compare_states(
            &tables,
            dec!(20),
            dec!(40),
            "TX",
            "CA",
            FilingStatus::Single,
        )
        .unwrap();

        // CA takes 9.3% of 41600 = 3868.80 that TX does not
        assert_eq!(comparison.current_net_annual, dec!(35409.60));
        assert_eq!(comparison.new_net_annual, dec!(31540.80));
        assert_eq!(comparison.difference, dec!(-3868.80));
        assert_eq!(comparison.difference_per_month, dec!(-322.40));
    }

    #[test]
    fn reversing_the_comparison_flips_the_sign() {
        let tables = tables_2024();

        let tx_to_ca = compare_states(
            &tables,
            dec!(20),
            dec!(40),
            "TX",
            "CA",
            FilingStatus::Single,
        )
        .unwrap();
        let ca_to_tx = compare_states(
            &tables,
            dec!(20),
            dec!(40),
            "CA",
            "TX",
            FilingStatus::Single,
        )
        .unwrap();

        assert_eq!(ca_to_tx.difference, -tx_to_ca.difference);
        assert_eq!(ca_to_tx.difference, dec!(3868.80));
    }

    #[test]
    fn identical_states_have_zero_difference() {
        let tables = tables_2024();

        let comparison = compare_states(
            &tables,
            dec!(20),
            dec!(40),
            "TX",
            "FL",
            FilingStatus::Single,
        )
        .unwrap();

        assert_eq!(comparison.difference, dec!(0));
        assert_eq!(comparison.current_tax_rate, comparison.new_tax_rate);
    }

    #[test]
    fn tax_rates_reflect_each_state() {
        let tables = tables_2024();

        let comparison = compare_states(
            &tables,
            dec!(20),
            dec!(40),
            "TX",
            "CA",
            FilingStatus::Single,
        )
        .unwrap();

        assert!(comparison.new_tax_rate > comparison.current_tax_rate);
    }

    #[test]
    fn invalid_rate_propagates_calculator_error() {
        let tables = tables_2024();

        let result = compare_states(
            &tables,
            dec!(-1),
            dec!(40),
            "TX",
            "CA",
            FilingStatus::Single,
        );

        assert_eq!(result, Err(TakeHomeError::InvalidHourlyRate(dec!(-1))));
    }
}
