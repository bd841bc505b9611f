//! Display formatting and analytics bucketing helpers.
//!
//! The calculators return unrounded values; everything here is presentation:
//! currency and percent formatting, the coarse rate/hours buckets used for
//! analytics event properties, and state-name lookup.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TaxTables;

/// Formats an amount as whole dollars with thousands separators: `$35,410`.
///
/// Rounds half-up (away from zero); the sign leads: `-$1,235`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_thousands(&rounded.abs().to_string()))
}

/// Formats an amount with cents and thousands separators: `$1,234.50`.
pub fn format_currency_with_cents(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let unsigned = format!("{:.2}", rounded.abs());
    let (dollars, cents) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(dollars))
}

/// Formats an hourly rate: `$20.00/hr`.
pub fn format_hourly_rate(rate: Decimal) -> String {
    format!(
        "${:.2}/hr",
        rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Formats a percentage to one decimal place: `14.9%`.
pub fn format_percent(percent: Decimal) -> String {
    format!(
        "{:.1}%",
        percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Analytics bucket for an hourly rate.
pub fn hourly_rate_bucket(hourly_rate: Decimal) -> &'static str {
    if hourly_rate < Decimal::from(15) {
        "<15"
    } else if hourly_rate < Decimal::from(20) {
        "15-20"
    } else if hourly_rate < Decimal::from(30) {
        "20-30"
    } else if hourly_rate < Decimal::from(40) {
        "30-40"
    } else {
        ">40"
    }
}

/// Analytics bucket for weekly hours.
pub fn hours_per_week_bucket(hours: Decimal) -> &'static str {
    if hours <= Decimal::from(20) {
        "<=20"
    } else if hours <= Decimal::from(39) {
        "21-39"
    } else if hours == Decimal::from(40) {
        "40"
    } else {
        ">40"
    }
}

/// A state's income tax rate paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxInfo {
    pub code: String,
    pub name: String,
    pub rate: Decimal,
}

/// Every state in the rate table with its full name, sorted by name.
pub fn states_with_tax(tables: &TaxTables) -> Vec<StateTaxInfo> {
    let mut states: Vec<StateTaxInfo> = tables
        .state_rates
        .iter()
        .map(|(code, rate)| StateTaxInfo {
            code: code.clone(),
            name: state_name(code).to_string(),
            rate: *rate,
        })
        .collect();
    states.sort_by(|a, b| a.name.cmp(&b.name));
    states
}

/// Full display name for a two-letter state code, falling back to the code
/// itself when unrecognized.
pub fn state_name(code: &str) -> &str {
    match code {
        "AL" => "Alabama",
        "AK" => "Alaska",
        "AZ" => "Arizona",
        "AR" => "Arkansas",
        "CA" => "California",
        "CO" => "Colorado",
        "CT" => "Connecticut",
        "DE" => "Delaware",
        "DC" => "Washington DC",
        "FL" => "Florida",
        "GA" => "Georgia",
        "HI" => "Hawaii",
        "ID" => "Idaho",
        "IL" => "Illinois",
        "IN" => "Indiana",
        "IA" => "Iowa",
        "KS" => "Kansas",
        "KY" => "Kentucky",
        "LA" => "Louisiana",
        "ME" => "Maine",
        "MD" => "Maryland",
        "MA" => "Massachusetts",
        "MI" => "Michigan",
        "MN" => "Minnesota",
        "MS" => "Mississippi",
        "MO" => "Missouri",
        "MT" => "Montana",
        "NE" => "Nebraska",
        "NV" => "Nevada",
        "NH" => "New Hampshire",
        "NJ" => "New Jersey",
        "NM" => "New Mexico",
        "NY" => "New York",
        "NC" => "North Carolina",
        "ND" => "North Dakota",
        "OH" => "Ohio",
        "OK" => "Oklahoma",
        "OR" => "Oregon",
        "PA" => "Pennsylvania",
        "RI" => "Rhode Island",
        "SC" => "South Carolina",
        "SD" => "South Dakota",
        "TN" => "Tennessee",
        "TX" => "Texas",
        "UT" => "Utah",
        "VT" => "Vermont",
        "VA" => "Virginia",
        "WA" => "Washington",
        "WV" => "West Virginia",
        "WI" => "Wisconsin",
        "WY" => "Wyoming",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{FicaConfig, FilingSchedule, TaxTables};

    // =========================================================================
    // currency and percent formatting
    // =========================================================================

    #[test]
    fn format_currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(dec!(35409.60)), "$35,410");
        assert_eq!(format_currency(dec!(999.49)), "$999");
        assert_eq!(format_currency(dec!(999.50)), "$1,000");
    }

    #[test]
    fn format_currency_groups_millions() {
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn format_currency_handles_negative_amounts() {
        assert_eq!(format_currency(dec!(-3868.80)), "-$3,869");
    }

    #[test]
    fn format_currency_handles_zero() {
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn format_currency_with_cents_always_shows_two_decimals() {
        assert_eq!(format_currency_with_cents(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_currency_with_cents(dec!(1600)), "$1,600.00");
        assert_eq!(format_currency_with_cents(dec!(0.125)), "$0.13");
    }

    #[test]
    fn format_currency_with_cents_handles_negative_amounts() {
        assert_eq!(format_currency_with_cents(dec!(-322.404)), "-$322.40");
    }

    #[test]
    fn format_hourly_rate_uses_two_decimals() {
        assert_eq!(format_hourly_rate(dec!(20)), "$20.00/hr");
        assert_eq!(format_hourly_rate(dec!(23.456)), "$23.46/hr");
    }

    #[test]
    fn format_percent_uses_one_decimal() {
        assert_eq!(format_percent(dec!(14.880769)), "14.9%");
        assert_eq!(format_percent(dec!(0)), "0.0%");
        assert_eq!(format_percent(dec!(19.65)), "19.7%");
    }

    // =========================================================================
    // analytics buckets
    // =========================================================================

    #[test]
    fn hourly_rate_buckets_cover_the_ranges() {
        assert_eq!(hourly_rate_bucket(dec!(12)), "<15");
        assert_eq!(hourly_rate_bucket(dec!(15)), "15-20");
        assert_eq!(hourly_rate_bucket(dec!(19.99)), "15-20");
        assert_eq!(hourly_rate_bucket(dec!(25)), "20-30");
        assert_eq!(hourly_rate_bucket(dec!(35)), "30-40");
        assert_eq!(hourly_rate_bucket(dec!(40)), ">40");
    }

    #[test]
    fn hours_per_week_buckets_single_out_exactly_40() {
        assert_eq!(hours_per_week_bucket(dec!(20)), "<=20");
        assert_eq!(hours_per_week_bucket(dec!(30)), "21-39");
        assert_eq!(hours_per_week_bucket(dec!(40)), "40");
        assert_eq!(hours_per_week_bucket(dec!(50)), ">40");
    }

    #[test]
    fn fractional_hours_between_39_and_40_fall_in_the_top_bucket() {
        // 39.5 is neither <= 39 nor exactly 40
        assert_eq!(hours_per_week_bucket(dec!(39.5)), ">40");
    }

    // =========================================================================
    // state names
    // =========================================================================

    #[test]
    fn state_name_resolves_known_codes() {
        assert_eq!(state_name("TX"), "Texas");
        assert_eq!(state_name("CA"), "California");
        assert_eq!(state_name("DC"), "Washington DC");
    }

    #[test]
    fn state_name_falls_back_to_the_code() {
        assert_eq!(state_name("QQ"), "QQ");
    }

    #[test]
    fn states_with_tax_sorts_by_display_name() {
        let tables = TaxTables {
            tax_year: 2024,
            single: empty_schedule(),
            married: empty_schedule(),
            head_of_household: empty_schedule(),
            fica: fica(),
            state_rates: BTreeMap::from([
                ("TX".to_string(), dec!(0)),
                ("CA".to_string(), dec!(0.093)),
                ("AK".to_string(), dec!(0)),
            ]),
        };

        let states = states_with_tax(&tables);

        let names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alaska", "California", "Texas"]);
        assert_eq!(states[1].code, "CA");
        assert_eq!(states[1].rate, dec!(0.093));
    }

    fn empty_schedule() -> FilingSchedule {
        FilingSchedule {
            brackets: vec![],
            standard_deduction: dec!(0),
        }
    }

    fn fica() -> FicaConfig {
        FicaConfig {
            ss_rate: dec!(0.062),
            ss_wage_base: dec!(168600),
            medicare_rate: dec!(0.0145),
            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold: dec!(200000),
        }
    }
}
