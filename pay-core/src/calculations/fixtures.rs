//! Shared 2024 rate-table fixture for calculation tests.

use std::collections::BTreeMap;

use rust_decimal_macros::dec;

use crate::models::{FicaConfig, FilingSchedule, TaxBracket, TaxTables};

fn bracket(min: rust_decimal::Decimal, max: Option<rust_decimal::Decimal>, rate: rust_decimal::Decimal) -> TaxBracket {
    TaxBracket {
        min_income: min,
        max_income: max,
        rate,
    }
}

/// The full 2024 configuration: real bracket schedules for all three filing
/// statuses, FICA parameters, and a representative state-rate table.
pub(crate) fn tables_2024() -> TaxTables {
    TaxTables {
        tax_year: 2024,
        single: FilingSchedule {
            brackets: vec![
                bracket(dec!(0), Some(dec!(11600)), dec!(0.10)),
                bracket(dec!(11600), Some(dec!(47150)), dec!(0.12)),
                bracket(dec!(47150), Some(dec!(100525)), dec!(0.22)),
                bracket(dec!(100525), Some(dec!(191950)), dec!(0.24)),
                bracket(dec!(191950), Some(dec!(243725)), dec!(0.32)),
                bracket(dec!(243725), Some(dec!(609350)), dec!(0.35)),
                bracket(dec!(609350), None, dec!(0.37)),
            ],
            standard_deduction: dec!(14600),
        },
        married: FilingSchedule {
            brackets: vec![
                bracket(dec!(0), Some(dec!(23200)), dec!(0.10)),
                bracket(dec!(23200), Some(dec!(94300)), dec!(0.12)),
                bracket(dec!(94300), Some(dec!(201050)), dec!(0.22)),
                bracket(dec!(201050), Some(dec!(383900)), dec!(0.24)),
                bracket(dec!(383900), Some(dec!(487450)), dec!(0.32)),
                bracket(dec!(487450), Some(dec!(731200)), dec!(0.35)),
                bracket(dec!(731200), None, dec!(0.37)),
            ],
            standard_deduction: dec!(29200),
        },
        head_of_household: FilingSchedule {
            brackets: vec![
                bracket(dec!(0), Some(dec!(16550)), dec!(0.10)),
                bracket(dec!(16550), Some(dec!(63100)), dec!(0.12)),
                bracket(dec!(63100), Some(dec!(100500)), dec!(0.22)),
                bracket(dec!(100500), Some(dec!(191950)), dec!(0.24)),
                bracket(dec!(191950), Some(dec!(243700)), dec!(0.32)),
                bracket(dec!(243700), Some(dec!(609350)), dec!(0.35)),
                bracket(dec!(609350), None, dec!(0.37)),
            ],
            standard_deduction: dec!(21900),
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
            ("FL".to_string(), dec!(0)),
            ("CA".to_string(), dec!(0.093)),
            ("NY".to_string(), dec!(0.065)),
        ]),
    }
}
