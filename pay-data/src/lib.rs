mod loader;
mod registry;

pub use loader::{
    FederalBracketRecord, FicaRecord, RateTableError, StandardDeductionRecord, StateRateRecord,
    parse_federal_brackets, parse_fica_configs, parse_standard_deductions, parse_state_rates,
};
pub use registry::{BUILTIN_TAX_YEAR, TaxTableRegistry, build_tables};
