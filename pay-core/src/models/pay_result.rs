use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a take-home pay calculation.
///
/// All amounts are annual unless suffixed otherwise; biweekly means 26 pay
/// periods per year, weekly 52, and `*_hourly` is the hourly equivalent over
/// `hours_per_week × 52` worked hours. Values are unrounded; formatting for
/// display is the caller's concern (see [`crate::display`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    pub gross_annual: Decimal,
    pub gross_biweekly: Decimal,
    pub gross_weekly: Decimal,
    pub gross_hourly: Decimal,

    pub federal_tax: Decimal,
    pub federal_tax_biweekly: Decimal,
    pub fica_tax: Decimal,
    pub fica_tax_biweekly: Decimal,
    pub state_tax: Decimal,
    pub state_tax_biweekly: Decimal,
    pub total_tax: Decimal,
    /// Total tax as a percentage of gross annual income.
    pub tax_percentage: Decimal,

    pub net_annual: Decimal,
    pub net_biweekly: Decimal,
    pub net_weekly: Decimal,
    pub net_hourly: Decimal,
}
