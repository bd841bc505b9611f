use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive federal tax schedule.
///
/// `max_income` is `None` for the open-ended top bracket. `rate` is a
/// fraction (0.10 for 10%), not a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Whether `taxable_income` falls in this bracket's `[min, max)` range.
    pub fn contains(&self, taxable_income: Decimal) -> bool {
        taxable_income >= self.min_income
            && self.max_income.map_or(true, |max| taxable_income < max)
    }
}
