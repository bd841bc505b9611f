//! Shared tax-component computations.
//!
//! These functions compute the three tax components individually so that the
//! take-home calculator and the scenario calculators can combine them in
//! different ways (the overtime scenario, for instance, applies them to
//! gross income directly with no retirement deduction).

use rust_decimal::Decimal;

use crate::models::{FicaConfig, FilingStatus, TaxTables};

/// Federal income tax on `taxable_income` (income after any pre-tax
/// deductions, before the standard deduction).
///
/// Applies the filing status's standard deduction (floored at zero), then
/// sums the marginal slices of each bracket the remaining income overlaps.
pub fn federal_tax(
    tables: &TaxTables,
    taxable_income: Decimal,
    filing_status: FilingStatus,
) -> Decimal {
    let schedule = tables.schedule(filing_status);
    let after_deduction = (taxable_income - schedule.standard_deduction).max(Decimal::ZERO);

    let mut tax = Decimal::ZERO;
    for bracket in &schedule.brackets {
        if after_deduction > bracket.min_income {
            let upper = bracket
                .max_income
                .map_or(after_deduction, |max| after_deduction.min(max));
            tax += (upper - bracket.min_income) * bracket.rate;
        }
    }

    tax
}

/// Combined FICA tax (Social Security + Medicare) on gross annual income.
///
/// Social Security is capped at the wage base; Medicare is uncapped, with a
/// surtax on the portion of gross above the high-earner threshold. FICA is
/// always computed on full gross; pre-tax retirement contributions do not
/// reduce the base.
pub fn fica_tax(fica: &FicaConfig, gross_annual: Decimal) -> Decimal {
    let social_security = gross_annual.min(fica.ss_wage_base) * fica.ss_rate;

    let mut medicare = gross_annual * fica.medicare_rate;
    if gross_annual > fica.additional_medicare_threshold {
        medicare +=
            (gross_annual - fica.additional_medicare_threshold) * fica.additional_medicare_rate;
    }

    social_security + medicare
}

/// Flat state income tax on `taxable_income` for a two-letter state code.
///
/// States absent from the rate table are treated as 0%.
pub fn state_tax(tables: &TaxTables, taxable_income: Decimal, state: &str) -> Decimal {
    taxable_income * tables.state_rate(state)
}
