mod filing_status;
mod pay_input;
mod pay_result;
mod tax_bracket;
mod tax_tables;

pub use filing_status::FilingStatus;
pub use pay_input::{PayBasis, PayInput, RetirementContribution};
pub use pay_result::PayResult;
pub use tax_bracket::TaxBracket;
pub use tax_tables::{FicaConfig, FilingSchedule, TaxTables};
